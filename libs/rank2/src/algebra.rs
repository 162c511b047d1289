//! Algebraic operations on tensors, each written as a fold or map over paired traversals.
//!
//! Every operation reads its operands and returns a freshly owned result; nothing here
//! mutates an input or shares storage with an output.
use core::ops::{Add, Mul};

use crate::scalar::inner_product;
use crate::{Scalar, Tensor, Vector};

impl<T: Scalar, const N: usize> Tensor<T, N> {
    /// Multiplies every cell by `s`.
    pub fn scale(&self, s: T) -> Self {
        let mut out = Self::zeros();
        out.row_major_mut().fill(self.row_major().map(|&a| a * s));
        out
    }

    /// Computes `w[i] = Σ_k self[i][k] · v[k]`.
    pub fn dot_vec(&self, v: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_fn(|i| inner_product(self.row(i), v))
    }

    /// Computes the tensor product `C[i][j] = Σ_k self[i][k] · rhs[k][j]`.
    pub fn dot(&self, rhs: &Self) -> Self {
        let mut out = Self::zeros();
        out.row_major_mut().fill((0..N).flat_map(move |i| {
            (0..N).map(move |j| inner_product(self.row(i), rhs.col(j)))
        }));
        out
    }

    /// Double contraction pairing the row-major traversal of `self` with the column-major
    /// traversal of `rhs`.
    ///
    /// Cell `(i, j)` of `self` meets cell `(j, i)` of `rhs`, so this evaluates
    /// `Σ_ij self[i][j] · rhs[j][i]`, i.e. `self : rhsᵀ`. For symmetric `rhs` it agrees with
    /// [`Tensor::frobenius_inner`]; in general it does not.
    pub fn double_dot(&self, rhs: &Self) -> T {
        inner_product(self.row_major(), rhs.col_major())
    }

    /// Double contraction `self : rhs = Σ_ij self[i][j] · rhs[i][j]`.
    pub fn frobenius_inner(&self, rhs: &Self) -> T {
        inner_product(self.row_major(), rhs.row_major())
    }

    /// Returns the tensor with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros();
        out.col_major_mut().fill(self.row_major().copied());
        out
    }
}

impl<T: Scalar, const N: usize> Add for Tensor<T, N> {
    type Output = Tensor<T, N>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Scalar, const N: usize> Add<&Tensor<T, N>> for &Tensor<T, N> {
    type Output = Tensor<T, N>;

    fn add(self, rhs: &Tensor<T, N>) -> Self::Output {
        let mut out = Tensor::zeros();
        let sums = self.row_major().zip(rhs.row_major()).map(|(&a, &b)| a + b);
        out.row_major_mut().fill(sums);
        out
    }
}

impl<T: Scalar, const N: usize> Mul for Tensor<T, N> {
    type Output = Tensor<T, N>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(&rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<&Tensor<T, N>> for &Tensor<T, N> {
    type Output = Tensor<T, N>;

    fn mul(self, rhs: &Tensor<T, N>) -> Self::Output {
        self.dot(rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Tensor<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.dot_vec(&rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<&Vector<T, N>> for &Tensor<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: &Vector<T, N>) -> Self::Output {
        self.dot_vec(rhs)
    }
}

// A generic `Mul<T>` would overlap `Mul<Tensor<T, N>>`, so scalars are listed per primitive.
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<$t> for Tensor<$t, N> {
                type Output = Tensor<$t, N>;

                fn mul(self, s: $t) -> Self::Output {
                    self.scale(s)
                }
            }

            impl<const N: usize> Mul<$t> for &Tensor<$t, N> {
                type Output = Tensor<$t, N>;

                fn mul(self, s: $t) -> Self::Output {
                    self.scale(s)
                }
            }

            impl<const N: usize> Mul<Tensor<$t, N>> for $t {
                type Output = Tensor<$t, N>;

                fn mul(self, t: Tensor<$t, N>) -> Self::Output {
                    t.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
