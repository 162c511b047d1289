//! Provides the `N`-long vector used as operand and result of tensor–vector products.
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};

use crate::{Coord, DEFAULT_DIM, Error, Scalar};

/// A vector of `N` scalars.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T = Coord, const N: usize = DEFAULT_DIM> {
    buf: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn zeros() -> Self {
        Vector {
            buf: [T::zero(); N],
        }
    }

    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Vector {
            buf: core::array::from_fn(f),
        }
    }
}

impl<T, const N: usize> Vector<T, N> {
    pub const fn from_array(buf: [T; N]) -> Self {
        Vector { buf }
    }

    pub fn into_array(self) -> [T; N] {
        self.buf
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(buf: [T; N]) -> Self {
        Vector { buf }
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = Error;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        let found = vec.len();
        let buf: [T; N] = vec.try_into().map_err(|_| {
            tracing::trace!(expected = N, found, "rejected vector length");
            Error::VectorLength { expected: N, found }
        })?;
        Ok(Vector { buf })
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.buf[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.buf[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::from_fn(|i| self.buf[i] + rhs.buf[i])
    }
}

impl<T: Scalar, const N: usize> Add<&Vector<T, N>> for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn add(self, rhs: &Vector<T, N>) -> Self::Output {
        *self + *rhs
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.buf).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.buf.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        write!(f, "]")
    }
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.buf[..].abs_diff_eq(&other.buf[..], epsilon)
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.buf[..].relative_eq(&other.buf[..], epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use super::*;

    #[test]
    fn test_construct() {
        let v: Vector = Vector::from([7.0; 3]);
        assert_eq!(v[1], 7.0);
        assert_eq!(v.len(), 3);
        assert_eq!(Vector::<f64, 3>::zeros().into_array(), [0.0; 3]);
        assert_eq!(Vector::<i32, 4>::from_fn(|i| i as i32 * 2).as_slice(), &[0, 2, 4, 6]);
        assert!(Vector::<f32, 0>::default().is_empty());
    }

    #[test]
    fn test_try_from_vec() {
        let v: Vector<i32, 2> = vec![1, 2].try_into().unwrap();
        assert_eq!(v, Vector::from_array([1, 2]));
        let err = Vector::<i32, 3>::try_from(vec![1, 2]).unwrap_err();
        assert!(matches!(
            err,
            Error::VectorLength {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_add() {
        let a = Vector::from([1, 2, 3]);
        let b = Vector::from([10, 20, 30]);
        assert_eq!(a + b, Vector::from([11, 22, 33]));
        assert_eq!(&a + &b, b + a);
    }

    #[test]
    fn test_index_mut_and_iter() {
        let mut v = Vector::from([1.0, 2.0]);
        v[0] = 5.0;
        assert_eq!(v.iter().copied().sum::<f64>(), 7.0);
        assert_eq!((&v).into_iter().count(), 2);
    }

    #[test]
    fn test_display() {
        let v = Vector::from([1.5, 2.0, 3.25]);
        assert_eq!(format!("{}", v), "[1.5, 2, 3.25]");
        assert_eq!(format!("{:?}", v), "Vector([1.5, 2.0, 3.25])");
    }
}
