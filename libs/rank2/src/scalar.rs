//! Provides the scalar field requirements for tensor cells.
use core::ops::Mul;

use num_traits::Zero;

/// Default coordinate type for tensor cells.
pub type Coord = f64;

/// Default side length of a tensor, i.e. three-dimensional euclidean space.
pub const DEFAULT_DIM: usize = 3;

/// Requirements a type must meet to be stored in a [`crate::Tensor`].
///
/// A scalar has an additive identity, is closed under addition and multiplication,
/// and is cheap to copy. Rounding, overflow and NaN behavior are whatever `Self` does;
/// the kernel adds no checks on top.
pub trait Scalar: Copy + Zero + Mul<Output = Self> {}

impl<T: Copy + Zero + Mul<Output = T>> Scalar for T {}

/// Folds two traversals into a single sum of pairwise products, starting at zero.
///
/// Stops at the end of the shorter traversal.
pub(crate) fn inner_product<'a, T, A, B>(a: A, b: B) -> T
where
    T: Scalar + 'a,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'a T>,
{
    a.into_iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}
