//! Dense square storage backing a [`crate::Tensor`].
use crate::Scalar;

/// A fixed `N`×`N` block of cells, stored row-major.
///
/// The storage is fully sized from the moment it exists, and cloning it copies every cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Storage<T, const N: usize> {
    buf: [[T; N]; N],
}

impl<T: Scalar, const N: usize> Storage<T, N> {
    /// Storage with the additive identity in every cell.
    pub(crate) fn zeroed() -> Self {
        Storage {
            buf: [[T::zero(); N]; N],
        }
    }
}

impl<T, const N: usize> Storage<T, N> {
    pub(crate) const fn from_rows(buf: [[T; N]; N]) -> Self {
        Storage { buf }
    }

    pub(crate) fn into_rows(self) -> [[T; N]; N] {
        self.buf
    }

    pub(crate) fn rows(&self) -> &[[T; N]; N] {
        &self.buf
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[T; N]; N] {
        &mut self.buf
    }

    /// Returns every cell as one row-major slice.
    pub(crate) fn as_buf(&self) -> &[T] {
        self.buf.as_flattened()
    }

    pub(crate) fn as_mut_buf(&mut self) -> &mut [T] {
        self.buf.as_flattened_mut()
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<&T> {
        self.buf.get(row)?.get(col)
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.buf.get_mut(row)?.get_mut(col)
    }
}
