//! Provides the statically sized rank-2 tensor type and its element access.
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::One;

use crate::storage::Storage;
use crate::{
    ColCursor, ColCursorMut, Coord, DEFAULT_DIM, Error, RowCursor, RowCursorMut, Scalar, Traversal,
};

/// A (2, 0)-tensor over `N`-dimensional euclidean space, stored as `N`×`N` cells of `T`.
///
/// `N` is part of the type, so tensors of different dimension never mix:
///
/// ```compile_fail
/// use rank2::Tensor;
/// let a: Tensor<f64, 3> = Tensor::zeros();
/// let b: Tensor<f64, 2> = Tensor::zeros();
/// let _ = a + b;
/// ```
///
/// Cells are reachable both as `t[i][j]` and `t[(i, j)]`:
///
/// ```
/// use rank2::Tensor;
/// let mut t: Tensor = Tensor::zeros();
/// t[1][1] = 0.312;
/// t[(0, 2)] = 2.00004;
/// assert_eq!(t[0][1], 0.0);
/// assert_eq!(t[(1, 1)], 0.312);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tensor<T = Coord, const N: usize = DEFAULT_DIM> {
    pub(crate) storage: Storage<T, N>,
}

impl<T: Scalar, const N: usize> Tensor<T, N> {
    /// Returns a tensor holding the additive identity in every cell.
    pub fn zeros() -> Self {
        Tensor {
            storage: Storage::zeroed(),
        }
    }

    /// Builds a tensor by evaluating `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut out = Self::zeros();
        for (row, cells) in out.storage.rows_mut().iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        out
    }

    /// Returns the tensor with ones on the diagonal and zeros elsewhere.
    pub fn identity() -> Self
    where
        T: One,
    {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }

    /// Copies a nested sequence of rows whose lengths are only known at run time.
    ///
    /// Fails without producing a tensor if there are not exactly `N` rows of exactly `N` cells.
    pub fn try_from_nested<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, Error> {
        if rows.len() != N {
            tracing::trace!(expected = N, found = rows.len(), "rejected row count");
            return Err(Error::RowCount {
                expected: N,
                found: rows.len(),
            });
        }
        let mut out = Self::zeros();
        for (i, (src, dst)) in rows.iter().zip(out.storage.rows_mut()).enumerate() {
            let src = src.as_ref();
            if src.len() != N {
                tracing::trace!(row = i, expected = N, found = src.len(), "rejected row length");
                return Err(Error::RowLength {
                    row: i,
                    expected: N,
                    found: src.len(),
                });
            }
            dst.copy_from_slice(src);
        }
        Ok(out)
    }
}

impl<T, const N: usize> Tensor<T, N> {
    /// Side length of the tensor.
    pub const DIM: usize = N;

    /// Builds a tensor from `N` rows of `N` cells; the shape is checked at build time.
    pub const fn from_rows(rows: [[T; N]; N]) -> Self {
        Tensor {
            storage: Storage::from_rows(rows),
        }
    }

    pub fn into_rows(self) -> [[T; N]; N] {
        self.storage.into_rows()
    }

    pub fn rows(&self) -> &[[T; N]; N] {
        self.storage.rows()
    }

    /// Returns every cell in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_buf()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_buf()
    }

    /// Returns the cell at `(row, col)`, or `None` if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.storage.cell(row, col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.storage.cell_mut(row, col)
    }

    pub fn row_major_begin(&self) -> RowCursor<'_, T, N> {
        RowCursor::new(self, 0, 0)
    }

    pub fn row_major_end(&self) -> RowCursor<'_, T, N> {
        RowCursor::new(self, N, 0)
    }

    /// Cursor at the start of a single row. Pair it with [`Tensor::row_end`] for the same row.
    pub fn row_begin(&self, row: usize) -> RowCursor<'_, T, N> {
        RowCursor::new(self, row, 0)
    }

    pub fn row_end(&self, row: usize) -> RowCursor<'_, T, N> {
        RowCursor::new(self, row + 1, 0)
    }

    pub fn col_major_begin(&self) -> ColCursor<'_, T, N> {
        ColCursor::new(self, 0, 0)
    }

    pub fn col_major_end(&self) -> ColCursor<'_, T, N> {
        ColCursor::new(self, 0, N)
    }

    /// Cursor at the top of a single column. Pair it with [`Tensor::col_end`] for the same column.
    pub fn col_begin(&self, col: usize) -> ColCursor<'_, T, N> {
        ColCursor::new(self, 0, col)
    }

    pub fn col_end(&self, col: usize) -> ColCursor<'_, T, N> {
        ColCursor::new(self, 0, col + 1)
    }

    /// Iterates over all cells row by row.
    pub fn row_major(&self) -> Traversal<RowCursor<'_, T, N>> {
        Traversal::new(self.row_major_begin(), self.row_major_end())
    }

    /// Iterates over the `N` cells of one row.
    pub fn row(&self, row: usize) -> Traversal<RowCursor<'_, T, N>> {
        Traversal::new(self.row_begin(row), self.row_end(row))
    }

    /// Iterates over all cells column by column.
    pub fn col_major(&self) -> Traversal<ColCursor<'_, T, N>> {
        Traversal::new(self.col_major_begin(), self.col_major_end())
    }

    /// Iterates over the `N` cells of one column.
    pub fn col(&self, col: usize) -> Traversal<ColCursor<'_, T, N>> {
        Traversal::new(self.col_begin(col), self.col_end(col))
    }

    pub fn row_major_mut(&mut self) -> RowCursorMut<'_, T, N> {
        RowCursorMut::new(self, 0, 0)
    }

    pub fn col_major_mut(&mut self) -> ColCursorMut<'_, T, N> {
        ColCursorMut::new(self, 0, 0)
    }
}

impl<T: Scalar, const N: usize> Default for Tensor<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Tensor<T, N> {
    fn from(rows: [[T; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<Vec<T>>> for Tensor<T, N> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::try_from_nested(&rows)
    }
}

impl<T, const N: usize> Index<usize> for Tensor<T, N> {
    type Output = [T; N];

    fn index(&self, row: usize) -> &Self::Output {
        &self.storage.rows()[row]
    }
}

impl<T, const N: usize> IndexMut<usize> for Tensor<T, N> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.storage.rows_mut()[row]
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Tensor<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.storage.rows()[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Tensor<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.storage.rows_mut()[row][col]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Tensor<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tensor").field(self.rows()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Tensor<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(x, f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Tensor<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Tensor<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.as_slice()
            .relative_eq(other.as_slice(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use super::*;

    #[test]
    fn test_zeros() {
        let t: Tensor = Tensor::zeros();
        assert_eq!(t.as_slice(), &[0.0; 9]);
        assert_eq!(Tensor::<f64, 3>::default(), t);
        assert_eq!(Tensor::<f64, 3>::DIM, 3);
    }

    #[test]
    fn test_element_access() {
        let mut t: Tensor = Tensor::zeros();
        t[1][1] = 0.312;
        t[0][2] = 2.00004;
        assert_eq!(t[0][1], 0.0);
        assert_eq!(t[(1, 1)], 0.312);
        assert_eq!(t.get(0, 2), Some(&2.00004));
        assert_eq!(t.get(3, 0), None);
        assert_eq!(t.get(0, 3), None);

        *t.get_mut(2, 0).unwrap() = 4.0;
        t[(2, 0)] += 1.0;
        assert_eq!(t[2][0], 5.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let t: Tensor = Tensor::zeros();
        let _ = t[3][0];
    }

    #[test]
    #[should_panic]
    fn test_tuple_index_out_of_range() {
        let mut t: Tensor<f32, 2> = Tensor::zeros();
        t[(0, 2)] = 1.0;
    }

    #[test]
    fn test_from_rows() {
        let t = Tensor::from_rows([[1, 2], [3, 4]]);
        assert_eq!(t[1][0], 3);
        assert_eq!(t.into_rows(), [[1, 2], [3, 4]]);
        let u: Tensor<i32, 2> = [[1, 2], [3, 4]].into();
        assert_eq!(u, t);
    }

    #[test]
    fn test_from_nested() {
        let t: Tensor = vec![vec![5.0; 3]; 3].try_into().unwrap();
        assert_eq!(t.as_slice(), &[5.0; 9]);

        let wrong_rows: Result<Tensor, _> = vec![vec![5.0; 3]; 2].try_into();
        assert!(matches!(
            wrong_rows,
            Err(Error::RowCount {
                expected: 3,
                found: 2
            })
        ));

        let ragged = [vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        let wrong_len = Tensor::<f64, 2>::try_from_nested(&ragged[..2]);
        assert!(matches!(
            wrong_len,
            Err(Error::RowLength {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_identity_and_from_fn() {
        let eye: Tensor<i64, 3> = Tensor::identity();
        assert_eq!(eye, Tensor::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
        let t: Tensor<usize, 2> = Tensor::from_fn(|i, j| 10 * i + j);
        assert_eq!(t, Tensor::from_rows([[0, 1], [10, 11]]));
    }

    #[test]
    fn test_clone_is_deep() {
        let a: Tensor = Tensor::from_fn(|i, j| (i + j) as f64);
        let mut b = a;
        b[0][0] = 42.0;
        assert_eq!(a[0][0], 0.0);
        b.as_mut_slice()[8] = -1.0;
        assert_eq!(a[2][2], 4.0);
    }

    #[test]
    fn test_display() {
        let t = Tensor::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{}", t), "[[1, 2],\n [3, 4]]");
        assert_eq!(format!("{:?}", t), "Tensor([[1, 2], [3, 4]])");
    }

    #[test]
    fn test_relative_eq() {
        let a = Tensor::from_rows([[0.1 + 0.2, 1.0], [2.0, 3.0]]);
        let b = Tensor::from_rows([[0.3, 1.0], [2.0, 3.0]]);
        assert_ne!(a, b);
        approx::assert_relative_eq!(a, b);
    }
}
