//! Row-major and column-major cursors over a [`Tensor`].
//!
//! A cursor is a borrowed `(target, row, col)` position. Pairing a begin cursor with its
//! end sentinel in a [`Traversal`] yields an iterator, which is how every algebraic
//! operation walks its operands. Results are written through the write cursors
//! [`RowCursorMut`] and [`ColCursorMut`].
//!
//! | traversal          | begin      | end sentinel   |
//! |--------------------|------------|----------------|
//! | full, row-major    | `(0, 0)`   | `(N, 0)`       |
//! | row `r`            | `(r, 0)`   | `(r + 1, 0)`   |
//! | full, column-major | `(0, 0)`   | `(0, N)`       |
//! | column `c`         | `(0, c)`   | `(0, c + 1)`   |
use core::fmt;
use core::iter::FusedIterator;

use crate::Tensor;

/// A forward, single-pass position into a tensor's traversal.
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// Advances to the next position in traversal order.
    fn step(&mut self);

    /// Returns the current `(row, col)`.
    fn position(&self) -> (usize, usize);

    /// Returns the number of steps from the start of the full traversal to this position.
    fn offset(&self) -> usize;

    /// Returns the cell under the cursor, or `None` if the position lies outside storage.
    fn get(&self) -> Option<Self::Item>;

    /// Returns the number of cells in the full traversal.
    fn storage_len(&self) -> usize;
}

/// Walks cells row by row: the column advances first, wrapping into the next row.
pub struct RowCursor<'a, T, const N: usize> {
    tensor: &'a Tensor<T, N>,
    row: usize,
    col: usize,
}

/// Walks cells column by column: the row advances first, wrapping into the next column.
pub struct ColCursor<'a, T, const N: usize> {
    tensor: &'a Tensor<T, N>,
    row: usize,
    col: usize,
}

macro_rules! impl_cursor {
    ($cursor:ident, $minor:ident, $major:ident) => {
        impl<'a, T, const N: usize> $cursor<'a, T, N> {
            pub fn new(tensor: &'a Tensor<T, N>, row: usize, col: usize) -> Self {
                $cursor { tensor, row, col }
            }

            /// Returns the tensor this cursor points into.
            pub fn target(&self) -> &'a Tensor<T, N> {
                self.tensor
            }
        }

        impl<T, const N: usize> Clone for $cursor<'_, T, N> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T, const N: usize> Copy for $cursor<'_, T, N> {}

        impl<T, const N: usize> PartialEq for $cursor<'_, T, N> {
            fn eq(&self, other: &Self) -> bool {
                core::ptr::eq(self.tensor, other.tensor)
                    && self.row == other.row
                    && self.col == other.col
            }
        }

        impl<T, const N: usize> Eq for $cursor<'_, T, N> {}

        impl<T, const N: usize> fmt::Debug for $cursor<'_, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("tensor", &(self.tensor as *const Tensor<T, N>))
                    .field("row", &self.row)
                    .field("col", &self.col)
                    .finish()
            }
        }

        impl<'a, T, const N: usize> Cursor for $cursor<'a, T, N> {
            type Item = &'a T;

            #[inline]
            fn step(&mut self) {
                self.$minor += 1;
                if self.$minor == N {
                    self.$minor = 0;
                    self.$major += 1;
                }
            }

            #[inline]
            fn position(&self) -> (usize, usize) {
                (self.row, self.col)
            }

            #[inline]
            fn offset(&self) -> usize {
                self.$major * N + self.$minor
            }

            #[inline]
            fn get(&self) -> Option<&'a T> {
                self.tensor.get(self.row, self.col)
            }

            #[inline]
            fn storage_len(&self) -> usize {
                N * N
            }
        }
    };
}

impl_cursor!(RowCursor, col, row);
impl_cursor!(ColCursor, row, col);

/// A begin cursor paired with its end sentinel.
///
/// Yields every cell from `begin` up to, but excluding, `end`. Iteration stops as soon as the
/// front cursor reaches or passes the end offset, or leaves storage, so a reversed or
/// mismatched pair yields nothing past its end and the reported length is always exact.
#[derive(Clone, Debug)]
pub struct Traversal<C> {
    front: C,
    end: C,
}

impl<C: Cursor> Traversal<C> {
    pub fn new(begin: C, end: C) -> Self {
        Traversal { front: begin, end }
    }

    /// Returns the cursor for the next cell to be yielded.
    pub fn front(&self) -> &C {
        &self.front
    }

    pub fn end(&self) -> &C {
        &self.end
    }
}

impl<C: Cursor> Iterator for Traversal<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.end || self.front.offset() >= self.end.offset() {
            return None;
        }
        let item = self.front.get()?;
        self.front.step();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // a cursor that starts inside storage leaves it exactly at offset `N * N`
        let remaining = if self.front.get().is_some() {
            self.end
                .offset()
                .min(self.front.storage_len())
                .saturating_sub(self.front.offset())
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl<C: Cursor> ExactSizeIterator for Traversal<C> {}

impl<C: Cursor> FusedIterator for Traversal<C> {}

/// Write cursor walking a tensor row by row.
pub struct RowCursorMut<'a, T, const N: usize> {
    tensor: &'a mut Tensor<T, N>,
    row: usize,
    col: usize,
}

/// Write cursor walking a tensor column by column.
pub struct ColCursorMut<'a, T, const N: usize> {
    tensor: &'a mut Tensor<T, N>,
    row: usize,
    col: usize,
}

macro_rules! impl_cursor_mut {
    ($cursor:ident, $minor:ident, $major:ident) => {
        impl<'a, T, const N: usize> $cursor<'a, T, N> {
            pub fn new(tensor: &'a mut Tensor<T, N>, row: usize, col: usize) -> Self {
                $cursor { tensor, row, col }
            }

            pub fn step(&mut self) {
                self.$minor += 1;
                if self.$minor == N {
                    self.$minor = 0;
                    self.$major += 1;
                }
            }

            pub fn position(&self) -> (usize, usize) {
                (self.row, self.col)
            }

            /// Returns the cell under the cursor, or `None` once the cursor has left storage.
            pub fn get_mut(&mut self) -> Option<&mut T> {
                self.tensor.get_mut(self.row, self.col)
            }

            /// Writes successive values from `src` into successive cells, advancing the cursor.
            ///
            /// Stops when `src` runs dry or the cursor leaves storage, and returns the number of
            /// cells written.
            pub fn fill(&mut self, src: impl IntoIterator<Item = T>) -> usize {
                let mut written = 0;
                for value in src {
                    let Some(cell) = self.get_mut() else {
                        break;
                    };
                    *cell = value;
                    self.step();
                    written += 1;
                }
                written
            }
        }

        impl<T, const N: usize> fmt::Debug for $cursor<'_, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("row", &self.row)
                    .field("col", &self.col)
                    .finish()
            }
        }
    };
}

impl_cursor_mut!(RowCursorMut, col, row);
impl_cursor_mut!(ColCursorMut, row, col);
