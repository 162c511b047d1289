//! Provides error definitions.
use thiserror::Error;

/// Enumerates the ways a runtime-shaped input can fail to become a tensor or vector.
///
/// Algebraic operations never fail; these errors only come from conversions whose
/// input length is not known at build time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error when a nested initializer does not hold exactly `N` rows.
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// Error when one row of a nested initializer does not hold exactly `N` cells.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Error when a vector initializer does not hold exactly `N` components.
    #[error("expected vector of length {expected}, found {found}")]
    VectorLength { expected: usize, found: usize },
}
