//! Input-shape errors.

use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid) from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have as many cells as the first row
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}
