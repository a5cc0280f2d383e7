//! Abstract interfaces for sparse matrix access
//!
//! These traits are pure interfaces with no concrete implementations.
//! Higher-level operations that only need read access (such as dense
//! predicate evaluation) are written against them rather than against a
//! concrete container.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::element::Element;
use crate::error::Result;

/// Core sparse matrix trait for storage-agnostic read access
///
/// Positions without a stored entry logically hold the matrix's default
/// value, so `get` is total over the in-bounds index space.
pub trait SparseMatrix {
    /// The value type stored in this matrix
    type Value;

    /// Current row count (a monotonically growing lower bound)
    fn rows(&self) -> usize;

    /// Current column count (a monotonically growing lower bound)
    fn cols(&self) -> usize;

    /// Number of explicitly stored entries
    fn nnz(&self) -> usize;

    /// The value every unstored in-bounds position logically holds
    fn default_value(&self) -> &Self::Value;

    /// Get the value at the given position, stored or default
    ///
    /// Returns `MatrixError::IndexOutOfBounds` when `row >= rows()` or
    /// `col >= cols()`, whether or not the position is stored.
    fn get(&self, row: usize, col: usize) -> Result<&Self::Value>;
}

/// Extension trait for row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored entries in a row, in column order
    fn get_row(&self, row: usize) -> Vec<Element<Self::Value>>;

    /// Get all stored entries in a column, in row order
    fn get_col(&self, col: usize) -> Vec<Element<Self::Value>>;
}
