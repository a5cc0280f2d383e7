//! Index and dimension validation
//!
//! Pure mathematical checks with no storage access. Containers call
//! these before touching their backing structures.

use crate::error::{MatrixError, Result};

/// Validate a lookup position against the current matrix dimensions
///
/// A position is in bounds when `row < rows` and `col < cols`. Whether
/// the position holds a stored entry is irrelevant here.
pub const fn check_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Validate that two matrices are conformable for multiplication
///
/// The left operand's column count must equal the right operand's row
/// count.
pub const fn check_multiply_dims(left_cols: usize, right_rows: usize) -> Result<()> {
    if left_cols != right_rows {
        return Err(MatrixError::DimensionMismatch {
            left_cols,
            right_rows,
        });
    }
    Ok(())
}
