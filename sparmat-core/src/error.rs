//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Lookup position past the current matrix dimensions
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Multiplication operands are not conformable
    DimensionMismatch {
        left_cols: usize,
        right_rows: usize,
    },
    /// A value could not be converted to the target element type
    ValueConversion,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "position ({row}, {col}) out of bounds for {rows}x{cols} matrix")
            }
            MatrixError::DimensionMismatch {
                left_cols,
                right_rows,
            } => {
                write!(
                    f,
                    "left operand has {left_cols} columns but right operand has {right_rows} rows"
                )
            }
            MatrixError::ValueConversion => write!(f, "element value conversion failed"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
