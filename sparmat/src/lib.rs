//! Sparmat - Ordered-Triplet Sparse Matrix Container
//!
//! Only explicitly inserted elements are physically stored; every other
//! in-bounds position logically holds a configurable default value.
//!
//! ## Architecture
//!
//! Sparmat follows a clean specification/implementation separation:
//!
//! - **sparmat-core**: Element records, access traits, errors and pure
//!   validation (no storage)
//! - **sparmat**: The concrete [`TripletMatrix`] container with
//!   iteration, multiplication, dense rendering and predicate
//!   evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use sparmat::{evaluate, TripletMatrix};
//!
//! fn example() -> sparmat::Result<()> {
//!     // 0x0 matrix that grows as entries are inserted
//!     let mut matrix = TripletMatrix::new(0);
//!     matrix.insert(0, 1, 4);
//!     matrix.insert(1, 0, -4);
//!
//!     // Unstored in-bounds positions read as the default value
//!     assert_eq!(matrix.get(1, 1)?, &0);
//!
//!     // Dense predicate evaluation over every logical position
//!     let negatives = evaluate(&matrix, |e| e.value < 0)?;
//!     assert_eq!(negatives, 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Behavior notes
//!
//! - Dimensions are lower bounds that only ever grow, even past counts
//!   fixed at construction; `clear` keeps them in place
//! - Multiplication accumulates products of stored entry pairs only and
//!   gives the result the left operand's default value
//! - Cross-type copies are atomic: a failed value conversion leaves the
//!   destination matrix untouched

// Re-export core definitions
pub use sparmat_core::{
    // Element record
    Element,
    // Error handling
    MatrixError, Result,
    // Access traits
    MatrixOperations, SparseMatrix,
    // Validation utilities
    check_bounds, check_multiply_dims,
};

// Implementation modules
pub mod evaluate;
pub mod iter;
pub mod matrix;
mod ops;

// Public exports
pub use evaluate::evaluate;
pub use iter::{Iter, IterMut};
pub use matrix::TripletMatrix;
