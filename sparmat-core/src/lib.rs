#![no_std]

//! Sparmat Core - Sparse Matrix Container Definitions
//!
//! This crate provides the core definitions shared by sparse matrix
//! containers: the element record, error types, abstract read-access
//! traits, and pure index/dimension validation.

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod element;
pub mod error;
pub mod traits;
pub mod validation;

pub use element::Element;
pub use error::{MatrixError, Result};
#[cfg(feature = "alloc")]
pub use traits::MatrixOperations;
pub use traits::SparseMatrix;
pub use validation::{check_bounds, check_multiply_dims};
