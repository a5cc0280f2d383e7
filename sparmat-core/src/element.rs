//! Matrix element record
//!
//! An element couples a fixed (row, col) position with a value. The
//! position is immutable after construction; only the value may change,
//! which is what permits in-place updates during mutable iteration.

use core::fmt;

/// A stored matrix entry: position plus value
///
/// The position fields are private and never change after construction.
/// `value` is public so that mutable iteration can rewrite values without
/// being able to disturb the ordering of the backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element<T> {
    row: usize,
    col: usize,
    /// Value of the entry
    pub value: T,
}

impl<T> Element<T> {
    /// Create an element at the given unsigned position
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Create an element from signed coordinates
    ///
    /// Negative coordinates are a programming error, not a recoverable
    /// condition.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is negative.
    pub fn from_signed(row: isize, col: isize, value: T) -> Self {
        assert!(row >= 0, "element row must be non-negative");
        assert!(col >= 0, "element col must be non-negative");
        Self::new(row as usize, col as usize, value)
    }

    /// Row index of the entry
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index of the entry
    pub fn col(&self) -> usize {
        self.col
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_position_accessors() {
        let e = Element::new(2, 7, -5i32);
        assert_eq!(e.row(), 2);
        assert_eq!(e.col(), 7);
        assert_eq!(e.value, -5);
    }

    #[test]
    fn test_from_signed_accepts_non_negative() {
        let e = Element::from_signed(0, 3, 1.5f64);
        assert_eq!(e.row(), 0);
        assert_eq!(e.col(), 3);
    }

    #[test]
    #[should_panic(expected = "row must be non-negative")]
    fn test_from_signed_rejects_negative_row() {
        let _ = Element::from_signed(-1, 0, 0i32);
    }

    #[test]
    #[should_panic(expected = "col must be non-negative")]
    fn test_from_signed_rejects_negative_col() {
        let _ = Element::from_signed(0, -4, 0i32);
    }

    #[test]
    fn test_display_prints_value_only() {
        let e = Element::new(1, 1, 42);
        assert_eq!(format!("{e}"), "42");
    }
}
