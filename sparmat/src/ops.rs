//! Matrix multiplication over stored entries
//!
//! Deliberately not a dense product: only products between two
//! explicitly stored entries are accumulated, and the result inherits
//! the left operand's default value. Positions whose logical value is
//! the (possibly non-zero) default never contribute a term. Both are
//! long-standing behaviors of this container and are covered by tests;
//! changing either would silently break callers that rely on them.

use core::ops::{Add, Mul};

use sparmat_core::{check_multiply_dims, Result};

use crate::matrix::TripletMatrix;

impl<T> TripletMatrix<T>
where
    T: Clone + Mul<Output = T> + Add<Output = T>,
{
    /// Multiply by another matrix, accumulating stored-entry products
    ///
    /// Requires `self.cols() == rhs.rows()`, otherwise reports
    /// `MatrixError::DimensionMismatch`. The result is
    /// `self.rows() x rhs.cols()` with `self`'s default value. For every
    /// stored pair `(i, k, v1)` in `self` and `(k, j, v2)` in `rhs` the
    /// product `v1 * v2` is added to the result at `(i, j)`, reading the
    /// current value through lookup and writing the sum back as a stored
    /// entry. Cost is O(nnz(self) * nnz(rhs)) in the worst case.
    pub fn multiply(&self, rhs: &TripletMatrix<T>) -> Result<TripletMatrix<T>> {
        check_multiply_dims(self.cols(), rhs.rows())?;

        let mut product =
            TripletMatrix::from_parts(self.rows(), rhs.cols(), self.default_value().clone());

        for left in self.iter() {
            // rhs entries are row-major, so the matching rows form one
            // contiguous run
            let matches = rhs
                .iter()
                .skip_while(|right| right.row() < left.col())
                .take_while(|right| right.row() == left.col());

            for right in matches {
                let current = product
                    .stored(left.row(), right.col())
                    .unwrap_or(product.default_value())
                    .clone();
                let term = left.value.clone() * right.value.clone();
                product.insert(left.row(), right.col(), current + term);
            }
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparmat_core::MatrixError;

    #[test]
    fn test_multiply_restricted_to_stored_pairs() {
        let mut a = TripletMatrix::new(0);
        a.insert(0, 1, 4);
        a.insert(0, 2, -2);
        a.insert(1, 0, -4);
        a.insert(1, 1, -3);

        let mut b = TripletMatrix::with_dims(3, 1, 0);
        b.insert(0, 1, 1);
        b.insert(1, 0, 1);
        b.insert(1, 1, -1);
        b.insert(2, 0, 2);
        b.insert(2, 1, 3);

        // a is 2x3, b is 3x2
        let product = a.multiply(&b).unwrap();
        assert_eq!((product.rows(), product.cols()), (2, 2));
        assert_eq!(product.default_value(), &0);

        // Hand-computed sums over stored pairs only:
        //   (0,0): 4*1 + (-2)*2   = 0   (stored, written by accumulation)
        //   (0,1): 4*(-1) + (-2)*3 = -10
        //   (1,0): (-3)*1          = -3
        //   (1,1): (-4)*1 + (-3)*(-1) = -1
        let stored: Vec<(usize, usize, i32)> = product
            .iter()
            .map(|e| (e.row(), e.col(), e.value))
            .collect();
        assert_eq!(
            stored,
            vec![(0, 0, 0), (0, 1, -10), (1, 0, -3), (1, 1, -1)]
        );
    }

    #[test]
    fn test_multiply_skips_default_positions() {
        // a(0,0) is stored, b(0,0) is not; with non-zero defaults a
        // dense product would differ, but unstored positions never
        // contribute a term.
        let mut a = TripletMatrix::with_dims(1, 2, 5);
        a.insert(0, 0, 2);

        let mut b = TripletMatrix::with_dims(2, 1, 7);
        b.insert(1, 0, 3);

        let product = a.multiply(&b).unwrap();
        assert_eq!((product.rows(), product.cols()), (1, 1));
        assert_eq!(product.nnz(), 0);
        // Result default comes from the left operand
        assert_eq!(product.get(0, 0), Ok(&5));
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a: TripletMatrix<i32> = TripletMatrix::with_dims(2, 3, 0);
        let b: TripletMatrix<i32> = TripletMatrix::with_dims(2, 2, 0);

        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                left_cols: 3,
                right_rows: 2,
            }
        );
    }

    #[test]
    fn test_multiply_empty_operands() {
        let a: TripletMatrix<i32> = TripletMatrix::new(0);
        let b: TripletMatrix<i32> = TripletMatrix::new(0);

        let product = a.multiply(&b).unwrap();
        assert_eq!((product.rows(), product.cols()), (0, 0));
        assert_eq!(product.nnz(), 0);
    }

    #[test]
    fn test_multiply_works_for_floats() {
        let mut a = TripletMatrix::with_dims(1, 2, 0.0f64);
        a.insert(0, 0, 0.5);
        a.insert(0, 1, 2.0);

        let mut b = TripletMatrix::with_dims(2, 1, 0.0f64);
        b.insert(0, 0, 4.0);
        b.insert(1, 0, 0.25);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get(0, 0), Ok(&2.5));
    }
}
