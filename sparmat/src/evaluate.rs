//! Dense predicate evaluation over a matrix's logical index space

use sparmat_core::{Element, Result, SparseMatrix};

/// Count logical positions whose value satisfies a predicate
///
/// Walks every position of the `rows() x cols()` index space in
/// row-major order, builds an element view carrying the looked-up value
/// (stored or default) and applies the predicate to it. When the
/// predicate rejects a value equal to the matrix's default, it is given
/// one more chance against an element carrying a fresh copy of the
/// default at the same position; a predicate that only inspects the
/// value sees no difference, but one sensitive to the element instance
/// keeps its historical behavior.
///
/// Uses only the read interface; the matrix is never modified. Lookup
/// errors from the underlying implementation are propagated.
pub fn evaluate<M, P>(matrix: &M, predicate: P) -> Result<usize>
where
    M: SparseMatrix,
    M::Value: Clone + PartialEq,
    P: Fn(&Element<M::Value>) -> bool,
{
    let mut count = 0;

    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            let value = matrix.get(row, col)?.clone();
            let looked_up = Element::new(row, col, value);

            if predicate(&looked_up) {
                count += 1;
            } else if looked_up.value == *matrix.default_value() {
                let fallback = Element::new(row, col, matrix.default_value().clone());
                if predicate(&fallback) {
                    count += 1;
                }
            }
        }
    }

    Ok(count)
}
