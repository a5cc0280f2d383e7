//! Iteration over stored entries
//!
//! Both cursors walk the stored entries in row-major order. They carry
//! an (origin, position) pair so a shared and a mutable cursor parked on
//! the same entry of the same matrix compare equal, in either direction.
//! Advancing a cursor never touches the matrix itself; outstanding
//! cursors borrow the matrix, so structural mutation through another
//! handle is rejected at compile time.

use core::iter::FusedIterator;
use core::mem;

use sparmat_core::Element;

/// Shared iterator over stored entries in row-major order
#[derive(Debug)]
pub struct Iter<'a, T> {
    entries: &'a [Element<T>],
    origin: *const Element<T>,
    pos: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(entries: &'a [Element<T>]) -> Self {
        Self {
            origin: entries.as_ptr(),
            entries,
            pos: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.entries.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries,
            origin: self.origin,
            pos: self.pos,
        }
    }
}

/// Mutable iterator over stored entries in row-major order
///
/// Yields `&mut Element<T>`; only the element's `value` is writable, so
/// the sorted order of the backing storage cannot be disturbed.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    entries: &'a mut [Element<T>],
    origin: *const Element<T>,
    pos: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(entries: &'a mut [Element<T>]) -> Self {
        Self {
            origin: entries.as_ptr(),
            entries,
            pos: 0,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let entries = mem::take(&mut self.entries);
        let (first, rest) = entries.split_first_mut()?;
        self.entries = rest;
        self.pos += 1;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

// Cursor equality compares the logical position within one matrix's
// storage, across both cursor variants.

impl<'a, 'b, T> PartialEq<Iter<'b, T>> for Iter<'a, T> {
    fn eq(&self, other: &Iter<'b, T>) -> bool {
        self.origin == other.origin && self.pos == other.pos
    }
}

impl<'a, 'b, T> PartialEq<IterMut<'b, T>> for Iter<'a, T> {
    fn eq(&self, other: &IterMut<'b, T>) -> bool {
        self.origin == other.origin && self.pos == other.pos
    }
}

impl<'a, 'b, T> PartialEq<IterMut<'b, T>> for IterMut<'a, T> {
    fn eq(&self, other: &IterMut<'b, T>) -> bool {
        self.origin == other.origin && self.pos == other.pos
    }
}

impl<'a, 'b, T> PartialEq<Iter<'b, T>> for IterMut<'a, T> {
    fn eq(&self, other: &Iter<'b, T>) -> bool {
        self.origin == other.origin && self.pos == other.pos
    }
}

#[cfg(test)]
mod tests {
    use crate::TripletMatrix;

    fn sample() -> TripletMatrix<i32> {
        let mut m = TripletMatrix::new(0);
        m.insert(1, 1, -3);
        m.insert(0, 1, 4);
        m.insert(1, 0, -4);
        m.insert(0, 2, 7);
        m
    }

    #[test]
    fn test_iter_visits_row_major() {
        let m = sample();
        let positions: Vec<(usize, usize)> = m.iter().map(|e| (e.row(), e.col())).collect();
        assert_eq!(positions, vec![(0, 1), (0, 2), (1, 0), (1, 1)]);
        assert_eq!(m.iter().count(), m.nnz());
    }

    #[test]
    fn test_fresh_cursors_compare_equal() {
        let m = sample();
        let mut a = m.iter();
        let b = m.iter();
        assert!(a == b);

        a.next();
        assert!(a != b);

        let mut c = m.iter();
        c.next();
        assert!(a == c);
    }

    #[test]
    fn test_exhausted_cursors_compare_equal() {
        let m = sample();
        let mut a = m.iter();
        let mut b = m.iter();
        for _ in 0..m.nnz() {
            a.next();
            b.next();
        }
        assert!(a == b);
        assert_eq!(a.next(), None);
        assert!(a == b);
    }

    #[test]
    fn test_iter_mut_rewrites_values_in_place() {
        let mut m = sample();
        for e in m.iter_mut() {
            e.value *= 2;
        }
        assert_eq!(m.get(0, 1), Ok(&8));
        assert_eq!(m.get(1, 1), Ok(&-6));
        // Positions and dimensions are untouched
        assert_eq!(m.nnz(), 4);
        assert_eq!((m.rows(), m.cols()), (2, 3));
    }

    #[test]
    fn test_into_iterator_for_refs() {
        let mut m = sample();
        let mut seen = 0;
        for e in &m {
            assert!(e.row() < 2);
            seen += 1;
        }
        assert_eq!(seen, 4);

        for e in &mut m {
            e.value += 1;
        }
        assert_eq!(m.get(0, 2), Ok(&8));
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let m = sample();
        let mut it = m.iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
    }
}
