//! Ordered-triplet sparse matrix container
//!
//! Only explicitly inserted elements are physically stored; every other
//! in-bounds position logically holds the matrix's default value. The
//! backing storage is a single `Vec` of elements kept strictly sorted by
//! (row, col), which fixes the iteration order to row-major and lets
//! lookup and insertion share one binary search over the stored set.

use core::fmt;
use core::ops::Index;

use sparmat_core::{check_bounds, Element, MatrixError, MatrixOperations, Result, SparseMatrix};

/// Generic sparse matrix with default-value semantics
///
/// Dimensions are lower bounds that grow monotonically: inserting at
/// `(i, j)` raises the row count to at least `i + 1` and the column
/// count to at least `j + 1`, and no operation ever lowers them. This
/// holds even past dimensions fixed at construction, and `clear`
/// deliberately keeps the dimensions an earlier insert established.
#[derive(Debug, Clone, PartialEq)]
pub struct TripletMatrix<T> {
    rows: usize,
    cols: usize,
    default: T,
    entries: Vec<Element<T>>,
}

impl<T> TripletMatrix<T> {
    /// Create an empty 0x0 matrix with the given default value
    pub fn new(default: T) -> Self {
        Self {
            rows: 0,
            cols: 0,
            default,
            entries: Vec::new(),
        }
    }

    /// Create an empty matrix with fixed initial dimensions
    ///
    /// The dimensions are still lower bounds: a later insert past them
    /// silently grows the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn with_dims(rows: usize, cols: usize, default: T) -> Self {
        assert!(rows > 0, "matrix row count must be positive");
        assert!(cols > 0, "matrix col count must be positive");
        Self::from_parts(rows, cols, default)
    }

    /// Unchecked construction for results of internal operations
    pub(crate) fn from_parts(rows: usize, cols: usize, default: T) -> Self {
        Self {
            rows,
            cols,
            default,
            entries: Vec::new(),
        }
    }

    /// Current row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of explicitly stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value every unstored in-bounds position logically holds
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Locate a position in the sorted entry vec
    fn position(&self, row: usize, col: usize) -> core::result::Result<usize, usize> {
        self.entries
            .binary_search_by(|e| (e.row(), e.col()).cmp(&(row, col)))
    }

    /// Get the stored value at a position, without the default fallback
    pub fn stored(&self, row: usize, col: usize) -> Option<&T> {
        match self.position(row, col) {
            Ok(i) => Some(&self.entries[i].value),
            Err(_) => None,
        }
    }

    /// Insert an element, overwriting any entry at the same position
    ///
    /// Dimensions grow to cover the new position. An overwrite leaves
    /// `nnz` unchanged; a fresh position increases it by one and the
    /// entry lands at its row-major sorted slot.
    pub fn insert_element(&mut self, element: Element<T>) {
        if element.row() + 1 > self.rows {
            self.rows = element.row() + 1;
        }
        if element.col() + 1 > self.cols {
            self.cols = element.col() + 1;
        }

        match self.position(element.row(), element.col()) {
            Ok(i) => self.entries[i].value = element.value,
            Err(i) => self.entries.insert(i, element),
        }
    }

    /// Insert a value at the given position, overwriting if present
    pub fn insert(&mut self, row: usize, col: usize, value: T) {
        self.insert_element(Element::new(row, col, value));
    }

    /// Get the value at a position: the stored entry or the default
    ///
    /// Returns `MatrixError::IndexOutOfBounds` when the position is past
    /// the current dimensions, stored or not.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        check_bounds(row, col, self.rows, self.cols)?;
        Ok(self.stored(row, col).unwrap_or(&self.default))
    }

    /// Signed-coordinate variant of [`get`](Self::get)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is negative; a negative coordinate is a
    /// programming error, not an out-of-range condition.
    pub fn get_signed(&self, row: isize, col: isize) -> Result<&T> {
        assert!(row >= 0, "matrix row index must be non-negative");
        assert!(col >= 0, "matrix col index must be non-negative");
        self.get(row as usize, col as usize)
    }

    /// Remove all stored entries
    ///
    /// `nnz` drops to zero; the dimensions stay where previous inserts
    /// or explicit construction left them.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate stored entries in row-major order
    pub fn iter(&self) -> crate::iter::Iter<'_, T> {
        crate::iter::Iter::new(&self.entries)
    }

    /// Iterate stored entries mutably; only values can be rewritten
    pub fn iter_mut(&mut self) -> crate::iter::IterMut<'_, T> {
        crate::iter::IterMut::new(&mut self.entries)
    }
}

impl<T> TripletMatrix<T> {
    /// Build a matrix by converting every value of another matrix
    ///
    /// Adopts `other`'s dimensions and converted default value, then
    /// re-inserts each stored entry in order. The result is built into a
    /// fresh matrix, so a failed conversion leaves every existing matrix
    /// untouched and surfaces as `MatrixError::ValueConversion`.
    pub fn try_convert<Q>(other: &TripletMatrix<Q>) -> Result<Self>
    where
        T: TryFrom<Q>,
        Q: Clone,
    {
        let default =
            T::try_from(other.default.clone()).map_err(|_| MatrixError::ValueConversion)?;
        let mut converted = Self::from_parts(other.rows, other.cols, default);
        for entry in other.iter() {
            let value =
                T::try_from(entry.value.clone()).map_err(|_| MatrixError::ValueConversion)?;
            converted.insert(entry.row(), entry.col(), value);
        }
        Ok(converted)
    }

    /// Replace this matrix's entire state with a converted copy of `other`
    ///
    /// The copy is built into a temporary first; on conversion failure
    /// `self` is left exactly as it was.
    pub fn assign_from<Q>(&mut self, other: &TripletMatrix<Q>) -> Result<()>
    where
        T: TryFrom<Q>,
        Q: Clone,
    {
        *self = Self::try_convert(other)?;
        Ok(())
    }
}

impl<T> SparseMatrix for TripletMatrix<T> {
    type Value = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn default_value(&self) -> &T {
        &self.default
    }

    fn get(&self, row: usize, col: usize) -> Result<&T> {
        TripletMatrix::get(self, row, col)
    }
}

impl<T: Clone> MatrixOperations for TripletMatrix<T> {
    fn get_row(&self, row: usize) -> Vec<Element<T>> {
        let start = self.entries.partition_point(|e| e.row() < row);
        let end = self.entries.partition_point(|e| e.row() <= row);
        self.entries[start..end].to_vec()
    }

    fn get_col(&self, col: usize) -> Vec<Element<T>> {
        self.entries
            .iter()
            .filter(|e| e.col() == col)
            .cloned()
            .collect()
    }
}

/// Infallible position access for in-bounds lookups
///
/// # Panics
///
/// Panics on an out-of-range position; use [`TripletMatrix::get`] to
/// handle that case as an error instead.
impl<T> Index<(usize, usize)> for TripletMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a TripletMatrix<T> {
    type Item = &'a Element<T>;
    type IntoIter = crate::iter::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut TripletMatrix<T> {
    type Item = &'a mut Element<T>;
    type IntoIter = crate::iter::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for TripletMatrix<T> {
    type Item = Element<T>;
    type IntoIter = std::vec::IntoIter<Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Dense rendering: every logical position through lookup, not just the
/// stored entries. Rows are bracketed and separated by ",\n ", values
/// within a row by ",\t", the whole matrix wrapped in brackets.
impl<T: fmt::Display> fmt::Display for TripletMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ",\t")?;
                }
                write!(f, "{}", self.stored(row, col).unwrap_or(&self.default))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
