//! Dictionary-of-keys sparse matrix
//!
//! Only non-zero values are stored, keyed by `(row, col)`. Dimensions are
//! fixed at construction; writing zero removes an entry so that no stored
//! value is ever zero.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Result;
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::validate_index;

/// A stored non-zero `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Sparse matrix backed by a hash map of non-zero entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DokMatrix<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    /// `entries[(r, c)]` = non-zero value at (`r`, `c`)
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> DokMatrix<T> {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Triples go through [`DokMatrix::set`], so zero values are dropped,
    /// later duplicates win and out-of-range coordinates fail.
    pub fn from_entries<I>(rows: usize, cols: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triples {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix stores no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at (row, col), zero when nothing is stored there
    ///
    /// Coordinates outside the matrix also read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Write `value` at (row, col)
    ///
    /// A zero value removes any stored entry. Fails with
    /// `IndexOutOfBounds` and leaves the matrix untouched if the
    /// coordinate lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(row, col, self.dimensions())?;

        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterate over all stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// All stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable_by_key(|e| (e.row, e.col));
        entries
    }
}

impl<T: MatrixElement> SparseMatrix for DokMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn sorted_entries(&self) -> Vec<Entry<T>> {
        DokMatrix::sorted_entries(self)
    }
}

impl<T: MatrixElement> core::fmt::Display for DokMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::format::write_matrix(self, f)
    }
}
