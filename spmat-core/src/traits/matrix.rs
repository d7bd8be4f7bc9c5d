//! Core matrix abstraction traits
//!
//! Read-only interface that the text writer and reporters are written
//! against, independent of how entries are stored.

use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::matrix::Entry;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// All stored entries in row-major order
    fn sorted_entries(&self) -> Vec<Entry<Self::Element>>;
}
