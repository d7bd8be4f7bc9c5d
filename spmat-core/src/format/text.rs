//! Whole-document parsing and writing of the textual matrix format

use super::constants::{BYTE_ORDER_MARK, ENTRY_CLOSE, ENTRY_OPEN};
use super::header::MatrixHeader;
use crate::error::{Result, SpmatError};
use crate::matrix::DokMatrix;
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::parse_entry;

/// Parse a complete matrix document
///
/// A leading byte-order mark is ignored. Blank lines before the header and
/// between entries are skipped; the `column=` line must directly follow the
/// `rows=` line. Every line is trimmed before matching. The first malformed
/// line aborts parsing with [`SpmatError::Format`] carrying its 1-based line
/// number, and entries outside the declared dimensions abort with
/// [`SpmatError::IndexOutOfBounds`]. No partial matrix is returned.
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<DokMatrix<T>> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .skip_while(|(_, line)| line.is_empty());

    let (first_line, rows_line) = lines.next().ok_or(SpmatError::Format { line: 1 })?;
    let (_, column_line) = lines.next().ok_or(SpmatError::Format {
        line: first_line + 1,
    })?;
    let header = MatrixHeader::parse(rows_line, column_line, first_line)?;

    let mut matrix = DokMatrix::new(header.rows, header.cols);
    for (line_number, line) in lines.filter(|(_, line)| !line.is_empty()) {
        let (row, col, value) =
            parse_entry::<T>(line).ok_or(SpmatError::Format { line: line_number })?;
        matrix.set(row, col, value)?;
    }

    Ok(matrix)
}

/// Write `matrix` in the textual format, entries in row-major order
///
/// The output parses back into an equal matrix with [`parse_matrix`].
pub fn write_matrix<M, W>(matrix: &M, out: &mut W) -> core::fmt::Result
where
    M: SparseMatrix + ?Sized,
    W: core::fmt::Write,
{
    let (rows, cols) = matrix.dimensions();
    write!(out, "{}", MatrixHeader::new(rows, cols))?;
    for entry in matrix.sorted_entries() {
        write!(
            out,
            "\n{ENTRY_OPEN}{}, {}, {}{ENTRY_CLOSE}",
            entry.row, entry.col, entry.value
        )?;
    }
    writeln!(out)
}

/// [`core::fmt::Display`] adapter that renders any [`SparseMatrix`] with
/// [`write_matrix`]
pub struct TextDisplay<'a, M: ?Sized>(&'a M);

impl<'a, M: SparseMatrix + ?Sized> TextDisplay<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        Self(matrix)
    }
}

impl<M: SparseMatrix + ?Sized> core::fmt::Display for TextDisplay<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_matrix(self.0, f)
    }
}
