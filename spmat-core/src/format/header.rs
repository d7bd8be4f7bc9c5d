//! Header lines of the textual matrix format

use super::constants::{COLUMN_KEY, ROWS_KEY};
use crate::error::{Result, SpmatError};
use crate::validation::parsing::parse_key_value;

/// Declared dimensions read from the two header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixHeader {
    /// Create a header for the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the `rows=` and `column=` lines
    ///
    /// Both lines are trimmed before matching. `first_line` is the 1-based
    /// line number of `rows_line`, used for error reporting; `column_line`
    /// is expected on the following line.
    pub fn parse(rows_line: &str, column_line: &str, first_line: usize) -> Result<Self> {
        let rows = parse_key_value(rows_line.trim(), ROWS_KEY)
            .ok_or(SpmatError::Format { line: first_line })?;
        let cols = parse_key_value(column_line.trim(), COLUMN_KEY).ok_or(SpmatError::Format {
            line: first_line + 1,
        })?;

        Ok(Self { rows, cols })
    }
}

impl core::fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{ROWS_KEY}{}", self.rows)?;
        write!(f, "{COLUMN_KEY}{}", self.cols)
    }
}
