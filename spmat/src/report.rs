//! Result reporting
//!
//! Serializes a matrix either in the same textual format the loader reads,
//! or as JSON. Entries are always emitted in row-major order.

use std::io::Write;

use serde::Serialize;
use spmat_core::{Entry, SparseMatrix, TextDisplay};

use crate::error::Result;

/// Output encoding of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// `rows=`/`column=` header followed by `(row, col, value)` lines
    #[default]
    Text,
    /// `{"rows":..,"cols":..,"entries":[{"row":..,"col":..,"value":..}]}`
    Json,
}

#[derive(Serialize)]
struct JsonReport<T: Serialize> {
    rows: usize,
    cols: usize,
    entries: Vec<Entry<T>>,
}

/// Writes matrices to any [`Write`] sink in a fixed format
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Serialize `matrix` into `out`
    pub fn write<M, W>(&self, matrix: &M, mut out: W) -> Result<()>
    where
        M: SparseMatrix + ?Sized,
        M::Element: Serialize,
        W: Write,
    {
        match self.format {
            ReportFormat::Text => {
                write!(out, "{}", TextDisplay::new(matrix))?;
            }
            ReportFormat::Json => {
                let (rows, cols) = matrix.dimensions();
                let report = JsonReport {
                    rows,
                    cols,
                    entries: matrix.sorted_entries(),
                };
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Serialize `matrix` into a string
    pub fn render<M>(&self, matrix: &M) -> Result<String>
    where
        M: SparseMatrix + ?Sized,
        M::Element: Serialize,
    {
        let mut buf = Vec::new();
        self.write(matrix, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportFormat::default())
    }
}
