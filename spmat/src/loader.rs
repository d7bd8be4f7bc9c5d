//! File loading for the textual matrix format
//!
//! Reads a whole file into memory and hands it to
//! [`spmat_core::parse_matrix`]. A malformed file never yields a partial
//! matrix.

use std::fs;
use std::path::{Path, PathBuf};

use spmat_core::{parse_matrix, DokMatrix, MatrixElement};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A matrix file on disk
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub path: PathBuf,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the matrix stored in this file
    pub fn load<T: MatrixElement>(&self) -> Result<DokMatrix<T>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        trace!(path = %self.path.display(), %content, "read matrix file");
        trace!(
            lines = ?content.lines().map(str::trim).collect::<Vec<_>>(),
            "parsed lines"
        );

        let matrix = parse_matrix::<T>(&content)?;

        debug!(
            path = %self.path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Write `matrix` to this file in the textual format
    pub fn store<T: MatrixElement>(&self, matrix: &DokMatrix<T>) -> Result<()> {
        fs::write(&self.path, matrix.to_string())?;
        debug!(path = %self.path.display(), nnz = matrix.nnz(), "stored matrix");
        Ok(())
    }

    /// Convenience wrapper: load the matrix at `path`
    pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<DokMatrix<T>> {
        Self::new(path).load()
    }
}
