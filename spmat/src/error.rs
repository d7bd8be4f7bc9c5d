//! Errors raised by the file-level loader, reporter and driver

use std::path::PathBuf;

use spmat_core::SpmatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Core matrix error (format, dimensions, bounds, operation name)
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The core error underneath, if any
    pub fn matrix_error(&self) -> Option<SpmatError> {
        match self {
            Error::Matrix(err) => Some(*err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
