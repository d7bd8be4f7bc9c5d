//! Operation driver: load two matrix files, combine them, report the result

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use spmat_core::{DokMatrix, Operation};
use tracing::info;

use crate::error::{Error, Result};
use crate::loader::MatrixFile;
use crate::report::{ReportFormat, Reporter};

/// Everything needed for one run, passed explicitly
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Operation name; validated when the run starts
    pub operation: String,
    /// Left operand file
    pub left: PathBuf,
    /// Right operand file
    pub right: PathBuf,
    /// Report destination, stdout when `None`
    pub output: Option<PathBuf>,
    /// Report encoding
    pub format: ReportFormat,
}

/// Load both operands and apply the named operation
///
/// The operation name is checked before any file is read, so an unknown
/// name fails with `InvalidOperation` regardless of the inputs.
pub fn perform_op<P, Q>(left: P, right: Q, operation: &str) -> Result<DokMatrix>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let op: Operation = operation.parse()?;

    let lhs: DokMatrix = MatrixFile::read_matrix(left)?;
    let rhs: DokMatrix = MatrixFile::read_matrix(right)?;

    let result = op.apply(&lhs, &rhs)?;
    info!(
        %op,
        left = ?lhs.dimensions(),
        right = ?rhs.dimensions(),
        result = ?result.dimensions(),
        nnz = result.nnz(),
        "operation complete"
    );
    Ok(result)
}

/// Execute a full run: compute the result and write the report
pub fn run(config: &RunConfig) -> Result<DokMatrix> {
    let result = perform_op(&config.left, &config.right, &config.operation)?;
    let reporter = Reporter::new(config.format);

    match &config.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Create {
                path: path.clone(),
                source,
            })?;
            reporter.write(&result, BufWriter::new(file))?;
            info!(path = %path.display(), format = ?config.format, "report written");
        }
        None => reporter.write(&result, io::stdout().lock())?,
    }

    Ok(result)
}
