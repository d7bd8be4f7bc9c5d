//! SPMAT - Sparse Matrix Calculator
//!
//! Loads sparse matrices from the textual format, combines two of them with
//! `add`, `subtract` or `multiply`, and reports the result.
//!
//! ## Architecture
//!
//! - **spmat-core**: the matrix type, arithmetic, error taxonomy and
//!   format parsing (`no_std`, no I/O)
//! - **spmat**: file loading, reporting, the operation driver and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{perform_op, ReportFormat, Reporter};
//!
//! fn example() -> spmat::Result<()> {
//!     let result = perform_op("matrix1.txt", "matrix2.txt", "add")?;
//!     Reporter::new(ReportFormat::Text).write(&result, std::io::stdout())?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Core types and traits
    DokMatrix, Entry, MatrixElement, Operation, SparseMatrix,
    // Format definitions
    parse_matrix, MatrixHeader,
    // Error handling
    ErrorCategory, SpmatError,
};

pub mod driver;
pub mod error;
pub mod loader;
pub mod report;

pub use driver::{perform_op, run, RunConfig};
pub use error::{Error, Result};
pub use loader::MatrixFile;
pub use report::{ReportFormat, Reporter};
