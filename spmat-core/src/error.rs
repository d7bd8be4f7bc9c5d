//! Error types for sparse matrix operations

/// Errors that can occur while building, loading or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Text source does not match the matrix format (1-based line number)
    Format { line: usize },
    /// Operand shapes differ for an element-wise operation
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Inner dimensions differ for a matrix product
    IncompatibleDimensions {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operation name is not one of `add`, `subtract`, `multiply`
    InvalidOperation,
    /// Coordinate lies outside the declared dimensions
    IndexOutOfBounds { row: usize, col: usize },
    /// Integer overflow while computing the cell at (row, col)
    ArithmeticOverflow { row: usize, col: usize },
}

/// Coarse grouping of [`SpmatError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input text or operation names
    Input,
    /// Operand shapes violate the operation's compatibility rule
    Dimension,
    /// Coordinates outside the matrix
    Bounds,
    /// Value range exceeded during arithmetic
    Arithmetic,
}

impl SpmatError {
    /// The category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::Format { .. } | SpmatError::InvalidOperation => ErrorCategory::Input,
            SpmatError::DimensionMismatch { .. } | SpmatError::IncompatibleDimensions { .. } => {
                ErrorCategory::Dimension
            }
            SpmatError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            SpmatError::ArithmeticOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::Format { line } => {
                write!(f, "Input file has wrong format (line {line})")
            }
            SpmatError::DimensionMismatch { left, right } => write!(
                f,
                "Matrix dimensions do not match for operation ({}x{} vs {}x{})",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::IncompatibleDimensions { left, right } => write!(
                f,
                "Matrix dimensions are not compatible for multiplication ({}x{} * {}x{})",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::InvalidOperation => write!(f, "Invalid operation"),
            SpmatError::IndexOutOfBounds { row, col } => {
                write!(f, "Index ({row}, {col}) out of bounds")
            }
            SpmatError::ArithmeticOverflow { row, col } => {
                write!(f, "Arithmetic overflow at ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
