//! Coordinate and shape validation
//!
//! Pure checks of indices and operand dimensions with no allocation.

use crate::SpmatError;

/// Validate that (row, col) lies inside a `rows x cols` matrix
pub const fn validate_index(
    row: usize,
    col: usize,
    dimensions: (usize, usize),
) -> Result<(), SpmatError> {
    if row >= dimensions.0 || col >= dimensions.1 {
        return Err(SpmatError::IndexOutOfBounds { row, col });
    }
    Ok(())
}

/// Validate that two operands have identical shape (add, subtract)
pub const fn validate_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SpmatError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Validate that `left.cols == right.rows` (multiply)
pub const fn validate_inner_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.1 != right.0 {
        return Err(SpmatError::IncompatibleDimensions { left, right });
    }
    Ok(())
}
