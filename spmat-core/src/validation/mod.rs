//! Validation utilities for the matrix format and operations
//!
//! Pure functions with no I/O: index and shape checks, and line-level
//! parsing of the textual format.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_inner_dimensions, validate_same_shape};
pub use parsing::{parse_entry, parse_key_value};
