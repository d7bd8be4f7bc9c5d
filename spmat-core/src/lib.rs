#![no_std]

//! SPMAT Core - Sparse Matrix Arithmetic
//!
//! This crate provides the dictionary-of-keys sparse matrix, its binary
//! arithmetic, the error taxonomy and the textual matrix format. It does
//! no I/O; file loading and reporting live in the `spmat` crate.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{parse_matrix, write_matrix, MatrixHeader, TextDisplay};
pub use matrix::{DokMatrix, Entry};
pub use ops::Operation;
pub use traits::{Accumulator, MatrixElement, SparseMatrix};
pub use validation::{validate_index, validate_inner_dimensions, validate_same_shape};
