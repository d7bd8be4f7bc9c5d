//! Textual matrix format definitions
//!
//! ```text
//! rows=<integer>
//! column=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Parsing and writing are pure functions over `&str` and
//! [`core::fmt::Write`]; file access lives in the `spmat` crate.

pub mod constants;
pub mod header;
pub mod text;

pub use header::MatrixHeader;
pub use text::{parse_matrix, write_matrix, TextDisplay};
