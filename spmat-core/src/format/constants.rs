//! Format constants for the textual matrix representation

/// Key of the first header line, `rows=<integer>`
pub const ROWS_KEY: &str = "rows=";

/// Key of the second header line, `column=<integer>`
///
/// Singular "column", not "cols".
pub const COLUMN_KEY: &str = "column=";

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Byte-order mark some editors put in front of the first line
pub const BYTE_ORDER_MARK: char = '\u{feff}';
