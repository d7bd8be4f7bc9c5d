//! Parsing utilities for the textual matrix format
//!
//! Pure parsing functions over single, already trimmed lines. Callers
//! attach line numbers to failures.

use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR};
use crate::traits::MatrixElement;

/// Parse a `key=<unsigned integer>` line such as `rows=3`
///
/// Whitespace around the number is tolerated; anything else after the
/// digits is not.
pub fn parse_key_value(line: &str, key: &str) -> Option<usize> {
    let value = line.strip_prefix(key)?;
    parse_usize(value.trim())
}

/// Parse an entry line `(<row>,<ws?><col>,<ws?><value>)`
///
/// Row and column are unsigned decimals, the value an optionally
/// `-`-signed decimal. Whitespace is only allowed after each separator.
pub fn parse_entry<T: MatrixElement>(line: &str) -> Option<(usize, usize, T)> {
    let inner = line.strip_prefix(ENTRY_OPEN)?.strip_suffix(ENTRY_CLOSE)?;

    let mut fields = inner.splitn(3, FIELD_SEPARATOR);
    let row = parse_usize(fields.next()?)?;
    let col = parse_usize(fields.next()?.trim_start())?;
    let value = T::parse_decimal(fields.next()?.trim_start())?;

    Some((row, col, value))
}

/// Parse a usize from a string of ASCII digits
///
/// Rejects empty strings, signs and overflow.
pub(crate) fn parse_usize(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }

        let digit = (byte - b'0') as usize;
        result = result.checked_mul(10)?.checked_add(digit)?;
    }

    Some(result)
}
