// src/h3_index/string_conv.rs

use crate::types::{H3Error, H3Index};

/// Converts a string representation of an H3 index into an `H3Index`.
///
/// The string is parsed as hexadecimal; an optional `0x` prefix is accepted.
/// The result is not validated, use `is_valid_cell` for that.
pub fn string_to_h3(s: &str) -> Result<H3Index, H3Error> {
  let digits = s.strip_prefix("0x").unwrap_or(s);
  if digits.is_empty() {
    return Err(H3Error::Failed);
  }
  u64::from_str_radix(digits, 16).map(H3Index).map_err(|_| H3Error::Failed)
}

/// Converts an `H3Index` into its lowercase hexadecimal `String`.
#[must_use]
pub fn h3_to_string_alloc(h: H3Index) -> String {
  format!("{:x}", h.0)
}
