#![allow(clippy::cast_possible_truncation)] // For H3_GET_INDEX_DIGIT style operations

pub mod inspection;
pub mod string_conv;

use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::*;
use crate::types::{Direction, H3Error, H3Index};

pub use inspection::{is_pentagon, is_valid_cell};
pub use string_conv::{h3_to_string_alloc, string_to_h3};

// H3Index bit layout accessors/mutators

/// Gets the mode of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_mode(h: H3Index) -> u8 {
  ((h.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

/// Sets the mode of the H3 index.
#[inline(always)]
pub fn set_mode(h: &mut H3Index, mode: u8) {
  h.0 = (h.0 & H3_MODE_MASK_NEGATIVE) | (u64::from(mode) << H3_MODE_OFFSET);
}

/// Gets the resolution of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_resolution(h: H3Index) -> i32 {
  ((h.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

/// Sets the resolution of the H3 index.
#[inline(always)]
pub fn set_resolution(h: &mut H3Index, res: i32) {
  h.0 = (h.0 & H3_RES_MASK_NEGATIVE) | ((res as u64) << H3_RES_OFFSET);
}

/// Gets the base cell of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_base_cell(h: H3Index) -> i32 {
  ((h.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

/// Sets the base cell of the H3 index.
#[inline(always)]
pub fn set_base_cell(h: &mut H3Index, bc: i32) {
  h.0 = (h.0 & H3_BC_MASK_NEGATIVE) | ((bc as u64) << H3_BC_OFFSET);
}

/// Bit offset of the digit for resolution `res` (1-based).
#[inline(always)]
const fn digit_offset(res: i32) -> u32 {
  ((MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET as i32) as u32
}

/// Gets the H3 digit at the given resolution `res` from the H3 index.
/// `res` must be between 1 and `MAX_H3_RES`.
#[inline(always)]
#[must_use]
pub fn get_index_digit(h: H3Index, res: i32) -> Direction {
  Direction::from_bits(((h.0 >> digit_offset(res)) & H3_DIGIT_MASK) as u8)
}

/// Sets the H3 digit at the given resolution `res` in the H3 index.
/// `res` must be between 1 and `MAX_H3_RES`.
#[inline(always)]
pub fn set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  let offset = digit_offset(res);
  h.0 = (h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

/// Gets the reserved bits of the H3 index. Should be 0 for valid cell indexes.
#[inline(always)]
#[must_use]
pub const fn get_reserved_bits(h: H3Index) -> u8 {
  ((h.0 & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
}

/// Gets the high bit of the H3 index (should be 0).
#[inline(always)]
#[must_use]
pub const fn get_high_bit(h: H3Index) -> u8 {
  ((h.0 & H3_HIGH_BIT_MASK) >> 63) as u8
}

/// Initializes an H3 index with a given resolution, base cell, and initial digit for all resolution levels.
/// The mode is set to `H3_CELL_MODE`.
pub(crate) fn _set_h3_index(h: &mut H3Index, res: i32, base_cell: i32, init_digit: Direction) {
  h.0 = H3_INIT;
  set_mode(h, H3_CELL_MODE);
  set_resolution(h, res);
  set_base_cell(h, base_cell);
  for r in 1..=res {
    set_index_digit(h, r, init_digit);
  }
}

/// Returns the highest resolution non-zero digit in an `H3Index`.
#[inline]
#[must_use]
pub(crate) fn _h3_leading_non_zero_digit(h: H3Index) -> Direction {
  (1..=get_resolution(h))
    .map(|r| get_index_digit(h, r))
    .find(|&digit| digit != Direction::Center)
    .unwrap_or(Direction::Center)
}

/// Builds a cell from its base cell number and explicit resolution digits.
///
/// `digits[i]` is the digit at resolution `i + 1`, so `digits.len()` must equal `res`.
///
/// # Errors
/// * `ResDomain` if `res` is outside `0..=MAX_H3_RES` or does not match the digit count.
/// * `Domain` if the base cell or a digit is out of range.
/// * `CellInvalid` if the digits describe the deleted pentagon sub-sequence.
pub fn construct_cell(res: i32, base_cell: i32, digits: &[u8]) -> Result<H3Index, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) || digits.len() != res as usize {
    return Err(H3Error::ResDomain);
  }
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return Err(H3Error::Domain);
  }

  let mut h = H3Index::default();
  _set_h3_index(&mut h, res, base_cell, Direction::Center);
  for (r, &digit) in (1..=res).zip(digits) {
    if digit >= Direction::InvalidDigit as u8 {
      return Err(H3Error::Domain);
    }
    set_index_digit(&mut h, r, Direction::from_bits(digit));
  }

  if _is_base_cell_pentagon(base_cell) && _h3_leading_non_zero_digit(h) == Direction::KAxes {
    return Err(H3Error::CellInvalid);
  }
  Ok(h)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_h3_index() {
    let mut h = H3Index::default();
    _set_h3_index(&mut h, 5, 12, Direction::KAxes);
    assert_eq!(get_resolution(h), 5);
    assert_eq!(get_base_cell(h), 12);
    assert_eq!(get_mode(h), H3_CELL_MODE);
    for r in 1..=5 {
      assert_eq!(get_index_digit(h, r), Direction::KAxes);
    }
    for r in 6..=MAX_H3_RES {
      assert_eq!(get_index_digit(h, r), Direction::InvalidDigit);
    }
  }

  #[test]
  fn test_index_digit_round_trip() {
    let mut h = H3Index(0x85283473fffffff);
    assert_eq!(get_index_digit(h, 4), Direction::JkAxes);
    assert_eq!(get_index_digit(h, 5), Direction::IAxes);
    set_index_digit(&mut h, 5, Direction::IjAxes);
    assert_eq!(get_index_digit(h, 5), Direction::IjAxes);
    assert_eq!(get_resolution(h), 5);
  }

  #[test]
  fn test_leading_non_zero_digit() {
    let h = construct_cell(3, 4, &[0, 0, 2]).unwrap();
    assert_eq!(_h3_leading_non_zero_digit(h), Direction::JAxes);
    let center = construct_cell(3, 4, &[0, 0, 0]).unwrap();
    assert_eq!(_h3_leading_non_zero_digit(center), Direction::Center);
  }

  #[test]
  fn test_construct_cell() {
    assert_eq!(construct_cell(5, 20, &[0, 6, 4, 3, 4]), Ok(H3Index(0x85283473fffffff)));
    assert_eq!(
      construct_cell(0, 4, &[]),
      Ok(crate::base_cells::base_cell_num_to_cell(4))
    );
    assert_eq!(construct_cell(2, 0, &[1]), Err(H3Error::ResDomain));
    assert_eq!(construct_cell(16, 0, &[0; 16]), Err(H3Error::ResDomain));
    assert_eq!(construct_cell(1, 122, &[0]), Err(H3Error::Domain));
    assert_eq!(construct_cell(1, 0, &[7]), Err(H3Error::Domain));
    // Pentagons have no K-axes sub-sequence.
    assert_eq!(construct_cell(2, 4, &[0, 1]), Err(H3Error::CellInvalid));
    assert!(construct_cell(2, 0, &[0, 1]).is_ok());
  }
}
