// src/h3_index/inspection.rs

use crate::base_cells::{_is_base_cell_pentagon, base_cell_num_to_cell, PENTAGON_BASE_CELLS};
use crate::constants::*;
use crate::hierarchy::parent_child::cell_to_center_child;
use crate::types::{Direction, H3Error, H3Index};

use super::{
  _h3_leading_non_zero_digit, get_base_cell, get_high_bit, get_index_digit, get_mode, get_reserved_bits,
  get_resolution,
};

/// Check that no digit from 1 to `res` is `Direction::InvalidDigit` (7).
#[inline]
fn _has_any_invalid_digit_up_to_res(h: H3Index, res: i32) -> bool {
  (1..=res).any(|r| get_index_digit(h, r) == Direction::InvalidDigit)
}

/// Check that all unused digits *after* `res` are set to `Direction::InvalidDigit` (7).
#[inline]
fn _has_all_invalid_digits_after_res(h: H3Index, res: i32) -> bool {
  if res >= MAX_H3_RES {
    return true;
  }
  // The unused digits sit at the low end of the digit field.
  let total_later_bits = (MAX_H3_RES - res) * i32::from(H3_PER_DIGIT_OFFSET);
  let later_bits_mask: u64 = (1u64 << total_later_bits) - 1;
  h.0 & later_bits_mask == later_bits_mask
}

/// Check if the H3 index has a "deleted K subsequence" if it's a pentagon.
/// This means its first non-zero digit must not be KAxes (Direction 1).
fn _has_deleted_subsequence(h: H3Index, base_cell: i32) -> bool {
  _is_base_cell_pentagon(base_cell) && _h3_leading_non_zero_digit(h) == Direction::KAxes
}

/// Determines if an H3 cell is a pentagon.
///
/// A cell is a pentagon if its base cell is a pentagon and all of its
/// digits are `Direction::Center`. Returns `false` for invalid H3 indexes.
pub fn is_pentagon(h: H3Index) -> bool {
  if !is_valid_cell(h) {
    return false;
  }
  _is_base_cell_pentagon(get_base_cell(h)) && _h3_leading_non_zero_digit(h) == Direction::Center
}

/// Returns the base cell number (0-121) for an H3 cell index.
///
/// The index is not validated.
pub fn get_base_cell_number(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Validates an H3 cell index.
pub fn is_valid_cell(h: H3Index) -> bool {
  if get_high_bit(h) != 0 || get_mode(h) != H3_CELL_MODE || get_reserved_bits(h) != 0 {
    return false;
  }

  let res = get_resolution(h);
  if !(0..=MAX_H3_RES).contains(&res) {
    return false;
  }

  let base_cell = get_base_cell(h);
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }

  !_has_any_invalid_digit_up_to_res(h, res)
    && _has_all_invalid_digits_after_res(h, res)
    && !_has_deleted_subsequence(h, base_cell)
}

/// Number of H3 pentagons at the given resolution (always 12).
pub fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// Get all H3 pentagon indexes at the specified resolution, ordered by base cell.
pub fn get_pentagons(res: i32) -> Result<Vec<H3Index>, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  PENTAGON_BASE_CELLS
    .iter()
    .map(|&bc| cell_to_center_child(base_cell_num_to_cell(bc), res))
    .collect()
}

/// Determines if an H3 cell's resolution is Class III (odd).
///
/// The index is not validated.
pub fn is_res_class_iii(h: H3Index) -> bool {
  (get_resolution(h) % 2) == 1
}

/// Get all 122 H3 resolution 0 indexes, ordered by base cell number.
pub fn get_res0_cells() -> Vec<H3Index> {
  (0..NUM_BASE_CELLS).map(base_cell_num_to_cell).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::{_set_h3_index, set_index_digit, set_mode};
  use crate::types::H3_NULL;

  #[test]
  fn test_is_valid_cell_resolutions() {
    for i in 0..=MAX_H3_RES {
      let mut h = H3Index::default();
      _set_h3_index(&mut h, i, 0, Direction::Center);
      assert!(is_valid_cell(h), "isValidCell failed on resolution {}", i);
    }
  }

  #[test]
  fn test_is_valid_cell_invalid_digits() {
    let mut h = H3Index::default();
    _set_h3_index(&mut h, 1, 0, Direction::Center);
    set_index_digit(&mut h, 1, Direction::InvalidDigit);
    assert!(!is_valid_cell(h), "used digit is InvalidDigit");

    let mut h = H3Index::default();
    _set_h3_index(&mut h, 1, 0, Direction::Center);
    set_index_digit(&mut h, 2, Direction::Center);
    assert!(!is_valid_cell(h), "unused digit is not InvalidDigit");
  }

  #[test]
  fn test_is_valid_cell_modes_and_bits() {
    let h = H3Index(0x85283473fffffff);
    assert!(is_valid_cell(h));

    let mut wrong_mode = h;
    set_mode(&mut wrong_mode, 2);
    assert!(!is_valid_cell(wrong_mode));

    assert!(!is_valid_cell(H3Index(h.0 | H3_HIGH_BIT_MASK)));
    assert!(!is_valid_cell(H3Index(h.0 | (1u64 << H3_RESERVED_OFFSET))));
    assert!(!is_valid_cell(H3_NULL));
  }

  #[test]
  fn test_is_valid_cell_deleted_k_subsequence() {
    let mut h = H3Index::default();
    _set_h3_index(&mut h, 2, 4, Direction::Center);
    set_index_digit(&mut h, 2, Direction::KAxes);
    assert!(!is_valid_cell(h), "pentagon with leading K digit");

    let mut hex = H3Index::default();
    _set_h3_index(&mut hex, 2, 0, Direction::Center);
    set_index_digit(&mut hex, 2, Direction::KAxes);
    assert!(is_valid_cell(hex), "hexagon with leading K digit");
  }

  #[test]
  fn test_is_pentagon() {
    let mut pent = H3Index::default();
    _set_h3_index(&mut pent, 3, 4, Direction::Center);
    assert!(is_pentagon(pent));

    let mut off_center = pent;
    set_index_digit(&mut off_center, 3, Direction::JAxes);
    assert!(!is_pentagon(off_center));

    let mut hex = H3Index::default();
    _set_h3_index(&mut hex, 3, 0, Direction::Center);
    assert!(!is_pentagon(hex));
    assert!(!is_pentagon(H3_NULL));
  }

  #[test]
  fn test_get_res0_cells() {
    let cells = get_res0_cells();
    assert_eq!(cells.len(), NUM_BASE_CELLS as usize);
    for (bc, &h) in cells.iter().enumerate() {
      assert!(is_valid_cell(h));
      assert_eq!(get_resolution(h), 0);
      assert_eq!(get_base_cell_number(h), bc as i32);
    }
  }

  #[test]
  fn test_get_pentagons() {
    for res in 0..=MAX_H3_RES {
      let pentagons = get_pentagons(res).unwrap();
      assert_eq!(pentagons.len() as i32, pentagon_count());
      for &p in &pentagons {
        assert!(is_pentagon(p));
        assert_eq!(get_resolution(p), res);
      }
    }
    assert_eq!(get_pentagons(-1), Err(H3Error::ResDomain));
    assert_eq!(get_pentagons(MAX_H3_RES + 1), Err(H3Error::ResDomain));
  }

  #[test]
  fn test_is_res_class_iii() {
    assert!(is_res_class_iii(H3Index(0x85283473fffffff)));
    assert!(!is_res_class_iii(H3Index(0x8428347ffffffff)));
  }
}
