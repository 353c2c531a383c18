// src/hierarchy/parent_child.rs

use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::{APERTURE, MAX_H3_RES};
use crate::h3_index::{
  get_base_cell, get_index_digit, get_resolution, is_pentagon, is_valid_cell, set_index_digit, set_resolution,
};
use crate::iterators::ChildrenIter;
use crate::types::{Direction, H3Error, H3Index};

/// Helper: Zero out index digits from `start_res_inclusive` to `end_res_inclusive`.
/// No-op if `start_res_inclusive > end_res_inclusive`.
pub(crate) fn _zero_index_digits(mut h: H3Index, start_res_inclusive: i32, end_res_inclusive: i32) -> H3Index {
  for r in start_res_inclusive..=end_res_inclusive {
    set_index_digit(&mut h, r, Direction::Center);
  }
  h
}

/// Returns whether one resolution is a valid child resolution for a cell.
/// Each resolution is considered a valid child resolution of itself.
fn _has_child_at_res(parent_h: H3Index, child_res: i32) -> bool {
  child_res >= get_resolution(parent_h) && child_res <= MAX_H3_RES
}

/// Number of descendants `n` levels below one hexagonal slot.
#[inline]
fn hex_slot_size(n: i32) -> i64 {
  APERTURE.pow(n as u32)
}

/// Number of descendants `n` levels below a pentagon: the pentagon itself
/// plus five hexagonal sub-trees at every level.
#[inline]
fn pent_slot_size(n: i32) -> i64 {
  1 + 5 * (hex_slot_size(n) - 1) / 6
}

/// Produces the parent H3 index of `h` at `parent_res`.
///
/// A parent at the same resolution is `h` itself.
pub fn cell_to_parent(h: H3Index, parent_res: i32) -> Result<H3Index, H3Error> {
  if !is_valid_cell(h) {
    return Err(H3Error::CellInvalid);
  }

  let child_res = get_resolution(h);
  if parent_res < 0 || parent_res > child_res {
    return Err(H3Error::ResDomain);
  }

  let mut parent_h = h;
  set_resolution(&mut parent_h, parent_res);
  // Digits below the parent's resolution become unused.
  for r in (parent_res + 1)..=child_res {
    set_index_digit(&mut parent_h, r, Direction::InvalidDigit);
  }
  Ok(parent_h)
}

/// Determines the exact number of children (or grandchildren, etc.) for a given cell.
pub fn cell_to_children_size(h: H3Index, child_res: i32) -> Result<i64, H3Error> {
  if !is_valid_cell(h) {
    return Err(H3Error::CellInvalid);
  }
  if !_has_child_at_res(h, child_res) {
    return Err(H3Error::ResDomain);
  }

  let n = child_res - get_resolution(h);
  if is_pentagon(h) {
    Ok(pent_slot_size(n))
  } else {
    Ok(hex_slot_size(n))
  }
}

/// Returns the center child of the given cell at the specified child resolution.
pub fn cell_to_center_child(h: H3Index, child_res: i32) -> Result<H3Index, H3Error> {
  if !is_valid_cell(h) {
    return Err(H3Error::CellInvalid);
  }
  if !_has_child_at_res(h, child_res) {
    return Err(H3Error::ResDomain);
  }

  let parent_res = get_resolution(h);
  let mut child_h = h;
  set_resolution(&mut child_h, child_res);
  Ok(_zero_index_digits(child_h, parent_res + 1, child_res))
}

/// Returns all H3 cells that are children of `h` at `child_res`, in ascending index order.
pub fn cell_to_children(h: H3Index, child_res: i32) -> Result<Vec<H3Index>, H3Error> {
  let expected_size = cell_to_children_size(h, child_res)?;
  let mut children = Vec::with_capacity(expected_size as usize);
  children.extend(ChildrenIter::new(h, child_res)?);
  debug_assert_eq!(children.len() as i64, expected_size);
  Ok(children)
}

/// Returns the position of the child cell within the ordered list of all
/// children of its ancestor at `parent_res`.
///
/// Under a pentagon the K-axes slot does not exist, so digits 0, 2..=6 take
/// positions 0..=5 among the direct children.
pub fn cell_to_child_pos(child: H3Index, parent_res: i32) -> Result<i64, H3Error> {
  if !is_valid_cell(child) {
    return Err(H3Error::CellInvalid);
  }
  let child_res = get_resolution(child);
  if parent_res < 0 || parent_res > child_res {
    return Err(H3Error::ResDomain);
  }

  let mut ancestor_is_pentagon =
    _is_base_cell_pentagon(get_base_cell(child)) && (1..=parent_res).all(|r| get_index_digit(child, r) == Direction::Center);

  let mut pos: i64 = 0;
  for r in (parent_res + 1)..=child_res {
    let digit = get_index_digit(child, r) as i64;
    let n = child_res - r;

    if ancestor_is_pentagon {
      if digit == Direction::KAxes as i64 {
        return Err(H3Error::CellInvalid);
      }
      if digit != 0 {
        pos += pent_slot_size(n) + (digit - 2) * hex_slot_size(n);
        ancestor_is_pentagon = false;
      }
    } else {
      pos += digit * hex_slot_size(n);
    }
  }
  Ok(pos)
}

/// Returns the child cell at a given `child_pos` within the ordered list of
/// all children of `parent` at `child_res`.
pub fn child_pos_to_cell(child_pos: i64, parent: H3Index, child_res: i32) -> Result<H3Index, H3Error> {
  if !is_valid_cell(parent) {
    return Err(H3Error::CellInvalid);
  }
  if !(0..=MAX_H3_RES).contains(&child_res) {
    return Err(H3Error::ResDomain);
  }
  let parent_res = get_resolution(parent);
  if child_res < parent_res {
    return Err(H3Error::ResMismatch);
  }
  if child_pos < 0 || child_pos >= cell_to_children_size(parent, child_res)? {
    return Err(H3Error::Domain);
  }

  let mut child_h = parent;
  set_resolution(&mut child_h, child_res);

  let mut remaining = child_pos;
  let mut ancestor_is_pentagon = is_pentagon(parent);
  for r in (parent_res + 1)..=child_res {
    let n = child_res - r;
    let slot = hex_slot_size(n);

    let digit = if ancestor_is_pentagon {
      let center = pent_slot_size(n);
      if remaining < center {
        0
      } else {
        remaining -= center;
        ancestor_is_pentagon = false;
        let d = remaining / slot + 2;
        remaining %= slot;
        d
      }
    } else {
      let d = remaining / slot;
      remaining %= slot;
      d
    };
    set_index_digit(&mut child_h, r, Direction::from_bits(digit as u8));
  }

  Ok(child_h)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::_set_h3_index as set_h3_index_internal;
  use crate::types::H3_NULL;

  #[test]
  fn test_cell_to_parent() {
    let child_h = H3Index(0x8928342e20fffff);

    let parent_h_res3 = cell_to_parent(child_h, 3).unwrap();
    assert_eq!(get_resolution(parent_h_res3), 3);
    assert_eq!(parent_h_res3, H3Index(0x832834fffffffff));

    assert_eq!(cell_to_parent(child_h, 9), Ok(child_h));
    assert_eq!(cell_to_parent(child_h, 10), Err(H3Error::ResDomain));
    assert_eq!(cell_to_parent(child_h, -1), Err(H3Error::ResDomain));
    assert_eq!(cell_to_parent(H3_NULL, 5), Err(H3Error::CellInvalid));
  }

  #[test]
  fn test_cell_to_children_size() {
    let mut h_hex = H3Index::default();
    set_h3_index_internal(&mut h_hex, 5, 10, Direction::Center);

    assert_eq!(cell_to_children_size(h_hex, 5), Ok(1));
    assert_eq!(cell_to_children_size(h_hex, 6), Ok(7));
    assert_eq!(cell_to_children_size(h_hex, 7), Ok(49));
    assert_eq!(cell_to_children_size(h_hex, 4), Err(H3Error::ResDomain));

    let mut h_pent = H3Index::default();
    set_h3_index_internal(&mut h_pent, 5, 4, Direction::Center);
    assert!(is_pentagon(h_pent));

    assert_eq!(cell_to_children_size(h_pent, 5), Ok(1));
    assert_eq!(cell_to_children_size(h_pent, 6), Ok(6));
    assert_eq!(cell_to_children_size(h_pent, 7), Ok(41));
  }

  #[test]
  fn test_cell_to_center_child() {
    let mut h_hex_res5 = H3Index::default();
    set_h3_index_internal(&mut h_hex_res5, 5, 10, Direction::IjAxes);

    assert_eq!(cell_to_center_child(h_hex_res5, 5), Ok(h_hex_res5));

    let center_child_res6 = cell_to_center_child(h_hex_res5, 6).unwrap();
    assert_eq!(get_resolution(center_child_res6), 6);
    assert_eq!(get_index_digit(center_child_res6, 6), Direction::Center);
    for r in 1..=5 {
      assert_eq!(get_index_digit(center_child_res6, r), get_index_digit(h_hex_res5, r));
    }

    let mut h_pent_res2 = H3Index::default();
    set_h3_index_internal(&mut h_pent_res2, 2, 4, Direction::Center);
    let center_child_pent_res4 = cell_to_center_child(h_pent_res2, 4).unwrap();
    assert!(is_pentagon(center_child_pent_res4));
  }

  #[test]
  fn test_cell_to_children() {
    let parent = H3Index(0x85283473fffffff);
    let children = cell_to_children(parent, 6).unwrap();
    assert_eq!(children.len(), 7);
    for (digit, &child) in children.iter().enumerate() {
      assert_eq!(get_index_digit(child, 6) as usize, digit);
      assert_eq!(cell_to_parent(child, 5), Ok(parent));
    }
    assert_eq!(cell_to_children(parent, 4), Err(H3Error::ResDomain));
    assert_eq!(cell_to_children(H3_NULL, 4), Err(H3Error::CellInvalid));
  }

  #[test]
  fn test_cell_to_child_pos_and_back() {
    let mut parent_hex = H3Index::default();
    set_h3_index_internal(&mut parent_hex, 2, 10, Direction::Center);

    let children = cell_to_children(parent_hex, 4).unwrap();
    for (expected_pos, &child_h) in children.iter().enumerate() {
      let pos = cell_to_child_pos(child_h, get_resolution(parent_hex)).unwrap();
      assert_eq!(pos, expected_pos as i64, "cellToChildPos mismatch for child {:x}", child_h.0);
      assert_eq!(child_pos_to_cell(pos, parent_hex, 4), Ok(child_h), "childPosToCell mismatch for pos {}", pos);
    }
  }

  #[test]
  fn test_cell_to_child_pos_and_back_pentagon() {
    let mut parent_pent = H3Index::default();
    set_h3_index_internal(&mut parent_pent, 1, 4, Direction::Center);
    assert!(is_pentagon(parent_pent));

    let children = cell_to_children(parent_pent, 3).unwrap();
    for (expected_pos, &child_h) in children.iter().enumerate() {
      let pos = cell_to_child_pos(child_h, 1).unwrap();
      assert_eq!(
        pos, expected_pos as i64,
        "cellToChildPos mismatch for pentagon child {:x}",
        child_h.0
      );
      assert_eq!(child_pos_to_cell(pos, parent_pent, 3), Ok(child_h));
    }
  }

  #[test]
  fn test_cell_to_child_pos_pentagon_direct_children() {
    let parent_pent = crate::base_cells::base_cell_num_to_cell(4);
    let positions: Vec<_> = cell_to_children(parent_pent, 1)
      .unwrap()
      .into_iter()
      .map(|c| cell_to_child_pos(c, 0).unwrap())
      .collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
  }

  #[test]
  fn test_cell_to_child_pos_errors() {
    let child = H3Index(0x8928342e20fffff);
    assert_eq!(cell_to_child_pos(child, -1), Err(H3Error::ResDomain));
    assert_eq!(cell_to_child_pos(child, 10), Err(H3Error::ResDomain));
    assert_eq!(cell_to_child_pos(H3_NULL, 0), Err(H3Error::CellInvalid));
  }

  #[test]
  fn test_child_pos_to_cell_errors() {
    let parent = H3Index(0x85283473fffffff);
    assert_eq!(child_pos_to_cell(0, parent, 4), Err(H3Error::ResMismatch));
    assert_eq!(child_pos_to_cell(0, parent, 16), Err(H3Error::ResDomain));
    assert_eq!(child_pos_to_cell(-1, parent, 6), Err(H3Error::Domain));
    assert_eq!(child_pos_to_cell(7, parent, 6), Err(H3Error::Domain));
  }
}
