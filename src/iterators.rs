// src/iterators.rs

use crate::constants::MAX_H3_RES;
use crate::h3_index::{get_index_digit, get_resolution, is_pentagon, is_valid_cell, set_index_digit, set_resolution};
use crate::hierarchy::parent_child::_zero_index_digits;
use crate::types::{Direction, H3Error, H3Index, H3_NULL};

/// Iterator over the children of a parent H3 cell at a specific resolution.
///
/// Children are produced in ascending index order. Under a pentagon the
/// deleted K-axes sub-sequence is skipped, so every produced cell is valid.
#[derive(Debug, Clone, Copy)]
pub struct ChildrenIter {
  /// The next child to produce. `H3_NULL` once exhausted.
  h: H3Index,
  /// Resolution of the parent cell from which children are derived.
  parent_res: i32,
  /// The resolution digit that still has to skip `Direction::KAxes`.
  /// Moves towards coarser resolutions as iteration proceeds. -1 if the parent is a hexagon.
  skip_digit_res: i32,
}

impl ChildrenIter {
  /// Initializes an iterator for the children of `parent` at `child_res`.
  ///
  /// Fails with `CellInvalid` for an invalid parent and `ResDomain` unless
  /// `res(parent) <= child_res <= MAX_H3_RES`.
  pub fn new(parent: H3Index, child_res: i32) -> Result<Self, H3Error> {
    if !is_valid_cell(parent) {
      return Err(H3Error::CellInvalid);
    }
    let parent_res = get_resolution(parent);
    if child_res < parent_res || child_res > MAX_H3_RES {
      return Err(H3Error::ResDomain);
    }

    // The first child is the center child: all new digits zeroed.
    let mut first = parent;
    set_resolution(&mut first, child_res);
    let first = _zero_index_digits(first, parent_res + 1, child_res);

    Ok(Self {
      h: first,
      parent_res,
      skip_digit_res: if is_pentagon(parent) { child_res } else { -1 },
    })
  }

  fn exhaust(&mut self) {
    self.h = H3_NULL;
  }

  /// Increments the digit at `level`, carrying into coarser digits.
  /// Exhausts the iterator when the carry would reach the parent's digits.
  fn increment_from(&mut self, level: i32) {
    let mut r = level;
    while r > self.parent_res {
      let next = get_index_digit(self.h, r) as u8 + 1;
      if next < Direction::InvalidDigit as u8 {
        set_index_digit(&mut self.h, r, Direction::from_bits(next));
        return;
      }
      set_index_digit(&mut self.h, r, Direction::Center);
      r -= 1;
    }
    self.exhaust();
  }

  fn step(&mut self) {
    self.increment_from(get_resolution(self.h));
    if self.h == H3_NULL {
      return;
    }

    if self.skip_digit_res > self.parent_res && get_index_digit(self.h, self.skip_digit_res) == Direction::KAxes {
      self.increment_from(self.skip_digit_res);
      self.skip_digit_res -= 1;
    }
  }
}

impl Iterator for ChildrenIter {
  type Item = H3Index;

  fn next(&mut self) -> Option<Self::Item> {
    if self.h == H3_NULL {
      return None;
    }
    let current = self.h;
    self.step();
    Some(current)
  }
}

impl std::iter::FusedIterator for ChildrenIter {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::base_cells::base_cell_num_to_cell;
  use crate::h3_index::get_base_cell;
  use crate::hierarchy::parent_child::{cell_to_children_size, cell_to_parent};

  #[test]
  fn test_children_iter_invalid() {
    let parent = H3Index(0x85283473fffffff);
    assert_eq!(ChildrenIter::new(parent, 4).err(), Some(H3Error::ResDomain));
    assert_eq!(ChildrenIter::new(parent, MAX_H3_RES + 1).err(), Some(H3Error::ResDomain));
    assert_eq!(ChildrenIter::new(H3_NULL, 5).err(), Some(H3Error::CellInvalid));
  }

  #[test]
  fn test_children_iter_same_resolution() {
    let parent = H3Index(0x85283473fffffff);
    let children: Vec<_> = ChildrenIter::new(parent, 5).unwrap().collect();
    assert_eq!(children, vec![parent]);
  }

  #[test]
  fn test_children_iter_hexagon() {
    let parent = H3Index(0x85283473fffffff);
    let child_res = 7;
    let expected_count = cell_to_children_size(parent, child_res).unwrap();

    let children: Vec<_> = ChildrenIter::new(parent, child_res).unwrap().collect();
    assert_eq!(children.len() as i64, expected_count);
    assert_eq!(children.first(), Some(&H3Index(0x872834700ffffff)));
    assert_eq!(children.last(), Some(&H3Index(0x872834736ffffff)));
    for pair in children.windows(2) {
      assert!(pair[0] < pair[1], "children should be ordered");
    }
    for &child in &children {
      assert!(is_valid_cell(child));
      assert_eq!(get_resolution(child), child_res);
      assert_eq!(cell_to_parent(child, 5), Ok(parent));
    }
  }

  #[test]
  fn test_children_iter_pentagon() {
    let parent_pent = base_cell_num_to_cell(4);
    assert!(is_pentagon(parent_pent));

    let direct: Vec<_> = ChildrenIter::new(parent_pent, 1).unwrap().collect();
    let digits: Vec<_> = direct.iter().map(|&h| get_index_digit(h, 1)).collect();
    assert_eq!(
      digits,
      vec![
        Direction::Center,
        Direction::JAxes,
        Direction::JkAxes,
        Direction::IAxes,
        Direction::IkAxes,
        Direction::IjAxes
      ]
    );

    let child_res = 2;
    let expected_count = cell_to_children_size(parent_pent, child_res).unwrap();
    assert_eq!(expected_count, 41);

    let mut count = 0;
    for child in ChildrenIter::new(parent_pent, child_res).unwrap() {
      assert!(is_valid_cell(child), "{child:x} should be valid");
      assert_eq!(get_base_cell(child), 4);
      assert_eq!(cell_to_parent(child, 0), Ok(parent_pent));
      count += 1;
    }
    assert_eq!(count, expected_count);
  }
}
