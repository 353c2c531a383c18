//! Base cell (resolution 0) data.
//!
//! Only the pentagon flags are needed here: the traversals never leave the
//! base cell they start in, so neighbor and orientation tables are not kept.

use crate::constants::{H3_CELL_MODE, H3_INIT, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::h3_index::{set_base_cell, set_mode, set_resolution};
use crate::types::{H3Index, H3_NULL};

/// Base cell numbers of the twelve pentagons, in ascending order.
pub const PENTAGON_BASE_CELLS: [i32; NUM_PENTAGONS as usize] = [4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117];

/// Per-base-cell pentagon flag, derived from `PENTAGON_BASE_CELLS`.
static BASE_CELL_IS_PENTAGON: [bool; NUM_BASE_CELLS as usize] = {
  let mut flags = [false; NUM_BASE_CELLS as usize];
  let mut i = 0;
  while i < PENTAGON_BASE_CELLS.len() {
    flags[PENTAGON_BASE_CELLS[i] as usize] = true;
    i += 1;
  }
  flags
};

/// Return whether or not the indicated base cell is a pentagon.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_pentagon(base_cell: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  BASE_CELL_IS_PENTAGON[base_cell as usize]
}

/// Returns the resolution 0 cell for a base cell number, or `H3_NULL` when
/// the number is out of range.
#[must_use]
pub(crate) fn base_cell_num_to_cell(base_cell_num: i32) -> H3Index {
  if base_cell_num < 0 || base_cell_num >= NUM_BASE_CELLS {
    return H3_NULL;
  }
  let mut h = H3Index(H3_INIT);
  set_mode(&mut h, H3_CELL_MODE);
  set_resolution(&mut h, 0);
  set_base_cell(&mut h, base_cell_num);
  h
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pentagon_flags() {
    let count = (0..NUM_BASE_CELLS).filter(|&bc| _is_base_cell_pentagon(bc)).count();
    assert_eq!(count, NUM_PENTAGONS as usize);
    assert!(_is_base_cell_pentagon(4));
    assert!(_is_base_cell_pentagon(117));
    assert!(!_is_base_cell_pentagon(0));
    assert!(!_is_base_cell_pentagon(-1));
    assert!(!_is_base_cell_pentagon(NUM_BASE_CELLS));
  }

  #[test]
  fn test_base_cell_num_to_cell() {
    assert_eq!(base_cell_num_to_cell(0), H3Index(0x8001fffffffffff));
    assert_eq!(base_cell_num_to_cell(4), H3Index(0x8009fffffffffff));
    assert_eq!(base_cell_num_to_cell(121), H3Index(0x80f3fffffffffff));
    assert_eq!(base_cell_num_to_cell(NUM_BASE_CELLS), H3_NULL);
  }
}
