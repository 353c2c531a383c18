//! The capability set the boundary traversals need from a hierarchical grid.
//!
//! The traversals in [`crate::boundary`] are written against [`GridCell`]
//! rather than `H3Index` directly, so any aperture-7 hierarchy with the same
//! digit numbering can reuse them.

use crate::constants::MAX_H3_RES;
use crate::h3_index::{get_resolution, is_pentagon, is_valid_cell};
use crate::hierarchy::{cell_to_child_pos, cell_to_children, cell_to_parent};
use crate::types::{H3Error, H3Index};

/// A cell of an aperture-7 hierarchical grid.
pub trait GridCell: Copy + Eq + std::hash::Hash + std::fmt::Debug {
  /// Finest resolution the grid supports.
  const MAX_RESOLUTION: i32;

  /// Fails with `CellInvalid` if `self` does not identify a cell.
  fn validate(self) -> Result<(), H3Error>;

  /// Subdivision depth of the cell; 0 is coarsest.
  fn resolution(self) -> i32;

  /// Whether the cell is one of the grid's pentagons.
  fn is_pentagon(self) -> bool;

  /// The ancestor at `res`, which must not be finer than the cell.
  fn parent(self, res: i32) -> Result<Self, H3Error>;

  /// The descendants at `res`, which must not be coarser than the cell.
  fn children(self, res: i32) -> Result<Vec<Self>, H3Error>;

  /// Position (0..=6) of this cell's ancestor at `ancestor_res + 1` among the
  /// direct children of its ancestor at `ancestor_res`. 0 is the center child.
  fn digit(self, ancestor_res: i32) -> Result<u8, H3Error>;
}

impl GridCell for H3Index {
  const MAX_RESOLUTION: i32 = MAX_H3_RES;

  fn validate(self) -> Result<(), H3Error> {
    if is_valid_cell(self) {
      Ok(())
    } else {
      Err(H3Error::CellInvalid)
    }
  }

  #[inline]
  fn resolution(self) -> i32 {
    get_resolution(self)
  }

  #[inline]
  fn is_pentagon(self) -> bool {
    is_pentagon(self)
  }

  #[inline]
  fn parent(self, res: i32) -> Result<Self, H3Error> {
    cell_to_parent(self, res)
  }

  fn children(self, res: i32) -> Result<Vec<Self>, H3Error> {
    cell_to_children(self, res)
  }

  fn digit(self, ancestor_res: i32) -> Result<u8, H3Error> {
    if ancestor_res >= get_resolution(self) {
      return Err(H3Error::ResDomain);
    }
    let child = cell_to_parent(self, ancestor_res + 1)?;
    let pos = cell_to_child_pos(child, ancestor_res)?;
    u8::try_from(pos).map_err(|_| H3Error::Failed)
  }
}
