use log::{debug, trace};

use crate::faces::{forward_face_map, CellShape, FaceSet, Parity};
use crate::grid::GridCell;
use crate::types::H3Error;

/// Traces `faces` of `cell` up to its ancestor at `ancestor_res`.
///
/// Returns the ancestor faces the traced faces lie along. The result is empty
/// when the cell does not reach any of the requested faces of that ancestor:
/// some cell on the way up is a center child, is a pentagon, or only touches
/// interior edges of its parent.
///
/// # Errors
///
/// `CellInvalid` if `cell` is not a valid cell, `ResDomain` unless
/// `0 <= ancestor_res < resolution(cell)`.
pub fn trace_faces_to_ancestor<C: GridCell>(cell: C, faces: FaceSet, ancestor_res: i32) -> Result<FaceSet, H3Error> {
  cell.validate()?;
  let res = cell.resolution();
  if ancestor_res < 0 || ancestor_res >= res {
    return Err(H3Error::ResDomain);
  }
  if faces.is_empty() {
    return Ok(FaceSet::EMPTY);
  }

  let mut current = cell;
  let mut tracked = faces;
  for level in (ancestor_res + 1..=res).rev() {
    if current.is_pentagon() {
      trace!("{current:?} is a pentagon at res {level}, trace stops");
      return Ok(FaceSet::EMPTY);
    }
    let digit = current.digit(level - 1)?;
    if digit == 0 {
      trace!("{current:?} is a center child at res {level}");
      return Ok(FaceSet::EMPTY);
    }
    let parent = current.parent(level - 1)?;
    let map = forward_face_map(CellShape::of(parent.is_pentagon()), Parity::of(level), digit);
    tracked = map.map(tracked);
    if tracked.is_empty() {
      trace!("{current:?} (digit {digit}) touches no tracked face of its parent");
      return Ok(FaceSet::EMPTY);
    }
    current = parent;
  }

  debug!("traced {faces} of {cell:?} to res {ancestor_res}: {tracked}");
  Ok(tracked)
}

/// [`trace_faces_to_ancestor`] one level up.
///
/// # Errors
///
/// `ResDomain` for a resolution-0 cell, which has no parent.
pub fn trace_faces_to_parent<C: GridCell>(cell: C, faces: FaceSet) -> Result<FaceSet, H3Error> {
  cell.validate()?;
  trace_faces_to_ancestor(cell, faces, cell.resolution() - 1)
}

/// Walks up from `cell` one level at a time while the tracked faces survive,
/// narrowing them at each step, and returns the last cell that still touched
/// at least one of them.
///
/// Returns `cell` itself when it is a center child, a pentagon, or off the
/// requested faces of its parent, and also when `faces` is empty. A
/// resolution-0 cell is its own answer.
pub fn coarsest_ancestor_on_faces<C: GridCell>(cell: C, faces: FaceSet) -> Result<C, H3Error> {
  cell.validate()?;
  let mut current = cell;
  let mut tracked = faces;
  while current.resolution() > 0 && !tracked.is_empty() {
    let parent_res = current.resolution() - 1;
    let traced = trace_faces_to_ancestor(current, tracked, parent_res)?;
    if traced.is_empty() {
      break;
    }
    current = current.parent(parent_res)?;
    tracked = traced;
  }
  debug!("coarsest ancestor of {cell:?} on {faces}: {current:?}");
  Ok(current)
}
