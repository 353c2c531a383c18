use std::iter::FusedIterator;

use log::{debug, trace};

use crate::faces::{reverse_face_map, CellShape, FaceSet, Parity};
use crate::grid::GridCell;
use crate::types::H3Error;

#[derive(Debug, Clone, Copy)]
struct Frame<C> {
  cell: C,
  res: i32,
  faces: FaceSet,
}

/// Lazy depth-first enumeration of the descendants of a cell that lie along
/// some of its faces.
///
/// Each pending node carries the faces of the root it still touches. A child
/// that inherits none of them is dropped with its whole subtree, so the work
/// done is proportional to the size of the boundary rather than the subtree.
/// Cells are yielded in child-iteration order. After an error the iterator
/// yields `None`.
#[derive(Debug, Clone)]
pub struct BoundaryChildren<C: GridCell> {
  target_res: i32,
  stack: Vec<Frame<C>>,
}

impl<C: GridCell> BoundaryChildren<C> {
  /// Sets up the traversal from `parent` down to `target_res`.
  ///
  /// # Errors
  ///
  /// `CellInvalid` if `parent` is not a valid cell, `ResDomain` if
  /// `target_res` is coarser than `parent` or finer than the grid allows.
  pub fn new(parent: C, target_res: i32, faces: FaceSet) -> Result<Self, H3Error> {
    parent.validate()?;
    let res = parent.resolution();
    if target_res < res || target_res > C::MAX_RESOLUTION {
      return Err(H3Error::ResDomain);
    }
    Ok(Self { target_res, stack: vec![Frame { cell: parent, res, faces }] })
  }

  /// Pushes the children of `frame` that inherit at least one tracked face.
  fn expand(&mut self, frame: Frame<C>) -> Result<(), H3Error> {
    let child_res = frame.res + 1;
    let shape = CellShape::of(frame.cell.is_pentagon());
    let parity = Parity::of(child_res);

    let start = self.stack.len();
    for child in frame.cell.children(child_res)? {
      let digit = child.digit(frame.res)?;
      let inherited = reverse_face_map(shape, parity, digit).map(frame.faces);
      if inherited.is_empty() {
        trace!("pruned {child:?} (digit {digit}) under {:?}", frame.cell);
        continue;
      }
      self.stack.push(Frame { cell: child, res: child_res, faces: inherited });
    }
    // Pop in child-iteration order.
    self.stack[start..].reverse();
    Ok(())
  }
}

impl<C: GridCell> Iterator for BoundaryChildren<C> {
  type Item = Result<C, H3Error>;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(frame) = self.stack.pop() {
      if frame.res == self.target_res {
        return Some(Ok(frame.cell));
      }
      if let Err(e) = self.expand(frame) {
        self.stack.clear();
        return Some(Err(e));
      }
    }
    None
  }
}

impl<C: GridCell> FusedIterator for BoundaryChildren<C> {}

/// All descendants of `parent` at `target_res` lying on at least one of `faces`.
///
/// `target_res == resolution(parent)` returns `[parent]`. An empty `faces`
/// below that returns nothing. No cell appears twice.
///
/// # Errors
///
/// As [`BoundaryChildren::new`]; arguments are checked before any traversal.
pub fn children_on_boundary_faces<C: GridCell>(
  parent: C,
  target_res: i32,
  faces: FaceSet,
) -> Result<Vec<C>, H3Error> {
  let out = BoundaryChildren::new(parent, target_res, faces)?.collect::<Result<Vec<_>, _>>()?;
  debug!("{} boundary children of {parent:?} at res {target_res} on {faces}", out.len());
  Ok(out)
}

/// Number of cells [`children_on_boundary_faces`] would return, without
/// collecting them.
pub fn boundary_children_count<C: GridCell>(parent: C, target_res: i32, faces: FaceSet) -> Result<usize, H3Error> {
  BoundaryChildren::new(parent, target_res, faces)?.try_fold(0, |n, cell| cell.map(|_| n + 1))
}
