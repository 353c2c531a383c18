//! Face-adjacency tables between a cell and its direct children.
//!
//! Tables are indexed `[parity][digit]`, where parity is that of the child
//! resolution and digit is the child's position among its parent's children.
//! The forward tables map a child face to the parent face it lies along; the
//! reverse tables map a parent face to the child faces inherited from it.
//! Digit 0 (the center child) never touches a parent face. Under a pentagon
//! only positions 1..=5 exist.

use super::{is_face_number, CellShape, Face, FaceSet, Parity};

/// Child face -> parent face, for one `(parity, digit)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardFaceMap {
  /// Indexed by child face; 0 marks an interior edge.
  targets: [u8; 7],
}

impl ForwardFaceMap {
  /// A map with no entries: every child face is interior.
  pub const EMPTY: ForwardFaceMap = ForwardFaceMap { targets: [0; 7] };

  const fn from_pairs(pairs: &[(u8, u8)]) -> Self {
    let mut targets = [0u8; 7];
    let mut i = 0;
    while i < pairs.len() {
      let (child, parent) = pairs[i];
      assert!(is_face_number(child) && is_face_number(parent));
      targets[child as usize] = parent;
      i += 1;
    }
    ForwardFaceMap { targets }
  }

  /// The parent face `face` lies along, if any.
  #[inline]
  #[must_use]
  pub fn get(&self, face: Face) -> Option<Face> {
    Face::new(self.targets[face.get() as usize]).ok()
  }

  /// Child faces that have an entry.
  #[must_use]
  pub fn keys(&self) -> FaceSet {
    Face::ALL.into_iter().filter(|&f| self.get(f).is_some()).collect()
  }

  /// Maps every face of `faces` that has an entry; faces without one are dropped.
  #[must_use]
  pub fn map(&self, faces: FaceSet) -> FaceSet {
    faces.iter().filter_map(|f| self.get(f)).collect()
  }
}

/// Parent face -> inherited child faces, for one `(parity, digit)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseFaceMap {
  /// Indexed by parent face; slot 0 is unused.
  sources: [FaceSet; 7],
}

impl ReverseFaceMap {
  /// A map with no entries: the child inherits no parent face.
  pub const EMPTY: ReverseFaceMap = ReverseFaceMap { sources: [FaceSet::EMPTY; 7] };

  const fn from_entries(entries: &[(u8, FaceSet)]) -> Self {
    let mut sources = [FaceSet::EMPTY; 7];
    let mut i = 0;
    while i < entries.len() {
      let (parent, children) = entries[i];
      assert!(is_face_number(parent));
      sources[parent as usize] = children;
      i += 1;
    }
    ReverseFaceMap { sources }
  }

  /// Child faces inherited from parent face `face`; empty if there is no entry.
  #[inline]
  #[must_use]
  pub fn get(&self, face: Face) -> FaceSet {
    self.sources[face.get() as usize]
  }

  /// Parent faces that have an entry.
  #[must_use]
  pub fn keys(&self) -> FaceSet {
    Face::ALL.into_iter().filter(|&f| !self.get(f).is_empty()).collect()
  }

  /// Union of the child faces inherited from every face of `faces`.
  #[must_use]
  pub fn map(&self, faces: FaceSet) -> FaceSet {
    faces.iter().fold(FaceSet::EMPTY, |acc, f| acc | self.get(f))
  }
}

const fn fwd(pairs: &[(u8, u8)]) -> ForwardFaceMap {
  ForwardFaceMap::from_pairs(pairs)
}

const fn rev(entries: &[(u8, FaceSet)]) -> ReverseFaceMap {
  ReverseFaceMap::from_entries(entries)
}

const fn set(faces: &[u8]) -> FaceSet {
  FaceSet::from_faces(faces)
}

#[rustfmt::skip]
static FORWARD_HEX: [[ForwardFaceMap; 7]; 2] = [
  // Even
  [
    ForwardFaceMap::EMPTY,
    fwd(&[(2, 3), (3, 1), (1, 1)]),
    fwd(&[(4, 6), (2, 2), (6, 2)]),
    fwd(&[(6, 2), (2, 3), (3, 3)]),
    fwd(&[(1, 5), (4, 4), (5, 4)]),
    fwd(&[(1, 5), (3, 1), (5, 5)]),
    fwd(&[(4, 6), (5, 4), (6, 6)]),
  ],
  // Odd
  [
    ForwardFaceMap::EMPTY,
    fwd(&[(3, 3), (1, 3), (5, 1)]),
    fwd(&[(2, 6), (6, 6), (3, 2)]),
    fwd(&[(2, 2), (1, 3), (3, 2)]),
    fwd(&[(4, 5), (5, 5), (6, 4)]),
    fwd(&[(1, 1), (4, 5), (5, 1)]),
    fwd(&[(4, 4), (2, 6), (6, 4)]),
  ],
];

#[rustfmt::skip]
static FORWARD_PENT: [[ForwardFaceMap; 7]; 2] = [
  // Even
  [
    ForwardFaceMap::EMPTY,
    fwd(&[(4, 5), (2, 1), (6, 1)]),
    fwd(&[(6, 1), (3, 2), (2, 2)]),
    fwd(&[(5, 2), (4, 2), (6, 4)]),
    fwd(&[(3, 2), (5, 4), (1, 2)]),
    fwd(&[(5, 3), (6, 5), (4, 5)]),
    ForwardFaceMap::EMPTY,
  ],
  // Odd
  [
    ForwardFaceMap::EMPTY,
    fwd(&[(2, 5), (6, 5), (3, 1)]),
    fwd(&[(3, 1), (2, 1), (1, 2)]),
    fwd(&[(1, 4), (4, 3), (5, 3)]),
    fwd(&[(1, 2), (5, 2), (4, 4)]),
    fwd(&[(2, 5), (4, 3), (6, 3)]),
    ForwardFaceMap::EMPTY,
  ],
];

#[rustfmt::skip]
static REVERSE_HEX: [[ReverseFaceMap; 7]; 2] = [
  // Even
  [
    ReverseFaceMap::EMPTY,
    rev(&[(1, set(&[1, 3])), (3, set(&[2]))]),
    rev(&[(2, set(&[2, 6])), (6, set(&[4]))]),
    rev(&[(2, set(&[6])), (3, set(&[2, 3]))]),
    rev(&[(4, set(&[4, 5])), (5, set(&[1]))]),
    rev(&[(5, set(&[1, 5])), (1, set(&[3]))]),
    rev(&[(4, set(&[5])), (6, set(&[4, 6]))]),
  ],
  // Odd
  [
    ReverseFaceMap::EMPTY,
    rev(&[(3, set(&[1, 3])), (1, set(&[5]))]),
    rev(&[(6, set(&[2, 6])), (2, set(&[3]))]),
    rev(&[(2, set(&[2, 3])), (3, set(&[1]))]),
    rev(&[(5, set(&[4, 5])), (4, set(&[6]))]),
    rev(&[(1, set(&[1, 5])), (5, set(&[4]))]),
    rev(&[(4, set(&[4, 6])), (6, set(&[2]))]),
  ],
];

#[rustfmt::skip]
static REVERSE_PENT: [[ReverseFaceMap; 7]; 2] = [
  // Even
  [
    ReverseFaceMap::EMPTY,
    rev(&[(1, set(&[2, 6])), (5, set(&[4]))]),
    rev(&[(1, set(&[6])), (2, set(&[2, 3]))]),
    rev(&[(4, set(&[1])), (3, set(&[4, 5]))]),
    rev(&[(4, set(&[5])), (2, set(&[1, 3]))]),
    rev(&[(5, set(&[4, 6])), (3, set(&[5]))]),
    ReverseFaceMap::EMPTY,
  ],
  // Odd
  [
    ReverseFaceMap::EMPTY,
    rev(&[(5, set(&[2, 6])), (1, set(&[3]))]),
    rev(&[(2, set(&[1])), (1, set(&[2, 3]))]),
    rev(&[(3, set(&[6])), (4, set(&[4, 5]))]),
    rev(&[(4, set(&[4])), (2, set(&[1, 5]))]),
    rev(&[(5, set(&[2])), (3, set(&[4, 6]))]),
    ReverseFaceMap::EMPTY,
  ],
];

/// The forward table for a child at `digit` under a parent of `shape`, where
/// `parity` is that of the child's resolution.
///
/// Digits without entries, including 0 and anything above 6, get the empty map.
#[must_use]
pub fn forward_face_map(shape: CellShape, parity: Parity, digit: u8) -> &'static ForwardFaceMap {
  let table = match shape {
    CellShape::Hexagon => &FORWARD_HEX,
    CellShape::Pentagon => &FORWARD_PENT,
  };
  table[parity.index()].get(digit as usize).unwrap_or(&ForwardFaceMap::EMPTY)
}

/// The reverse table for a child at `digit` under a parent of `shape`, where
/// `parity` is that of the child's resolution.
///
/// Digits without entries, including 0 and anything above 6, get the empty map.
#[must_use]
pub fn reverse_face_map(shape: CellShape, parity: Parity, digit: u8) -> &'static ReverseFaceMap {
  let table = match shape {
    CellShape::Hexagon => &REVERSE_HEX,
    CellShape::Pentagon => &REVERSE_PENT,
  };
  table[parity.index()].get(digit as usize).unwrap_or(&ReverseFaceMap::EMPTY)
}
