//! Cell faces, face sets and the parity/shape selectors for the adjacency tables.
//!
//! A face names one of a hexagon's six edges, numbered 1 through 6. Pentagons
//! use five of the six numbers.

pub mod tables;

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::NUM_HEX_FACES;
use crate::types::H3Error;

pub use tables::{forward_face_map, reverse_face_map, ForwardFaceMap, ReverseFaceMap};

#[inline]
pub(crate) const fn is_face_number(n: u8) -> bool {
  matches!(n, 1..=NUM_HEX_FACES)
}

/// One edge of a cell, in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "u8", into = "u8"))]
pub struct Face(u8);

impl Face {
  /// All six faces in ascending order.
  pub const ALL: [Face; 6] = [Face(1), Face(2), Face(3), Face(4), Face(5), Face(6)];

  /// Returns the face numbered `n`, or `Domain` if `n` is outside `1..=6`.
  pub const fn new(n: u8) -> Result<Self, H3Error> {
    if is_face_number(n) {
      Ok(Face(n))
    } else {
      Err(H3Error::Domain)
    }
  }

  /// The face number.
  #[inline]
  #[must_use]
  pub const fn get(self) -> u8 {
    self.0
  }

  #[inline]
  const fn bit(self) -> u8 {
    1 << self.0
  }
}

impl TryFrom<u8> for Face {
  type Error = H3Error;

  fn try_from(n: u8) -> Result<Self, Self::Error> {
    Face::new(n)
  }
}

impl From<Face> for u8 {
  fn from(face: Face) -> Self {
    face.0
  }
}

impl fmt::Display for Face {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// An unordered set of distinct faces.
///
/// The empty set is a meaningful value: it means "touches no tracked boundary".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "Vec<Face>", into = "Vec<Face>"))]
pub struct FaceSet(u8);

impl FaceSet {
  /// No faces.
  pub const EMPTY: FaceSet = FaceSet(0);
  /// Faces 1 through 6.
  pub const ALL: FaceSet = FaceSet(0b0111_1110);

  /// Builds a set from face numbers, panicking on a number outside `1..=6`.
  ///
  /// Intended for constants; use `FaceSet::try_from` for untrusted input.
  #[must_use]
  pub const fn from_faces(faces: &[u8]) -> Self {
    let mut bits = 0u8;
    let mut i = 0;
    while i < faces.len() {
      assert!(is_face_number(faces[i]), "face numbers are 1..=6");
      bits |= 1 << faces[i];
      i += 1;
    }
    FaceSet(bits)
  }

  /// A set holding only `face`.
  #[must_use]
  pub const fn single(face: Face) -> Self {
    FaceSet(face.bit())
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Number of faces in the set.
  #[inline]
  #[must_use]
  pub const fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  #[inline]
  #[must_use]
  pub const fn contains(self, face: Face) -> bool {
    self.0 & face.bit() != 0
  }

  /// Adds `face`, returning whether it was newly inserted.
  pub fn insert(&mut self, face: Face) -> bool {
    let added = !self.contains(face);
    self.0 |= face.bit();
    added
  }

  /// Removes `face`, returning whether it was present.
  pub fn remove(&mut self, face: Face) -> bool {
    let present = self.contains(face);
    self.0 &= !face.bit();
    present
  }

  #[inline]
  #[must_use]
  pub const fn union(self, other: FaceSet) -> FaceSet {
    FaceSet(self.0 | other.0)
  }

  #[inline]
  #[must_use]
  pub const fn intersection(self, other: FaceSet) -> FaceSet {
    FaceSet(self.0 & other.0)
  }

  /// Whether every face of `self` is also in `other`.
  #[inline]
  #[must_use]
  pub const fn is_subset(self, other: FaceSet) -> bool {
    self.0 & !other.0 == 0
  }

  /// Faces in ascending order.
  pub fn iter(self) -> FaceSetIter {
    FaceSetIter { bits: self.0 }
  }
}

/// Ascending iterator over the faces of a [`FaceSet`].
#[derive(Debug, Clone)]
pub struct FaceSetIter {
  bits: u8,
}

impl Iterator for FaceSetIter {
  type Item = Face;

  fn next(&mut self) -> Option<Face> {
    if self.bits == 0 {
      return None;
    }
    let n = self.bits.trailing_zeros() as u8;
    self.bits &= self.bits - 1;
    Some(Face(n))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.bits.count_ones() as usize;
    (n, Some(n))
  }
}

impl ExactSizeIterator for FaceSetIter {}

impl IntoIterator for FaceSet {
  type Item = Face;
  type IntoIter = FaceSetIter;

  fn into_iter(self) -> FaceSetIter {
    self.iter()
  }
}

impl FromIterator<Face> for FaceSet {
  fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
    iter.into_iter().fold(FaceSet::EMPTY, |set, face| set | FaceSet::single(face))
  }
}

impl Extend<Face> for FaceSet {
  fn extend<I: IntoIterator<Item = Face>>(&mut self, iter: I) {
    for face in iter {
      self.insert(face);
    }
  }
}

impl TryFrom<&[u8]> for FaceSet {
  type Error = H3Error;

  fn try_from(faces: &[u8]) -> Result<Self, Self::Error> {
    faces.iter().map(|&n| Face::new(n)).collect()
  }
}

impl From<Face> for FaceSet {
  fn from(face: Face) -> Self {
    FaceSet::single(face)
  }
}

impl From<Vec<Face>> for FaceSet {
  fn from(faces: Vec<Face>) -> Self {
    faces.into_iter().collect()
  }
}

impl From<FaceSet> for Vec<Face> {
  fn from(set: FaceSet) -> Self {
    set.iter().collect()
  }
}

impl BitOr for FaceSet {
  type Output = FaceSet;

  fn bitor(self, rhs: FaceSet) -> FaceSet {
    self.union(rhs)
  }
}

impl BitOrAssign for FaceSet {
  fn bitor_assign(&mut self, rhs: FaceSet) {
    *self = self.union(rhs);
  }
}

impl BitAnd for FaceSet {
  type Output = FaceSet;

  fn bitand(self, rhs: FaceSet) -> FaceSet {
    self.intersection(rhs)
  }
}

impl BitAndAssign for FaceSet {
  fn bitand_assign(&mut self, rhs: FaceSet) {
    *self = self.intersection(rhs);
  }
}

impl fmt::Debug for FaceSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter().map(Face::get)).finish()
  }
}

impl fmt::Display for FaceSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

/// Even/odd class of a resolution; selects the table variant for a subdivision step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
  Even = 0,
  Odd = 1,
}

impl Parity {
  /// Parity of `res`.
  #[inline]
  #[must_use]
  pub const fn of(res: i32) -> Self {
    if res.rem_euclid(2) == 0 {
      Parity::Even
    } else {
      Parity::Odd
    }
  }

  #[inline]
  pub(crate) const fn index(self) -> usize {
    self as usize
  }
}

/// Hexagon or pentagon; selects the table variant for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
  Hexagon,
  Pentagon,
}

impl CellShape {
  #[inline]
  #[must_use]
  pub const fn of(is_pentagon: bool) -> Self {
    if is_pentagon {
      CellShape::Pentagon
    } else {
      CellShape::Hexagon
    }
  }
}
