//! Core H3 data structures.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents an H3 cell index.
/// This is a 64-bit unsigned integer.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// Invalid H3 index, often used to signify an error or missing data.
pub const H3_NULL: H3Index = H3Index(0);

impl fmt::Display for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl FromStr for H3Index {
  type Err = H3Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    crate::h3_index::string_conv::string_to_h3(s)
  }
}

/// Represents an H3 error code.
///
/// Discriminants keep the numeric values of the H3 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum H3Error {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range.
  #[error("argument was outside of acceptable range")]
  Domain = 2,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution argument was outside of acceptable range")]
  ResDomain = 4,
  /// `H3Index` cell argument was not valid.
  #[error("cell argument was not valid")]
  CellInvalid = 5,
  /// Cell arguments had incompatible resolutions.
  #[error("cell arguments had incompatible resolutions")]
  ResMismatch = 12,
}

/// H3 digit representing IJK+ axes direction (0-6), or invalid (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// H3 digit in center.
  #[default]
  Center = 0,
  /// H3 digit in k-axes direction.
  KAxes = 1,
  /// H3 digit in j-axes direction.
  JAxes = 2,
  /// H3 digit in j == k direction.
  JkAxes = 3,
  /// H3 digit in i-axes direction.
  IAxes = 4,
  /// H3 digit in i == k direction.
  IkAxes = 5,
  /// H3 digit in i == j direction.
  IjAxes = 6,
  /// H3 digit in the invalid direction.
  InvalidDigit = 7,
}

impl Direction {
  /// Maps the low three bits of `value` to a digit. Never fails.
  #[inline]
  #[must_use]
  pub(crate) const fn from_bits(value: u8) -> Self {
    match value & 0b111 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = H3Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(H3Error::Domain);
    }
    Ok(Direction::from_bits(value))
  }
}
