#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Error cases are listed where they are not obvious
#![allow(clippy::cast_possible_truncation)] // Resolutions and digits are small, review carefully
#![allow(clippy::cast_sign_loss)] // Bit-field accessors, review carefully
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::unreadable_literal)] // H3 indexes read better as raw hex
#![allow(clippy::wildcard_imports)] // Constants are pulled in wholesale

//! `h3-toolkit` traces cell faces through the H3 resolution hierarchy.
//!
//! Given a cell and some of its faces, it answers which faces of an ancestor
//! those lie on, and which descendants at a finer resolution lie along a
//! chosen set of faces. The traversals work on any [`GridCell`]; an
//! implementation for [`H3Index`] is provided along with the index and
//! parent/child operations it needs.

// Declare modules
pub mod base_cells;
pub mod boundary;
pub mod constants;
pub mod faces;
pub mod grid;
pub mod h3_index;
pub mod hierarchy;
pub mod iterators;
pub mod types;

// Re-export key public types and functions for easier use
pub use boundary::{
  boundary_children_count, children_on_boundary_faces, coarsest_ancestor_on_faces, trace_faces_to_ancestor,
  trace_faces_to_parent, BoundaryChildren,
};
pub use constants::MAX_H3_RES;
pub use faces::{forward_face_map, reverse_face_map, CellShape, Face, FaceSet, ForwardFaceMap, Parity, ReverseFaceMap};
pub use grid::GridCell;
pub use types::{Direction, H3Error, H3Index, H3_NULL};

pub use h3_index::inspection::{
  get_base_cell_number, get_pentagons, get_res0_cells, is_pentagon, is_res_class_iii, is_valid_cell, pentagon_count,
};
pub use h3_index::string_conv::{h3_to_string_alloc, string_to_h3};
pub use h3_index::{construct_cell, get_resolution};
pub use hierarchy::{
  cell_to_center_child, cell_to_child_pos, cell_to_children, cell_to_children_size, cell_to_parent, child_pos_to_cell,
};
pub use iterators::ChildrenIter;
