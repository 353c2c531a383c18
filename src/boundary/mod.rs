//! Boundary-face tracing across resolutions.
//!
//! [`ascend`] follows a set of a cell's faces up toward an ancestor and reports
//! which of the ancestor's faces they lie on. [`descend`] goes the other way:
//! it enumerates the descendants at a finer resolution that lie along a
//! chosen subset of a parent's faces, pruning interior subtrees as it goes.
//!
//! Both directions are generic over [`GridCell`](crate::grid::GridCell) and
//! read only the static tables in [`crate::faces::tables`], so independent
//! calls can run concurrently without coordination.

pub mod ascend;
pub mod descend;

pub use ascend::{coarsest_ancestor_on_faces, trace_faces_to_ancestor, trace_faces_to_parent};
pub use descend::{boundary_children_count, children_on_boundary_faces, BoundaryChildren};
