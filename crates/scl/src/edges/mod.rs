//! Edge catalogues.
//!
//! Purpose
//! - Enumerate the three edge families polygons glue along and give
//!   each an O(1) keyed lookup:
//!   - central edges: dual pairs of transitions between letters,
//!   - interface edges: boundaries between the central region and one
//!     group's side, addressable from either side,
//!   - group edges: junctions inside one group's side.
//!
//! Edge indices are dense and deterministic; the LP rows are laid out
//! directly over them.

mod central;
mod group;
mod interface;

pub use central::{CentralEdge, CentralEdgeIndex, CentralRef, Orientation};
pub use group::{GroupEdge, GroupEdgeIndex};
pub use interface::{InterfaceEdge, InterfaceEdgeIndex};

#[cfg(test)]
mod tests;
