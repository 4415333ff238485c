//! Polygon catalogues.
//!
//! The pieces an admissible surface is cut into: central polygons,
//! group rectangles, and group polygons. `Catalogue::build` runs the
//! whole enumeration for a chain; the LP is assembled directly over
//! the catalogue's dense indices.

mod central;
mod group;
mod types;

pub use central::{boundary_closes, enumerate_central_polygons};
pub use group::{enumerate_group_pieces, multiarcs, GroupPieces};
pub use types::{CentralPolygon, CentralSide, GroupPolygon, GroupRectangle, Multiarc};

use crate::chain::Chain;
use crate::edges::{CentralEdgeIndex, GroupEdgeIndex, InterfaceEdgeIndex};

/// Every edge index and piece list for one chain.
pub struct Catalogue {
    pub central_edges: CentralEdgeIndex,
    pub interface_edges: InterfaceEdgeIndex,
    pub group_edges: Vec<GroupEdgeIndex>,
    pub central_polygons: Vec<CentralPolygon>,
    pub group_pieces: Vec<GroupPieces>,
}

impl Catalogue {
    pub fn build(chain: &Chain) -> Self {
        let central_edges = CentralEdgeIndex::new(chain);
        let interface_edges = InterfaceEdgeIndex::new(chain);
        let group_edges = GroupEdgeIndex::for_all_groups(chain);
        let central_polygons = enumerate_central_polygons(chain, &interface_edges, &central_edges);
        let group_pieces = group_edges
            .iter()
            .map(|ge| enumerate_group_pieces(chain, &interface_edges, ge))
            .collect();
        Catalogue {
            central_edges,
            interface_edges,
            group_edges,
            central_polygons,
            group_pieces,
        }
    }

    /// Total number of LP columns the catalogue induces.
    pub fn num_pieces(&self) -> usize {
        self.central_polygons.len()
            + self
                .group_pieces
                .iter()
                .map(|gp| gp.rectangles.len() + gp.polygons.len())
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests;
