//! Piece types.
//!
//! Every piece carries twice its Euler characteristic contribution:
//! `chi_times_2 = 2 - glued_sides`, where a glued side is any boundary
//! segment matched to another piece (central, interface, or group
//! edge). Segments lying on the chain itself are free and do not count.

use crate::chain::LetterId;
use crate::edges::{CentralRef, GroupEdge};

/// One side of a central polygon's boundary walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CentralSide {
    /// Interface edge, traversed polygon-side. Index into the
    /// interface catalogue.
    Interface(usize),
    /// Central edge with its resolved orientation.
    Central(CentralRef),
}

/// A central-region polygon: a closed boundary walk of interface and
/// central sides. Zero-length central sides (degenerate forced
/// lookups) are omitted from the walk, so bigons and 3-gons occur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CentralPolygon {
    pub sides: Vec<CentralSide>,
}

impl CentralPolygon {
    /// All sides are glued, so `2 - sides`.
    pub fn chi_times_2(&self) -> i32 {
        2 - self.sides.len() as i32
    }

    /// Interface sides in walk order.
    pub fn interface_sides(&self) -> impl Iterator<Item = usize> + '_ {
        self.sides.iter().filter_map(|s| match s {
            CentralSide::Interface(e) => Some(*e),
            CentralSide::Central(_) => None,
        })
    }
}

/// The group piece covering one regular and one inverse occurrence of
/// the same generator. Its two glued sides are interface edges,
/// traversed group-side, so chi_times_2 is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupRectangle {
    pub group: usize,
    pub regular: LetterId,
    pub inverse: LetterId,
    /// Interface edge traversed group-side as `(regular, inverse)`.
    pub first: usize,
    /// Interface edge traversed group-side as `(inverse, regular)`.
    pub last: usize,
}

impl GroupRectangle {
    pub fn chi_times_2(&self) -> i32 {
        0
    }
}

/// A multiset of same-sign occurrences of one generator, one letter per
/// boundary stop of a group polygon side. Sorted by letter id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multiarc {
    pub letters: Vec<LetterId>,
}

/// A polygon inside one group's side: one or two multiarc sides joined
/// by junction edges. A single-sided polygon closes through one
/// junction edge; a double-sided polygon joins its two sides through
/// two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupPolygon {
    pub group: usize,
    pub inverse: bool,
    pub sides: Vec<Multiarc>,
    pub junctions: Vec<GroupEdge>,
}

impl GroupPolygon {
    /// Glued sides: one interface slot per boundary stop plus one slot
    /// per junction edge.
    pub fn chi_times_2(&self) -> i32 {
        let stops: usize = self.sides.iter().map(|s| s.letters.len()).sum();
        2 - (stops + self.junctions.len()) as i32
    }

    /// Interface transitions traversed group-side: consecutive stops of
    /// the cyclic boundary walk over all sides in order.
    pub fn interface_transitions(&self) -> Vec<(LetterId, LetterId)> {
        let stops: Vec<LetterId> = self
            .sides
            .iter()
            .flat_map(|s| s.letters.iter().copied())
            .collect();
        let n = stops.len();
        (0..n).map(|t| (stops[t], stops[(t + 1) % n])).collect()
    }
}
