//! Group edges.
//!
//! Junction edges inside one group's side, split by sign class: a
//! regular edge joins two lowercase occurrences, an inverse edge two
//! uppercase ones. The ordered traversals `(a, b)` and `(b, a)` are the
//! two sides of one physical edge; `(a, a)` is self-paired and glues to
//! itself.

use crate::chain::{Chain, LetterId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupEdge {
    pub first: LetterId,
    pub last: LetterId,
}

/// All junction edges of one factor group.
pub struct GroupEdgeIndex {
    pub group: usize,
    regular: Vec<GroupEdge>,
    inverse: Vec<GroupEdge>,
}

impl GroupEdgeIndex {
    pub fn new(chain: &Chain, group: usize) -> Self {
        GroupEdgeIndex {
            group,
            regular: ordered_pairs(chain.regular_letters(group)),
            inverse: ordered_pairs(chain.inverse_letters(group)),
        }
    }

    pub fn for_all_groups(chain: &Chain) -> Vec<Self> {
        (0..chain.group().num_groups())
            .map(|g| GroupEdgeIndex::new(chain, g))
            .collect()
    }

    /// Edges between regular (lowercase) occurrences.
    pub fn regular_edges(&self) -> &[GroupEdge] {
        &self.regular
    }

    /// Edges between inverse (uppercase) occurrences.
    pub fn inverse_edges(&self) -> &[GroupEdge] {
        &self.inverse
    }

    /// Edges of the sign class the polygons of that sign glue along.
    pub fn edges_for_sign(&self, inverse: bool) -> &[GroupEdge] {
        if inverse {
            &self.inverse
        } else {
            &self.regular
        }
    }
}

fn ordered_pairs(letters: &[LetterId]) -> Vec<GroupEdge> {
    let mut out = Vec::with_capacity(letters.len() * letters.len());
    for &a in letters {
        for &b in letters {
            out.push(GroupEdge { first: a, last: b });
        }
    }
    out
}
