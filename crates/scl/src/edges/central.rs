//! Central edges.
//!
//! A central edge is an unordered dual pair of letter transitions
//! `{(i, j), (prev(j), next(i))}`: a polygon crossing from after letter
//! `i` to before letter `j` glues to one crossing from after `prev(j)`
//! to before `next(i)`. The pair whose first letter is smaller is the
//! stored orientation; the partner resolves to the same index with the
//! opposite orientation.
//!
//! The self-paired keys `(i, next(i))` are degenerate (both transitions
//! of the pair coincide) and are deliberately absent from the lookup.

use std::collections::HashMap;

use crate::chain::{Chain, LetterId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    Reverse,
}

/// A resolved central-edge lookup: dense index plus which member of the
/// dual pair the key named.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CentralRef {
    pub index: usize,
    pub orientation: Orientation,
}

/// The stored orientation of a central edge: from after `first` to
/// before `last`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CentralEdge {
    pub first: LetterId,
    pub last: LetterId,
}

pub struct CentralEdgeIndex {
    edges: Vec<CentralEdge>,
    lookup: HashMap<(usize, usize), CentralRef>,
}

impl CentralEdgeIndex {
    pub fn new(chain: &Chain) -> Self {
        let n = chain.num_letters();
        let mut edges = Vec::new();
        let mut lookup = HashMap::new();
        for i in 0..n {
            for j in 0..n {
                let i = LetterId(i);
                let j = LetterId(j);
                // Degenerate: the partner transition is this one.
                if j == chain.next_letter(i) {
                    continue;
                }
                let partner = (chain.prev_letter(j), chain.next_letter(i));
                // Register once, under the orientation with the smaller
                // first letter; the partner iteration skips.
                if i < partner.0 {
                    let index = edges.len();
                    edges.push(CentralEdge { first: i, last: j });
                    lookup.insert(
                        (i.0, j.0),
                        CentralRef {
                            index,
                            orientation: Orientation::Forward,
                        },
                    );
                    lookup.insert(
                        (partner.0 .0, partner.1 .0),
                        CentralRef {
                            index,
                            orientation: Orientation::Reverse,
                        },
                    );
                }
            }
        }
        CentralEdgeIndex { edges, lookup }
    }

    /// Resolve the transition from after `first` to before `last`.
    /// `None` exactly for the degenerate keys `(i, next(i))`.
    pub fn lookup(&self, first: LetterId, last: LetterId) -> Option<CentralRef> {
        self.lookup.get(&(first.0, last.0)).copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge(&self, index: usize) -> CentralEdge {
        self.edges[index]
    }

    pub fn edges(&self) -> &[CentralEdge] {
        &self.edges
    }
}
