//! Interface edges.
//!
//! An interface edge separates the central region from one group's
//! side. It exists for every ordered pair of same-group letters
//! (signs mixed freely, repeats allowed). The same physical edge is
//! addressed from both sides:
//! - polygon side: key `(first, last)`, the order a central polygon's
//!   boundary walk traverses it,
//! - group side: the reversed key `(last, first)`, the order a group
//!   piece traverses it.

use std::collections::HashMap;

use crate::chain::{Chain, LetterId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterfaceEdge {
    /// Polygon-side first endpoint.
    pub first: LetterId,
    /// Polygon-side last endpoint.
    pub last: LetterId,
    /// Factor group both endpoints belong to.
    pub group: usize,
}

pub struct InterfaceEdgeIndex {
    edges: Vec<InterfaceEdge>,
    by_poly_side: HashMap<(usize, usize), usize>,
    by_group_side: HashMap<(usize, usize), usize>,
    beginning_with: Vec<Vec<usize>>,
}

impl InterfaceEdgeIndex {
    pub fn new(chain: &Chain) -> Self {
        let mut edges = Vec::new();
        let mut by_poly_side = HashMap::new();
        let mut by_group_side = HashMap::new();
        let mut beginning_with = vec![Vec::new(); chain.num_letters()];
        for g in 0..chain.group().num_groups() {
            let letters = chain.group_letters(g);
            for &a in &letters {
                for &b in &letters {
                    let index = edges.len();
                    edges.push(InterfaceEdge {
                        first: a,
                        last: b,
                        group: g,
                    });
                    by_poly_side.insert((a.0, b.0), index);
                    by_group_side.insert((b.0, a.0), index);
                    beginning_with[a.0].push(index);
                }
            }
        }
        InterfaceEdgeIndex {
            edges,
            by_poly_side,
            by_group_side,
            beginning_with,
        }
    }

    /// Edge whose polygon-side traversal runs `first -> last`.
    /// `None` iff the letters are in different groups.
    pub fn from_poly_side(&self, first: LetterId, last: LetterId) -> Option<usize> {
        self.by_poly_side.get(&(first.0, last.0)).copied()
    }

    /// Edge whose group-side traversal runs `first -> last`.
    pub fn from_group_side(&self, first: LetterId, last: LetterId) -> Option<usize> {
        self.by_group_side.get(&(first.0, last.0)).copied()
    }

    /// Edges whose polygon-side first endpoint is the given letter,
    /// in index order.
    pub fn beginning_with(&self, letter: LetterId) -> &[usize] {
        &self.beginning_with[letter.0]
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge(&self, index: usize) -> InterfaceEdge {
        self.edges[index]
    }

    pub fn edges(&self) -> &[InterfaceEdge] {
        &self.edges
    }
}
