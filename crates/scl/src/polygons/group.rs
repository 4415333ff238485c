//! Group-side piece enumeration.
//!
//! Rectangles pair each regular occurrence with each inverse occurrence
//! of a generator. Group polygons exist only in finite factors: a side
//! is a multiarc of `order - 1` same-sign occurrences (a multiset, with
//! repetition), and a polygon is either one side closed through one
//! junction edge or two sides joined through two.

use crate::chain::{Chain, LetterId};
use crate::edges::{GroupEdgeIndex, InterfaceEdgeIndex};

use super::types::{GroupPolygon, GroupRectangle, Multiarc};

/// All group-side pieces of one factor.
pub struct GroupPieces {
    pub group: usize,
    pub rectangles: Vec<GroupRectangle>,
    pub polygons: Vec<GroupPolygon>,
}

pub fn enumerate_group_pieces(
    chain: &Chain,
    interface: &InterfaceEdgeIndex,
    edges: &GroupEdgeIndex,
) -> GroupPieces {
    let g = edges.group;
    let mut rectangles = Vec::new();
    for &r in chain.regular_letters(g) {
        for &i in chain.inverse_letters(g) {
            let first = interface
                .from_group_side(r, i)
                .unwrap_or_else(|| panic!("missing interface edge for rectangle ({r:?}, {i:?})"));
            let last = interface
                .from_group_side(i, r)
                .unwrap_or_else(|| panic!("missing interface edge for rectangle ({i:?}, {r:?})"));
            rectangles.push(GroupRectangle {
                group: g,
                regular: r,
                inverse: i,
                first,
                last,
            });
        }
    }

    let mut polygons = Vec::new();
    let order = chain.group().order(g);
    if order >= 2 {
        for inverse in [false, true] {
            let letters = if inverse {
                chain.inverse_letters(g)
            } else {
                chain.regular_letters(g)
            };
            if letters.is_empty() {
                continue;
            }
            let arcs = multiarcs(letters, (order - 1) as usize);
            let junctions = edges.edges_for_sign(inverse);
            // Single-sided: one multiarc closed through one junction.
            for arc in &arcs {
                for &e in junctions {
                    polygons.push(GroupPolygon {
                        group: g,
                        inverse,
                        sides: vec![arc.clone()],
                        junctions: vec![e],
                    });
                }
            }
            // Double-sided: ordered side pairs joined through ordered
            // junction pairs.
            for arc0 in &arcs {
                for arc1 in &arcs {
                    for &e0 in junctions {
                        for &e1 in junctions {
                            polygons.push(GroupPolygon {
                                group: g,
                                inverse,
                                sides: vec![arc0.clone(), arc1.clone()],
                                junctions: vec![e0, e1],
                            });
                        }
                    }
                }
            }
        }
    }

    GroupPieces {
        group: g,
        rectangles,
        polygons,
    }
}

/// All multisets of `size` letters drawn from `letters`, as sorted
/// vectors. Enumerated by a nondecreasing index odometer.
pub fn multiarcs(letters: &[LetterId], size: usize) -> Vec<Multiarc> {
    let mut out = Vec::new();
    if letters.is_empty() || size == 0 {
        return out;
    }
    let mut pick = vec![0usize; size];
    loop {
        out.push(Multiarc {
            letters: pick.iter().map(|&i| letters[i]).collect(),
        });
        // Advance the rightmost position that can still grow, then
        // level everything after it.
        let mut k = size;
        loop {
            if k == 0 {
                return out;
            }
            k -= 1;
            if pick[k] + 1 < letters.len() {
                pick[k] += 1;
                for t in k + 1..size {
                    pick[t] = pick[k];
                }
                break;
            }
        }
    }
}
