//! Central polygon enumeration.
//!
//! Purpose
//! - Enumerate the closed polygons of the central region, in three
//!   classes by how many central sides they are built around:
//!   - one pair of interface edges joined by two forced central sides,
//!   - a chain of three interface edges closed by a central edge,
//!   - four interface edges closing on their own.
//!
//! A forced central lookup is absent exactly when the two transitions
//! of its dual pair coincide; that side has zero length and is omitted
//! from the emitted polygon, so the first two classes also produce
//! 3-gons and bigons.
//!
//! Each polygon is emitted in exactly one rotation. The chain searches
//! run a `ChainSearch` with an explicit frame stack, one frame per
//! interface side being chosen.

use crate::chain::{Chain, LetterId};
use crate::edges::{CentralEdgeIndex, InterfaceEdgeIndex};

use super::types::{CentralPolygon, CentralSide};

pub fn enumerate_central_polygons(
    chain: &Chain,
    interface: &InterfaceEdgeIndex,
    central: &CentralEdgeIndex,
) -> Vec<CentralPolygon> {
    let mut out = Vec::new();
    two_central_sides(interface, central, &mut out);
    one_central_side(chain, interface, central, &mut out);
    interface_only(chain, interface, &mut out);
    out
}

/// Rotation-canonical key of an interface edge: polygon-side first
/// letter, then edge index.
fn edge_key(interface: &InterfaceEdgeIndex, e: usize) -> (LetterId, usize) {
    (interface.edge(e).first, e)
}

/// Class built around two forced central sides: `[i, c1, j, c2]` for
/// interface edges `i, j`. Every pair is emitted; a degenerate forced
/// key means that central side has zero length and is left out, giving
/// a 3-gon (one degenerate) or a bigon (both). Rotating by two sides
/// swaps `i` and `j`, so only ordered pairs with `key(i) <= key(j)`
/// are generated.
fn two_central_sides(
    interface: &InterfaceEdgeIndex,
    central: &CentralEdgeIndex,
    out: &mut Vec<CentralPolygon>,
) {
    for i in 0..interface.len() {
        for j in 0..interface.len() {
            if edge_key(interface, i) > edge_key(interface, j) {
                continue;
            }
            let ei = interface.edge(i);
            let ej = interface.edge(j);
            let mut sides = Vec::with_capacity(4);
            sides.push(CentralSide::Interface(i));
            if let Some(c1) = central.lookup(ei.last, ej.first) {
                sides.push(CentralSide::Central(c1));
            }
            sides.push(CentralSide::Interface(j));
            if let Some(c2) = central.lookup(ej.last, ei.first) {
                sides.push(CentralSide::Central(c2));
            }
            out.push(CentralPolygon { sides });
        }
    }
}

/// Backtracking search over chains of interface edges. Each frame picks
/// the next edge from those beginning with the running letter; after an
/// edge `(f, l)` the running letter is `next(l)`.
struct ChainSearch<'a> {
    chain: &'a Chain,
    interface: &'a InterfaceEdgeIndex,
    start: LetterId,
    frames: Vec<Frame>,
    picked: Vec<usize>,
}

struct Frame {
    beginning: LetterId,
    position: usize,
}

impl<'a> ChainSearch<'a> {
    fn new(chain: &'a Chain, interface: &'a InterfaceEdgeIndex, start: LetterId) -> Self {
        ChainSearch {
            chain,
            interface,
            start,
            frames: vec![Frame {
                beginning: start,
                position: 0,
            }],
            picked: Vec::new(),
        }
    }

    /// Run to exhaustion, calling `emit` for every complete chain of
    /// `depth` edges. With `monotone`, a frame only opens when its
    /// beginning letter is not below the start letter.
    fn run(&mut self, depth: usize, monotone: bool, mut emit: impl FnMut(&Chain, &[usize])) {
        while let Some(frame) = self.frames.last_mut() {
            let candidates = self.interface.beginning_with(frame.beginning);
            if frame.position >= candidates.len() {
                self.frames.pop();
                self.picked.pop();
                continue;
            }
            let e = candidates[frame.position];
            frame.position += 1;
            self.picked.push(e);
            if self.picked.len() == depth {
                emit(self.chain, &self.picked);
                self.picked.pop();
                continue;
            }
            let nb = self.chain.next_letter(self.interface.edge(e).last);
            if monotone && nb < self.start {
                self.picked.pop();
                continue;
            }
            self.frames.push(Frame {
                beginning: nb,
                position: 0,
            });
        }
    }
}

/// Class with one closing central side: chains of three interface
/// edges closed by the central edge from the last edge's end back to
/// the start. A present central slot fixes the rotation, so those
/// emissions are canonical as-is. A degenerate close has zero length
/// and is omitted; every transition of such a 3-gon is then adjacent,
/// so each rotation reappears as its own chain and only the minimal
/// one is kept.
fn one_central_side(
    chain: &Chain,
    interface: &InterfaceEdgeIndex,
    central: &CentralEdgeIndex,
    out: &mut Vec<CentralPolygon>,
) {
    for s in 0..chain.num_letters() {
        let start = LetterId(s);
        let mut search = ChainSearch::new(chain, interface, start);
        search.run(3, false, |_, picked| {
            let last = interface.edge(picked[2]).last;
            let first = interface.edge(picked[0]).first;
            match central.lookup(last, first) {
                Some(c) => out.push(CentralPolygon {
                    sides: vec![
                        CentralSide::Interface(picked[0]),
                        CentralSide::Interface(picked[1]),
                        CentralSide::Interface(picked[2]),
                        CentralSide::Central(c),
                    ],
                }),
                None => {
                    let walk = [picked[0], picked[1], picked[2]];
                    if is_minimal_rotation(interface, &walk) {
                        out.push(CentralPolygon {
                            sides: walk.iter().map(|&e| CentralSide::Interface(e)).collect(),
                        });
                    }
                }
            }
        });
    }
}

/// Interface-only class: chains of three interface edges whose closing
/// fourth edge exists. The monotone rule prunes rotations that dip
/// below the start letter; ties (revisits of the start letter) are
/// broken by keeping only the lexicographically minimal rotation.
fn interface_only(chain: &Chain, interface: &InterfaceEdgeIndex, out: &mut Vec<CentralPolygon>) {
    for s in 0..chain.num_letters() {
        let start = LetterId(s);
        let mut search = ChainSearch::new(chain, interface, start);
        search.run(3, true, |chain, picked| {
            let close_first = chain.next_letter(interface.edge(picked[2]).last);
            let close_last = chain.prev_letter(interface.edge(picked[0]).first);
            let Some(e4) = interface.from_poly_side(close_first, close_last) else {
                return;
            };
            let walk = [picked[0], picked[1], picked[2], e4];
            if is_minimal_rotation(interface, &walk) {
                out.push(CentralPolygon {
                    sides: walk.iter().map(|&e| CentralSide::Interface(e)).collect(),
                });
            }
        });
    }
}

/// True iff no rotation of the walk is lexicographically smaller under
/// the per-edge canonical key.
fn is_minimal_rotation(interface: &InterfaceEdgeIndex, walk: &[usize]) -> bool {
    let n = walk.len();
    let keys: Vec<_> = walk.iter().map(|&e| edge_key(interface, e)).collect();
    for r in 1..n {
        let rotated = (0..n).map(|t| &keys[(t + r) % n]);
        if rotated.lt(keys.iter()) {
            return false;
        }
    }
    true
}

/// Whether a polygon's boundary walk closes: interface-to-interface
/// steps advance by one letter, central sides jump from after one
/// letter to before another, matching the stored key. Used by tests
/// as the catalogue's structural invariant.
pub fn boundary_closes(
    chain: &Chain,
    interface: &InterfaceEdgeIndex,
    central: &CentralEdgeIndex,
    poly: &CentralPolygon,
) -> bool {
    let n = poly.sides.len();
    for t in 0..n {
        let CentralSide::Interface(e) = poly.sides[t] else {
            continue; // checked from the preceding interface side
        };
        let last = interface.edge(e).last;
        match poly.sides[(t + 1) % n] {
            CentralSide::Interface(f) => {
                if interface.edge(f).first != chain.next_letter(last) {
                    return false;
                }
            }
            CentralSide::Central(c) => {
                // The central side resolves the key (last of this edge,
                // first of the interface edge after it).
                let CentralSide::Interface(f) = poly.sides[(t + 2) % n] else {
                    return false; // adjacent central sides never close
                };
                match central.lookup(last, interface.edge(f).first) {
                    Some(r) if r == c => {}
                    _ => return false,
                }
            }
        }
    }
    true
}
