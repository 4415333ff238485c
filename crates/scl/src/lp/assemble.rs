//! Constraint assembly.
//!
//! Turns a catalogue into the equality-form program
//!
//!   minimize  sum(-chi_times_2(piece) * x_piece),  x >= 0
//!
//! with one gluing row per central edge, interface edge, and group-edge
//! pair, and one coverage row per chain letter pinning one weighted
//! copy of the chain. Missing lookups during assembly are defects and
//! panic; the catalogue guarantees they resolve.

use std::collections::{BTreeMap, HashMap};

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::chain::{Chain, LetterId};
use crate::edges::Orientation;
use crate::polygons::{Catalogue, CentralSide};

/// Sparse equality-form program with integer data. Entries are sorted
/// by (row, col) and duplicate positions are pre-accumulated.
#[derive(Clone, Debug)]
pub struct SparseLp {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<(usize, usize, i64)>,
    pub rhs: Vec<i64>,
    pub objective: Vec<i64>,
}

impl SparseLp {
    /// Exact row residuals `Ax - b` for a candidate assignment. Used to
    /// audit solutions.
    pub fn residuals(&self, x: &[BigRational]) -> Vec<BigRational> {
        assert_eq!(x.len(), self.cols, "assignment length mismatch");
        let mut res: Vec<BigRational> = self
            .rhs
            .iter()
            .map(|&b| BigRational::from(BigInt::from(-b)))
            .collect();
        for &(r, c, v) in &self.entries {
            res[r] += BigRational::from(BigInt::from(v)) * &x[c];
        }
        res
    }

    /// Exact objective value of an assignment.
    pub fn objective_value(&self, x: &[BigRational]) -> BigRational {
        self.objective
            .iter()
            .zip(x)
            .map(|(&c, xi)| BigRational::from(BigInt::from(c)) * xi)
            .sum()
    }
}

struct RowLayout {
    /// (row, +1/-1) per ordered group-edge key.
    group_pair_rows: HashMap<(usize, usize), (usize, i64)>,
    central_base: usize,
    interface_base: usize,
    letter_base: usize,
    rows: usize,
}

fn layout_rows(chain: &Chain, catalogue: &Catalogue) -> RowLayout {
    let central_base = 0;
    let interface_base = central_base + catalogue.central_edges.len();
    let group_base = interface_base + catalogue.interface_edges.len();

    // One row per physical group edge {(a,b),(b,a)} with a != b;
    // self-paired edges glue to themselves and impose nothing.
    let mut group_pair_rows = HashMap::new();
    let mut next = group_base;
    for ge in &catalogue.group_edges {
        for edges in [ge.regular_edges(), ge.inverse_edges()] {
            for e in edges {
                if e.first < e.last {
                    group_pair_rows.insert((e.first.0, e.last.0), (next, 1));
                    group_pair_rows.insert((e.last.0, e.first.0), (next, -1));
                    next += 1;
                }
            }
        }
    }

    let letter_base = next;
    RowLayout {
        group_pair_rows,
        central_base,
        interface_base,
        letter_base,
        rows: letter_base + chain.num_letters(),
    }
}

pub fn assemble(chain: &Chain, catalogue: &Catalogue) -> SparseLp {
    let layout = layout_rows(chain, catalogue);
    let mut entries: BTreeMap<(usize, usize), i64> = BTreeMap::new();
    let mut objective = Vec::with_capacity(catalogue.num_pieces());
    let mut col = 0usize;

    let mut add = |entries: &mut BTreeMap<(usize, usize), i64>, row: usize, col: usize, v: i64| {
        assert!(row < layout.rows, "row {row} out of range");
        *entries.entry((row, col)).or_insert(0) += v;
    };

    // Central polygons: +1 on each interface row (polygon side), signed
    // +-1 on each central row.
    for poly in &catalogue.central_polygons {
        for side in &poly.sides {
            match side {
                CentralSide::Interface(e) => {
                    add(&mut entries, layout.interface_base + e, col, 1);
                }
                CentralSide::Central(c) => {
                    let sign = match c.orientation {
                        Orientation::Forward => 1,
                        Orientation::Reverse => -1,
                    };
                    add(&mut entries, layout.central_base + c.index, col, sign);
                }
            }
        }
        objective.push(-i64::from(poly.chi_times_2()));
        col += 1;
    }

    let letter_row = |id: LetterId| layout.letter_base + id.0;

    // Rectangles: -1 on both interface rows (group side), +1 coverage
    // for both occurrences.
    for gp in &catalogue.group_pieces {
        for rect in &gp.rectangles {
            add(&mut entries, layout.interface_base + rect.first, col, -1);
            add(&mut entries, layout.interface_base + rect.last, col, -1);
            add(&mut entries, letter_row(rect.regular), col, 1);
            add(&mut entries, letter_row(rect.inverse), col, 1);
            objective.push(-i64::from(rect.chi_times_2()));
            col += 1;
        }
    }

    // Group polygons: -1 per group-side interface transition, signed
    // +-1 per non-self-paired junction edge, +1 coverage per stop.
    for gp in &catalogue.group_pieces {
        for poly in &gp.polygons {
            for (f, l) in poly.interface_transitions() {
                let e = catalogue
                    .interface_edges
                    .from_group_side(f, l)
                    .unwrap_or_else(|| {
                        panic!("missing group-side interface edge ({f:?}, {l:?})")
                    });
                add(&mut entries, layout.interface_base + e, col, -1);
            }
            for j in &poly.junctions {
                if let Some(&(row, sign)) = layout.group_pair_rows.get(&(j.first.0, j.last.0)) {
                    add(&mut entries, row, col, sign);
                }
                // Self-paired (a, a) junctions have no row.
            }
            for side in &poly.sides {
                for &stop in &side.letters {
                    add(&mut entries, letter_row(stop), col, 1);
                }
            }
            objective.push(-i64::from(poly.chi_times_2()));
            col += 1;
        }
    }

    let mut rhs = vec![0i64; layout.rows];
    for (i, _) in chain.letters().iter().enumerate() {
        rhs[layout.letter_base + i] = i64::from(chain.letter_weight(LetterId(i)));
    }

    SparseLp {
        rows: layout.rows,
        cols: col,
        entries: entries.into_iter().map(|((r, c), v)| (r, c, v)).collect(),
        rhs,
        objective,
    }
}
