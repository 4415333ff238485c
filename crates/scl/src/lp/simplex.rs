//! Exact two-phase simplex over `BigRational`.
//!
//! Purpose
//! - Solve the assembled equality-form program exactly, so the reported
//!   value is a certificate rather than a floating approximation.
//!
//! Scope
//! - Special-purpose for this family: `min c'x, Ax = b, x >= 0` with a
//!   dense tableau, Bland's rule (no cycling), artificial variables in
//!   phase one. Not a general LP solver.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::assemble::SparseLp;
use super::backend::LpOutcome;

pub fn solve_exact(lp: &SparseLp) -> LpOutcome {
    let m = lp.rows;
    let n = lp.cols;
    let rat = |v: i64| BigRational::from(BigInt::from(v));

    // Dense A and b, with rows flipped so b >= 0.
    let mut a = vec![vec![BigRational::zero(); n]; m];
    let mut b: Vec<BigRational> = lp.rhs.iter().map(|&v| rat(v)).collect();
    for &(r, c, v) in &lp.entries {
        a[r][c] += rat(v);
    }
    for r in 0..m {
        if b[r].is_negative() {
            let flipped = -b[r].clone();
            b[r] = flipped;
            for c in 0..n {
                let flipped = -a[r][c].clone();
                a[r][c] = flipped;
            }
        }
    }

    // Tableau columns: n structural + m artificial, then rhs. The
    // artificial for row r starts basic.
    let total = n + m;
    let mut t: Vec<Vec<BigRational>> = (0..m)
        .map(|r| {
            let mut row = Vec::with_capacity(total + 1);
            row.extend(a[r].iter().cloned());
            for k in 0..m {
                row.push(if k == r {
                    BigRational::one()
                } else {
                    BigRational::zero()
                });
            }
            row.push(b[r].clone());
            row
        })
        .collect();
    let mut basis: Vec<usize> = (n..total).collect();

    // Phase one: minimize the sum of artificials. Reduced costs of the
    // phase-one objective after pricing out the artificial basis.
    let mut cost = vec![BigRational::zero(); total + 1];
    for r in 0..m {
        for c in 0..=total {
            cost[c] -= &t[r][c];
        }
    }
    for k in n..total {
        cost[k] = BigRational::zero();
    }
    if !iterate(&mut t, &mut basis, &mut cost, total) {
        // Phase one cannot be unbounded: the objective is bounded by 0.
        unreachable!("phase one reported unbounded");
    }
    if !cost[total].is_zero() {
        return LpOutcome::Infeasible;
    }

    // Drive leftover basic artificials out where possible; rows where
    // no structural pivot exists are redundant and harmless as long as
    // artificials never re-enter (entering is restricted to j < n).
    for r in 0..m {
        if basis[r] >= n {
            if let Some(j) = (0..n).find(|&j| !t[r][j].is_zero()) {
                pivot(&mut t, &mut basis, &mut cost, r, j, total);
            }
        }
    }

    // Phase two: reduced costs of the true objective against the
    // current basis.
    let c_of = |j: usize| -> BigRational {
        if j < n {
            BigRational::from(BigInt::from(lp.objective[j]))
        } else {
            BigRational::zero()
        }
    };
    let mut cost = vec![BigRational::zero(); total + 1];
    for (j, slot) in cost.iter_mut().enumerate().take(n) {
        *slot = c_of(j);
    }
    for r in 0..m {
        let cb = c_of(basis[r]);
        if cb.is_zero() {
            continue;
        }
        for c in 0..=total {
            let delta = &cb * &t[r][c];
            cost[c] -= delta;
        }
    }
    for &bv in basis.iter() {
        debug_assert!(bv >= n || cost[bv].is_zero(), "basic reduced cost nonzero");
    }
    if !iterate(&mut t, &mut basis, &mut cost, n) {
        return LpOutcome::Unbounded;
    }

    let mut x = vec![BigRational::zero(); n];
    for r in 0..m {
        if basis[r] < n {
            x[basis[r]] = t[r][total].clone();
        }
    }
    let value = -cost[total].clone();
    LpOutcome::Optimal { value, solution: x }
}

/// Run simplex iterations with Bland's rule; entering variables are
/// restricted to indices below `enter_limit`. Returns false when an
/// entering column has no positive pivot entry (unbounded).
fn iterate(
    t: &mut [Vec<BigRational>],
    basis: &mut [usize],
    cost: &mut [BigRational],
    enter_limit: usize,
) -> bool {
    let m = t.len();
    let total = cost.len() - 1;
    loop {
        // Bland: smallest index with negative reduced cost.
        let Some(enter) = (0..enter_limit).find(|&j| cost[j].is_negative()) else {
            return true;
        };
        // Ratio test; Bland tie-break on the basic variable index.
        let mut leave: Option<(usize, BigRational)> = None;
        for r in 0..m {
            if !t[r][enter].is_positive() {
                continue;
            }
            let ratio = &t[r][total] / &t[r][enter];
            let better = match &leave {
                None => true,
                Some((lr, lratio)) => {
                    ratio < *lratio || (ratio == *lratio && basis[r] < basis[*lr])
                }
            };
            if better {
                leave = Some((r, ratio));
            }
        }
        let Some((row, _)) = leave else {
            return false;
        };
        pivot(t, basis, cost, row, enter, total);
    }
}

/// Pivot on (row, col): normalize the pivot row, eliminate the column
/// from all other rows and the cost row.
fn pivot(
    t: &mut [Vec<BigRational>],
    basis: &mut [usize],
    cost: &mut [BigRational],
    row: usize,
    col: usize,
    total: usize,
) {
    let p = t[row][col].clone();
    debug_assert!(!p.is_zero(), "pivot on zero entry");
    for c in 0..=total {
        let scaled = &t[row][c] / &p;
        t[row][c] = scaled;
    }
    for r in 0..t.len() {
        if r == row || t[r][col].is_zero() {
            continue;
        }
        let f = t[r][col].clone();
        for c in 0..=total {
            let delta = &f * &t[row][c];
            t[r][c] -= delta;
        }
    }
    if !cost[col].is_zero() {
        let f = cost[col].clone();
        for c in 0..=total {
            let delta = &f * &t[row][c];
            cost[c] -= delta;
        }
    }
    basis[row] = col;
}
