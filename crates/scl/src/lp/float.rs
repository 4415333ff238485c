//! Floating LP backend via `good_lp` (microlp solver).
//!
//! The floating optimum is rationalized by a bounded continued-fraction
//! expansion; the result is an approximation, not a certificate. The
//! exact backend is the default for that reason.

use good_lp::{
    variable, Expression, IntoAffineExpression, ProblemVariables, ResolutionError, Solution,
    SolverModel,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::SclError;

use super::assemble::SparseLp;
use super::backend::{LpBackend, LpOutcome};

pub struct FloatSimplexBackend;

impl LpBackend for FloatSimplexBackend {
    fn solve(&self, lp: &SparseLp) -> Result<LpOutcome, SclError> {
        let mut vars = ProblemVariables::new();
        let xs: Vec<_> = (0..lp.cols)
            .map(|_| vars.add(variable().min(0.0)))
            .collect();

        let objective: Expression = lp
            .objective
            .iter()
            .zip(&xs)
            .map(|(&c, &x)| (c as f64) * x)
            .sum();
        let mut model = vars.minimise(objective.clone()).using(good_lp::microlp);

        let mut rows: Vec<Expression> = (0..lp.rows).map(|_| Expression::default()).collect();
        for &(r, c, v) in &lp.entries {
            rows[r] += (v as f64) * xs[c];
        }
        for (row, &b) in rows.into_iter().zip(&lp.rhs) {
            model.add_constraint(row.eq(b as f64));
        }

        let solution = match model.solve() {
            Ok(s) => s,
            Err(ResolutionError::Infeasible) => return Ok(LpOutcome::Infeasible),
            Err(ResolutionError::Unbounded) => return Ok(LpOutcome::Unbounded),
            Err(e) => return Err(SclError::Backend(e.to_string())),
        };

        let x: Vec<BigRational> = xs
            .iter()
            .map(|&v| rationalize(solution.value(v), MAX_DENOMINATOR))
            .collect();
        let value = rationalize(objective.eval_with(&solution), MAX_DENOMINATOR);
        Ok(LpOutcome::Optimal { value, solution: x })
    }
}

/// Denominator bound for recovering rationals from floating values.
/// Extremal vertices of these programs have small denominators.
const MAX_DENOMINATOR: u64 = 1 << 20;

/// Best rational approximation with bounded denominator, by continued
/// fractions.
pub fn rationalize(x: f64, max_den: u64) -> BigRational {
    if !x.is_finite() {
        return BigRational::zero();
    }
    let negative = x < 0.0;
    let mut x = x.abs();
    // Convergents p/q of the continued fraction of x.
    let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
    for _ in 0..64 {
        let a = x.floor();
        if a > max_den as f64 {
            break;
        }
        let a_int = a as u64;
        let p2 = match a_int.checked_mul(p1).and_then(|v| v.checked_add(p0)) {
            Some(v) => v,
            None => break,
        };
        let q2 = match a_int.checked_mul(q1).and_then(|v| v.checked_add(q0)) {
            Some(v) => v,
            None => break,
        };
        if q2 > max_den {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        let frac = x - a;
        if frac < 1e-12 {
            break;
        }
        x = 1.0 / frac;
    }
    let (p, q) = if q1 == 0 { (p0, q0) } else { (p1, q1) };
    let mut r = BigRational::new(BigInt::from(p), BigInt::from(q.max(1)));
    if negative {
        r = -r;
    }
    r
}
