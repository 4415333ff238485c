//! LP backend contract.
//!
//! One narrow capability: solve the assembled equality-form program.
//! Two implementations exist, an exact rational simplex (the default
//! and the certificate) and a floating solver behind `good_lp` whose
//! value is rationalized after the fact.

use num_rational::BigRational;

use crate::error::SclError;

use super::assemble::SparseLp;
use super::float::FloatSimplexBackend;
use super::simplex;

#[derive(Clone, Debug, PartialEq)]
pub enum LpOutcome {
    Optimal {
        value: BigRational,
        solution: Vec<BigRational>,
    },
    Infeasible,
    Unbounded,
}

pub trait LpBackend {
    fn solve(&self, lp: &SparseLp) -> Result<LpOutcome, SclError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolverKind {
    /// Built-in dense two-phase simplex over `BigRational`.
    #[default]
    ExactRational,
    /// `good_lp` with the microlp solver; approximate.
    FloatSimplex,
}

impl SolverKind {
    pub fn backend(self) -> Box<dyn LpBackend> {
        match self {
            SolverKind::ExactRational => Box::new(ExactRationalBackend),
            SolverKind::FloatSimplex => Box::new(FloatSimplexBackend),
        }
    }
}

pub struct ExactRationalBackend;

impl LpBackend for ExactRationalBackend {
    fn solve(&self, lp: &SparseLp) -> Result<LpOutcome, SclError> {
        Ok(simplex::solve_exact(lp))
    }
}
