//! Linear programming over the polygon catalogue.
//!
//! Purpose
//! - Assemble the gluing/coverage program for a chain's catalogue and
//!   solve it: the optimum is `-2 chi` over admissible assemblies of
//!   one weighted copy of the chain, and `scl = optimum / 4`.

mod assemble;
mod backend;
mod float;
mod simplex;

pub use assemble::{assemble, SparseLp};
pub use backend::{ExactRationalBackend, LpBackend, LpOutcome, SolverKind};
pub use float::{rationalize, FloatSimplexBackend};

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::chain::Chain;
use crate::error::SclError;
use crate::polygons::Catalogue;

/// The solved value together with the certificate assignment over the
/// catalogue's columns.
#[derive(Clone, Debug)]
pub struct SclResult {
    pub value: BigRational,
    pub solution: Vec<BigRational>,
}

/// Solve an already-assembled program.
pub fn solve_assembled(lp: &SparseLp, kind: SolverKind) -> Result<SclResult, SclError> {
    match kind.backend().solve(lp)? {
        LpOutcome::Optimal { value, solution } => Ok(SclResult {
            value: value / BigRational::from(BigInt::from(4)),
            solution,
        }),
        LpOutcome::Infeasible => Err(SclError::Infeasible),
        LpOutcome::Unbounded => Err(SclError::Unbounded),
    }
}

/// Stable commutator length of a chain: enumerate, assemble, solve.
pub fn stable_commutator_length(chain: &Chain, kind: SolverKind) -> Result<SclResult, SclError> {
    let catalogue = Catalogue::build(chain);
    let lp = assemble(chain, &catalogue);
    solve_assembled(&lp, kind)
}
