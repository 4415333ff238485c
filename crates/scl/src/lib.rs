//! Stable commutator length in free products of cyclic groups.
//!
//! Purpose
//! - Compute scl of an integral chain of cyclic words over a free
//!   product of cyclic groups, by enumerating the polygon pieces an
//!   admissible surface decomposes into and minimizing `-2 chi` over
//!   their admissible gluings as a linear program.
//!
//! Pipeline
//! - `group`: the group and cyclic reduction of words.
//! - `chain`: weighted words and the global letter table.
//! - `edges`: central, interface, and group edge catalogues.
//! - `polygons`: the piece catalogue built over the edges.
//! - `lp`: constraint assembly and the two solver backends; the scl
//!   value is the optimum divided by 4.

pub mod chain;
pub mod edges;
pub mod error;
pub mod group;
pub mod lp;
pub mod polygons;

pub mod prelude {
    pub use crate::chain::{Chain, ChainLetter, LetterId};
    pub use crate::error::SclError;
    pub use crate::group::CyclicProduct;
    pub use crate::lp::{stable_commutator_length, SclResult, SolverKind};
    pub use crate::polygons::Catalogue;
}

pub use crate::lp::stable_commutator_length;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
