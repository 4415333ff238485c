//! Crate-wide error type.
//!
//! Input errors (bad generator strings, bad chains) are recoverable and
//! surface as `SclError`; internal catalogue inconsistencies are defects
//! and panic at the point of detection.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SclError {
    /// The generator string is not of the form `(<letter><order>)+`.
    #[error("bad generator string '{0}': expected e.g. a5b0 (a5b0 means Z/5Z * Z)")]
    GeneratorParse(String),

    /// A generator letter appears twice in the generator string.
    #[error("duplicate generator '{0}'")]
    DuplicateGenerator(char),

    /// A chain token is not `[-][weight]<word>`.
    #[error("bad chain token '{0}': expected an optional integer weight followed by a word")]
    ChainParse(String),

    /// A word uses a letter outside the declared alphabet.
    #[error("word '{word}' uses undeclared generator '{letter}'")]
    UndeclaredLetter { word: String, letter: char },

    /// A word is trivial after cyclic reduction; scl is undefined for it.
    #[error("word '{0}' cyclically reduces to the empty word")]
    EmptyWord(String),

    /// The floating LP backend failed for a reason other than
    /// infeasibility or unboundedness.
    #[error("LP backend failure: {0}")]
    Backend(String),

    /// The assembled program admits no solution. The catalogue always
    /// contains enough pieces to bound a valid chain, so this indicates
    /// an assembly defect upstream.
    #[error("no admissible surface: the assembled program is infeasible")]
    Infeasible,

    /// The assembled program is unbounded below, which the coverage rows
    /// should rule out.
    #[error("the assembled program is unbounded")]
    Unbounded,
}
