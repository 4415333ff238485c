//! Integral chains of cyclic words.
//!
//! Purpose
//! - Parse weighted words (`3abAB`, `-2ab`, `ab`) against a
//!   `CyclicProduct`, cyclically reduce them, and build the global
//!   letter table the edge and polygon catalogues are indexed by.
//!
//! Conventions
//! - Letters are numbered globally across all words, in input order.
//! - `next_letter`/`prev_letter` wrap within a letter's own word.
//! - Negative weights are normalized away at parse time: `-w W`
//!   becomes `w W^-1` (scl is invariant under inversion).

use std::fmt;

use crate::error::SclError;
use crate::group::{inverse_word, CyclicProduct};

/// Index into the global letter table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterId(pub usize);

/// One occurrence of a generator or inverse in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainLetter {
    /// Which word this occurrence belongs to.
    pub word: usize,
    /// Position within that word.
    pub index: usize,
    /// The letter itself (case carries the sign).
    pub letter: char,
    /// Factor group of the letter.
    pub group: usize,
}

impl ChainLetter {
    #[inline]
    pub fn is_inverse(&self) -> bool {
        self.letter.is_ascii_uppercase()
    }
}

/// A formal nonnegative-integer combination of cyclically reduced words.
#[derive(Clone, Debug)]
pub struct Chain {
    group: CyclicProduct,
    words: Vec<String>,
    weights: Vec<i32>,
    letters: Vec<ChainLetter>,
    word_start: Vec<usize>,
    regular_letters: Vec<Vec<LetterId>>,
    inverse_letters: Vec<Vec<LetterId>>,
}

impl Chain {
    /// Parse chain tokens. Each token is an optional signed integer
    /// weight followed by a word; a missing weight means 1.
    pub fn new(group: CyclicProduct, tokens: &[String]) -> Result<Self, SclError> {
        let mut words = Vec::new();
        let mut weights = Vec::new();
        for tok in tokens {
            let (weight, raw) = split_token(tok)?;
            for letter in raw.chars() {
                if !letter.is_ascii_alphabetic() || group.gen_index(letter).is_none() {
                    return Err(SclError::UndeclaredLetter {
                        word: raw.to_string(),
                        letter,
                    });
                }
            }
            let reduced = group.cyc_red(raw);
            if reduced.is_empty() {
                return Err(SclError::EmptyWord(raw.to_string()));
            }
            if weight < 0 {
                words.push(group.cyc_red(&inverse_word(&reduced)));
                weights.push(-weight);
            } else {
                words.push(reduced);
                weights.push(weight);
            }
        }

        let mut letters = Vec::new();
        let mut word_start = Vec::new();
        let mut regular_letters = vec![Vec::new(); group.num_groups()];
        let mut inverse_letters = vec![Vec::new(); group.num_groups()];
        for (w, word) in words.iter().enumerate() {
            word_start.push(letters.len());
            for (i, letter) in word.chars().enumerate() {
                let g = group
                    .gen_index(letter)
                    .unwrap_or_else(|| panic!("letter '{letter}' validated above"));
                let id = LetterId(letters.len());
                letters.push(ChainLetter {
                    word: w,
                    index: i,
                    letter,
                    group: g,
                });
                if letter.is_ascii_uppercase() {
                    inverse_letters[g].push(id);
                } else {
                    regular_letters[g].push(id);
                }
            }
        }

        Ok(Chain {
            group,
            words,
            weights,
            letters,
            word_start,
            regular_letters,
            inverse_letters,
        })
    }

    pub fn group(&self) -> &CyclicProduct {
        &self.group
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub fn word(&self, w: usize) -> &str {
        &self.words[w]
    }

    pub fn weight(&self, w: usize) -> i32 {
        self.weights[w]
    }

    pub fn num_letters(&self) -> usize {
        self.letters.len()
    }

    pub fn letters(&self) -> &[ChainLetter] {
        &self.letters
    }

    pub fn letter(&self, id: LetterId) -> &ChainLetter {
        &self.letters[id.0]
    }

    /// Weight of the word the letter occurs in.
    pub fn letter_weight(&self, id: LetterId) -> i32 {
        self.weights[self.letters[id.0].word]
    }

    /// The cyclically next letter within the same word.
    pub fn next_letter(&self, id: LetterId) -> LetterId {
        let l = &self.letters[id.0];
        let start = self.word_start[l.word];
        let len = self.words[l.word].len();
        LetterId(start + (l.index + 1) % len)
    }

    /// The cyclically previous letter within the same word.
    pub fn prev_letter(&self, id: LetterId) -> LetterId {
        let l = &self.letters[id.0];
        let start = self.word_start[l.word];
        let len = self.words[l.word].len();
        LetterId(start + (l.index + len - 1) % len)
    }

    /// Regular (lowercase) occurrences in the given factor, in letter order.
    pub fn regular_letters(&self, group: usize) -> &[LetterId] {
        &self.regular_letters[group]
    }

    /// Inverse (uppercase) occurrences in the given factor, in letter order.
    pub fn inverse_letters(&self, group: usize) -> &[LetterId] {
        &self.inverse_letters[group]
    }

    /// All occurrences in the given factor, in letter order.
    pub fn group_letters(&self, group: usize) -> Vec<LetterId> {
        let mut ids: Vec<LetterId> = self.regular_letters[group]
            .iter()
            .chain(&self.inverse_letters[group])
            .copied()
            .collect();
        ids.sort();
        ids
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (word, weight)) in self.words.iter().zip(&self.weights).enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if *weight != 1 {
                write!(f, "{weight}")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Split a chain token into (weight, word). The weight is an optional
/// leading `-` and digits; the remainder must be nonempty.
fn split_token(tok: &str) -> Result<(i32, &str), SclError> {
    let body = tok.strip_prefix('-');
    let negative = body.is_some();
    let body = body.unwrap_or(tok);
    let digits_end = body
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    let word = &body[digits_end..];
    if word.is_empty() {
        return Err(SclError::ChainParse(tok.to_string()));
    }
    let mut weight: i32 = if digits_end == 0 {
        1
    } else {
        body[..digits_end]
            .parse()
            .map_err(|_| SclError::ChainParse(tok.to_string()))?
    };
    if weight == 0 {
        return Err(SclError::ChainParse(tok.to_string()));
    }
    if negative {
        weight = -weight;
    }
    Ok((weight, word))
}
