//! Free products of cyclic groups.
//!
//! Purpose
//! - Parse generator strings like `a5b0` (here `Z/5Z * Z`) into a
//!   `CyclicProduct` and answer order/index queries for letters.
//! - Cyclically reduce words against the group relations.
//!
//! Conventions
//! - Lowercase letters are generators, uppercase their inverses.
//! - Order `0` means an infinite cyclic factor.

use std::fmt;

use crate::error::SclError;

/// A free product of cyclic groups, one factor per generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclicProduct {
    gens: Vec<char>,
    orders: Vec<u32>,
}

impl CyclicProduct {
    /// Parse a generator string: one lowercase letter followed by its
    /// order (possibly multi-digit), repeated. `a0b0` is the free group
    /// of rank 2, `a5b0` is `Z/5Z * Z`.
    pub fn parse(input: &str) -> Result<Self, SclError> {
        let mut gens = Vec::new();
        let mut orders = Vec::new();
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if !c.is_ascii_lowercase() {
                return Err(SclError::GeneratorParse(input.to_string()));
            }
            if gens.contains(&c) {
                return Err(SclError::DuplicateGenerator(c));
            }
            let mut digits = String::new();
            while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                digits.push(*d);
                chars.next();
            }
            let order: u32 = digits
                .parse()
                .map_err(|_| SclError::GeneratorParse(input.to_string()))?;
            gens.push(c);
            orders.push(order);
        }
        if gens.is_empty() {
            return Err(SclError::GeneratorParse(input.to_string()));
        }
        Ok(CyclicProduct { gens, orders })
    }

    pub fn num_groups(&self) -> usize {
        self.gens.len()
    }

    pub fn symbol(&self, group: usize) -> char {
        self.gens[group]
    }

    /// Order of the factor; 0 means infinite cyclic.
    pub fn order(&self, group: usize) -> u32 {
        self.orders[group]
    }

    /// Factor index for a letter (case-insensitive), or None if the
    /// letter is not a declared generator.
    pub fn gen_index(&self, letter: char) -> Option<usize> {
        let base = letter.to_ascii_lowercase();
        self.gens.iter().position(|&g| g == base)
    }

    /// Order of a letter's factor (case-insensitive).
    pub fn gen_order(&self, letter: char) -> Option<u32> {
        self.gen_index(letter).map(|i| self.orders[i])
    }

    /// Cyclic reduction: repeatedly cancel cyclically-adjacent inverse
    /// pairs and strip runs whose length is a nonzero multiple of a
    /// finite factor's order, until a fixpoint.
    ///
    /// Letters must already be validated against the alphabet.
    pub fn cyc_red(&self, word: &str) -> String {
        let mut w: Vec<char> = word.chars().collect();
        loop {
            let before = w.len();
            cancel_inverse_pairs(&mut w);
            self.strip_order_runs(&mut w);
            if w.len() == before {
                return w.into_iter().collect();
            }
        }
    }

    /// Remove maximal runs of a single letter whose length is a multiple
    /// of that letter's (finite) order. Runs are cyclic: a run may wrap
    /// around the end of the word.
    fn strip_order_runs(&self, w: &mut Vec<char>) {
        if w.is_empty() {
            return;
        }
        // Uniform word: one cyclic run of length len().
        if w.iter().all(|&c| c == w[0]) {
            if let Some(p) = self.gen_order(w[0]) {
                if p > 0 && w.len() as u32 % p == 0 {
                    w.clear();
                }
            }
            return;
        }
        // Rotate a copy so position 0 starts a run (cyclic runs may wrap),
        // then scan linear runs. Only commit if something was stripped.
        let boundary = (0..w.len())
            .find(|&i| w[(i + w.len() - 1) % w.len()] != w[i])
            .unwrap_or(0);
        let mut rot = w.clone();
        rot.rotate_left(boundary);
        let mut out: Vec<char> = Vec::with_capacity(rot.len());
        let mut i = 0;
        while i < rot.len() {
            let mut j = i + 1;
            while j < rot.len() && rot[j] == rot[i] {
                j += 1;
            }
            let run = (j - i) as u32;
            let keep = match self.gen_order(rot[i]) {
                Some(p) if p > 0 => run % p != 0,
                _ => true,
            };
            if keep {
                out.extend(std::iter::repeat(rot[i]).take(j - i));
            }
            i = j;
        }
        if out.len() < w.len() {
            *w = out;
        }
    }
}

/// Cancel cyclically-adjacent `xX`/`Xx` pairs until none remain.
fn cancel_inverse_pairs(w: &mut Vec<char>) {
    loop {
        let n = w.len();
        if n < 2 {
            return;
        }
        let hit = (0..n).find(|&i| {
            let a = w[i];
            let b = w[(i + 1) % n];
            a != b && a.eq_ignore_ascii_case(&b)
        });
        match hit {
            Some(i) if i + 1 < n => {
                w.drain(i..=i + 1);
            }
            Some(_) => {
                // Wrapping pair: last and first.
                w.pop();
                w.remove(0);
            }
            None => return,
        }
    }
}

/// Formal inverse of a word: reverse the letters and swap case.
pub fn inverse_word(word: &str) -> String {
    word.chars()
        .rev()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

impl fmt::Display for CyclicProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (g, p) in self.gens.iter().zip(&self.orders) {
            write!(f, "{g}{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_orders() {
        let g = CyclicProduct::parse("a5b0c12").unwrap();
        assert_eq!(g.num_groups(), 3);
        assert_eq!(g.gen_order('a'), Some(5));
        assert_eq!(g.gen_order('B'), Some(0));
        assert_eq!(g.gen_order('c'), Some(12));
        assert_eq!(g.gen_index('C'), Some(2));
        assert_eq!(g.gen_order('d'), None);
    }

    #[test]
    fn rejects_bad_strings() {
        assert!(matches!(
            CyclicProduct::parse("aab0"),
            Err(SclError::DuplicateGenerator('a'))
        ));
        assert!(matches!(
            CyclicProduct::parse("a"),
            Err(SclError::GeneratorParse(_))
        ));
        assert!(matches!(
            CyclicProduct::parse(""),
            Err(SclError::GeneratorParse(_))
        ));
        assert!(matches!(
            CyclicProduct::parse("A0"),
            Err(SclError::GeneratorParse(_))
        ));
    }

    #[test]
    fn reduces_inverse_pairs() {
        let g = CyclicProduct::parse("a0b0").unwrap();
        assert_eq!(g.cyc_red("abBA"), "");
        assert_eq!(g.cyc_red("abAB"), "abAB");
        // Cyclic cancellation across the wrap.
        assert_eq!(g.cyc_red("baB"), "a");
    }

    #[test]
    fn strips_finite_order_runs() {
        let g = CyclicProduct::parse("a2b3").unwrap();
        assert_eq!(g.cyc_red("aab"), "b");
        assert_eq!(g.cyc_red("abbb"), "a");
        assert_eq!(g.cyc_red("aaa"), "aaa"); // 3 is not a multiple of 2
        assert_eq!(g.cyc_red("aa"), "");
        // Runs wrapping around the end of the word.
        assert_eq!(g.cyc_red("aba"), "b"); // cyclically b a^2
        assert_eq!(g.cyc_red("abbba"), ""); // cyclically a^2 b^3
        assert_eq!(g.cyc_red("bbabb"), "bbabb"); // cyclic run b^4, not a multiple of 3
    }

    #[test]
    fn inverse_word_swaps_and_reverses() {
        assert_eq!(inverse_word("abAB"), "baBA");
        assert_eq!(inverse_word(""), "");
    }
}
