//! Positional numeral system mapping messages to [`BigNatural`] values.
//!
//! The first character of a message is the least significant digit. The empty
//! message is 0 and every other message is its base-A value plus one.
//!
//! Trailing copies of the zero-index symbol do not change the value, so
//! `"A"` and `"AA"` both encode to 1 and decode yields the shorter form.
//! Packs already written with this scheme depend on that behaviour.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::bignat::BigNatural;
use crate::error::{Error, Result};
use crate::validate::CAPACITY;

/// Default symbol set, in index order.
pub const REFERENCE_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,<>£$#\"! ";

static REFERENCE: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::from_unique(REFERENCE_SYMBOLS));

/// Ordered set of distinct symbols with a symbol ↔ index bijection.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u32>,
    /// Longest run of significant symbols whose value can still be a pack index.
    max_significant: usize,
}

impl Alphabet {
    /// Build an alphabet from its symbols in index order.
    pub fn new(symbols: &str) -> Result<Self> {
        let count = symbols.chars().count();
        if count < 2 {
            return Err(Error::InvalidAlphabet(format!(
                "need at least 2 symbols, got {}",
                count
            )));
        }
        let mut seen = HashMap::new();
        for (pos, ch) in symbols.chars().enumerate() {
            if let Some(first) = seen.insert(ch, pos) {
                return Err(Error::InvalidAlphabet(format!(
                    "symbol '{}' repeated at positions {} and {}",
                    ch, first, pos
                )));
            }
        }
        Ok(Self::from_unique(symbols))
    }

    /// The process-wide default alphabet.
    pub fn reference() -> &'static Alphabet {
        &REFERENCE
    }

    fn from_unique(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, i as u32))
            .collect();
        let max_significant = max_significant(symbols.len() as u32);
        Self {
            symbols,
            index,
            max_significant,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, ch: char) -> Option<u32> {
        self.index.get(&ch).copied()
    }

    fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Fails with [`Error::OutOfRange`] without doing the arithmetic when the
    /// message is too long to be the index of any pack.
    pub fn encode(&self, message: &str) -> Result<BigNatural> {
        if message.is_empty() {
            return Ok(BigNatural::zero());
        }
        let digits = message
            .chars()
            .map(|ch| self.index_of(ch).ok_or(Error::InvalidCharacter(ch, ch as u32)))
            .collect::<Result<Vec<u32>>>()?;
        // trailing zero digits do not change the value
        let significant = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
        if significant > self.max_significant {
            return Err(Error::OutOfRange);
        }
        let value = digits[..significant]
            .iter()
            .rev()
            .fold(BigNatural::zero(), |acc, &d| acc.mul_small(self.radix()).add_small(d));
        Ok(value.add_small(1))
    }

    pub fn decode(&self, n: &BigNatural) -> String {
        if n.is_zero() {
            return String::new();
        }
        let mut rest = n.decrement();
        let mut message = String::new();
        loop {
            let (quotient, digit) = rest.div_rem_nonzero(self.radix());
            message.push(self.symbols[digit as usize]);
            rest = quotient;
            if rest.is_zero() {
                break;
            }
        }
        message
    }
}

/// Largest `L` with `radix^(L-1) < 52!`. Any message with more significant
/// symbols has a value of at least `radix^(L-1)`.
fn max_significant(radix: u32) -> usize {
    let mut count = 0;
    let mut power = BigNatural::from_small(1);
    while power.compare_less(&CAPACITY) {
        count += 1;
        power = power.mul_small(radix);
    }
    count
}
