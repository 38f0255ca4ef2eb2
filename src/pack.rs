use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::bignat::BigNatural;
use crate::card::{Card, Spelling};
use crate::error::{Error, Result};
use crate::permutation::{DECK_SIZE, Permutation};

const GRID_ROWS: usize = 13;
const GRID_COLS: usize = DECK_SIZE / GRID_ROWS;

/// An ordered pack of cards, printable and parseable as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pack {
    permutation: Permutation,
}

impl Pack {
    pub fn new(permutation: Permutation) -> Self {
        Self { permutation }
    }

    /// The pack whose ordering has index `n`.
    pub fn from_index(n: &BigNatural) -> Result<Self> {
        Permutation::unrank(n).map(Self::new)
    }

    pub fn index(&self) -> BigNatural {
        self.permutation.rank()
    }

    /// Cards from slot 0 to slot 51.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.permutation
            .cards()
            .iter()
            .map(|&identity| Card::ALL[identity as usize])
    }

    /// All 52 tokens on one line, separated by single spaces.
    pub fn one_line(&self, spelling: Spelling) -> String {
        self.cards()
            .map(|card| card.spell(spelling))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Numbered 4×13 layout, slots running down each column.
    pub fn grid(&self) -> String {
        let cards: Vec<Card> = self.cards().collect();
        let mut out = String::new();
        for row in 0..GRID_ROWS {
            let mut line = String::from("    ");
            for col in 0..GRID_COLS {
                let slot = col * GRID_ROWS + row;
                write!(&mut line, "{:>2}: {:>3}    ", slot + 1, cards[slot].to_string()).ok();
            }
            writeln!(&mut out, "{}", line.trim_end()).ok();
        }
        out
    }

    /// Parse whitespace-separated tokens in slot order.
    pub fn parse(text: &str) -> Result<Self> {
        let cards = text
            .split_whitespace()
            .map(|token| token.parse::<Card>().map(u8::from))
            .collect::<Result<Vec<u8>>>()?;
        Permutation::new(&cards).map(Self::new)
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.one_line(Spelling::RankPictograph))
    }
}

impl FromStr for Pack {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl Serialize for Pack {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cards().map(|card| card.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Defect;
    use pretty_assertions::assert_eq;

    #[test]
    fn sorted_pack_one_line() {
        let pack = Pack::new(Permutation::identity());
        let line = pack.one_line(Spelling::RankLetter);
        assert!(line.starts_with("AC 2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC AD"));
        assert!(line.ends_with("QS KS"));
        assert_eq!(line.split(' ').count(), 52);
    }

    #[test]
    fn parses_mixed_spellings() {
        let pack = Pack::new(Permutation::identity());
        let mixed: Vec<String> = pack
            .cards()
            .zip(Spelling::ALL.iter().cycle())
            .map(|(card, &spelling)| card.spell(spelling))
            .collect();
        let parsed: Pack = mixed.join("\t ").parse().unwrap();
        assert_eq!(parsed, pack);
    }

    #[test]
    fn grid_layout() {
        let grid = Pack::new(Permutation::identity()).grid();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "     1:  A\u{2663}    14:  A\u{2662}    27:  A\u{2661}    40:  A\u{2660}"
        );
        assert_eq!(
            lines[9],
            "    10: 10\u{2663}    23: 10\u{2662}    36: 10\u{2661}    49: 10\u{2660}"
        );
    }

    #[test]
    fn rejects_short_and_unknown() {
        let pack = Pack::new(Permutation::identity());
        let line = pack.to_string();
        let short: Vec<&str> = line.split(' ').take(51).collect();
        assert_eq!(
            Pack::parse(&short.join(" ")),
            Err(Error::InvalidPermutation(Defect::Length(51)))
        );
        assert_eq!(
            Pack::parse("AC ZZ"),
            Err(Error::UnrecognizedToken("ZZ".into()))
        );
    }

    #[test]
    fn serializes_as_tokens() {
        let json = serde_json::to_value(Pack::new(Permutation::identity())).unwrap();
        assert_eq!(json[0], "A\u{2663}");
        assert_eq!(json.as_array().map(Vec::len), Some(52));
    }
}
