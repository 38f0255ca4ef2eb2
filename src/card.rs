//! Playing card identities and their text tokens.
//!
//! A card's identity is `suit * 13 + rank`, with ranks ordered A, 2..10, J, Q, K
//! and suits ordered clubs, diamonds, hearts, spades. Tokens are written in one
//! canonical spelling but read in any of the registered [`Spelling`]s, so packs
//! produced by other tools still parse.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    #[default]
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Canonical glyph: ♣ ♢ ♡ ♠.
    pub fn pictograph(&self) -> char {
        match self {
            Suit::Club => '\u{2663}',
            Suit::Diamond => '\u{2662}',
            Suit::Heart => '\u{2661}',
            Suit::Spade => '\u{2660}',
        }
    }

    /// Second glyph set still accepted on read: ♤ ♥ ♦ ♧, in suit order.
    pub fn alt_pictograph(&self) -> char {
        match self {
            Suit::Club => '\u{2664}',
            Suit::Diamond => '\u{2665}',
            Suit::Heart => '\u{2666}',
            Suit::Spade => '\u{2667}',
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.pictograph())
    }
}

/// One way of writing a card as a token.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Spelling {
    /// `10♣`, the canonical form.
    RankPictograph,
    /// `10C`
    RankLetter,
    /// `10♤`
    RankAltPictograph,
    /// `♣10`
    PictographRank,
    /// `C10`
    LetterRank,
    /// `♤10`
    AltPictographRank,
    /// `c10`
    LowerLetterRank,
    /// `10c`
    RankLowerLetter,
}

impl Spelling {
    pub const ALL: [Spelling; 8] = [
        Spelling::RankPictograph,
        Spelling::RankLetter,
        Spelling::RankAltPictograph,
        Spelling::PictographRank,
        Spelling::LetterRank,
        Spelling::AltPictographRank,
        Spelling::LowerLetterRank,
        Spelling::RankLowerLetter,
    ];
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

/// Every token of every card under every spelling.
static LOOKUP: LazyLock<HashMap<String, Card>> = LazyLock::new(|| {
    Card::ALL
        .into_iter()
        .flat_map(|card| Spelling::ALL.into_iter().map(move |s| (card.spell(s), card)))
        .collect()
});

impl Card {
    pub const ALL: [Card; 52] = {
        let mut cards = [Card {
            rank: Rank::Ace,
            suit: Suit::Club,
        }; 52];
        let mut i = 0;
        while i < 52 {
            cards[i] = Card {
                rank: Rank::ALL[i % 13],
                suit: Suit::ALL[i / 13],
            };
            i += 1;
        }
        cards
    };

    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The card with the given identity, if it is below 52.
    pub fn from_identity(identity: u8) -> Option<Self> {
        Self::ALL.get(identity as usize).copied()
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn identity(&self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    pub fn spell(&self, spelling: Spelling) -> String {
        let rank = self.rank.token();
        let suit = self.suit;
        match spelling {
            Spelling::RankPictograph => format!("{}{}", rank, suit.pictograph()),
            Spelling::RankLetter => format!("{}{}", rank, suit.letter()),
            Spelling::RankAltPictograph => format!("{}{}", rank, suit.alt_pictograph()),
            Spelling::PictographRank => format!("{}{}", suit.pictograph(), rank),
            Spelling::LetterRank => format!("{}{}", suit.letter(), rank),
            Spelling::AltPictographRank => format!("{}{}", suit.alt_pictograph(), rank),
            Spelling::LowerLetterRank => {
                format!("{}{}", suit.letter().to_ascii_lowercase(), rank)
            }
            Spelling::RankLowerLetter => {
                format!("{}{}", rank, suit.letter().to_ascii_lowercase())
            }
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.identity()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        LOOKUP
            .get(token)
            .copied()
            .ok_or_else(|| Error::UnrecognizedToken(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_suit_major() {
        assert_eq!(Card::new(Rank::Ace, Suit::Club).identity(), 0);
        assert_eq!(Card::new(Rank::Ten, Suit::Club).identity(), 9);
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).identity(), 39);
        assert_eq!(Card::new(Rank::King, Suit::Spade).identity(), 51);
        for (i, card) in Card::ALL.iter().enumerate() {
            assert_eq!(card.identity() as usize, i);
        }
        assert_eq!(Card::from_identity(52), None);
    }

    #[test]
    fn canonical_tokens() {
        assert_eq!(Card::ALL[0].to_string(), "A\u{2663}");
        assert_eq!(Card::ALL[22].to_string(), "10\u{2662}");
        assert_eq!(Card::ALL[51].spell(Spelling::RankLetter), "KS");
    }

    #[test]
    fn lookup_covers_every_spelling() {
        assert_eq!(LOOKUP.len(), 52 * Spelling::ALL.len());
        for card in Card::ALL {
            for spelling in Spelling::ALL {
                assert_eq!(card.spell(spelling).parse::<Card>(), Ok(card));
            }
        }
    }

    #[test]
    fn reads_alternate_spellings() {
        assert_eq!("AS".parse::<Card>().map(u8::from), Ok(39));
        assert_eq!("sK".parse::<Card>().map(u8::from), Ok(51));
        assert_eq!("D10".parse::<Card>().map(u8::from), Ok(22));
        assert_eq!("10d".parse::<Card>().map(u8::from), Ok(22));
        assert_eq!("\u{2664}A".parse::<Card>().map(u8::from), Ok(0));
        assert_eq!("\u{2660}Q".parse::<Card>().map(u8::from), Ok(50));
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["1C", "AX", "T\u{2663}", "", "10"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(Error::UnrecognizedToken(token.to_string()))
            );
        }
    }
}
