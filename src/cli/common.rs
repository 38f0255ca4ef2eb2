//! Shared clap helper types for CLI commands.

use cardpack::Spelling;
use clap::ValueEnum;

/// Suit spelling used when writing a pack on one line.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum StyleArg {
    /// Rank then suit glyph, e.g. `10♣`.
    #[default]
    Unicode,
    /// Rank then suit letter, e.g. `10C`.
    Ascii,
}

impl From<StyleArg> for Spelling {
    fn from(value: StyleArg) -> Spelling {
        match value {
            StyleArg::Unicode => Spelling::RankPictograph,
            StyleArg::Ascii => Spelling::RankLetter,
        }
    }
}

/// Output document format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatArg {
    #[default]
    Text,
    Json,
}
