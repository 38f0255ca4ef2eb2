//! Encode short messages as the order of a 52-card pack, and decode them back.
//!
//! A pack has 52! orderings, about 225 bits. A message is read as a number in
//! the alphabet's base, the number picks one ordering, and the ordering is
//! written out as 52 card tokens.

mod alphabet;
mod bignat;
mod card;
mod error;
mod pack;
mod permutation;
mod validate;

pub use alphabet::{Alphabet, REFERENCE_SYMBOLS};
pub use bignat::BigNatural;
pub use card::{Card, Rank, Spelling, Suit};
pub use error::{Defect, Error, Result};
pub use pack::Pack;
pub use permutation::{DECK_SIZE, Permutation};
pub use validate::{CAPACITY, check_capacity, validate};

/// Turns a message into the pack that represents it.
pub fn encode_message(alphabet: &Alphabet, message: &str) -> Result<Pack> {
    let n = alphabet.encode(message)?;
    log::debug!("message of {} chars encodes to {}", message.chars().count(), n);
    Pack::from_index(&n)
}

/// Reads a one-line pack and recovers the message it represents.
pub fn decode_pack(alphabet: &Alphabet, text: &str) -> Result<String> {
    let pack = Pack::parse(text)?;
    let n = pack.index();
    log::debug!("pack decodes to index {}", n);
    Ok(alphabet.decode(&n))
}
