//! Rank/unrank between integers in `[0, 52!)` and orderings of the pack.
//!
//! An index `n` is read as 52 mixed-radix digits, least significant first,
//! with radices 52, 51, ..., 1. Digit `d[c]` places card `c` into the
//! `d[c]`-th still-empty slot, counting empty slots in ascending order.
//! Ranking replays the same placement and reads the digits back off.

use crate::bignat::BigNatural;
use crate::error::{Error, Result};
use crate::validate::{check_capacity, validate};

pub const DECK_SIZE: usize = 52;

/// A full pack: `slots[i]` is the card identity lying in slot `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation {
    slots: [u8; DECK_SIZE],
}

impl Permutation {
    /// The pack in sorted order, which is the ordering of index 0.
    pub fn identity() -> Self {
        let mut slots = [0u8; DECK_SIZE];
        for (slot, card) in slots.iter_mut().zip(0u8..) {
            *slot = card;
        }
        Self { slots }
    }

    pub fn new(cards: &[u8]) -> Result<Self> {
        let cards = validate(cards)?;
        let mut slots = [0u8; DECK_SIZE];
        slots.copy_from_slice(cards);
        Ok(Self { slots })
    }

    pub fn cards(&self) -> &[u8; DECK_SIZE] {
        &self.slots
    }

    pub fn unrank(n: &BigNatural) -> Result<Self> {
        check_capacity(n)?;
        let digits = digits_of(n);

        let mut available: Vec<u8> = (0..DECK_SIZE as u8).collect();
        let mut slots = [0u8; DECK_SIZE];
        for (card, &digit) in digits.iter().enumerate() {
            let slot = available.remove(digit as usize);
            slots[slot as usize] = card as u8;
        }
        log::debug!("unranked {} into a pack", n);
        Ok(Self { slots })
    }

    pub fn rank(&self) -> BigNatural {
        let mut position = [0u8; DECK_SIZE];
        for (slot, &card) in self.slots.iter().enumerate() {
            position[card as usize] = slot as u8;
        }

        let mut available: Vec<u8> = (0..DECK_SIZE as u8).collect();
        let mut digits = [0u32; DECK_SIZE];
        for (card, digit) in digits.iter_mut().enumerate() {
            let slot = position[card];
            let at = available.partition_point(|&s| s < slot);
            available.remove(at);
            *digit = at as u32;
        }

        let n = digits
            .iter()
            .enumerate()
            .rev()
            .fold(BigNatural::zero(), |acc, (card, &digit)| {
                acc.mul_small(radix(card)).add_small(digit)
            });
        log::debug!("ranked pack as {}", n);
        n
    }
}

/// Radix of card `c`'s digit: the number of slots still empty when it is placed.
fn radix(card: usize) -> u32 {
    (DECK_SIZE - card) as u32
}

fn digits_of(n: &BigNatural) -> [u32; DECK_SIZE] {
    let mut digits = [0u32; DECK_SIZE];
    let mut rest = n.clone();
    for (card, digit) in digits.iter_mut().enumerate() {
        let (quotient, d) = rest.div_rem_nonzero(radix(card));
        *digit = d;
        rest = quotient;
    }
    digits
}

impl TryFrom<Vec<u8>> for Permutation {
    type Error = Error;

    fn try_from(cards: Vec<u8>) -> Result<Self> {
        Self::new(&cards)
    }
}
