//! Well-formedness checks applied before ranking or unranking.

use std::sync::LazyLock;

use crate::bignat::BigNatural;
use crate::error::{Defect, Error, Result};
use crate::permutation::DECK_SIZE;

/// Number of distinct orderings of the pack, `52!`.
pub static CAPACITY: LazyLock<BigNatural> =
    LazyLock::new(|| BigNatural::factorial(DECK_SIZE as u32));

/// Check that `cards` holds every identity in `0..52` exactly once.
///
/// Returns the input untouched on success. On failure the error names the
/// lowest card whose count is not one.
pub fn validate<C: AsRef<[u8]>>(cards: C) -> Result<C> {
    let slice = cards.as_ref();
    if slice.len() != DECK_SIZE {
        return Err(Defect::Length(slice.len()).into());
    }
    let mut seen = [0usize; DECK_SIZE];
    for &card in slice {
        // out-of-range values leave some identity missing, which is reported below
        if let Some(count) = seen.get_mut(card as usize) {
            *count += 1;
        }
    }
    if let Some((card, &count)) = seen.iter().enumerate().find(|(_, count)| **count != 1) {
        return Err(Defect::Multiplicity {
            card: card as u8,
            count,
        }
        .into());
    }
    Ok(cards)
}

/// Check that `n` is the index of some ordering, i.e. `n < 52!`.
pub fn check_capacity(n: &BigNatural) -> Result<()> {
    if n.compare_less(&CAPACITY) {
        Ok(())
    } else {
        Err(Error::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Vec<u8> {
        (0..DECK_SIZE as u8).collect()
    }

    #[test]
    fn accepts_any_ordering() {
        let mut cards = identity();
        cards.reverse();
        assert_eq!(validate(cards.clone()).unwrap(), cards);
    }

    #[test]
    fn rejects_wrong_length() {
        let mut short = identity();
        short.pop();
        assert_eq!(
            validate(short),
            Err(Error::InvalidPermutation(Defect::Length(51)))
        );
        let mut long = identity();
        long.push(0);
        assert_eq!(
            validate(long),
            Err(Error::InvalidPermutation(Defect::Length(53)))
        );
    }

    #[test]
    fn names_first_bad_multiplicity() {
        let mut cards = identity();
        cards[9] = 30;
        assert_eq!(
            validate(cards),
            Err(Error::InvalidPermutation(Defect::Multiplicity { card: 9, count: 0 }))
        );
        let mut cards = identity();
        cards[40] = 2;
        assert_eq!(
            validate(cards),
            Err(Error::InvalidPermutation(Defect::Multiplicity { card: 2, count: 2 }))
        );
    }

    #[test]
    fn foreign_identity_shows_as_missing_card() {
        let mut cards = identity();
        cards[0] = 52;
        assert_eq!(
            validate(cards),
            Err(Error::InvalidPermutation(Defect::Multiplicity { card: 0, count: 0 }))
        );
    }

    #[test]
    fn capacity_is_exclusive() {
        assert!(check_capacity(&BigNatural::zero()).is_ok());
        assert!(check_capacity(&CAPACITY.decrement()).is_ok());
        assert_eq!(check_capacity(&CAPACITY), Err(Error::OutOfRange));
    }
}
