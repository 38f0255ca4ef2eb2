//! Unbounded non-negative integers, with just the arithmetic the pack codec needs.
//!
//! A [`BigNatural`] is stored as base 2^32 limbs, least significant first.
//! The canonical form carries no high zero limbs; zero is the empty limb list.
//! Every operation returns a fresh value.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

const LIMB_BITS: u32 = 32;

/// Largest power of ten that fits in a limb, used for decimal rendering.
const DECIMAL_CHUNK: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigNatural {
    limbs: Vec<u32>,
}

impl BigNatural {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn from_small(value: u64) -> Self {
        let mut limbs = vec![value as u32, (value >> LIMB_BITS) as u32];
        trim(&mut limbs);
        Self { limbs }
    }

    /// `n!`, built by repeated small multiplication.
    pub fn factorial(n: u32) -> Self {
        (2..=n).fold(Self::from_small(1), |acc, k| acc.mul_small(k))
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn mul_small(&self, multiplier: u32) -> Self {
        let mut limbs = Vec::with_capacity(self.limbs.len() + 1);
        let mut carry = 0u64;
        for &limb in &self.limbs {
            let product = u64::from(limb) * u64::from(multiplier) + carry;
            limbs.push(product as u32);
            carry = product >> LIMB_BITS;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        trim(&mut limbs);
        Self { limbs }
    }

    pub fn add_small(&self, addend: u32) -> Self {
        let mut limbs = self.limbs.clone();
        let mut carry = u64::from(addend);
        for limb in limbs.iter_mut() {
            if carry == 0 {
                break;
            }
            let sum = u64::from(*limb) + carry;
            *limb = sum as u32;
            carry = sum >> LIMB_BITS;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        Self { limbs }
    }

    /// Quotient and remainder of division by a machine-word divisor.
    pub fn div_mod_small(&self, divisor: u32) -> Result<(Self, u32)> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    pub fn compare_less(&self, other: &Self) -> bool {
        self < other
    }

    /// Subtracts one, saturating at zero.
    pub fn decrement(&self) -> Self {
        let mut limbs = self.limbs.clone();
        for limb in limbs.iter_mut() {
            let (value, borrow) = limb.overflowing_sub(1);
            *limb = value;
            if !borrow {
                break;
            }
        }
        trim(&mut limbs);
        Self { limbs }
    }

    /// Caller guarantees `divisor != 0`.
    pub(crate) fn div_rem_nonzero(&self, divisor: u32) -> (Self, u32) {
        let divisor = u64::from(divisor);
        let mut limbs = vec![0u32; self.limbs.len()];
        let mut rem = 0u64;
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            let current = (rem << LIMB_BITS) | u64::from(limb);
            limbs[i] = (current / divisor) as u32;
            rem = current % divisor;
        }
        trim(&mut limbs);
        (Self { limbs }, rem as u32)
    }
}

fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

impl From<u64> for BigNatural {
    fn from(value: u64) -> Self {
        Self::from_small(value)
    }
}

impl Ord for BigNatural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigNatural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut chunks = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (quotient, chunk) = rest.div_rem_nonzero(DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }
        let mut iter = chunks.iter().rev();
        if let Some(head) = iter.next() {
            write!(f, "{}", head)?;
        }
        for chunk in iter {
            write!(f, "{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

impl Serialize for BigNatural {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORIAL_52: &str =
        "80658175170943878571660636856403766975289505440883277824000000000000";

    #[test]
    fn zero_is_canonical() {
        assert!(BigNatural::from_small(0).is_zero());
        assert_eq!(BigNatural::zero(), BigNatural::from_small(0));
        assert_eq!(BigNatural::zero().mul_small(7), BigNatural::zero());
        assert_eq!(BigNatural::from_small(5).mul_small(0), BigNatural::zero());
    }

    #[test]
    fn carries_across_limbs() {
        let n = BigNatural::from_small(u32::MAX as u64).add_small(1);
        assert_eq!(n, BigNatural::from_small(1 << 32));
        let n = BigNatural::from_small(u64::MAX).add_small(1);
        assert_eq!(n.to_string(), "18446744073709551616");
        let (q, r) = n.div_mod_small(2).unwrap();
        assert_eq!(q, BigNatural::from_small(1 << 63));
        assert_eq!(r, 0);
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(
            BigNatural::from_small(9).div_mod_small(0),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn div_mod_inverts_mul_add() {
        let n = BigNatural::factorial(40).add_small(17);
        let (q, r) = n.mul_small(977).add_small(300).div_mod_small(977).unwrap();
        assert_eq!(q, n);
        assert_eq!(r, 300);
    }

    #[test]
    fn factorial_of_52() {
        assert_eq!(BigNatural::factorial(52).to_string(), FACTORIAL_52);
        assert_eq!(BigNatural::factorial(0), BigNatural::from_small(1));
    }

    #[test]
    fn ordering_is_numeric() {
        let small = BigNatural::from_small(u64::MAX);
        let big = small.add_small(1);
        assert!(small.compare_less(&big));
        assert!(!big.compare_less(&small));
        assert!(!big.compare_less(&big));
        assert!(BigNatural::zero() < BigNatural::from_small(1));
    }

    #[test]
    fn decrement_borrows() {
        let n = BigNatural::from_small(1 << 32).decrement();
        assert_eq!(n, BigNatural::from_small(u32::MAX as u64));
        assert_eq!(BigNatural::from_small(1).decrement(), BigNatural::zero());
        assert_eq!(BigNatural::zero().decrement(), BigNatural::zero());
    }

    #[test]
    fn decimal_chunks_keep_inner_zeros() {
        let n = BigNatural::from_small(1_000_000_000_000_000_007);
        assert_eq!(n.to_string(), "1000000000000000007");
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&BigNatural::from_small(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
