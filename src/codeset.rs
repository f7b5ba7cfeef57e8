//! Validated input domain for the bitmap generator.

use bitvec::prelude::*;

use crate::codes::MAX_DOMAIN;
use crate::error::{Iso4217Error, Result};

/// An immutable, strictly ascending set of numeric currency codes.
///
/// Construction validates the ordering and domain invariants once, so the
/// last element can be trusted as the maximum everywhere downstream. An
/// empty set is legal and packs to a single zero byte.
pub struct CodeSet {
    codes: Vec<u16>,
    // Membership bit per candidate value, indexed 0..=max_code
    members: BitVec<u8, Lsb0>,
}

impl CodeSet {
    /// Builds a code set from a strictly ascending slice of codes in
    /// `0..=999`. Fails with [`Iso4217Error::InvalidDomain`] on an
    /// out-of-range, out-of-order, or duplicate element.
    pub fn new(codes: &[u16]) -> Result<Self> {
        for (i, &code) in codes.iter().enumerate() {
            if code > MAX_DOMAIN {
                return Err(Iso4217Error::InvalidDomain(format!(
                    "code {} at index {} exceeds maximum {}",
                    code, i, MAX_DOMAIN
                )));
            }
            if i > 0 && codes[i - 1] >= code {
                return Err(Iso4217Error::InvalidDomain(format!(
                    "codes must be strictly ascending, got {} after {} at index {}",
                    code,
                    codes[i - 1],
                    i
                )));
            }
        }

        let mut members = match codes.last() {
            Some(&max) => bitvec![u8, Lsb0; 0; max as usize + 1],
            None => BitVec::new(),
        };
        for &code in codes {
            members.set(code as usize, true);
        }

        Ok(Self {
            codes: codes.to_vec(),
            members,
        })
    }

    /// The largest member, or `None` for the empty set. This is the last
    /// element; construction-time validation guarantees it is the maximum.
    pub fn max_code(&self) -> Option<u16> {
        self.codes.last().copied()
    }

    /// Whether `code` is a member.
    pub fn contains(&self, code: u16) -> bool {
        self.members
            .get(code as usize)
            .map(|bit| *bit)
            .unwrap_or(false)
    }

    /// The member codes, ascending.
    pub fn codes(&self) -> &[u16] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
