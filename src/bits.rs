// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion of digests into per-bit branch selectors.

use crate::commit::message_digest;
use crate::error::{Error, Result};
use crate::params::LamportParameter;
use core::str::FromStr;

/// The bits of a digest, most significant bit first.
///
/// Each element is `0` or `1` and selects the key branch used at that
/// position when signing or verifying.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigestBits(Vec<u8>);

impl DigestBits {
    /// Decode a hexadecimal digest string.
    ///
    /// Every character contributes four bits, so `"e9"` decodes to
    /// `[1, 1, 1, 0, 1, 0, 0, 1]`. Upper and lower case are accepted.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(hex.len() * 4);
        for (position, found) in hex.char_indices() {
            let nibble = found
                .to_digit(16)
                .ok_or(Error::InvalidEncoding { position, found })?;
            bits.extend((0..4).rev().map(|shift| ((nibble >> shift) & 1) as u8));
        }
        Ok(Self(bits))
    }

    /// Expand raw digest bytes, eight bits per byte.
    pub fn from_digest(digest: &[u8]) -> Self {
        let bits = digest
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
            .collect();
        Self(bits)
    }

    /// Hash `msg` with the parameter set's hash and expand the digest.
    pub fn for_message<P: LamportParameter>(msg: &[u8]) -> Self {
        Self::from_digest(&message_digest::<P>(msg))
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bit at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// The bits as a slice of `0`/`1` values.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for DigestBits {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for DigestBits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
