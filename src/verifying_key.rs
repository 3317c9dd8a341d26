// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport verifying (public) key.

use crate::codec::{decode_leaves, encode_leaves};
use crate::error::Error;
use crate::keygen::derive_pk_from_sk;
use crate::lamport_signature::Signature;
use crate::params::LamportParameter;
use crate::signing_key::SigningKey;
use crate::verify::lamport_verify;
use core::marker::PhantomData;
use core::slice::ChunksExact;
use core::str::FromStr;

/// A Lamport verifying key: the hash of every leaf of a [`SigningKey`].
#[derive(Clone)]
pub struct VerifyingKey<P: LamportParameter> {
    bytes: Vec<u8>,
    _marker: PhantomData<P>,
}

impl<P: LamportParameter> AsRef<[u8]> for VerifyingKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: LamportParameter> TryFrom<&[u8]> for VerifyingKey<P> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != P::VERIFYING_KEY_BYTES {
            return Err(Error::InvalidKeyLength {
                expected: P::VERIFYING_KEY_BYTES,
                got: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
            _marker: PhantomData,
        })
    }
}

impl<P: LamportParameter> TryFrom<Vec<u8>> for VerifyingKey<P> {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() != P::VERIFYING_KEY_BYTES {
            return Err(Error::InvalidKeyLength {
                expected: P::VERIFYING_KEY_BYTES,
                got: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            _marker: PhantomData,
        })
    }
}

impl<P: LamportParameter> TryFrom<&Vec<u8>> for VerifyingKey<P> {
    type Error = Error;

    fn try_from(bytes: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.as_slice())
    }
}

impl<P: LamportParameter> TryFrom<Box<[u8]>> for VerifyingKey<P> {
    type Error = Error;

    fn try_from(bytes: Box<[u8]>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.into_vec())
    }
}

impl<P: LamportParameter> PartialEq for VerifyingKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: LamportParameter> Eq for VerifyingKey<P> {}

impl<P: LamportParameter> core::fmt::Debug for VerifyingKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("variant", &P::NAME)
            .field("bytes", &hex::encode(&self.bytes))
            .finish()
    }
}

/// Two lines of `N` space-separated hex digests, branch 0 first.
impl<P: LamportParameter> core::fmt::Display for VerifyingKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&encode_leaves(&self.bytes, P::DIGEST_BYTES, P::N))
    }
}

impl<P: LamportParameter> FromStr for VerifyingKey<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_leaves(s, "verifying key", P::DIGEST_BYTES, 2 * P::N)?;
        Self::try_from(bytes.as_slice())
    }
}

impl<P: LamportParameter> From<&SigningKey<P>> for VerifyingKey<P> {
    fn from(sk: &SigningKey<P>) -> Self {
        let mut pk = vec![0u8; P::VERIFYING_KEY_BYTES];
        derive_pk_from_sk::<P>(sk.as_ref(), &mut pk);
        Self {
            bytes: pk,
            _marker: PhantomData,
        }
    }
}

impl<P: LamportParameter> VerifyingKey<P> {
    /// The digest at position `index` of `branch` (`0` or `1`).
    pub fn leaf(&self, branch: usize, index: usize) -> Option<&[u8]> {
        if branch > 1 || index >= P::N {
            return None;
        }
        let start = (branch * P::N + index) * P::DIGEST_BYTES;
        Some(&self.bytes[start..start + P::DIGEST_BYTES])
    }

    /// All `N` digests of `branch` (`0` or `1`), in bit order.
    pub fn branch(&self, branch: usize) -> Option<ChunksExact<'_, u8>> {
        let half = P::N * P::DIGEST_BYTES;
        match branch {
            0 => Some(self.bytes[..half].chunks_exact(P::DIGEST_BYTES)),
            1 => Some(self.bytes[half..].chunks_exact(P::DIGEST_BYTES)),
            _ => None,
        }
    }

    /// Check `signature` over `msg`.
    ///
    /// Returns `false` for any invalid signature; never errors.
    pub fn is_valid(&self, msg: &[u8], signature: &Signature<P>) -> bool {
        lamport_verify::<P>(msg, signature.as_ref(), &self.bytes)
    }

    /// Check a signature given as raw bytes.
    ///
    /// A slice of the wrong length is reported as invalid, the same way a
    /// forged signature is.
    pub fn is_valid_bytes(&self, msg: &[u8], signature: &[u8]) -> bool {
        lamport_verify::<P>(msg, signature, &self.bytes)
    }
}

impl<P: LamportParameter> signature::Verifier<Signature<P>> for VerifyingKey<P> {
    fn verify(&self, msg: &[u8], signature: &Signature<P>) -> Result<(), signature::Error> {
        if self.is_valid(msg, signature) {
            Ok(())
        } else {
            Err(Error::VerificationFailed.into())
        }
    }
}

#[cfg(feature = "serde")]
impl<P: LamportParameter> serde::Serialize for VerifyingKey<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: LamportParameter> serde::Deserialize<'de> for VerifyingKey<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::try_from(bytes).map_err(serde::de::Error::custom)
    }
}
