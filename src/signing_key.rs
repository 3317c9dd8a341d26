// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport signing (private) key.

use crate::codec::{decode_leaves, encode_leaves};
use crate::error::{Error, Result};
use crate::lamport_signature::Signature;
use crate::params::LamportParameter;
use crate::sign::lamport_sign;
use core::marker::PhantomData;
use core::slice::ChunksExact;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A Lamport signing key: two branches of `N` random secrets each.
///
/// The secrets are stored branch-major in one buffer that is wiped on drop.
/// A signing key must sign at most one message; signing a second message
/// reveals leaves from both branches and lets anyone forge signatures.
/// Nothing here tracks prior use. [`SigningKey::sign_once`] consumes the key
/// for callers that want the compiler to hold them to that rule.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey<P: LamportParameter> {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    _marker: PhantomData<P>,
}

impl<P: LamportParameter> AsRef<[u8]> for SigningKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: LamportParameter> TryFrom<&[u8]> for SigningKey<P> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != P::SIGNING_KEY_BYTES {
            return Err(Error::InvalidKeyLength {
                expected: P::SIGNING_KEY_BYTES,
                got: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
            _marker: PhantomData,
        })
    }
}

impl<P: LamportParameter> TryFrom<Vec<u8>> for SigningKey<P> {
    type Error = Error;

    fn try_from(mut bytes: Vec<u8>) -> Result<Self> {
        let key = Self::try_from(bytes.as_slice());
        bytes.zeroize();
        key
    }
}

impl<P: LamportParameter> TryFrom<&Vec<u8>> for SigningKey<P> {
    type Error = Error;

    fn try_from(bytes: &Vec<u8>) -> Result<Self> {
        Self::try_from(bytes.as_slice())
    }
}

impl<P: LamportParameter> TryFrom<Box<[u8]>> for SigningKey<P> {
    type Error = Error;

    fn try_from(mut bytes: Box<[u8]>) -> Result<Self> {
        let key = Self::try_from(bytes.as_ref());
        bytes.zeroize();
        key
    }
}

impl<P: LamportParameter> PartialEq for SigningKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: LamportParameter> Eq for SigningKey<P> {}

impl<P: LamportParameter> core::fmt::Debug for SigningKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("variant", &P::NAME)
            .field("bytes", &"**FILTERED**")
            .finish_non_exhaustive()
    }
}

impl<P: LamportParameter> SigningKey<P> {
    /// Build a key from generated bytes already known to have the right shape.
    pub(crate) fn from_secret_bytes(bytes: &Zeroizing<Vec<u8>>) -> Self {
        debug_assert_eq!(bytes.len(), P::SIGNING_KEY_BYTES);
        Self {
            bytes: bytes.to_vec(),
            _marker: PhantomData,
        }
    }

    /// The secret at position `index` of `branch` (`0` or `1`).
    pub fn leaf(&self, branch: usize, index: usize) -> Option<&[u8]> {
        if branch > 1 || index >= P::N {
            return None;
        }
        let start = (branch * P::N + index) * P::SECRET_BYTES;
        Some(&self.bytes[start..start + P::SECRET_BYTES])
    }

    /// All `N` secrets of `branch` (`0` or `1`), in bit order.
    pub fn branch(&self, branch: usize) -> Option<ChunksExact<'_, u8>> {
        let half = P::N * P::SECRET_BYTES;
        match branch {
            0 => Some(self.bytes[..half].chunks_exact(P::SECRET_BYTES)),
            1 => Some(self.bytes[half..].chunks_exact(P::SECRET_BYTES)),
            _ => None,
        }
    }

    /// Sign `msg`.
    ///
    /// Deterministic and infallible. The caller is responsible for never
    /// signing a second, different message with the same key.
    pub fn sign(&self, msg: &[u8]) -> Signature<P> {
        let mut sig_bytes = vec![0u8; P::SIGNATURE_BYTES];
        lamport_sign::<P>(&mut sig_bytes, msg, &self.bytes);
        Signature::from_revealed(sig_bytes)
    }

    /// Sign `msg` and destroy the key.
    pub fn sign_once(self, msg: &[u8]) -> Signature<P> {
        self.sign(msg)
    }

    /// Encode as text: branch 0 on the first line, branch 1 on the second.
    pub fn to_text(&self) -> Zeroizing<String> {
        encode_leaves(&self.bytes, P::SECRET_BYTES, P::N)
    }

    /// Decode the text produced by [`SigningKey::to_text`].
    pub fn from_text(text: &str) -> Result<Self> {
        let bytes = decode_leaves(text, "signing key", P::SECRET_BYTES, 2 * P::N)?;
        Ok(Self::from_secret_bytes(&bytes))
    }
}

impl<P: LamportParameter> signature::Signer<Signature<P>> for SigningKey<P> {
    fn try_sign(&self, msg: &[u8]) -> core::result::Result<Signature<P>, signature::Error> {
        Ok(self.sign(msg))
    }
}

#[cfg(feature = "serde")]
impl<P: LamportParameter> serde::Serialize for SigningKey<P> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: LamportParameter> serde::Deserialize<'de> for SigningKey<P> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::try_from(bytes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::KeyPair;
    use crate::params::LamportSha256;

    #[test]
    fn rejects_wrong_length() {
        let err = SigningKey::<LamportSha256>::try_from(vec![0u8; 31]).expect_err("too short");
        assert!(matches!(
            err,
            Error::InvalidKeyLength {
                expected: 16384,
                got: 31
            }
        ));
    }

    #[test]
    fn debug_hides_secrets() {
        let keypair = KeyPair::<LamportSha256>::generate(&mut rand::rng()).expect("keygen");
        let rendered = format!("{:?}", keypair.signing_key());
        assert!(rendered.contains("FILTERED"));
        let leaf = hex::encode(keypair.signing_key().leaf(0, 0).expect("leaf"));
        assert!(!rendered.contains(&leaf));
    }

    #[test]
    fn leaf_bounds() {
        let keypair = KeyPair::<LamportSha256>::generate(&mut rand::rng()).expect("keygen");
        let sk = keypair.signing_key();
        assert!(sk.leaf(1, 255).is_some());
        assert!(sk.leaf(2, 0).is_none());
        assert!(sk.leaf(0, 256).is_none());
        assert!(sk.branch(2).is_none());
        assert_eq!(sk.branch(1).map(Iterator::count), Some(256));
    }

    #[test]
    fn signing_is_deterministic() {
        let keypair = KeyPair::<LamportSha256>::generate(&mut rand::rng()).expect("keygen");
        let sk = keypair.signing_key();
        assert_eq!(sk.sign(b"same"), sk.sign(b"same"));
        assert_eq!(sk.clone().sign_once(b"same"), sk.sign(b"same"));
    }
}
