// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport signature type.

use crate::codec::{decode_packed_leaves, encode_leaves};
use crate::error::Error;
use crate::params::LamportParameter;
use core::marker::PhantomData;
use core::slice::ChunksExact;
use core::str::FromStr;

/// A Lamport signature: one revealed secret per digest bit.
///
/// Carries no metadata; it only means something next to the message and
/// verifying key it was produced for.
#[derive(Clone)]
pub struct Signature<P: LamportParameter> {
    bytes: Vec<u8>,
    _marker: PhantomData<P>,
}

impl<P: LamportParameter> PartialEq for Signature<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: LamportParameter> Eq for Signature<P> {}

impl<P: LamportParameter> AsRef<[u8]> for Signature<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: LamportParameter> core::fmt::Debug for Signature<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature")
            .field("variant", &P::NAME)
            .field("bytes", &hex::encode(&self.bytes))
            .finish()
    }
}

/// `N` hex tokens, one per line.
///
/// Parsing also accepts the tokens run together, see [`Signature::to_packed_hex`].
impl<P: LamportParameter> core::fmt::Display for Signature<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&encode_leaves(&self.bytes, P::SECRET_BYTES, 1))
    }
}

impl<P: LamportParameter> FromStr for Signature<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_packed_leaves(s, "signature", P::SECRET_BYTES, P::N)?;
        Self::try_from(bytes.as_slice())
    }
}

impl<P: LamportParameter> TryFrom<&[u8]> for Signature<P> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != P::SIGNATURE_BYTES {
            return Err(Error::InvalidSignatureLength {
                expected: P::SIGNATURE_BYTES,
                got: bytes.len(),
            });
        }
        Ok(Self::from_revealed(bytes.to_vec()))
    }
}

impl<P: LamportParameter> TryFrom<Vec<u8>> for Signature<P> {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() != P::SIGNATURE_BYTES {
            return Err(Error::InvalidSignatureLength {
                expected: P::SIGNATURE_BYTES,
                got: bytes.len(),
            });
        }
        Ok(Self::from_revealed(bytes))
    }
}

impl<P: LamportParameter> TryFrom<&Vec<u8>> for Signature<P> {
    type Error = Error;

    fn try_from(bytes: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.as_slice())
    }
}

impl<P: LamportParameter> TryFrom<Box<[u8]>> for Signature<P> {
    type Error = Error;

    fn try_from(bytes: Box<[u8]>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.into_vec())
    }
}

impl<P: LamportParameter> From<Signature<P>> for Vec<u8> {
    fn from(sig: Signature<P>) -> Vec<u8> {
        sig.bytes
    }
}

impl<P: LamportParameter> signature::SignatureEncoding for Signature<P> {
    type Repr = Vec<u8>;
}

impl<P: LamportParameter> Signature<P> {
    pub(crate) fn from_revealed(bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), P::SIGNATURE_BYTES);
        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// The secret revealed for digest bit `index`.
    pub fn leaf(&self, index: usize) -> Option<&[u8]> {
        self.bytes.chunks_exact(P::SECRET_BYTES).nth(index)
    }

    /// The revealed secrets in digest-bit order.
    pub fn leaves(&self) -> ChunksExact<'_, u8> {
        self.bytes.chunks_exact(P::SECRET_BYTES)
    }

    /// All revealed secrets as one contiguous hex string of fixed-width leaves.
    pub fn to_packed_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Number of revealed secrets; always `N`.
    pub fn len(&self) -> usize {
        P::N
    }

    /// Always `false`: a signature has exactly `N` leaves.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(feature = "serde")]
impl<P: LamportParameter> serde::Serialize for Signature<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: LamportParameter> serde::Deserialize<'de> for Signature<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::try_from(bytes).map_err(serde::de::Error::custom)
    }
}
