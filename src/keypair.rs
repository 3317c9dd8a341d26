// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport keypair generation.

use crate::error::Result;
use crate::keygen::lamport_keypair;
use crate::lamport_signature::Signature;
use crate::params::LamportParameter;
use crate::signing_key::SigningKey;
use crate::verifying_key::VerifyingKey;
use rand::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Lamport keypair containing both signing and verifying keys.
///
/// Built in one step so that the verifying key is always the commitment to
/// this exact signing key.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct KeyPair<P: LamportParameter> {
    signing_key: SigningKey<P>,
    verifying_key: VerifyingKey<P>,
}

impl<P: LamportParameter> AsRef<VerifyingKey<P>> for KeyPair<P> {
    fn as_ref(&self) -> &VerifyingKey<P> {
        &self.verifying_key
    }
}

impl<P: LamportParameter> signature::KeypairRef for KeyPair<P> {
    type VerifyingKey = VerifyingKey<P>;
}

impl<P: LamportParameter> core::fmt::Debug for KeyPair<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The verifying key is tens of kilobytes of hex; name it only by its first leaf.
        f.debug_struct("KeyPair")
            .field("variant", &P::NAME)
            .field("signing_key", &"**FILTERED**")
            .field(
                "verifying_key",
                &self.verifying_key.leaf(0, 0).map(hex::encode),
            )
            .finish_non_exhaustive()
    }
}

impl<P: LamportParameter> PartialEq for KeyPair<P> {
    fn eq(&self, other: &Self) -> bool {
        self.signing_key == other.signing_key && self.verifying_key == other.verifying_key
    }
}

impl<P: LamportParameter> Eq for KeyPair<P> {}

impl<P: LamportParameter> Zeroize for KeyPair<P> {
    fn zeroize(&mut self) {
        self.signing_key.zeroize();
    }
}

impl<P: LamportParameter> ZeroizeOnDrop for KeyPair<P> {}

impl<P: LamportParameter> KeyPair<P> {
    /// Generate a new random keypair.
    ///
    /// Draws `2 * N` independent secrets of `SECRET_BYTES` each from `rng`.
    /// Fails only with [`Error::EntropyExhausted`](crate::Error::EntropyExhausted)
    /// when `rng` reports an error.
    pub fn generate<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let (sk, pk) = lamport_keypair::<P, R>(rng)?;
        Ok(Self {
            signing_key: SigningKey::from_secret_bytes(&sk),
            verifying_key: VerifyingKey::try_from(pk)?,
        })
    }

    /// Construct a keypair from a [`SigningKey`], deriving the corresponding [`VerifyingKey`].
    pub fn from_signing_key(signing_key: SigningKey<P>) -> Self {
        let verifying_key = VerifyingKey::from(&signing_key);
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Get a reference to the signing key.
    pub fn signing_key(&self) -> &SigningKey<P> {
        &self.signing_key
    }

    /// Get a reference to the verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey<P> {
        &self.verifying_key
    }
}

impl<P: LamportParameter> signature::Signer<Signature<P>> for KeyPair<P> {
    fn try_sign(&self, msg: &[u8]) -> core::result::Result<Signature<P>, signature::Error> {
        Ok(self.signing_key.sign(msg))
    }
}
