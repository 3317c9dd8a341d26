// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport one-time signature scheme.
//!
//! A Lamport key pair signs exactly one message. The signing key holds two
//! branches of `N` random secrets, where `N` is the digest width of the hash
//! in bits; the verifying key holds the hash of every secret. A signature
//! reveals, for each bit of the message digest, the secret from the branch
//! that bit selects.
//!
//! # Supported Parameter Sets
//!
//! - [`LamportSha256`] - SHA-256, `N = 256`
//! - [`LamportSha3_256`] - SHA3-256, `N = 256`
//! - [`LamportSha512`] - SHA-512, `N = 512`
//!
//! # Example
//!
//! ```
//! use lamport_ots::{KeyPair, LamportSha256};
//! use signature::{Signer, Verifier};
//!
//! let mut rng = rand::rng();
//! let keypair = KeyPair::<LamportSha256>::generate(&mut rng).expect("keygen");
//! let msg = b"hello world";
//!
//! let sig = keypair.signing_key().try_sign(msg).expect("sign");
//! keypair.verifying_key().verify(msg, &sig).expect("verify");
//!
//! // Keys and signatures travel as whitespace-delimited hex tokens.
//! let text = sig.to_string();
//! let parsed: lamport_ots::Signature<LamportSha256> = text.parse().expect("parse");
//! assert!(lamport_ots::verify(keypair.verifying_key(), msg, &parsed));
//! ```
//!
//! # One-time use
//!
//! Signing two different messages with the same key reveals secrets from
//! both branches and allows forgeries. This crate does not track key use;
//! callers must discard a signing key after its first signature, for
//! example by signing with [`SigningKey::sign_once`].

pub mod bits;
pub mod error;
pub mod keypair;
pub mod lamport_signature;
pub mod params;
pub mod signing_key;
pub mod verifying_key;

mod codec;
mod commit;
mod keygen;
mod sign;
mod verify;

pub use bits::DigestBits;
pub use error::Error;
pub use keypair::KeyPair;
pub use lamport_signature::Signature;
pub use params::{LamportParameter, LamportSha3_256, LamportSha256, LamportSha512};
pub use signing_key::SigningKey;
pub use verifying_key::VerifyingKey;

/// Generate a key pair from the thread-local CSPRNG.
pub fn generate_keys<P: LamportParameter>() -> error::Result<KeyPair<P>> {
    KeyPair::generate(&mut rand::rng())
}

/// Sign `msg` with `signing_key`.
pub fn sign<P: LamportParameter>(signing_key: &SigningKey<P>, msg: &[u8]) -> Signature<P> {
    signing_key.sign(msg)
}

/// Whether `signature` is a valid signature over `msg` under `verifying_key`.
pub fn verify<P: LamportParameter>(
    verifying_key: &VerifyingKey<P>,
    msg: &[u8],
    signature: &Signature<P>,
) -> bool {
    verifying_key.is_valid(msg, signature)
}
