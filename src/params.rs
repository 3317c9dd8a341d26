// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport parameter sets.
//!
//! Defines the [`LamportParameter`] trait and concrete parameter sets
//! [`LamportSha256`], [`LamportSha3_256`], and [`LamportSha512`].
//!
//! A parameter set fixes the hash function, and with it the digest width
//! `N` that sizes every key branch and signature. Because the hash is part of
//! the key's type, a key pair can never be used with a different hash.

use sha2::Digest;

/// Trait defining all constants for a Lamport parameter set.
pub trait LamportParameter: Clone + Copy + Send + Sync + 'static {
    /// Human-readable name of this parameter set.
    const NAME: &'static str;
    /// Byte length of a digest produced by [`Self::Hash`].
    const DIGEST_BYTES: usize;
    /// Digest width in bits; the number of leaves per branch.
    const N: usize;
    /// Byte length of one private-key leaf.
    const SECRET_BYTES: usize;
    /// Byte length of a signing key (two branches of secrets).
    const SIGNING_KEY_BYTES: usize;
    /// Byte length of a verifying key (two branches of digests).
    const VERIFYING_KEY_BYTES: usize;
    /// Byte length of a signature (one revealed secret per digest bit).
    const SIGNATURE_BYTES: usize;
    /// Hash used both for message digests and leaf commitments.
    type Hash: Digest;
}

macro_rules! define_lamport_parameter {
    (
        $name:ident, $display:expr,
        hash = $hash:ty,
        digest_bytes = $db:expr, secret_bytes = $sb:expr
    ) => {
        #[doc = concat!("Lamport parameter set ", $display, ".")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl LamportParameter for $name {
            const NAME: &'static str = $display;
            const DIGEST_BYTES: usize = $db;
            const N: usize = $db * 8;
            const SECRET_BYTES: usize = $sb;
            const SIGNING_KEY_BYTES: usize = 2 * $db * 8 * $sb;
            const VERIFYING_KEY_BYTES: usize = 2 * $db * 8 * $db;
            const SIGNATURE_BYTES: usize = $db * 8 * $sb;
            type Hash = $hash;
        }
    };
}

define_lamport_parameter!(
    LamportSha256, "LAMPORT_SHA256",
    hash = sha2::Sha256,
    digest_bytes = 32, secret_bytes = 32
);

define_lamport_parameter!(
    LamportSha3_256, "LAMPORT_SHA3_256",
    hash = sha3::Sha3_256,
    digest_bytes = 32, secret_bytes = 32
);

define_lamport_parameter!(
    LamportSha512, "LAMPORT_SHA512",
    hash = sha2::Sha512,
    digest_bytes = 64, secret_bytes = 64
);
