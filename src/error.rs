// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the Lamport signature scheme.

/// Errors that can occur during Lamport operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A digest string contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {found:?} at offset {position}")]
    InvalidEncoding {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// Textual key or signature could not be decoded.
    #[error("malformed {kind}: {reason}")]
    MalformedKeyFile {
        /// What was being decoded.
        kind: &'static str,
        /// Which token or count was wrong.
        reason: String,
    },
    /// The random source failed to produce key material.
    #[error("entropy source exhausted")]
    EntropyExhausted,
    /// Signature verification failed.
    #[error("verification failed")]
    VerificationFailed,
    /// Invalid key length.
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Invalid signature length.
    #[error("invalid signature length: expected {expected}, got {got}")]
    InvalidSignatureLength {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
}

impl From<Error> for signature::Error {
    fn from(e: Error) -> Self {
        signature::Error::from_source(e.to_string())
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
