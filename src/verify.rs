// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport signature verification.

use crate::bits::DigestBits;
use crate::commit::commit;
use crate::params::LamportParameter;
use subtle::{Choice, ConstantTimeEq};

/// Verify a Lamport signature.
///
/// Total over its inputs: a signature or key of the wrong length is simply
/// invalid. Every position is hashed and compared even after a mismatch, and
/// the per-position results are folded into a single [`Choice`].
pub(crate) fn lamport_verify<P: LamportParameter>(msg: &[u8], sig: &[u8], pk: &[u8]) -> bool {
    if sig.len() != P::SIGNATURE_BYTES || pk.len() != P::VERIFYING_KEY_BYTES {
        tracing::trace!(variant = P::NAME, sig_len = sig.len(), "signature shape rejected");
        return false;
    }

    let bits = DigestBits::for_message::<P>(msg);
    let mut commitment = vec![0u8; P::DIGEST_BYTES];
    let mut valid = Choice::from(1u8);
    for (i, (bit, leaf)) in bits
        .iter()
        .zip(sig.chunks_exact(P::SECRET_BYTES))
        .enumerate()
    {
        commit::<P>(leaf, &mut commitment);
        let start = (usize::from(bit) * P::N + i) * P::DIGEST_BYTES;
        valid &= commitment
            .as_slice()
            .ct_eq(&pk[start..start + P::DIGEST_BYTES]);
    }

    let valid = bool::from(valid);
    tracing::trace!(variant = P::NAME, valid, "verified lamport signature");
    valid
}
