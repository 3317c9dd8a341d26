// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport key generation.

use crate::commit::commit;
use crate::error::{Error, Result};
use crate::params::LamportParameter;
use rand::TryCryptoRng;
use zeroize::Zeroizing;

/// Fill `out` with secret material from `rng`.
///
/// Any failure of the source is fatal for the key being built.
fn fill_secrets<R: TryCryptoRng + ?Sized>(rng: &mut R, out: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(out).map_err(|_| Error::EntropyExhausted)
}

/// Derive the verifying key from a signing key.
///
/// Leaf `j` of `pk` is the commitment to leaf `j` of `sk`, so both keys share
/// the branch-major layout `[branch 0 leaves.., branch 1 leaves..]`.
pub(crate) fn derive_pk_from_sk<P: LamportParameter>(sk: &[u8], pk: &mut [u8]) {
    for (leaf, out) in sk
        .chunks_exact(P::SECRET_BYTES)
        .zip(pk.chunks_exact_mut(P::DIGEST_BYTES))
    {
        commit::<P>(leaf, out);
    }
}

/// Generate a Lamport keypair.
///
/// Returns the signing key bytes (wiped on drop, including when the random
/// source fails part-way) and the verifying key bytes.
pub(crate) fn lamport_keypair<P: LamportParameter, R: TryCryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)> {
    let mut sk = Zeroizing::new(vec![0u8; P::SIGNING_KEY_BYTES]);
    // Each leaf is drawn independently.
    for leaf in sk.chunks_exact_mut(P::SECRET_BYTES) {
        fill_secrets(rng, leaf)?;
    }

    let mut pk = vec![0u8; P::VERIFYING_KEY_BYTES];
    derive_pk_from_sk::<P>(&sk, &mut pk);

    tracing::debug!(variant = P::NAME, leaves = 2 * P::N, "generated lamport key pair");
    Ok((sk, pk))
}
