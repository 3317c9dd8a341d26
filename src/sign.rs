// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamport signing.

use crate::bits::DigestBits;
use crate::params::LamportParameter;

/// Sign `msg`, writing `SIGNATURE_BYTES` into `sig`.
///
/// Position `i` of the signature reveals leaf `i` of the branch named by bit
/// `i` of the message digest. Deterministic: no randomness is drawn here.
pub(crate) fn lamport_sign<P: LamportParameter>(sig: &mut [u8], msg: &[u8], sk: &[u8]) {
    let bits = DigestBits::for_message::<P>(msg);
    for (i, (bit, out)) in bits
        .iter()
        .zip(sig.chunks_exact_mut(P::SECRET_BYTES))
        .enumerate()
    {
        let start = (usize::from(bit) * P::N + i) * P::SECRET_BYTES;
        out.copy_from_slice(&sk[start..start + P::SECRET_BYTES]);
    }
}
