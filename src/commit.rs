// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-way commitments over the parameter set's hash.

use crate::params::LamportParameter;
use sha2::Digest;
use sha2::digest::Output;
use zeroize::Zeroizing;

/// Hash a message to the digest whose bits drive signing and verification.
pub(crate) fn message_digest<P: LamportParameter>(msg: &[u8]) -> Output<P::Hash> {
    P::Hash::digest(msg)
}

/// Commit to a private leaf, writing `DIGEST_BYTES` into `out`.
///
/// The hash input is the leaf's lowercase hex text, the same token the leaf
/// is stored as, so a public key can be checked against a key file by
/// hashing its tokens directly.
pub(crate) fn commit<P: LamportParameter>(leaf: &[u8], out: &mut [u8]) {
    let text = Zeroizing::new(hex::encode(leaf));
    out.copy_from_slice(&P::Hash::digest(text.as_bytes()));
}
