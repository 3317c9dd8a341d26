// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Textual encoding of keys and signatures.
//!
//! Each leaf is written as one lowercase hex token of fixed width. Keys put
//! branch 0 on the first line and branch 1 on the second, tokens separated by
//! spaces. Signatures put one token per line. Decoding splits on any ASCII
//! whitespace and insists on the exact token count and width, so a truncated
//! or padded file is rejected instead of being reinterpreted. Signatures may
//! also arrive as all leaves concatenated into one fixed-width hex string.

use crate::error::{Error, Result};
use zeroize::Zeroizing;

/// Encode `bytes` as `leaf_bytes`-sized hex tokens, `per_line` tokens per line.
///
/// The output buffer is sized up front and wiped on drop, so secret leaves
/// never leave stray copies behind in reallocated memory.
pub(crate) fn encode_leaves(bytes: &[u8], leaf_bytes: usize, per_line: usize) -> Zeroizing<String> {
    let leaves = bytes.len() / leaf_bytes;
    let mut out = Zeroizing::new(String::with_capacity(leaves * (2 * leaf_bytes + 1)));
    for (i, leaf) in bytes.chunks_exact(leaf_bytes).enumerate() {
        if i % per_line != 0 {
            out.push(' ');
        }
        out.push_str(&Zeroizing::new(hex::encode(leaf)));
        if (i + 1) % per_line == 0 {
            out.push('\n');
        }
    }
    out
}

/// Decode `leaves` tokens, also accepting them run together as one string.
///
/// A lone token of exactly `leaves * leaf_bytes` bytes of hex is split at the
/// fixed leaf width. A lone token of any other length falls through to the
/// token-count check and is rejected.
pub(crate) fn decode_packed_leaves(
    text: &str,
    kind: &'static str,
    leaf_bytes: usize,
    leaves: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut tokens = text.split_ascii_whitespace();
    if let (Some(packed), None) = (tokens.next(), tokens.next()) {
        if leaves > 1 && packed.len() == 2 * leaf_bytes * leaves {
            let mut out = Zeroizing::new(vec![0u8; leaves * leaf_bytes]);
            hex::decode_to_slice(packed, &mut out[..])
                .map_err(|e| malformed(kind, format!("packed leaves: {e}")))?;
            return Ok(out);
        }
    }
    decode_leaves(text, kind, leaf_bytes, leaves)
}

/// Decode exactly `leaves` hex tokens of `leaf_bytes` bytes each.
///
/// `kind` names the object being decoded and is carried into the error.
pub(crate) fn decode_leaves(
    text: &str,
    kind: &'static str,
    leaf_bytes: usize,
    leaves: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let found = text.split_ascii_whitespace().count();
    if found != leaves {
        return Err(malformed(
            kind,
            format!("expected {leaves} tokens, found {found}"),
        ));
    }

    let mut out = Zeroizing::new(vec![0u8; leaves * leaf_bytes]);
    for (i, (token, dst)) in text
        .split_ascii_whitespace()
        .zip(out.chunks_exact_mut(leaf_bytes))
        .enumerate()
    {
        if token.len() != 2 * leaf_bytes {
            return Err(malformed(
                kind,
                format!(
                    "token {i} has {} hex digits, expected {}",
                    token.len(),
                    2 * leaf_bytes
                ),
            ));
        }
        hex::decode_to_slice(token, dst)
            .map_err(|e| malformed(kind, format!("token {i}: {e}")))?;
    }
    Ok(out)
}

fn malformed(kind: &'static str, reason: String) -> Error {
    tracing::debug!(kind, %reason, "rejected encoded lamport object");
    Error::MalformedKeyFile { kind, reason }
}
