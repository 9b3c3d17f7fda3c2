//! Merkle root recomputation from a leaf and its branch.
//!
//! A Merkle proof for the coinbase transaction is the list of sibling hashes
//! met while climbing from the leftmost leaf to the root. Because the coinbase
//! is always the leftmost leaf, every step hashes `accumulator || sibling`;
//! no left/right flags are needed.

use crate::digest::ByteDigest;
use crate::error::InvalidInput;

/// Climb the Merkle tree from `leaf` using `siblings`, returning the root.
///
/// Siblings are consumed in order, deepest level first. Each step forms the
/// 64-byte concatenation of the running hash and the sibling, both in internal
/// byte order, and SHA-256d's it. An empty branch returns `leaf` unchanged,
/// which is the root of a single-transaction block.
pub fn recombine(leaf: ByteDigest, siblings: &[ByteDigest]) -> ByteDigest {
    siblings.iter().fold(leaf, |acc, sibling| {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(acc.as_bytes());
        buf[32..].copy_from_slice(sibling.as_bytes());
        ByteDigest::sha256d(&buf)
    })
}

/// Parse a branch of display-order hex strings.
///
/// Order is preserved exactly; the branch is never sorted or deduplicated.
pub fn parse_branch<S: AsRef<str>>(siblings: &[S]) -> Result<Vec<ByteDigest>, InvalidInput> {
    siblings
        .iter()
        .map(|s| ByteDigest::from_display_hex(s.as_ref()))
        .collect()
}

/// [`recombine`] over display-order hex strings, as found in RPC payloads.
pub fn recombine_display_hex<S: AsRef<str>>(
    leaf: &str,
    siblings: &[S],
) -> Result<String, InvalidInput> {
    let leaf = ByteDigest::from_display_hex(leaf)?;
    let siblings = parse_branch(siblings)?;
    Ok(recombine(leaf, &siblings).to_display_hex())
}
