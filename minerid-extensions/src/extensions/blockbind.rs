//! BlockBind extension: ties a MinerID document to one block template.
//!
//! The record carries the Merkle root the block header would contain if it
//! were built from the given coinbase transaction and template, together with
//! the template's previous block hash. Anyone holding the block can recompute
//! both and check that the document was signed for that exact template.

use serde::{Deserialize, Serialize};

use crate::digest::ByteDigest;
use crate::error::{InvalidInput, decode_hex};
use crate::job::BlockTemplate;
use crate::merkle;

/// How the Merkle leaf for the coinbase transaction is obtained.
#[derive(Debug, Clone, Copy)]
pub enum CoinbaseLeaf<'a> {
    /// Serialized coinbase transaction; its txid is SHA-256d of these bytes.
    Transaction(&'a [u8]),

    /// Coinbase txid already computed by the caller, internal byte order.
    Hash(ByteDigest),
}

impl CoinbaseLeaf<'_> {
    /// The coinbase txid in internal byte order.
    pub fn txid(&self) -> ByteDigest {
        match self {
            Self::Transaction(bytes) => ByteDigest::sha256d(bytes),
            Self::Hash(hash) => *hash,
        }
    }
}

/// The `blockbind` extension record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockBindRecord {
    modified_merkle_root: ByteDigest,
    prev_block_hash: ByteDigest,
}

impl BlockBindRecord {
    /// Recompute the Merkle root for `leaf` and package it with
    /// `prev_block_hash`.
    pub fn new(
        leaf: CoinbaseLeaf<'_>,
        prev_block_hash: ByteDigest,
        merkle_proof: &[ByteDigest],
    ) -> Self {
        Self {
            modified_merkle_root: merkle::recombine(leaf.txid(), merkle_proof),
            prev_block_hash,
        }
    }

    /// Merkle root of the template with this coinbase.
    pub fn modified_merkle_root(&self) -> ByteDigest {
        self.modified_merkle_root
    }

    /// Previous block hash, copied from the template.
    pub fn prev_block_hash(&self) -> ByteDigest {
        self.prev_block_hash
    }
}

/// Build a record from hex-encoded coinbase transaction bytes.
///
/// Fails with [`InvalidInput`] if the hex is malformed or odd-length; no
/// record is produced in that case.
pub fn build(
    coinbase_hex: &str,
    prev_block_hash: ByteDigest,
    merkle_proof: &[ByteDigest],
) -> Result<BlockBindRecord, InvalidInput> {
    let coinbase = decode_hex(coinbase_hex)?;
    Ok(BlockBindRecord::new(
        CoinbaseLeaf::Transaction(&coinbase),
        prev_block_hash,
        merkle_proof,
    ))
}

/// Build a record from an already-computed coinbase txid.
pub fn build_from_coinbase_hash(
    coinbase_hash: ByteDigest,
    prev_block_hash: ByteDigest,
    merkle_proof: &[ByteDigest],
) -> BlockBindRecord {
    BlockBindRecord::new(CoinbaseLeaf::Hash(coinbase_hash), prev_block_hash, merkle_proof)
}

/// Build from job inputs, or `None` if a prerequisite is missing.
///
/// Needs non-empty coinbase bytes plus the template's previous block hash and
/// Merkle proof.
pub(super) fn from_job(
    coinbase_hex: Option<&str>,
    template: Option<&BlockTemplate>,
) -> Result<Option<BlockBindRecord>, InvalidInput> {
    let Some(coinbase_hex) = coinbase_hex.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let Some(template) = template else {
        return Ok(None);
    };
    let (Some(prev_hash), Some(proof)) = (&template.prev_hash, &template.merkle_proof) else {
        return Ok(None);
    };

    let prev_block_hash = ByteDigest::from_display_hex(prev_hash)?;
    let merkle_proof = merkle::parse_branch(proof.as_slice())?;

    build(coinbase_hex, prev_block_hash, &merkle_proof).map(Some)
}
