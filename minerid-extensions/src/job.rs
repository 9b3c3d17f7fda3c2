//! Job data supplied alongside a MinerID document.
//!
//! Each field is optional; which ones are present decides which extensions
//! get built. Field names follow the node's RPC output so captured
//! `getminingcandidate` and `getinfo` responses deserialize as-is.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Everything known about the block template being mined, all optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JobData {
    /// Block template from `getminingcandidate`.
    #[serde(
        default,
        rename = "miningCandidate",
        alias = "blockTemplate",
        skip_serializing_if = "Option::is_none"
    )]
    pub block_template: Option<BlockTemplate>,

    /// Node policy snapshot from `getinfo`.
    #[serde(
        default,
        rename = "getInfo",
        alias = "policyInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub policy_info: Option<NodeInfo>,

    /// Fee schedule, echoed verbatim.
    #[serde(
        default,
        rename = "feeSpec",
        alias = "feeSchedule",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_schedule: Option<serde_json::Value>,

    /// Hex coinbase transaction bytes carried with the job.
    ///
    /// Used for blockbind when the caller doesn't pass coinbase bytes
    /// explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coinbase2: Option<String>,
}

impl JobData {
    /// True when no input is present at all.
    pub fn is_empty(&self) -> bool {
        self.block_template.is_none()
            && self.policy_info.is_none()
            && self.fee_schedule.is_none()
            && self.coinbase2.is_none()
    }

    /// Coinbase bytes to bind: `explicit` if non-empty, else `coinbase2`.
    pub fn coinbase_hex<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit
            .filter(|s| !s.is_empty())
            .or(self.coinbase2.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Block template fields read by the blockinfo and blockbind builders.
///
/// Hashes stay as strings here; they are only parsed by the blockbind
/// builder, so a malformed hash cannot stop blockinfo from being produced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BlockTemplate {
    /// Candidate identifier assigned by the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Previous block hash, display-order hex
    #[serde(
        default,
        rename = "prevhash",
        alias = "prevBlockHash",
        skip_serializing_if = "Option::is_none"
    )]
    pub prev_hash: Option<String>,

    /// Coinbase Merkle branch, display-order hex, deepest level first
    #[serde(
        default,
        rename = "merkleProof",
        skip_serializing_if = "Option::is_none"
    )]
    pub merkle_proof: Option<Vec<String>>,

    /// Block height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,

    /// Number of transactions, coinbase included
    #[serde(default, rename = "num_tx", skip_serializing_if = "Option::is_none")]
    pub num_tx: Option<u64>,

    /// Serialized size of all transactions except the coinbase
    #[serde(
        default,
        rename = "sizeWithoutCoinbase",
        skip_serializing_if = "Option::is_none"
    )]
    pub size_without_coinbase: Option<u64>,
}

/// The `getinfo` fields that feed the minerparams extension.
///
/// Sizes are kept as raw JSON numbers. Nodes write the `i64::MAX`
/// "unlimited" sentinel as an integer, but float-based producers write it as
/// `9.223372036854776e18`; both must parse here. Conversion to `u64` happens
/// in the minerparams builder, so a bad value only costs that one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxblocksize: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxminedblocksize: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxstackmemoryusagepolicy: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxstackmemoryusageconsensus: Option<Number>,
}
