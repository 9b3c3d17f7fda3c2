//! MinerParams extension: node policy and consensus size limits.
//!
//! `getinfo` reports the limits under node-internal names; the extension
//! regroups them into the `policy` and `consensus` sections MinerID
//! consumers expect.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::config::PolicyNumbers;
use crate::error::InvalidInput;
use crate::job::NodeInfo;

/// A size limit, written as an exact integer or as a double.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PolicyValue {
    Exact(u64),
    Float(f64),
}

impl PolicyValue {
    fn encode(value: u64, numbers: PolicyNumbers) -> Self {
        match numbers {
            PolicyNumbers::Exact => Self::Exact(value),
            // Lossy above 2^53 on purpose; see PolicyNumbers::Float
            PolicyNumbers::Float => Self::Float(value as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MinerParamsRecord {
    pub policy: PolicyParams,
    pub consensus: ConsensusParams,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PolicyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockmaxsize: Option<PolicyValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxstackmemoryusagepolicy: Option<PolicyValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConsensusParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excessiveblocksize: Option<PolicyValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxstackmemoryusageconsensus: Option<PolicyValue>,
}

/// Read a size limit that may have been written as a double.
///
/// Integral doubles in `0..2^64` are accepted; anything else is rejected.
fn size_limit(field: &'static str, number: &Number) -> Result<u64, InvalidInput> {
    if let Some(value) = number.as_u64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(InvalidInput::PolicyNumber {
            field,
            value: number.to_string(),
        }),
    }
}

impl MinerParamsRecord {
    /// Regroup `getinfo` limits, failing if any present limit is not a size.
    pub fn from_node_info(info: &NodeInfo, numbers: PolicyNumbers) -> Result<Self, InvalidInput> {
        let encode = |field: &'static str, v: &Option<Number>| {
            v.as_ref()
                .map(|n| size_limit(field, n).map(|v| PolicyValue::encode(v, numbers)))
                .transpose()
        };

        Ok(Self {
            policy: PolicyParams {
                blockmaxsize: encode("maxblocksize", &info.maxblocksize)?,
                maxstackmemoryusagepolicy: encode(
                    "maxstackmemoryusagepolicy",
                    &info.maxstackmemoryusagepolicy,
                )?,
            },
            consensus: ConsensusParams {
                excessiveblocksize: encode("maxminedblocksize", &info.maxminedblocksize)?,
                maxstackmemoryusageconsensus: encode(
                    "maxstackmemoryusageconsensus",
                    &info.maxstackmemoryusageconsensus,
                )?,
            },
        })
    }
}
