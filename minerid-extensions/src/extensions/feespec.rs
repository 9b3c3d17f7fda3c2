//! FeeSpec extension: the miner's fee schedule, echoed verbatim.

use serde::{Deserialize, Serialize};

/// Opaque fee schedule; whatever JSON the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FeeSpecRecord(pub serde_json::Value);

impl From<&serde_json::Value> for FeeSpecRecord {
    fn from(schedule: &serde_json::Value) -> Self {
        Self(schedule.clone())
    }
}
