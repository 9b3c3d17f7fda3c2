//! BlockInfo extension: transaction count and size of the template.

use serde::{Deserialize, Serialize};

use crate::job::BlockTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfoRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_without_coinbase: Option<u64>,
}

impl From<&BlockTemplate> for BlockInfoRecord {
    fn from(template: &BlockTemplate) -> Self {
        Self {
            tx_count: template.num_tx,
            size_without_coinbase: template.size_without_coinbase,
        }
    }
}
