//! The MinerID identity document that extensions are attached to.
//!
//! Only the fields this crate needs to carry through are modeled; signing
//! and verification happen elsewhere.

use serde::{Deserialize, Serialize};

use crate::config::AssemblerConfig;
use crate::extensions::{self, ExtensionsDocument};
use crate::job::JobData;
use crate::tracing::prelude::*;

/// Output that proves control of the MinerID key chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidityCheckTx {
    pub txid: String,
    pub vout: u32,
}

/// A MinerID coinbase document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinerIdDocument {
    pub version: String,
    pub height: u64,
    pub prev_miner_id: String,
    pub prev_miner_id_sig: String,
    pub miner_id: String,
    pub vctx: ValidityCheckTx,

    /// Absent (not empty) when no extension applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ExtensionsDocument>,
}

/// Assemble extensions for `job` and attach them to `doc`.
///
/// The document is left untouched when nothing applies, so it never carries
/// an empty `extensions` object.
pub fn add_extensions(
    doc: &mut MinerIdDocument,
    coinbase_hex: Option<&str>,
    job: &JobData,
    config: &AssemblerConfig,
) {
    let assembled = extensions::assemble(coinbase_hex, job, config);
    if assembled.is_empty() {
        debug!(height = doc.height, "No extensions apply");
        return;
    }

    let kinds: Vec<_> = assembled.kinds().collect();
    debug!(height = doc.height, extensions = ?kinds, "Attaching extensions");
    doc.extensions = Some(assembled);
}
