//! MinerID extension records and the assembler that decides which exist.
//!
//! Each record kind has its own prerequisites and is built independently:
//!
//! | record        | needs                                   |
//! |---------------|-----------------------------------------|
//! | `blockbind`   | coinbase bytes *and* block template     |
//! | `blockinfo`   | block template                          |
//! | `minerparams` | node policy info                        |
//! | `feeSpec`     | fee schedule                            |
//!
//! A missing prerequisite simply means no record. A builder that fails on
//! malformed input is logged and skipped; the other records still go out.

pub mod blockbind;
pub mod blockinfo;
pub mod feespec;
pub mod minerparams;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::config::AssemblerConfig;
use crate::error::InvalidInput;
use crate::job::JobData;
use crate::tracing::prelude::*;

pub use blockbind::BlockBindRecord;
pub use blockinfo::BlockInfoRecord;
pub use feespec::FeeSpecRecord;
pub use minerparams::MinerParamsRecord;

/// The fixed set of extension records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ExtensionKind {
    #[strum(serialize = "blockbind")]
    BlockBind,
    #[strum(serialize = "blockinfo")]
    BlockInfo,
    #[strum(serialize = "minerparams")]
    MinerParams,
    #[strum(serialize = "feeSpec")]
    FeeSpec,
}

/// One built record.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    BlockBind(BlockBindRecord),
    BlockInfo(BlockInfoRecord),
    MinerParams(MinerParamsRecord),
    FeeSpec(FeeSpecRecord),
}

impl Extension {
    pub fn kind(&self) -> ExtensionKind {
        match self {
            Self::BlockBind(_) => ExtensionKind::BlockBind,
            Self::BlockInfo(_) => ExtensionKind::BlockInfo,
            Self::MinerParams(_) => ExtensionKind::MinerParams,
            Self::FeeSpec(_) => ExtensionKind::FeeSpec,
        }
    }
}

impl ExtensionKind {
    /// Build this kind's record if its inputs are present.
    ///
    /// Blockbind binds `coinbase_hex` when given, else the job's `coinbase2`.
    pub fn build(
        self,
        coinbase_hex: Option<&str>,
        job: &JobData,
        config: &AssemblerConfig,
    ) -> Result<Option<Extension>, InvalidInput> {
        let extension = match self {
            Self::BlockBind => {
                let coinbase_hex = job.coinbase_hex(coinbase_hex);
                blockbind::from_job(coinbase_hex, job.block_template.as_ref())?
                    .map(Extension::BlockBind)
            }
            Self::BlockInfo => job
                .block_template
                .as_ref()
                .map(|t| Extension::BlockInfo(t.into())),
            Self::MinerParams => job
                .policy_info
                .as_ref()
                .map(|info| MinerParamsRecord::from_node_info(info, config.policy_numbers))
                .transpose()?
                .map(Extension::MinerParams),
            Self::FeeSpec => job
                .fee_schedule
                .as_ref()
                .map(|s| Extension::FeeSpec(s.into())),
        };
        Ok(extension)
    }
}

/// The `extensions` object of a MinerID document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExtensionsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockbind: Option<BlockBindRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockinfo: Option<BlockInfoRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minerparams: Option<MinerParamsRecord>,

    #[serde(default, rename = "feeSpec", skip_serializing_if = "Option::is_none")]
    pub fee_spec: Option<FeeSpecRecord>,
}

impl ExtensionsDocument {
    pub fn is_empty(&self) -> bool {
        self.kinds().next().is_none()
    }

    /// Kinds present in this document.
    pub fn kinds(&self) -> impl Iterator<Item = ExtensionKind> + '_ {
        ExtensionKind::iter().filter(|kind| match kind {
            ExtensionKind::BlockBind => self.blockbind.is_some(),
            ExtensionKind::BlockInfo => self.blockinfo.is_some(),
            ExtensionKind::MinerParams => self.minerparams.is_some(),
            ExtensionKind::FeeSpec => self.fee_spec.is_some(),
        })
    }

    /// Store a record, replacing any previous one of the same kind.
    pub fn insert(&mut self, extension: Extension) {
        match extension {
            Extension::BlockBind(r) => self.blockbind = Some(r),
            Extension::BlockInfo(r) => self.blockinfo = Some(r),
            Extension::MinerParams(r) => self.minerparams = Some(r),
            Extension::FeeSpec(r) => self.fee_spec = Some(r),
        }
    }
}

/// Build every record whose inputs are present.
///
/// An empty or absent `coinbase_hex` falls back to the job's `coinbase2`;
/// with neither, blockbind alone is skipped.
pub fn assemble(
    coinbase_hex: Option<&str>,
    job: &JobData,
    config: &AssemblerConfig,
) -> ExtensionsDocument {
    let mut doc = ExtensionsDocument::default();

    for kind in ExtensionKind::iter() {
        match kind.build(coinbase_hex, job, config) {
            Ok(Some(extension)) => {
                debug_assert_eq!(extension.kind(), kind);
                trace!(extension = %kind, "Built extension");
                doc.insert(extension);
            }
            Ok(None) => debug!(extension = %kind, "Inputs not present, skipping extension"),
            Err(e) => warn!(extension = %kind, error = %e, "Failed to build extension"),
        }
    }

    doc
}
