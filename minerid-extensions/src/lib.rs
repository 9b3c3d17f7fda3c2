//! MinerID block-template extensions.
//!
//! Builds the optional `extensions` object of a MinerID coinbase document:
//! `blockbind` (Merkle root binding the document to one block template),
//! `blockinfo`, `minerparams` and `feeSpec`. Everything here is pure and
//! synchronous; callers may assemble documents concurrently.

pub mod config;
pub mod digest;
pub mod document;
pub mod error;
pub mod extensions;
pub mod job;
pub mod merkle;
pub mod tracing;

#[cfg(test)]
mod test_data;

pub use config::{AssemblerConfig, PolicyNumbers};
pub use digest::ByteDigest;
pub use document::{MinerIdDocument, add_extensions};
pub use error::InvalidInput;
pub use extensions::{ExtensionKind, ExtensionsDocument, assemble};
pub use job::{BlockTemplate, JobData, NodeInfo};
