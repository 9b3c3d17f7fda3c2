//! Input validation errors.

use thiserror::Error;

/// Malformed input handed to a builder.
///
/// Block template data is an immutable fact about the template, so none of
/// these are worth retrying; callers either fix the input or drop the record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Odd-length hex string ({0} characters)")]
    OddLength(usize),

    #[error("Invalid hex character {c:?} at index {index}")]
    InvalidHexCharacter { c: char, index: usize },

    #[error("Invalid digest length: {actual} bytes (expected {expected})")]
    DigestLength { expected: usize, actual: usize },

    #[error("Policy field {field} is not a non-negative integer: {value}")]
    PolicyNumber { field: &'static str, value: String },
}

/// Decode a hex string, reporting failures as [`InvalidInput`].
///
/// Odd lengths are checked up front so the error carries the actual length.
pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, InvalidInput> {
    if s.len() % 2 != 0 {
        return Err(InvalidInput::OddLength(s.len()));
    }
    hex::decode(s).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            InvalidInput::InvalidHexCharacter { c, index }
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            InvalidInput::OddLength(s.len())
        }
    })
}
