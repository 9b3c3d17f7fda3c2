//! 32-byte digests and their display-order hex encoding.
//!
//! Bitcoin hashes are computed over bytes in "internal" order but shown to
//! humans (and carried in RPC payloads) byte-reversed. Every conversion
//! between the two goes through [`ByteDigest::from_display_hex`] and
//! [`ByteDigest::to_display_hex`]; nothing else in the crate reverses bytes.

use std::fmt;
use std::str::FromStr;

use bitcoin::hashes::{Hash as _, sha256d};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{InvalidInput, decode_hex};

/// Length of a SHA-256d digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte hash held in internal (hashing) byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteDigest([u8; DIGEST_LEN]);

impl ByteDigest {
    /// Wrap bytes that are already in internal order.
    pub const fn from_internal(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Wrap an internal-order byte slice, rejecting anything not 32 bytes long.
    pub fn from_internal_slice(bytes: &[u8]) -> Result<Self, InvalidInput> {
        let array: [u8; DIGEST_LEN] =
            bytes.try_into().map_err(|_| InvalidInput::DigestLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Parse a display-order hex string (as printed by bitcoind).
    pub fn from_display_hex(s: &str) -> Result<Self, InvalidInput> {
        let bytes = decode_hex(s)?;
        Ok(Self::from_internal_slice(&bytes)?.reversed())
    }

    /// Encode as lowercase display-order hex.
    pub fn to_display_hex(&self) -> String {
        // sha256d::Hash displays backward, as bitcoind does
        sha256d::Hash::from_byte_array(self.0).to_string()
    }

    /// SHA-256d of `data`.
    pub fn sha256d(data: &[u8]) -> Self {
        Self(sha256d::Hash::hash(data).to_byte_array())
    }

    /// Internal-order bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The same digest with its byte order flipped.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }
}

impl FromStr for ByteDigest {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_hex(s)
    }
}

impl fmt::Display for ByteDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl fmt::Debug for ByteDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteDigest({})", self.to_display_hex())
    }
}

impl Serialize for ByteDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_hex())
    }
}

impl<'de> Deserialize<'de> for ByteDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_display_hex(&s).map_err(serde::de::Error::custom)
    }
}
