//! Assembler configuration.
//!
//! Defaults suit most callers; [`AssemblerConfig::from_env`] lets the
//! `MINERID_POLICY_NUMBERS` environment variable override them.

use std::env;

use strum::{Display, EnumString};

use crate::tracing::prelude::*;

/// Environment variable selecting [`PolicyNumbers`].
pub const POLICY_NUMBERS_ENV: &str = "MINERID_POLICY_NUMBERS";

/// How minerparams size fields are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PolicyNumbers {
    /// Exact 64-bit integers. `9223372036854775807` stays as written.
    #[default]
    Exact,

    /// IEEE-754 doubles, matching consumers that parse JSON numbers as
    /// floats. The `i64::MAX` sentinel becomes `9.223372036854776e18`.
    Float,
}

#[derive(Debug, Clone, Default)]
pub struct AssemblerConfig {
    /// Numeric encoding for minerparams. Exact unless a consumer needs
    /// bit-compatibility with float-based documents.
    pub policy_numbers: PolicyNumbers,
}

impl AssemblerConfig {
    /// Defaults, overridden by `MINERID_POLICY_NUMBERS` if set.
    ///
    /// An unrecognized value is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var(POLICY_NUMBERS_ENV) {
            match value.parse() {
                Ok(mode) => config.policy_numbers = mode,
                Err(_) => warn!(
                    value = %value,
                    default = %config.policy_numbers,
                    "Unrecognized {}, using default", POLICY_NUMBERS_ENV
                ),
            }
        }

        config
    }
}
