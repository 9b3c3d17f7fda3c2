//! Logging setup and the macros used throughout the crate.
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary (or to whatever application embeds this crate).

use time::UtcOffset;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod prelude {
    pub use ::tracing::{debug, error, info, trace, warn};
}

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install a stderr subscriber with local-time timestamps.
///
/// Honors `RUST_LOG`. Falls back to UTC when the local offset can't be
/// determined (e.g. multi-threaded process on some platforms).
pub fn init() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        offset,
        format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
    );

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}
