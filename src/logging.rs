//! Diagnostic logging for the gator binary
//!
//! Events go to stderr through `tracing`; the filter comes from `GATOR_LOG`
//! (e.g. `GATOR_LOG=debug`) and defaults to warnings only.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "GATOR_LOG";

/// Build the filter from `GATOR_LOG`, falling back to `warn`
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Does nothing if one is already installed.
pub fn init(ansi: bool) {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
