//! Diagnostic logging to stderr via `tracing`.

use tracing_subscriber::EnvFilter;

/// Overrides the configured level, e.g. `JOTTER_LOG=jotter=debug`.
pub const LOG_ENV: &str = "JOTTER_LOG";

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
