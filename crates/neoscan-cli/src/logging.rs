//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; command output stays on stdout.
//! The filter comes from `NEOSCAN_LOG`, then `RUST_LOG`, then the verbosity
//! flag (`debug` with `--verbose`, `warn` otherwise).

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "NEOSCAN_LOG";

/// Build the filter for this run.
pub fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };

    std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
