//! Logging setup shared by binaries and tests.
//!
//! Everything here emits through `tracing`; this crate only decides where the
//! output goes and what gets through. Command handlers log state changes at
//! `info`, idempotent skips at `debug`, tolerated anomalies at `warn` and
//! failing event handlers at `error`.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: JSON lines, filtered by `RUST_LOG`
/// (default `info`).
///
/// Callable from every test; only the first call installs anything.
pub fn init() {
    init_with_default_filter("info");
}

/// Like [`init`], with an explicit fallback filter for when `RUST_LOG` is
/// unset.
pub fn init_with_default_filter(default: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .try_init();
}
