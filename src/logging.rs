//! Tracing subscriber setup for binaries and tests embedding this crate.

use tracing_subscriber::EnvFilter;

/// Initializes a global tracing subscriber.
///
/// Uses `RUST_LOG` for filtering when present, `info` otherwise. Safe to call
/// more than once; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
