//! Tracing bootstrap shared by the service binaries.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise JSON structured logging filtered by `RUST_LOG`.
///
/// Safe to call more than once; a failed re-initialisation is logged through
/// whichever subscriber won the race.
pub fn init() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
