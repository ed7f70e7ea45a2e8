//! Logging setup.

use crate::errors::RuntimeError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global subscriber, writing to stderr so stdout carries only
/// the report.
pub fn init_tracing() -> Result<(), RuntimeError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| RuntimeError::Logging(e.to_string()))
}
