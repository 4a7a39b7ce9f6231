//! Logging setup

use crate::config::{DashboardConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber for the embedding application
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// when a global subscriber was already installed, which leaves the
/// existing one in place.
pub fn init_tracing(config: &DashboardConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}
