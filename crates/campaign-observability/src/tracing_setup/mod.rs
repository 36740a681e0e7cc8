//! Global `tracing` subscriber installation.

pub mod spans;

use campaign_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when set, else from the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(campaign_core::constants::DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
