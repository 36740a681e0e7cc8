mod observability_config;
mod redirect_config;

pub mod defaults;

pub use observability_config::ObservabilityConfig;
pub use redirect_config::RedirectConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CampaignResult, ConfigError};

/// Workspace configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub redirect: RedirectConfig,
    pub observability: ObservabilityConfig,
}

impl CampaignConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> CampaignResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.redirect.validate()?;
        Ok(config)
    }
}
