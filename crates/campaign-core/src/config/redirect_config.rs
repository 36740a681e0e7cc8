use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Redirect resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Maximum redirect hops followed before giving up.
    pub max_depth: usize,
    /// Emit a debug event for every successful redirection.
    pub log_redirections: bool,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            log_redirections: defaults::DEFAULT_LOG_REDIRECTIONS,
        }
    }
}

impl RedirectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "redirect.max_depth".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
