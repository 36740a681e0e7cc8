//! Default values shared by the config sections.

use crate::constants;

pub const DEFAULT_MAX_DEPTH: usize = constants::MAX_REDIRECT_DEPTH;
pub const DEFAULT_LOG_REDIRECTIONS: bool = true;
pub const DEFAULT_LOG_LEVEL: &str = constants::DEFAULT_LOG_LEVEL;
pub const DEFAULT_JSON_LOGS: bool = false;
