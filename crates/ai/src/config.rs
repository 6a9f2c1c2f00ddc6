//! Search configuration.
//!
//! Loaded from JSON; missing fields fall back to [`SearchConfig::default`].
//!
//! ```json
//! { "depth": 3, "log_evaluation": true }
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::types::{DEFAULT_DEPTH, MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies.
    pub depth: u32,
    /// Emit a per-term evaluation breakdown of the root position with each search.
    pub log_evaluation: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            log_evaluation: false,
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}
