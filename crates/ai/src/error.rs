//! Error types for the search crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::SearchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("search depth {depth} is out of range (must be 1-{max})")]
    InvalidDepth { depth: u32, max: u32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
