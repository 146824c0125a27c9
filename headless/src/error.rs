use std::path::PathBuf;

use game_core::ConfigError;
use thiserror::Error;

/// Startup failures of the headless driver
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("bad argument: {0}")]
    Args(String),

    #[error("failed to encode snapshot: {0}")]
    Output(#[source] serde_json::Error),
}
