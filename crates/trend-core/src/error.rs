use std::path::PathBuf;

use crate::data::DataError;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Failed to read dataset file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for configuration and dataset loading
pub type Result<T> = std::result::Result<T, CoreError>;
