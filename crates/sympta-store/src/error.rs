use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("state file corrupt: {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error: {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write error: {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
