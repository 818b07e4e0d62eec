use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("log read error: {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("log append error: {path}: {source}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
}
