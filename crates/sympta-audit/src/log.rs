use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use sympta_core::models::prediction::PredictionRecord;

use crate::error::AuditError;

/// The append-only prediction log: one JSON object per line, in call order.
///
/// Entries are never rewritten or deleted. Callers must serialize concurrent
/// appends (the server holds the log behind a `tokio::sync::Mutex`).
pub struct PredictionLog {
    path: PathBuf,
}

impl PredictionLog {
    /// Open the log at `path`, creating parent directories as needed.
    /// The file itself is created lazily on first append.
    pub async fn open(path: PathBuf) -> Result<Self, AuditError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AuditError::Append {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(Self { path })
    }

    /// Durably append one entry.
    pub async fn append(&mut self, entry: &PredictionRecord) -> Result<(), AuditError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| AuditError::Append {
                path: self.path.clone(),
                source: e,
            })?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| AuditError::Append {
                path: self.path.clone(),
                source: e,
            })?;
        file.flush().await.map_err(|e| AuditError::Append {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Return the last `n` entries (or fewer), in written order.
    ///
    /// Lines that fail to parse — e.g. a line torn by a crash mid-append —
    /// are skipped with a warning; every intact entry is independently
    /// parseable.
    pub async fn tail(&self, n: usize) -> Result<Vec<PredictionRecord>, AuditError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AuditError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let mut entries = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<PredictionRecord>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "skipping malformed log line");
                }
            }
        }

        let skip = entries.len().saturating_sub(n);
        Ok(entries.split_off(skip))
    }
}
