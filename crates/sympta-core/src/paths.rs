//! Data-file path conventions.
//!
//! Pure path functions — no I/O. These define the canonical layout of the
//! sympta data directory.

use std::path::{Path, PathBuf};

/// The durable statistics record.
pub fn stats_record(data_dir: &Path) -> PathBuf {
    data_dir.join("stats.json")
}

/// The append-only prediction log (JSON Lines).
pub fn prediction_log(data_dir: &Path) -> PathBuf {
    data_dir.join("prediction_log.jsonl")
}
