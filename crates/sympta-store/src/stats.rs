use std::path::PathBuf;

use sympta_core::models::diagnosis::DiagnosisCategory;
use sympta_core::models::stats::StatsRecord;

use crate::error::StoreError;
use crate::state;

/// The durable statistics store.
///
/// One JSON record, read-modified-written on every [`record`](Self::record)
/// call. Callers must serialize concurrent access (the server holds the
/// store behind a `tokio::sync::Mutex`); `record` takes `&mut self` to make
/// the exclusivity requirement explicit.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Open the store, creating a zeroed record if none exists yet.
    ///
    /// An existing record that does not parse fails here with
    /// [`StoreError::Corrupt`] rather than at the first classification.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        match state::load_state::<StatsRecord>(&path).await {
            Ok(_) => {}
            Err(StoreError::NotFound { .. }) => {
                tracing::info!(path = %path.display(), "no statistics record found, creating");
                state::save_state(&path, &StatsRecord::new()).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(Self { path })
    }

    /// Record one classification outcome: increment the category counter,
    /// push onto the recent history (trimmed to its bound), stamp the update
    /// time, and persist. Returns the updated record.
    pub async fn record(
        &mut self,
        category: DiagnosisCategory,
    ) -> Result<StatsRecord, StoreError> {
        let mut record: StatsRecord = state::load_state(&self.path).await?;
        record.apply(category, jiff::Timestamp::now());
        state::save_state(&self.path, &record).await?;
        Ok(record)
    }

    /// Read the current record without mutating it.
    pub async fn snapshot(&self) -> Result<StatsRecord, StoreError> {
        state::load_state(&self.path).await
    }
}
