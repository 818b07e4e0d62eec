use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use sympta_audit::PredictionLog;
use sympta_core::paths;
use sympta_store::StatsStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The statistics store and prediction log are the only shared mutable
/// resources; each sits behind its own mutex so concurrent classifications
/// serialize their read-modify-write and append cycles.
#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<Mutex<StatsStore>>,
    pub log: Arc<Mutex<PredictionLog>>,
}

impl AppState {
    /// Open the backing files under `data_dir`, creating them as needed.
    pub async fn open(data_dir: &Path) -> eyre::Result<Self> {
        let stats = StatsStore::open(paths::stats_record(data_dir)).await?;
        let log = PredictionLog::open(paths::prediction_log(data_dir)).await?;
        Ok(Self {
            stats: Arc::new(Mutex::new(stats)),
            log: Arc::new(Mutex::new(log)),
        })
    }
}
