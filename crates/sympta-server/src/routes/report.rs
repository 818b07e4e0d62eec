use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use sympta_core::models::diagnosis::DiagnosisCategory;
use sympta_core::models::prediction::PredictionRecord;
use sympta_core::models::stats::{RecentPrediction, RECENT_HISTORY_LIMIT};

use crate::error::ApiError;
use crate::state::AppState;

/// The statistics snapshot merged with the tail of the prediction log.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub category_counts: BTreeMap<DiagnosisCategory, u64>,
    pub last_predictions: Vec<RecentPrediction>,
    pub last_prediction_date: Option<jiff::Timestamp>,
    pub recent_entries: Vec<PredictionRecord>,
}

/// `GET /api/report` — read-only; identical results between classifications.
pub async fn report(State(state): State<AppState>) -> Result<Json<ReportResponse>, ApiError> {
    let snapshot = {
        let stats = state.stats.lock().await;
        stats.snapshot().await?
    };
    let recent_entries = {
        let log = state.log.lock().await;
        log.tail(RECENT_HISTORY_LIMIT).await?
    };

    Ok(Json(ReportResponse {
        category_counts: snapshot.category_counts,
        last_predictions: snapshot.last_predictions,
        last_prediction_date: snapshot.last_prediction_date,
        recent_entries,
    }))
}
