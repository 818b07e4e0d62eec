use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// The diagnosis was computed but the statistics record could not be
    /// updated; the caller must not assume the call was counted.
    Unrecorded(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unrecorded(msg) => {
                tracing::error!("statistics update failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "the classification could not be fully recorded".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sympta_store::error::StoreError> for ApiError {
    fn from(e: sympta_store::error::StoreError) -> Self {
        ApiError::Unrecorded(e.to_string())
    }
}

impl From<sympta_audit::error::AuditError> for ApiError {
    fn from(e: sympta_audit::error::AuditError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
