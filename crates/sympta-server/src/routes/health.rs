use axum::Json;

/// Liveness/welcome endpoint; also the target of load-balancer health checks.
pub async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Medical diagnosis API - welcome"
    }))
}
