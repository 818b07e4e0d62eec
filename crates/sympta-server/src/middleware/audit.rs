use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Request logging middleware.
///
/// Logs every API request as a structured event with a per-request
/// correlation id. Durable audit entries for classifications are written
/// separately via the prediction log.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        %request_id,
        method = %method,
        path = %uri,
        status = status,
        "api_request"
    );

    response
}
