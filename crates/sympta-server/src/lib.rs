//! sympta-server
//!
//! The HTTP surface: axum router, shared state, and error mapping for the
//! diagnosis, simplified-diagnosis, and report endpoints.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::welcome))
        .route("/api/diagnosis", post(routes::diagnosis::diagnose))
        .route(
            "/api/simplified-diagnosis",
            post(routes::diagnosis::simplified_diagnose),
        )
        .route("/api/report", get(routes::report::report))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
