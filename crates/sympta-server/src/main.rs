use std::env;
use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use sympta_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for the container log collector
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let data_dir = env::var("SYMPTA_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = AppState::open(Path::new(&data_dir)).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, data_dir = %data_dir, "listening");

    axum::serve(listener, sympta_server::app(state)).await?;
    Ok(())
}
