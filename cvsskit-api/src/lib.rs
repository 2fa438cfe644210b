// ---------------------------------------------------------------------------
// REST API server
// ---------------------------------------------------------------------------
//
// Exposes the scoring pipeline over HTTP. The router carries no state:
// every request is an independent pure computation.

pub mod error;
mod routes;

use std::net::SocketAddr;

/// Configuration for the API server.
pub struct ApiConfig {
    pub listen_addr: SocketAddr,
}

/// Build the axum Router (useful for testing).
pub fn build_router() -> axum::Router {
    routes::build_router()
}

/// Start the API server and block until shutdown (Ctrl+C).
pub async fn start_server(config: ApiConfig) -> anyhow::Result<()> {
    let app = build_router();
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
