//! HostAtlas - AWX inventory dashboard
//!
//! Main entry point for the HTTP server.

use anyhow::Context;
use hostatlas_api::utils::logging::init_tracing;
use hostatlas_api::{build_router, AppContext};
use hostatlas_infra::config;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read .env before the subscriber so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();

    init_tracing().map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(err) => tracing::debug!(error = %err, "No .env file loaded"),
    }

    let config = config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let app = build_router(AppContext::shared(config));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!(addr = %bind_addr, "HostAtlas listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HostAtlas shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
