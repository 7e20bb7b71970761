//! Encounter Engine - Backend API for balancing tabletop combat encounters
//!
//! The Engine is the backend server that:
//! - Serves a searchable creature catalog
//! - Holds encounter drafts (a party plus a roster of creatures) in memory
//! - Recomputes encounter strength, total value and difficulty on every change
//! - Analyzes roster composition against per-hero organization guidelines

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encounter_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Encounter Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    match &config.catalog_path {
        Some(path) => tracing::info!("  Catalog: {}", path.display()),
        None => tracing::info!("  Catalog: bundled"),
    }
    tracing::info!(
        "  High-level warning margin: {}",
        config.analysis.high_level_margin
    );

    // Initialize application state
    let state = Arc::new(AppState::new(config)?);
    tracing::info!(
        "Application state initialized ({} creatures)",
        state.catalog_service.len()
    );
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(http::create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

async fn health_check() -> &'static str {
    "OK"
}
