//! Ankhara Engine - Backend API for AI-powered personal styling
//!
//! The engine is the backend server that:
//! - Generates the session wardrobe catalog
//! - Fetches current weather from Weatherstack
//! - Integrates with Groq for LLM-powered outfit recommendations
//! - Serves the wardrobe and recommendation API over HTTP

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ankhara_engine::infrastructure::config::AppConfig;
use ankhara_engine::infrastructure::http;
use ankhara_engine::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ankhara_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ankhara Engine");

    // Load configuration; missing API keys abort startup here
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Groq: {} ({})", config.groq_base_url, config.groq_model);
    tracing::info!("  Weatherstack: {}", config.weatherstack_base_url);
    tracing::info!("  Default city: {}", config.default_city);

    // Initialize application state (generates the session wardrobe)
    let port = config.server_port;
    let state = Arc::new(AppState::new(config));
    tracing::info!(items = state.catalog.len(), "Session wardrobe generated");

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
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server = axum::serve(listener, app);

    // Wait for shutdown signal (Ctrl+C)
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
