//! Vallam HTTP server entry point
//!
//! Starts the REST API server for the Vallam student-assistant
//! adapter.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vallam::core::config::Config;
use vallam::core::services::Services;
use vallam::http::{self, middleware as http_middleware};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vallam=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vallam student-assistant adapter");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;

    // Log configuration details
    config.log_config();

    // Create shared services
    let services = Arc::new(Services::new(config.clone())?);

    // Build the API router
    let app = Router::new()
        // Health check endpoint
        .route("/health", get(http::health_handler))
        // Adapter endpoints
        .route("/mcp/search", post(http::search_handler))
        .route("/mcp/fetch/:student_id", get(http::fetch_handler))
        // Add middleware
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
