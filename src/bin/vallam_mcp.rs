//! Vallam MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the student-assistant
//! search and fetch operations as tools for MCP clients.

use std::sync::Arc;
use vallam::core::config::Config;
use vallam::core::services::Services;
use vallam::mcp::McpServer;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    init_logging();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    // Create services
    let services = match Services::new(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            eprintln!("Failed to initialize services: {e}");
            std::process::exit(1);
        }
    };

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
