/// Workforce: personnel registry server
///
/// Main entry point. Loads configuration and starts the HTTP server with the
/// worker management API.

use workforce::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Worker management API at /workers/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local development reads overrides from .env
    dotenvy::dotenv().ok();

    // Load configuration (defaults to 0.0.0.0:3001 and data/workforce.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
