/// Configuration management for the worker registry
///
/// Handles server configuration, database location, and the client's API base URL.
/// Every value has an environment variable override for container deployment.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path (default: "data/workforce.db"), or ":memory:"
    pub path: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

/// Registry client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the worker API (e.g., "http://localhost:3001")
    pub api_url: String,
}

impl Config {
    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("WORKFORCE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("WORKFORCE_PORT")
                    .unwrap_or_else(|_| "3001".to_string())
                    .parse()
                    .unwrap_or(3001),
            },
            database: DatabaseConfig {
                path: std::env::var("WORKFORCE_DATABASE_PATH")
                    .unwrap_or_else(|_| "data/workforce.db".to_string()),
                max_connections: std::env::var("WORKFORCE_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: std::env::var("WORKFORCE_API_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
        }
    }
}
