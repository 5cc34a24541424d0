//! # API Configuration Module
//!
//! This module handles loading configuration for the TalentSync API server.
//! Values come from environment variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `EMAIL_SENDER`: `From` address for outgoing mail (default: "HR Team <hr@example.com>")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_EMAIL_SENDER: &str = "HR Team <hr@example.com>";

/// Configuration for the TalentSync API server
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use talentsync_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// `From` address for outgoing mail
    pub email_sender: String,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is set but cannot be parsed as a u16.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        let email_sender = lookup("EMAIL_SENDER")
            .filter(|sender| !sender.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL_SENDER.to_string());

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            email_sender,
        })
    }

    /// Returns the server address as a string, e.g. "127.0.0.1:8080"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
