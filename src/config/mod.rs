//! Configuration module for the Arteterapia backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid ARTE_BIND_ADDR format: {value}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("Invalid ARTE_LOG_FORMAT '{0}', expected 'text' or 'json'")]
    LogFormat(String),
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional pre-shared key guarding every route except `/health`
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Default log filter (trace, debug, info, warn, error); `RUST_LOG` wins when set
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("ARTE_API_PSK").ok().filter(|k| !k.is_empty());

        let db_path = env::var("ARTE_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_value =
            env::var("ARTE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let log_level = env::var("ARTE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("ARTE_LOG_FORMAT") {
            Err(_) => LogFormat::Text,
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "" | "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::LogFormat(value)),
            },
        };

        Ok(Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
