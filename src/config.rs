//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_PUBLIC_HOST, DEFAULT_PUBLIC_SCHEME,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub links: LinkConfig,
    /// `None` runs the service against the in-memory store
    pub database: Option<DatabaseConfig>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Settings for absolute links emitted in Location and pagination headers
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub scheme: String,
    /// Used when a request arrives without a Host header
    pub fallback_host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            links: LinkConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl LinkConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let scheme = env::var("PUBLIC_SCHEME").unwrap_or_else(|_| DEFAULT_PUBLIC_SCHEME.to_string());
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidValue("PUBLIC_SCHEME".to_string()));
        }

        Ok(Self {
            scheme,
            fallback_host: env::var("PUBLIC_HOST")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_HOST.to_string()),
        })
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_PUBLIC_SCHEME.to_string(),
            fallback_host: DEFAULT_PUBLIC_HOST.to_string(),
        }
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(url) = env::var("DATABASE_URL") else {
            return Ok(None);
        };

        Ok(Some(Self {
            url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        }))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
