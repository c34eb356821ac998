//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    oauth_providers, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_FACEBOOK_AUTHORIZE_URL,
    DEFAULT_GOOGLE_AUTHORIZE_URL, DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_OAUTH_REDIRECT_URL,
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
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub oauth: OAuthConfig,
    pub catalog: CatalogSource,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// OAuth redirect configuration
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub google_authorize_url: String,
    pub facebook_authorize_url: String,
    /// Where the provider sends the user back after consent
    pub redirect_url: String,
}

/// Which browsing read-model the service mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Problems, patterns and companies come from the content tables
    Database,
    /// The built-in sample catalogue
    Sample,
}

impl FromStr for CatalogSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "db" => Ok(Self::Database),
            "sample" | "static" => Ok(Self::Sample),
            _ => Err(ConfigError::InvalidValue("CATALOG_SOURCE".to_string())),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            oauth: OAuthConfig::from_env(),
            catalog: env::var("CATALOG_SOURCE")
                .map(|v| v.parse::<CatalogSource>())
                .unwrap_or(Ok(CatalogSource::Database))?,
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

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl OAuthConfig {
    fn from_env() -> Self {
        Self {
            google_authorize_url: env::var("OAUTH_GOOGLE_AUTHORIZE_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_AUTHORIZE_URL.to_string()),
            facebook_authorize_url: env::var("OAUTH_FACEBOOK_AUTHORIZE_URL")
                .unwrap_or_else(|_| DEFAULT_FACEBOOK_AUTHORIZE_URL.to_string()),
            redirect_url: env::var("OAUTH_REDIRECT_URL")
                .unwrap_or_else(|_| DEFAULT_OAUTH_REDIRECT_URL.to_string()),
        }
    }

    /// Authorize endpoint for a provider, if the provider is known
    pub fn authorize_url(&self, provider: &str) -> Option<&str> {
        match provider {
            oauth_providers::GOOGLE => Some(&self.google_authorize_url),
            oauth_providers::FACEBOOK => Some(&self.facebook_authorize_url),
            _ => None,
        }
    }
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            google_authorize_url: DEFAULT_GOOGLE_AUTHORIZE_URL.to_string(),
            facebook_authorize_url: DEFAULT_FACEBOOK_AUTHORIZE_URL.to_string(),
            redirect_url: DEFAULT_OAUTH_REDIRECT_URL.to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
