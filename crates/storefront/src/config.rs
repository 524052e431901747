//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MYSTORE_CATALOG_URL` - Base URL of the remote catalog API
//!
//! ## Optional
//! - `MYSTORE_CART_DIR` - Directory holding the persisted cart blob
//!   (default: `mystore` under the platform temp dir)
//! - `MYSTORE_USER_AGENT` - User-Agent header for catalog requests
//!   (default: `mystore/<crate version>`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the remote catalog API.
    pub catalog_url: Url,
    /// Directory holding the persisted cart blob.
    pub cart_dir: PathBuf,
    /// User-Agent header sent with catalog requests.
    pub user_agent: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_url = parse_catalog_url(&get_required_env("MYSTORE_CATALOG_URL")?)?;

        let cart_dir = get_optional_env("MYSTORE_CART_DIR")
            .map_or_else(default_cart_dir, PathBuf::from);

        let user_agent = get_env_or_default(
            "MYSTORE_USER_AGENT",
            concat!("mystore/", env!("CARGO_PKG_VERSION")),
        );

        Ok(Self {
            catalog_url,
            cart_dir,
            user_agent,
        })
    }
}

/// Default location for the persisted cart when none is configured.
fn default_cart_dir() -> PathBuf {
    std::env::temp_dir().join("mystore")
}

/// Validate the catalog base URL from `MYSTORE_CATALOG_URL`.
fn parse_catalog_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| {
        ConfigError::InvalidEnvVar("MYSTORE_CATALOG_URL".to_owned(), e.to_string())
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
