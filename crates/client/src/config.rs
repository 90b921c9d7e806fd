//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WMS_GRAPHQL_URL` - GraphQL endpoint (default: UAT backend)
//! - `WMS_REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// GraphQL endpoint of the UAT backend, used when `WMS_GRAPHQL_URL` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://uat-api.vmodel.app/wms/graphql/";

/// Client identifier sent with every request.
pub const USER_AGENT: &str = "WholesalersMarketplace/1.0";

/// Per-request timeout applied when `WMS_REQUEST_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Marketplace API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint URL.
    pub endpoint: Url,
    /// Bounded per-request timeout; a timed-out request fails only itself.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let endpoint = get_env_or_default("WMS_GRAPHQL_URL", DEFAULT_ENDPOINT);
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| ConfigError::InvalidEnvVar("WMS_GRAPHQL_URL".to_string(), e.to_string()))?;

        let timeout_secs = match std::env::var("WMS_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("WMS_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a configuration pointing at an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint is not a valid URL.
    pub fn for_endpoint(endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ConfigError::InvalidEnvVar("endpoint".to_string(), e.to_string()))?;
        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
