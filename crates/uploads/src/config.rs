//! Uploads service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WMS_UPLOADS_HOST` - Bind address (default: 127.0.0.1)
//! - `WMS_UPLOADS_PORT` - Listen port (default: 8000)
//! - `WMS_MEDIA_ROOT` - Directory stored files live under (default: media)
//! - `WMS_PUBLIC_BASE_URL` - Base URL used when building `image_url`
//!   (default: `http://<host>:<port>`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Uploads service configuration.
#[derive(Debug, Clone)]
pub struct UploadsConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Directory stored files live under; created on startup if missing.
    pub media_root: PathBuf,
    /// Public base URL returned to clients in `image_url`.
    pub public_base_url: String,
}

impl UploadsConfig {
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

        let host = get_env_or_default("WMS_UPLOADS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WMS_UPLOADS_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("WMS_UPLOADS_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WMS_UPLOADS_PORT".to_string(), e.to_string())
            })?;
        let media_root = PathBuf::from(get_env_or_default("WMS_MEDIA_ROOT", "media"));
        let public_base_url = std::env::var("WMS_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://{host}:{port}"));

        Ok(Self {
            host,
            port,
            media_root,
            public_base_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
