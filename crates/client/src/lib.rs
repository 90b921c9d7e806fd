//! Wholesalers Marketplace GraphQL API client.
//!
//! # Architecture
//!
//! - Single POST endpoint, `{query, variables}` JSON envelope
//! - Query strings live in [`operations`] as named constants - one table,
//!   no duplication across tools
//! - Every failure mode is a [`ClientError`] value; HTTP 4xx/5xx and
//!   GraphQL-level errors never panic and never raise through `?` as
//!   anything other than a typed variant
//!
//! # Example
//!
//! ```rust,ignore
//! use wms_client::{ClientConfig, GraphqlClient};
//!
//! let client = GraphqlClient::new(&ClientConfig::from_env()?)?;
//! let payload = client.register(&candidate).await?;
//! if payload.success {
//!     // token is only trustworthy when non-empty
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod api;
mod client;
pub mod config;
pub mod operations;

pub use api::{
    CreateProductPayload, LoginPayload, MarketplaceApi, ProductSummary, RegisterPayload,
    UpdateUserPayload, UserInfo,
};
pub use client::GraphqlClient;
pub use config::{ClientConfig, ConfigError};

use serde::Deserialize;
use thiserror::Error;
use wms_core::ValidationError;

/// Errors that can occur when talking to the marketplace backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure or request timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-200 status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, truncated for logging by the caller.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("malformed response body: {source}")]
    Malformed {
        /// Raw body that failed to parse.
        body: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Transport succeeded but the payload reports failure: a top-level
    /// `errors` array, a `success: false` mutation result, or a missing
    /// `data` object.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQl(Vec<GraphQlError>),

    /// The payload was rejected locally before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// Whether this failure is plausibly transient and safe to retry with
    /// unmodified input. Only network-level failures qualify; retrying a
    /// GraphQL rejection (duplicate email, bad input) would just repeat it.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// A single error entry from a GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Path to the failing field, when the backend reports one.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl GraphQlError {
    /// Build an error from a bare message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }
}

fn format_graphql_errors(errors: &[GraphQlError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ClientError::Http {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQlError::message("Email already exists"),
            GraphQlError::message("Invalid password"),
        ];
        let err = ClientError::GraphQl(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Email already exists; Invalid password"
        );
    }

    #[test]
    fn test_graphql_error_with_path() {
        let errors = vec![GraphQlError {
            message: String::new(),
            path: vec![
                serde_json::Value::String("register".to_string()),
                serde_json::Value::Number(0.into()),
            ],
        }];
        let err = ClientError::GraphQl(errors);
        assert_eq!(err.to_string(), "GraphQL errors: path: register.0");
    }

    #[test]
    fn test_graphql_error_no_details() {
        let err = ClientError::GraphQl(vec![GraphQlError::message("")]);
        assert_eq!(err.to_string(), "GraphQL errors: [error 1]: (no details)");
    }

    #[test]
    fn test_graphql_error_empty_vec() {
        let err = ClientError::GraphQl(vec![]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: (no error details provided)"
        );
    }

    #[test]
    fn test_only_network_errors_are_retryable() {
        assert!(!ClientError::GraphQl(vec![]).is_retryable());
        assert!(
            !ClientError::Http {
                status: 502,
                body: String::new(),
            }
            .is_retryable()
        );
    }
}
