//! Kawane backend REST API client (admin scope).
//!
//! # Security
//!
//! This module holds the HIGH PRIVILEGE admin service token. It can mutate
//! orders, products, inventory, users, deals, and storefront content. Only
//! the admin binary links it, and that binary is VPN-only.
//!
//! # Architecture
//!
//! - The backend is the source of truth - NO local sync, direct API calls
//! - Typed methods over REST+JSON under the backend's `/admin` prefix
//! - No response caching: back-office screens always show fresh state

mod client;
pub mod types;

pub use client::{AdminApi, StaffAuthSession};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when calling the Kawane backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend rejected the request with an error envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Admin service token rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// Extract a human-readable message from a backend error body.
///
/// The backend wraps errors as `{"error": {"message": "..."}}`, with a
/// legacy flat `{"message": "..."}` form still in use on older endpoints.
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(message) = value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 409,
            message: "order already shipped".to_string(),
        };
        assert_eq!(err.to_string(), "API error (409): order already shipped");
    }

    #[test]
    fn test_parse_error_message_variants() {
        assert_eq!(
            parse_error_message(r#"{"error":{"message":"deal overlaps"}}"#),
            Some("deal overlaps".to_string())
        );
        assert_eq!(
            parse_error_message(r#"{"message":"unknown product"}"#),
            Some("unknown product".to_string())
        );
        assert_eq!(parse_error_message("not json"), None);
    }
}
