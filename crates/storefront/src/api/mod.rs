//! Kawane backend REST API client (storefront scope).
//!
//! # Architecture
//!
//! - The backend is the source of truth - NO local sync, direct API calls
//! - Typed methods over REST+JSON with a service token per binary
//! - In-memory caching via `moka` for catalog responses (5 minute TTL);
//!   carts, orders, and auth are never cached
//!
//! # Example
//!
//! ```rust,ignore
//! use kawane_storefront::api::StorefrontApi;
//!
//! let api = StorefrontApi::new(&config.api);
//!
//! // Browse the catalog
//! let page = api.get_products(&ProductListParams::default()).await?;
//!
//! // Add to a cart (created on first add)
//! let cart = api.add_to_cart(None, &product_id, 1).await?;
//! ```

mod client;
pub mod types;

pub use client::{ProductListParams, StorefrontApi};
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

    /// Bearer or service token rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

impl ApiError {
    /// Whether this error means the user's bearer token is no longer valid.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
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
        let err = ApiError::NotFound("product ckp1".to_string());
        assert_eq!(err.to_string(), "Not found: product ckp1");

        let err = ApiError::Api {
            status: 422,
            message: "quantity exceeds stock".to_string(),
        };
        assert_eq!(err.to_string(), "API error (422): quantity exceeds stock");
    }

    #[test]
    fn test_rate_limited_display() {
        let err = ApiError::RateLimited(30);
        assert_eq!(err.to_string(), "Rate limited, retry after 30 seconds");
    }

    #[test]
    fn test_parse_error_message_nested() {
        let body = r#"{"error":{"message":"cart is empty"}}"#;
        assert_eq!(parse_error_message(body), Some("cart is empty".to_string()));
    }

    #[test]
    fn test_parse_error_message_flat() {
        let body = r#"{"message":"invalid credentials"}"#;
        assert_eq!(
            parse_error_message(body),
            Some("invalid credentials".to_string())
        );
    }

    #[test]
    fn test_parse_error_message_unparseable() {
        assert_eq!(parse_error_message("<html>bad gateway</html>"), None);
        assert_eq!(parse_error_message(r#"{"status":"error"}"#), None);
    }
}
