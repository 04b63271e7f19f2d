//! # Client
//!
//! The HTTP client wrapper: one `reqwest::Client` plus the backend base URL.
//!
//! ## Design
//! Resource groups hang off the client the way repositories hang off a
//! database handle:
//!
//! ```text
//! Client ──► products() ──► ProductsApi (fetch_page, create, update, delete)
//!        └─► users()    ──► UsersApi    (register, list, login)
//! ```
//!
//! The base URL is fixed to the hosted mock backend by default and
//! overridable for tests or alternate deployments. No authentication
//! headers exist anywhere; the backend is open by design.

use serde::Deserialize;
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::products::ProductsApi;
use crate::users::UsersApi;

/// The hosted mock backend every storefront build talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://66ea84d455ad32cda4793809.mockapi.io";

/// Typed client for the mock backend.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> ApiResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a specific base URL.
    ///
    /// A trailing slash on `base_url` is tolerated and stripped.
    pub fn with_base_url(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Network)?;

        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Access to the `/products` resource.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Access to the `/users` resource.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// The configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Joins a resource path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Checks a response status, extracting the backend's error message.
    ///
    /// The mock backend reports errors as `{ "message": "..." }` when it
    /// reports anything at all; when the body carries no message the
    /// operation's own default is used, so the shopper always sees
    /// something actionable.
    pub(crate) async fn check(
        response: reqwest::Response,
        default_message: &str,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| default_message.to_string());

        error!(status = status.as_u16(), %message, "backend returned an error");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

/// The error body shape the backend may send alongside a failure status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = Client::with_base_url("https://example.test").unwrap();
        assert_eq!(
            client.url("/products"),
            "https://example.test/products"
        );
        assert_eq!(client.url("/users/7"), "https://example.test/users/7");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = Client::with_base_url("https://example.test/").unwrap();
        assert_eq!(client.base_url(), "https://example.test");
        assert_eq!(client.url("/users"), "https://example.test/users");
    }

    #[test]
    fn test_default_base_url_has_no_trailing_slash() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Not found"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Not found"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }
}
