//! # API Error Types
//!
//! Error mapping for the mock-backend client.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow                                          │
//! │                                                                         │
//! │  reqwest failure (DNS, TLS, timeout) ──► ApiError::Network             │
//! │       Display: "Network error or server not reachable"                 │
//! │                                                                         │
//! │  Non-success status ────────────────────► ApiError::Backend            │
//! │       Display: the backend's `message` field, or the operation's       │
//! │       default ("Fetching products failed", "Registration failed", …)   │
//! │                                                                         │
//! │  Body that fails to parse ──────────────► ApiError::Decode             │
//! │                                                                         │
//! │  Bad wire data (e.g. price "abc") ──────► ApiError::InvalidPayload     │
//! │                                                                         │
//! │  No matching user on login ─────────────► ApiError::InvalidCredentials │
//! │                                                                         │
//! │  Nothing retries; every variant is recoverable by the user.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from talking to the mock backend.
///
/// The `Display` form of every variant is the user-facing message; the
/// underlying cause is logged at the call site, never shown.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, TLS, connect, timeout.
    ///
    /// The cause is deliberately collapsed into one generic message; there
    /// is nothing the shopper can do differently per transport failure.
    #[error("Network error or server not reachable")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend answered 2xx but the body was not the expected JSON.
    #[error("Malformed response from server")]
    Decode(#[source] reqwest::Error),

    /// The backend's data was well-formed JSON but semantically unusable
    /// (e.g. a product price that is not a number).
    #[error("Invalid {field} in server data for {id}: {reason}")]
    InvalidPayload {
        id: String,
        field: &'static str,
        reason: String,
    },

    /// Login found no user with the given username and password.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

impl ApiError {
    /// Maps a reqwest error to the right variant.
    ///
    /// reqwest reports body-decode failures through the same error type as
    /// transport failures; they are split here so the user message stays
    /// honest.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Result type for all client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err = ApiError::Backend {
            status: 500,
            message: "Fetching products failed".to_string(),
        };
        assert_eq!(err.to_string(), "Fetching products failed");

        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid username or password."
        );
    }

    #[test]
    fn test_invalid_payload_message() {
        let err = ApiError::InvalidPayload {
            id: "7".to_string(),
            field: "price",
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid price in server data for 7: invalid digit found in string"
        );
    }
}
