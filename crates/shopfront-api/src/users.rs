//! # Users Resource
//!
//! Registration and login against `/users` on the mock backend.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Login Flow                                        │
//! │                                                                         │
//! │  login("alice", "abc12345!")                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /users            (the backend has no auth endpoint)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find u: u.username == username && u.password == password              │
//! │       │                                                                 │
//! │       ├── found ────► Ok(UserDto)                                       │
//! │       │                                                                 │
//! │       └── not found ► Err(InvalidCredentials)                           │
//! │                       "Invalid username or password."                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend stores whatever it is sent, passwords included, in the
//! clear. That is the nature of a mock backend; nothing here pretends
//! otherwise.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use shopfront_core::User;

use crate::client::Client;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Wire Types
// =============================================================================

/// A user record as the backend stores it.
///
/// Every field except `id` defaults to empty: records created by other
/// clients of the shared mock backend are not guaranteed to be complete,
/// and an incomplete stranger must not break our login scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Kept as a string so the leading zero survives the round trip.
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

impl From<UserDto> for User {
    /// Converts to the domain type, dropping the password.
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            name: dto.name,
            username: dto.username,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

/// Registration payload for POST `/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

// =============================================================================
// Resource API
// =============================================================================

/// Operations on the `/users` resource.
#[derive(Debug)]
pub struct UsersApi<'a> {
    client: &'a Client,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        UsersApi { client }
    }

    /// Registers a new user.
    ///
    /// The caller is expected to have validated the fields already (see
    /// `shopfront_core::validation`); the backend accepts anything.
    pub async fn register(&self, user: &NewUser) -> ApiResult<UserDto> {
        debug!(username = %user.username, "register user");

        let response = self
            .client
            .http()
            .post(self.client.url("/users"))
            .json(user)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Registration failed").await?;
        let created: UserDto = response.json().await.map_err(ApiError::from_reqwest)?;
        info!(id = %created.id, "user registered");
        Ok(created)
    }

    /// Fetches every registered user.
    pub async fn list(&self) -> ApiResult<Vec<UserDto>> {
        debug!("list users");

        let response = self
            .client
            .http()
            .get(self.client.url("/users"))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Fetching users failed").await?;
        response.json().await.map_err(ApiError::from_reqwest)
    }

    /// Checks credentials against the registered user list.
    ///
    /// The match is exact on both username and password. A failed match is
    /// [`ApiError::InvalidCredentials`], indistinguishable on purpose from
    /// "no such user".
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<UserDto> {
        debug!(%username, "login attempt");

        let response = self
            .client
            .http()
            .get(self.client.url("/users"))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Login failed").await?;
        let users: Vec<UserDto> = response.json().await.map_err(ApiError::from_reqwest)?;

        users
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .map(|user| {
                info!(id = %user.id, "login succeeded");
                user
            })
            .ok_or(ApiError::InvalidCredentials)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_deserialization() {
        let json = r#"{
            "id": "3",
            "name": "Alice",
            "username": "alice",
            "email": "alice@gmail.com",
            "phone": "0123456789",
            "password": "abc12345!"
        }"#;

        let dto: UserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.username, "alice");
        assert_eq!(dto.phone, "0123456789"); // leading zero intact
    }

    #[test]
    fn test_incomplete_record_still_parses() {
        let json = r#"{"id": "9"}"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();
        assert!(dto.username.is_empty());
        assert!(dto.password.is_empty());
    }

    #[test]
    fn test_domain_conversion_drops_password() {
        let dto = UserDto {
            id: "3".to_string(),
            name: "Alice".to_string(),
            username: "alice".to_string(),
            email: "alice@gmail.com".to_string(),
            phone: "0123456789".to_string(),
            password: "abc12345!".to_string(),
        };

        let user: User = dto.into();
        assert_eq!(user.username, "alice");
        let serialized = serde_json::to_string(&user).unwrap();
        assert!(!serialized.contains("password"));
    }

    #[test]
    fn test_new_user_wire_shape() {
        let new_user = NewUser {
            name: "Alice".to_string(),
            username: "alice".to_string(),
            email: "alice@gmail.com".to_string(),
            phone: "0123456789".to_string(),
            password: "abc12345!".to_string(),
        };

        let json = serde_json::to_value(&new_user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alice",
                "username": "alice",
                "email": "alice@gmail.com",
                "phone": "0123456789",
                "password": "abc12345!"
            })
        );
    }
}
