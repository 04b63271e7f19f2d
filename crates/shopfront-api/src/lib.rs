//! # shopfront-api: REST Client for the Mock Backend
//!
//! This crate provides typed access to the hosted mock REST backend that
//! stores the storefront's products and users.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Data Flow                               │
//! │                                                                         │
//! │  Shell command (browse, sign-up, login)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopfront-api (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Client     │    │   Resources   │    │  Wire DTOs   │  │   │
//! │  │   │  (client.rs)  │    │ (products.rs) │    │ ProductDto   │  │   │
//! │  │   │               │    │  (users.rs)   │    │ UserDto      │  │   │
//! │  │   │ reqwest +     │◄───│ ProductsApi   │    │ NewUser      │  │   │
//! │  │   │ base URL      │    │ UsersApi      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Hosted mock backend (JSON over HTTPS)              │   │
//! │  │              GET/POST/PUT/DELETE /products, /users              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_api::Client;
//!
//! let client = Client::new()?;
//!
//! // Paged catalog fetch
//! let page = client.products().fetch_page(1, 10).await?;
//!
//! // Client-side login (the mock backend has no auth endpoint)
//! let user = client.users().login("alice", "abc12345!").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod products;
pub mod users;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use products::{ProductDto, ProductPatch, ProductsApi};
pub use users::{NewUser, UserDto, UsersApi};
