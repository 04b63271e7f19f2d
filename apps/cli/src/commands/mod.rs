//! # Command Layer
//!
//! All commands the shell exposes, one module per screen family.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── browse.rs    ◄─── Home, search, category, product detail
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Payment method and order confirmation
//! ├── auth.rs      ◄─── Sign-up, login, logout
//! └── account.rs   ◄─── Profile and purchase history
//! ```
//!
//! ## How Commands Work
//! One line of input is one event. A handler receives exactly the state it
//! needs (config, API client, catalog, cart, session), does any network
//! call synchronously from the shopper's point of view, and returns the
//! rendered output. Errors bubble up to the loop, which prints them and
//! keeps going - nothing a handler can return ends the shell.

pub mod account;
pub mod auth;
pub mod browse;
pub mod cart;
pub mod checkout;
