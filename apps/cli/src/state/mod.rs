//! # State Module
//!
//! Session-lifetime state for the shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single grab-bag struct, each concern gets its own focused
//! type and every command handler receives exactly the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                                 │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Session    │  │   Catalog    │  │  Cart (core)     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  login flag  │  │  fetched     │  │  lines,          │              │
//! │  │  (persisted) │  │  products,   │  │  selection,      │              │
//! │  │  user,       │  │  current     │  │  totals          │              │
//! │  │  orders      │  │  page        │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY: none needed. One shell, one thread of events,          │
//! │  one request in flight at a time.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is an explicit context object handed to command handlers,
//! never ambient global state.

mod catalog;
mod session;

pub use catalog::Catalog;
pub use session::Session;
