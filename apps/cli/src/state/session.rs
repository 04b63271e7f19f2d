//! # Session State
//!
//! The authentication context: one boolean login flag with explicit init
//! (session start) and teardown (logout), plus the logged-in profile and
//! the session's purchase history.
//!
//! ## Persistence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Login Flag Lifecycle                                 │
//! │                                                                         │
//! │  startup ──► Session::init ──► read <data_dir>/session ("true"/"false")│
//! │                                                                         │
//! │  login ────► flag = true  ──► write "true"                             │
//! │                                                                         │
//! │  logout ───► flag = false ──► write "false", drop user                 │
//! │                                                                         │
//! │  The flag is the ONLY state that survives the process. The user        │
//! │  profile and purchase history live and die with the session: after     │
//! │  a restart the flag may say "logged in" while no profile is loaded     │
//! │  yet, exactly like the storefront before its account fetch.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed read means "not logged in"; a failed write is logged and
//! ignored. Neither is worth interrupting the shopper for.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use shopfront_core::{Order, User};

/// Name of the flag file inside the data directory.
const FLAG_FILE: &str = "session";

/// The authentication context passed to every command handler.
#[derive(Debug)]
pub struct Session {
    logged_in: bool,
    user: Option<User>,
    orders: Vec<Order>,
    flag_path: Option<PathBuf>,
}

impl Session {
    /// Session start: reads the persisted flag.
    ///
    /// `data_dir = None` (no home directory, or `--ephemeral`) runs the
    /// whole session in memory.
    pub fn init(data_dir: Option<&Path>) -> Self {
        let flag_path = data_dir.map(|dir| dir.join(FLAG_FILE));
        let logged_in = flag_path
            .as_deref()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|contents| contents.trim() == "true")
            .unwrap_or(false);

        debug!(logged_in, "session initialized");
        Session {
            logged_in,
            user: None,
            orders: Vec::new(),
            flag_path,
        }
    }

    /// Marks the session as logged in and persists the flag.
    pub fn login(&mut self, user: User) {
        self.logged_in = true;
        self.user = Some(user);
        self.persist();
    }

    /// Teardown: clears the flag, the profile, and persists.
    ///
    /// Purchase history stays; it belongs to the shell session, not to the
    /// login.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.user = None;
        self.persist();
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// The logged-in profile, when one was loaded this session.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Appends a completed checkout to the purchase history.
    pub fn record_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Purchase history, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn persist(&self) {
        let Some(path) = self.flag_path.as_deref() else {
            return;
        };

        let write = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(path, if self.logged_in { "true" } else { "false" }));

        if let Err(e) = write {
            warn!(path = %path.display(), error = %e, "failed to persist login flag");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{CartLine, Money, PaymentMethod};

    fn test_user() -> User {
        User {
            id: "1".to_string(),
            name: "Alice".to_string(),
            username: "alice".to_string(),
            email: "alice@gmail.com".to_string(),
            phone: "0123456789".to_string(),
        }
    }

    #[test]
    fn test_init_without_data_dir() {
        let session = Session::init(None);
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_flag_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut session = Session::init(Some(dir.path()));
        assert!(!session.is_logged_in());

        session.login(test_user());
        assert!(session.is_logged_in());

        // A fresh session (new process) sees the flag, not the profile.
        let restored = Session::init(Some(dir.path()));
        assert!(restored.is_logged_in());
        assert!(restored.user().is_none());
    }

    #[test]
    fn test_logout_clears_flag_and_user() {
        let dir = tempfile::tempdir().unwrap();

        let mut session = Session::init(Some(dir.path()));
        session.login(test_user());
        session.logout();

        assert!(!session.is_logged_in());
        assert!(session.user().is_none());

        let restored = Session::init(Some(dir.path()));
        assert!(!restored.is_logged_in());
    }

    #[test]
    fn test_garbage_flag_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FLAG_FILE), "maybe?").unwrap();

        let session = Session::init(Some(dir.path()));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_orders_survive_logout() {
        let mut session = Session::init(None);
        session.login(test_user());

        let lines = vec![CartLine::new("1", "A", Money::from_minor(100), 2)];
        session.record_order(Order::new(lines, PaymentMethod::Cod));
        session.logout();

        assert_eq!(session.orders().len(), 1);
    }
}
