//! # Account Commands
//!
//! Profile display and purchase history.

use std::fmt::Write as _;

use tracing::debug;

use crate::config::StoreConfig;
use crate::state::Session;

/// Renders the account screen.
pub fn account(config: &StoreConfig, session: &Session) -> String {
    debug!("account command");

    if !session.is_logged_in() {
        return "You are not logged in. Use `login <username> <password>`.".to_string();
    }

    let mut out = String::from("Account\n");
    match session.user() {
        Some(user) => {
            let _ = writeln!(out, "  name:     {}", user.name);
            let _ = writeln!(out, "  username: {}", user.username);
            let _ = writeln!(out, "  email:    {}", user.email);
            let _ = writeln!(out, "  phone:    {}", user.phone);
        }
        // The persisted flag survived a restart but no profile was loaded
        // this session.
        None => {
            let _ = writeln!(out, "  Logged in. Log in again to load your profile.");
        }
    }

    let _ = write!(out, "\nPurchase history");
    if session.orders().is_empty() {
        let _ = write!(out, "\n  No purchases this session.");
        return out;
    }

    for order in session.orders() {
        let _ = write!(
            out,
            "\n  {} - {} units, {} ({})",
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.unit_count(),
            config.format_money(order.total),
            order.method,
        );
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{CartLine, Money, Order, PaymentMethod, User};

    fn config() -> StoreConfig {
        StoreConfig::new("https://example.test", 10)
    }

    #[test]
    fn test_account_requires_login() {
        let session = Session::init(None);
        let out = account(&config(), &session);
        assert!(out.contains("not logged in"));
    }

    #[test]
    fn test_account_shows_profile_and_history() {
        let mut session = Session::init(None);
        session.login(User {
            id: "1".to_string(),
            name: "Alice".to_string(),
            username: "alice".to_string(),
            email: "alice@gmail.com".to_string(),
            phone: "0123456789".to_string(),
        });

        let lines = vec![CartLine::new("1", "A", Money::from_minor(100), 2)];
        session.record_order(Order::new(lines, PaymentMethod::Cod));

        let out = account(&config(), &session);
        assert!(out.contains("username: alice"));
        assert!(out.contains("phone:    0123456789"));
        assert!(out.contains("2 units, ₫200 (cash on delivery)"));
    }
}
