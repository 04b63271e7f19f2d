//! # Checkout Commands
//!
//! Payment method selection and order confirmation.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Flow                                       │
//! │                                                                         │
//! │  checkout [cod|card]                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  any lines selected? ── no ──► "Nothing selected to check out."         │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  drain selected lines ──► Order { lines, method, total }                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  append to session purchase history, render confirmation                │
//! │                                                                         │
//! │  Unselected lines stay in the cart for next time.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use tracing::{debug, info};

use shopfront_core::{Cart, Order, PaymentMethod};

use crate::config::StoreConfig;
use crate::state::Session;

/// Parses a payment method argument. Cash on delivery is the default.
pub fn parse_method(arg: Option<&str>) -> Result<PaymentMethod, String> {
    match arg {
        None => Ok(PaymentMethod::default()),
        Some(s) if s.eq_ignore_ascii_case("cod") => Ok(PaymentMethod::Cod),
        Some(s) if s.eq_ignore_ascii_case("card") => Ok(PaymentMethod::Card),
        Some(other) => Err(format!(
            "Unknown payment method \"{}\". Use `cod` or `card`.",
            other
        )),
    }
}

/// Checks out the selected cart lines.
pub fn checkout(
    config: &StoreConfig,
    cart: &mut Cart,
    session: &mut Session,
    method: PaymentMethod,
) -> String {
    debug!(?method, "checkout command");

    if cart.selected_count() == 0 {
        return "Nothing selected to check out. Toggle lines with `cart toggle <id>`.".to_string();
    }

    let lines = cart.take_selected();
    let order = Order::new(lines, method);
    info!(total = order.total.minor(), lines = order.lines.len(), "order placed");

    let mut out = String::from("Order placed!\n");
    for line in &order.lines {
        let _ = writeln!(
            out,
            "  {} x {} = {}",
            line.quantity,
            line.name,
            config.format_money(line.line_total())
        );
    }
    let _ = writeln!(out, "\n  Payment: {}", order.method);
    let _ = write!(out, "  Total:   {}", config.format_money(order.total));

    if !cart.is_empty() {
        let _ = write!(out, "\n  ({} unselected lines left in the cart)", cart.len());
    }

    session.record_order(order);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{CartLine, Money};

    fn config() -> StoreConfig {
        StoreConfig::new("https://example.test", 10)
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let mut selected = CartLine::new("1", "A", Money::from_minor(100), 2);
        selected.selected = true;
        cart.lines.push(selected);
        cart.lines.push(CartLine::new("2", "B", Money::from_minor(50), 1));
        cart
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method(None).unwrap(), PaymentMethod::Cod);
        assert_eq!(parse_method(Some("cod")).unwrap(), PaymentMethod::Cod);
        assert_eq!(parse_method(Some("CARD")).unwrap(), PaymentMethod::Card);
        assert!(parse_method(Some("crypto")).is_err());
    }

    #[test]
    fn test_checkout_drains_selected_and_records_order() {
        let mut cart = cart();
        let mut session = Session::init(None);

        let out = checkout(&config(), &mut cart, &mut session, PaymentMethod::Cod);
        assert!(out.contains("Order placed!"));
        assert!(out.contains("Total:   ₫200"));
        assert!(out.contains("1 unselected lines left"));

        assert_eq!(cart.len(), 1);
        assert_eq!(session.orders().len(), 1);
        assert_eq!(session.orders()[0].total.minor(), 200);
    }

    #[test]
    fn test_checkout_with_nothing_selected() {
        let mut cart = Cart::new();
        let mut session = Session::init(None);

        let out = checkout(&config(), &mut cart, &mut session, PaymentMethod::Cod);
        assert!(out.contains("Nothing selected"));
        assert!(session.orders().is_empty());
    }
}
