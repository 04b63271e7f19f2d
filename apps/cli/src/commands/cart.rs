//! # Cart Commands
//!
//! Cart display and manipulation.
//!
//! ## Cart Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  My Cart                                                                │
//! │                                                                         │
//! │  [x] [1] Nike Jordan Panda Low   2 x ₫3,900,000 = ₫7,800,000            │
//! │  [ ] [2] Nike Air Max            1 x ₫4,500,000 = ₫4,500,000            │
//! │                                                                         │
//! │  Selected: 1 of 2 lines                                                 │
//! │  Total:    ₫7,800,000            ◄── selected lines only               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity math and the selected-only total live in `shopfront_core`;
//! these handlers just wire shell input to it and render the result.

use std::fmt::Write as _;

use anyhow::Result;
use tracing::debug;

use shopfront_api::Client;
use shopfront_core::Cart;

use crate::commands::browse::into_products;
use crate::config::StoreConfig;
use crate::state::Catalog;

/// Renders the cart screen.
pub fn show(config: &StoreConfig, cart: &Cart) -> String {
    debug!("cart command");

    if cart.is_empty() {
        return "Your cart is empty. Add something with `cart add <id>`.".to_string();
    }

    let mut out = String::from("My Cart\n");
    for line in &cart.lines {
        let _ = writeln!(
            out,
            "  [{}] [{}] {}  {} x {} = {}",
            if line.selected { "x" } else { " " },
            line.id,
            line.name,
            line.quantity,
            config.format_money(line.unit_price),
            config.format_money(line.line_total()),
        );
    }
    let _ = writeln!(
        out,
        "\n  Selected: {} of {} lines",
        cart.selected_count(),
        cart.len()
    );
    let _ = write!(out, "  Total:    {}", config.format_money(cart.total()));
    out
}

/// Adds a product to the cart by id, freezing its current price.
pub async fn add(
    config: &StoreConfig,
    client: &Client,
    catalog: &mut Catalog,
    cart: &mut Cart,
    id: &str,
    quantity: i64,
) -> Result<String> {
    debug!(id, quantity, "cart add command");

    // Look in what we already fetched first; fall back to the full catalog.
    if catalog.find(id).is_none() {
        let dtos = client.products().fetch_all().await?;
        catalog.replace(into_products(dtos), 1);
    }

    let Some(product) = catalog.find(id) else {
        return Ok(format!("No product with id {}.", id));
    };

    cart.add_line(product, quantity)?;
    Ok(format!(
        "Added {} x {} ({}).",
        quantity,
        product.name,
        config.format_money(product.price)
    ))
}

/// Adjusts a line's quantity by a signed delta (floored at 1).
pub fn adjust(cart: &mut Cart, id: &str, delta: i64) -> Result<String> {
    debug!(id, delta, "cart adjust command");
    let quantity = cart.adjust_quantity(id, delta)?;
    Ok(format!("Quantity of line {} is now {}.", id, quantity))
}

/// Flips one line's checkbox.
pub fn toggle(cart: &mut Cart, id: &str) -> Result<String> {
    debug!(id, "cart toggle command");
    cart.toggle(id)?;
    let selected = cart.lines.iter().any(|l| l.id == id && l.selected);
    Ok(format!(
        "Line {} {}.",
        id,
        if selected { "selected" } else { "unselected" }
    ))
}

/// Selects every line, or clears every selection if all were selected.
pub fn toggle_all(cart: &mut Cart) -> String {
    debug!("cart all command");
    cart.toggle_select_all();
    if cart.all_selected() && !cart.is_empty() {
        "All lines selected.".to_string()
    } else {
        "Selection cleared.".to_string()
    }
}

/// Removes a line from the cart.
pub fn remove(cart: &mut Cart, id: &str) -> Result<String> {
    debug!(id, "cart rm command");
    cart.remove_line(id)?;
    Ok(format!("Removed line {}.", id))
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
        let mut selected = CartLine::new(
            "1",
            "Nike Jordan Panda Low",
            Money::from_minor(3_900_000),
            2,
        );
        selected.selected = true;
        cart.lines.push(selected);
        cart.lines
            .push(CartLine::new("2", "Nike Air Max", Money::from_minor(4_500_000), 1));
        cart
    }

    #[test]
    fn test_show_renders_selection_and_total() {
        let out = show(&config(), &cart());
        assert!(out.contains("[x] [1]"));
        assert!(out.contains("[ ] [2]"));
        assert!(out.contains("Selected: 1 of 2 lines"));
        // Selected line only: 2 x 3,900,000
        assert!(out.contains("Total:    ₫7,800,000"));
    }

    #[test]
    fn test_show_empty_cart() {
        let out = show(&config(), &Cart::new());
        assert!(out.contains("empty"));
    }

    #[test]
    fn test_adjust_reports_new_quantity() {
        let mut cart = cart();
        let out = adjust(&mut cart, "1", -1).unwrap();
        assert!(out.contains("now 1"));

        // Floor: decreasing again stays at 1
        let out = adjust(&mut cart, "1", -1).unwrap();
        assert!(out.contains("now 1"));
    }

    #[test]
    fn test_toggle_reports_state() {
        let mut cart = cart();
        let out = toggle(&mut cart, "2").unwrap();
        assert!(out.contains("selected"));

        let out = toggle(&mut cart, "2").unwrap();
        assert!(out.contains("unselected"));
    }

    #[test]
    fn test_unknown_line_is_an_error() {
        let mut cart = cart();
        assert!(toggle(&mut cart, "99").is_err());
        assert!(adjust(&mut cart, "99", 1).is_err());
        assert!(remove(&mut cart, "99").is_err());
    }
}
