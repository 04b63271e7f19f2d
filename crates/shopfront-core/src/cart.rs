//! # Cart Module
//!
//! Cart lines, selection, and pricing.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shell Action             Cart Method              State Change         │
//! │  ────────────             ───────────              ────────────         │
//! │                                                                         │
//! │  add <id>  ─────────────► add_line() ────────────► lines.push / merge  │
//! │                                                                         │
//! │  + / - <id> ────────────► adjust_quantity() ─────► qty ± 1 (floor 1)   │
//! │                                                                         │
//! │  toggle <id> ───────────► toggle() ──────────────► line.selected flip  │
//! │                                                                         │
//! │  all ───────────────────► toggle_select_all() ───► every flag set/clear│
//! │                                                                         │
//! │  checkout ──────────────► take_selected() ───────► selected lines out  │
//! │                                                                         │
//! │  Invariant: total = Σ over SELECTED lines of (price × quantity)        │
//! │             unselected lines contribute zero                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is owned by one view for the duration of a session. There is no
//! backing store and no locking; all operations are synchronous and linear
//! in the number of lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart.
///
/// ## Price Freezing
/// The unit price is captured when the line is added. If the catalog price
/// changes afterwards, this line keeps the price the shopper saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id this line refers to.
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in minor units at time of adding (frozen, non-negative).
    pub unit_price: Money,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// Whether the line is included in the checkout total.
    pub selected: bool,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line directly from its parts. New lines start unselected.
    pub fn new(id: &str, name: &str, unit_price: Money, quantity: i64) -> Self {
        CartLine {
            id: id.to_string(),
            name: name.to_string(),
            unit_price,
            quantity,
            selected: false,
            added_at: Utc::now(),
        }
    }

    /// Creates a line from a catalog product, freezing its price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine::new(&product.id, &product.name, product.price, quantity)
    }

    /// The line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product merges quantity)
/// - Quantity is always between 1 and [`MAX_LINE_QUANTITY`]
/// - At most [`MAX_CART_LINES`] distinct lines
/// - The total counts selected lines only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart or merges quantity if already present.
    ///
    /// ## Behavior
    /// - Quantity must be positive
    /// - If the product is already in the cart: quantities merge
    /// - Otherwise a new, unselected line is appended
    pub fn add_line(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Flips one line's selected flag.
    pub fn toggle(&mut self, id: &str) -> CoreResult<()> {
        let line = self.line_mut(id)?;
        line.selected = !line.selected;
        Ok(())
    }

    /// Adjusts a line's quantity by a signed delta, floored at 1.
    ///
    /// Decreasing a quantity-1 line leaves it at 1; the original storefront
    /// has no remove button on the cart screen, and neither does this
    /// operation. Use [`Cart::remove_line`] to drop a line.
    ///
    /// ## Returns
    /// The new quantity.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> CoreResult<i64> {
        let line = self.line_mut(id)?;
        line.quantity = (line.quantity + delta).clamp(1, MAX_LINE_QUANTITY);
        Ok(line.quantity)
    }

    /// Selects every line, or clears every selection if all were selected.
    pub fn toggle_select_all(&mut self) {
        let all_selected = self.all_selected();
        for line in &mut self.lines {
            line.selected = !all_selected;
        }
    }

    /// True iff every line is selected. Vacuously true for an empty cart.
    pub fn all_selected(&self) -> bool {
        self.lines.iter().all(|l| l.selected)
    }

    /// Removes a line from the cart by product id.
    pub fn remove_line(&mut self, id: &str) -> CoreResult<()> {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() == before {
            return Err(CoreError::LineNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Folds the selected lines into a total.
    ///
    /// Unselected lines contribute zero. Linear in the number of lines.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::cart::{Cart, CartLine};
    /// use shopfront_core::money::Money;
    ///
    /// let mut cart = Cart::new();
    /// cart.lines.push(CartLine {
    ///     selected: true,
    ///     ..CartLine::new("1", "A", Money::from_minor(100), 2)
    /// });
    /// cart.lines.push(CartLine::new("2", "B", Money::from_minor(50), 1));
    /// assert_eq!(cart.total().minor(), 200);
    /// ```
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .filter(|l| l.selected)
            .map(|l| l.line_total())
            .sum()
    }

    /// Drains the selected lines out of the cart (checkout).
    ///
    /// The returned lines keep their order; unselected lines stay behind.
    pub fn take_selected(&mut self) -> Vec<CartLine> {
        let (selected, rest): (Vec<_>, Vec<_>) =
            self.lines.drain(..).partition(|l| l.selected);
        self.lines = rest;
        selected
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Number of selected lines.
    pub fn selected_count(&self) -> usize {
        self.lines.iter().filter(|l| l.selected).count()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, id: &str) -> CoreResult<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| CoreError::LineNotFound(id.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_minor: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_minor(price_minor),
            image_url: None,
            description: None,
            category: None,
        }
    }

    fn cart_with(lines: &[(&str, i64, i64, bool)]) -> Cart {
        let mut cart = Cart::new();
        for (id, price, qty, selected) in lines {
            let mut line = CartLine::new(id, &format!("Product {}", id), Money::from_minor(*price), *qty);
            line.selected = *selected;
            cart.lines.push(line);
        }
        cart
    }

    #[test]
    fn test_total_counts_selected_lines_only() {
        let cart = cart_with(&[("1", 100, 2, true), ("2", 50, 1, false)]);
        assert_eq!(cart.total().minor(), 200);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(Cart::new().total().minor(), 0);
    }

    #[test]
    fn test_add_line_and_merge() {
        let mut cart = Cart::new();
        let product = test_product("1", 3_900_000);

        cart.add_line(&product, 1).unwrap();
        cart.add_line(&product, 2).unwrap();

        assert_eq!(cart.len(), 1); // merged, still one line
        assert_eq!(cart.lines[0].quantity, 3);
    }

    #[test]
    fn test_add_line_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 100);
        assert!(cart.add_line(&product, 0).is_err());
        assert!(cart.add_line(&product, -1).is_err());
    }

    #[test]
    fn test_add_line_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("1", 100);
        cart.add_line(&product, MAX_LINE_QUANTITY).unwrap();
        assert!(matches!(
            cart.add_line(&product, 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_toggle_flips_one_line() {
        let mut cart = cart_with(&[("1", 100, 1, false), ("2", 100, 1, false)]);
        cart.toggle("1").unwrap();
        assert!(cart.lines[0].selected);
        assert!(!cart.lines[1].selected);

        cart.toggle("1").unwrap();
        assert!(!cart.lines[0].selected);
    }

    #[test]
    fn test_toggle_unknown_id_is_reported() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.toggle("missing"),
            Err(CoreError::LineNotFound(_))
        ));
    }

    #[test]
    fn test_adjust_quantity_floored_at_one() {
        let mut cart = cart_with(&[("1", 100, 1, false)]);

        assert_eq!(cart.adjust_quantity("1", 1).unwrap(), 2);
        assert_eq!(cart.adjust_quantity("1", -1).unwrap(), 1);
        // Decreasing at quantity 1 stays at 1
        assert_eq!(cart.adjust_quantity("1", -1).unwrap(), 1);
        assert_eq!(cart.adjust_quantity("1", -100).unwrap(), 1);
    }

    #[test]
    fn test_adjust_quantity_capped() {
        let mut cart = cart_with(&[("1", 100, 1, false)]);
        assert_eq!(
            cart.adjust_quantity("1", 10_000).unwrap(),
            MAX_LINE_QUANTITY
        );
    }

    #[test]
    fn test_toggle_select_all() {
        let mut cart = cart_with(&[("1", 100, 1, false), ("2", 100, 1, true)]);

        // Not all selected: select everything
        cart.toggle_select_all();
        assert!(cart.all_selected());

        // All selected: clear everything
        cart.toggle_select_all();
        assert_eq!(cart.selected_count(), 0);
    }

    #[test]
    fn test_take_selected_drains_only_selected() {
        let mut cart = cart_with(&[
            ("1", 100, 2, true),
            ("2", 50, 1, false),
            ("3", 25, 4, true),
        ]);

        let taken = cart.take_selected();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].id, "1");
        assert_eq!(taken[1].id, "3");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines[0].id, "2");
    }

    #[test]
    fn test_remove_line() {
        let mut cart = cart_with(&[("1", 100, 1, false)]);
        cart.remove_line("1").unwrap();
        assert!(cart.is_empty());
        assert!(cart.remove_line("1").is_err());
    }
}
