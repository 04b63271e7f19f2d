//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  lines          │       │
//! │  │  name           │   │  name           │   │  method         │       │
//! │  │  price (Money)  │   │  username       │   │  total (Money)  │       │
//! │  │  category       │   │  email / phone  │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │                        ┌─────────────────┐                              │
//! │                        │ PaymentMethod   │                              │
//! │                        │  Cod | Card     │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identity note: ids are server-assigned strings. The mock backend hands
//! out short numeric strings ("1", "2", ...) and they are treated as opaque.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier (opaque string).
    pub id: String,

    /// Display name shown in listings and detail views.
    pub name: String,

    /// Unit price in minor currency units.
    pub price: Money,

    /// Image location, if the backend has one.
    pub image_url: Option<String>,

    /// Optional long-form description for the detail view.
    pub description: Option<String>,

    /// Category name used by the category screen filter.
    pub category: Option<String>,
}

impl Product {
    /// Checks whether the product belongs to the given category.
    ///
    /// Comparison is case-insensitive; products with no category never match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }

    /// Checks whether the product name contains the query (case-insensitive).
    ///
    /// An empty query matches everything, mirroring "no filter".
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered storefront user.
///
/// The password never appears here. It exists only in the wire types of
/// the API crate; the domain model carries profile data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Kept as a string: the leading zero is significant.
    pub phone: String,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery (the storefront default).
    Cod,
    /// Card payment.
    Card,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cod
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cod => write!(f, "cash on delivery"),
            PaymentMethod::Card => write!(f, "card"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A completed checkout.
///
/// Lines are snapshots: the cart drains its selected lines into the order,
/// so later catalog price changes never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// The purchased lines (all had `selected == true` at checkout).
    pub lines: Vec<CartLine>,

    /// How the order was paid.
    pub method: PaymentMethod,

    /// Sum over lines of (unit price × quantity), frozen at checkout.
    pub total: Money,

    /// When the checkout was confirmed.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from checked-out lines.
    ///
    /// The total is computed here once rather than trusted from the caller.
    pub fn new(lines: Vec<CartLine>, method: PaymentMethod) -> Self {
        let total = lines.iter().map(|l| l.line_total()).sum();
        Order {
            lines,
            method,
            total,
            created_at: Utc::now(),
        }
    }

    /// Total quantity of units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: Option<&str>) -> Product {
        Product {
            id: "1".to_string(),
            name: name.to_string(),
            price: Money::from_minor(1000),
            image_url: None,
            description: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_in_category() {
        let p = product("Nike Air Max", Some("Fashion"));
        assert!(p.in_category("Fashion"));
        assert!(p.in_category("fashion"));
        assert!(!p.in_category("Electronics"));

        let uncategorized = product("Nike Air Max", None);
        assert!(!uncategorized.in_category("Fashion"));
    }

    #[test]
    fn test_matches_query() {
        let p = product("Nike Jordan Panda Low", None);
        assert!(p.matches_query("jordan"));
        assert!(p.matches_query("PANDA"));
        assert!(p.matches_query(""));
        assert!(p.matches_query("   "));
        assert!(!p.matches_query("adidas"));
    }

    #[test]
    fn test_payment_method_default() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cod);
    }

    #[test]
    fn test_order_computes_total() {
        let lines = vec![
            CartLine::new("1", "A", Money::from_minor(100), 2),
            CartLine::new("2", "B", Money::from_minor(50), 1),
        ];
        let order = Order::new(lines, PaymentMethod::Cod);
        assert_eq!(order.total.minor(), 250);
        assert_eq!(order.unit_count(), 3);
    }
}
