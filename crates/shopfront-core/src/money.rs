//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    A ₫3,900,000 sneaker is Money(3_900_000) - exact, always             │
//! │                                                                         │
//! │  The backend stores prices as decimal strings; parsing into minor       │
//! │  units happens once, at the API boundary, and everything downstream    │
//! │  is integer arithmetic.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! // Create from minor units (the only way)
//! let price = Money::from_minor(3_900_000);
//!
//! // Arithmetic operations
//! let pair = price * 2;
//! let with_socks = price + Money::from_minor(50_000);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                │
///                             Cart.total ◄───────┘
///                                  │
///                             Order.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_minor(3_900_000);
    /// assert_eq!(price.minor(), 3_900_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.minor(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(100);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.minor(), 200);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Nike Jordan Panda Low  ₫3,900,000
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: ₫7,800,000
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a backend price string into Money.
    ///
    /// The mock backend stores prices as decimal strings of whole minor
    /// units (e.g. `"3900000"`). Leading/trailing whitespace is tolerated;
    /// anything else is an error, never a silent zero.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::parse_minor("3900000").unwrap().minor(), 3_900_000);
    /// assert!(Money::parse_minor("12.5x").is_err());
    /// ```
    pub fn parse_minor(s: &str) -> Result<Self, std::num::ParseIntError> {
        s.trim().parse::<i64>().map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount with thousands separators.
///
/// ## Note
/// This is for shell output and debugging. Currency symbol placement is
/// a presentation concern owned by the app layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();

        // Group digits in threes from the right: 3900000 -> 3,900,000
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "{}{}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of Money iterators (cart totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(3_900_000);
        assert_eq!(money.minor(), 3_900_000);
    }

    #[test]
    fn test_parse_minor() {
        assert_eq!(Money::parse_minor("3900000").unwrap().minor(), 3_900_000);
        assert_eq!(Money::parse_minor(" 500 ").unwrap().minor(), 500);
        assert!(Money::parse_minor("").is_err());
        assert!(Money::parse_minor("12.50").is_err());
        assert!(Money::parse_minor("abc").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(3_900_000)), "3,900,000");
        assert_eq!(format!("{}", Money::from_minor(100)), "100");
        assert_eq!(format!("{}", Money::from_minor(1000)), "1,000");
        assert_eq!(format!("{}", Money::from_minor(0)), "0");
        assert_eq!(format!("{}", Money::from_minor(-4500)), "-4,500");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        let result: Money = a * 3;
        assert_eq!(result.minor(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(100);
        assert_eq!(unit_price.multiply_quantity(2).minor(), 200);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 50, 25].iter().map(|&m| Money::from_minor(m)).sum();
        assert_eq!(total.minor(), 175);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
    }
}
