//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In naive float arithmetic:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices, line totals, and discount amounts are all i64 cents.         │
//! │    Quantities may be fractional (weighed goods), so discount formulas   │
//! │    compute in fractional cents and round exactly once, when the final   │
//! │    amount is materialized via `from_fractional_cents`.                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // 15.99
//!
//! // Fractional quantities round to the nearest cent
//! let line = price.mul_quantity(2.5); // 27.48 (2747.5 rounds up)
//! assert_eq!(line.cents(), 2748);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values; every discount is one
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Catalog unit price ──► ReceiptLine.total ──► Receipt::total()
///                  └──► Offer / Bundle engines ──► Discount.amount (≤ 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50, not -4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Creates a Money value from a fractional number of cents, rounding
    /// half away from zero.
    ///
    /// This is the single rounding point for the discount engines: formulas
    /// over weighed (fractional) quantities stay in `f64` cents until the
    /// final amount is materialized here.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_fractional_cents(29.85).cents(), 30);
    /// assert_eq!(Money::from_fractional_cents(-29.85).cents(), -30);
    /// ```
    #[inline]
    pub fn from_fractional_cents(cents: f64) -> Self {
        Money(cents.round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99, sign stripped).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
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

    /// Multiplies by a possibly fractional quantity, rounding to the
    /// nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(199);      // 1.99 per kilo
    /// let line_total = unit_price.mul_quantity(2.5); // 4.975 → 4.98
    /// assert_eq!(line_total.cents(), 498);
    /// ```
    #[inline]
    pub fn mul_quantity(&self, quantity: f64) -> Self {
        Money::from_fractional_cents(self.0 as f64 * quantity)
    }

    /// The value as fractional cents, for use inside discount formulas.
    #[inline]
    pub fn as_fractional_cents(&self) -> f64 {
        self.0 as f64
    }

    /// Plain two-decimal rendering without a currency symbol: "10.99",
    /// "-0.39". Used on printed receipts and in offer descriptions.
    pub fn to_price_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a currency symbol, for debugging and logs.
/// Receipt rendering uses [`Money::to_price_string`] instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Sum of an iterator of Money values.
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_from_fractional_cents_rounds_half_away_from_zero() {
        assert_eq!(Money::from_fractional_cents(29.85).cents(), 30);
        assert_eq!(Money::from_fractional_cents(29.4).cents(), 29);
        assert_eq!(Money::from_fractional_cents(-29.85).cents(), -30);
        assert_eq!(Money::from_fractional_cents(0.5).cents(), 1);
        assert_eq!(Money::from_fractional_cents(-0.5).cents(), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_price_string() {
        assert_eq!(Money::from_cents(99).to_price_string(), "0.99");
        assert_eq!(Money::from_cents(1099).to_price_string(), "10.99");
        assert_eq!(Money::from_cents(-39).to_price_string(), "-0.39");
        assert_eq!(Money::from_cents(749).to_price_string(), "7.49");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_mul_quantity_integral() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.mul_quantity(3.0).cents(), 897);
    }

    #[test]
    fn test_mul_quantity_fractional() {
        // 1.99 per kilo × 2.5 kg = 4.975 → 4.98
        let unit_price = Money::from_cents(199);
        assert_eq!(unit_price.mul_quantity(2.5).cents(), 498);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, -50]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 300);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }
}
