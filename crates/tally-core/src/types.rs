//! # Domain Types
//!
//! Core domain types used throughout Tally POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductQuantity │   │   Percentage    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (unique)  │   │  product        │   │  bps (u32)      │       │
//! │  │  unit           │   │  quantity (f64) │   │  1025 = 10.25%  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  ProductUnit    │   Each  - discrete count (toothbrushes)            │
//! │  │  ─────────────  │   Kilo  - weighed goods (apples), fractional       │
//! │  └─────────────────┘          quantities are valid                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are identified by name and created once at catalog setup; they
//! are hashable so they can key the quantity and offer registries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Product Unit
// =============================================================================

/// How a product is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Discrete count (a toothbrush, a bag of rice).
    Each,
    /// Weighed goods sold by the kilo; quantities may be fractional.
    Kilo,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable after creation. The name is the unique identity: two products
/// with the same name are the same product for offer and cart purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the unique identity.
    pub name: String,

    /// Measurement unit.
    pub unit: ProductUnit,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Product {
            name: name.into(),
            unit,
        }
    }
}

// =============================================================================
// Product Quantity
// =============================================================================

/// A (product, quantity) pair.
///
/// Represents one cart line or one bundle requirement. The quantity is a
/// non-negative real number; weighed products commonly carry fractional
/// quantities like 2.5 kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub product: Product,
    pub quantity: f64,
}

impl ProductQuantity {
    /// Creates a new product/quantity pair.
    pub fn new(product: Product, quantity: f64) -> Self {
        ProductQuantity { product, quantity }
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (a typical promotional discount)
///
/// Keeping percentages integral avoids float drift in the registries; the
/// discount engines convert to a fraction only inside the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Creates a percentage from a percent value (for convenience).
    ///
    /// Rejects negative and non-finite input; an `f64 as u32` cast would
    /// silently saturate "-10%" to 0 bps and turn the discount into a no-op.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::types::Percentage;
    ///
    /// assert_eq!(Percentage::from_percent(10.0).unwrap().bps(), 1000);
    /// assert_eq!(Percentage::from_percent(10.25).unwrap().bps(), 1025);
    /// assert!(Percentage::from_percent(-10.0).is_err());
    /// ```
    pub fn from_percent(pct: f64) -> ValidationResult<Self> {
        if !pct.is_finite() || pct < 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: "percentage".to_string(),
                reason: format!("must be a finite non-negative number, got {pct}"),
            });
        }
        Ok(Percentage((pct * 100.0).round() as u32))
    }

    /// Returns the value in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the value as a fraction (1000 bps → 0.1), for formulas.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10000.0
    }
}

/// Renders the natural decimal form: "10", "10.5", "10.25".
/// Used in discount descriptions like "10% off".
impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
