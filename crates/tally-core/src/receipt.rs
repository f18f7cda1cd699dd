//! # Receipt
//!
//! The completed output of a checkout: ordered lines, ordered discounts,
//! and an on-demand total.
//!
//! Consumers (printers, persistence layers) get read-only access through
//! the accessors; only the teller appends to a receipt. The total is never
//! cached, so it stays correct if discounts are appended after lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::offers::Discount;
use crate::types::Product;

// =============================================================================
// Receipt Line
// =============================================================================

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product: Product,
    pub quantity: f64,
    /// Unit price at checkout time.
    pub unit_price: Money,
    /// quantity × unit price, rounded to the cent.
    pub total: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// A checkout receipt: accumulated lines plus accumulated discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier (UUID v4), assigned at creation.
    id: Uuid,

    /// When the receipt was created.
    created_at: DateTime<Utc>,

    lines: Vec<ReceiptLine>,
    discounts: Vec<Discount>,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            lines: Vec::new(),
            discounts: Vec::new(),
        }
    }

    /// The receipt identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the receipt was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a purchased line; the line total is quantity × unit price.
    pub fn add_line(&mut self, product: Product, quantity: f64, unit_price: Money) {
        let total = unit_price.mul_quantity(quantity);
        self.lines.push(ReceiptLine {
            product,
            quantity,
            unit_price,
            total,
        });
    }

    /// Appends a discount.
    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    /// Appends several discounts, preserving their order.
    pub fn add_discounts(&mut self, discounts: impl IntoIterator<Item = Discount>) {
        self.discounts.extend(discounts);
    }

    /// The purchased lines, in checkout order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// The discounts, in the order they were applied.
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Whether any discount on this receipt targets the given product.
    /// Drives the bundle skip rule in the teller.
    pub fn has_discount_for(&self, product: &Product) -> bool {
        self.discounts.iter().any(|d| &d.product == product)
    }

    /// The receipt total: sum of line totals plus sum of (negative)
    /// discount amounts. Computed on every call, never cached.
    pub fn total(&self) -> Money {
        let lines: Money = self.lines.iter().map(|line| line.total).sum();
        let discounts: Money = self.discounts.iter().map(|d| d.amount).sum();
        lines + discounts
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Receipt::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
