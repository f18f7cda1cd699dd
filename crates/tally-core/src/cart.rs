//! # Shopping Cart
//!
//! Records cart line additions and maintains running per-product totals.
//!
//! ## Two Views of the Same Cart
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ShoppingCart                                       │
//! │                                                                         │
//! │  lines()                 ordered additions, one entry per add call      │
//! │    toothbrush  3         (drives receipt line generation)               │
//! │    apples      1.5                                                      │
//! │    toothbrush  2                                                        │
//! │                                                                         │
//! │  product_quantities()    aggregate per product                          │
//! │    toothbrush → 5        (drives offer and bundle evaluation)           │
//! │    apples     → 1.5                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The aggregate for a product is the sum of all additions for it
//! - Quantities are validated on the way in; a rejected addition leaves the
//!   cart unmodified
//! - There is no removal operation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::{Product, ProductQuantity};
use crate::validation::validate_quantity;

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingCart {
    /// Every addition in order, as made.
    lines: Vec<ProductQuantity>,

    /// Running aggregate quantity per product.
    #[serde(with = "quantity_pairs")]
    quantities: HashMap<Product, f64>,

    /// Distinct products in first-added order, so discount evaluation is
    /// deterministic across runs.
    order: Vec<Product>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Adds a single unit of a product. Equivalent to
    /// `add_item_quantity(product, 1.0)`.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        self.add_item_quantity(product, 1.0)
    }

    /// Appends a cart line and adds the quantity to the product's running
    /// total, creating the entry if absent.
    ///
    /// ## Errors
    /// A negative or non-finite quantity is rejected at the point of
    /// addition and the cart is left unmodified.
    pub fn add_item_quantity(&mut self, product: &Product, quantity: f64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        self.lines.push(ProductQuantity::new(product.clone(), quantity));
        match self.quantities.get_mut(product) {
            Some(total) => *total += quantity,
            None => {
                self.quantities.insert(product.clone(), quantity);
                self.order.push(product.clone());
            }
        }
        Ok(())
    }

    /// The cart lines in the order they were added.
    pub fn lines(&self) -> &[ProductQuantity] {
        &self.lines
    }

    /// The aggregate quantity per product.
    pub fn product_quantities(&self) -> &HashMap<Product, f64> {
        &self.quantities
    }

    /// The aggregate quantity for one product, zero if absent.
    pub fn quantity_of(&self, product: &Product) -> f64 {
        self.quantities.get(product).copied().unwrap_or(0.0)
    }

    /// Distinct products in first-added order.
    pub fn products(&self) -> &[Product] {
        &self.order
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The aggregate map has a struct key, which formats like JSON cannot
/// represent as a map; it goes over the wire as a list of
/// (product, quantity) pairs instead.
mod quantity_pairs {
    use std::collections::HashMap;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Product;

    pub fn serialize<S>(map: &HashMap<Product, f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<Product, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(Product, f64)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
