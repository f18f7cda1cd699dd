//! # Catalog
//!
//! The price catalog is a collaborator of the checkout core: the teller
//! asks it for unit prices and nothing else. It is expressed as a trait so
//! real deployments can back it with a database or a price feed while the
//! core stays I/O-free.
//!
//! [`MemoryCatalog`] is the provided in-memory implementation, used for
//! configuration-time setup and throughout the test suite.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

/// Supplies the unit price for a product.
///
/// The core assumes every product it processes is catalog-resident; an
/// unknown product is a [`CoreError::ProductNotFound`] propagated to the
/// caller of checkout, never recovered internally.
pub trait Catalog {
    /// Returns the unit price for a product.
    fn unit_price(&self, product: &Product) -> CoreResult<Money>;
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    prices: HashMap<Product, Money>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MemoryCatalog {
            prices: HashMap::new(),
        }
    }

    /// Registers a product with its unit price. Re-registering a product
    /// replaces the previous price.
    pub fn add_product(&mut self, product: Product, price: Money) {
        self.prices.insert(product, price);
    }
}

impl Catalog for MemoryCatalog {
    fn unit_price(&self, product: &Product) -> CoreResult<Money> {
        self.prices
            .get(product)
            .copied()
            .ok_or_else(|| CoreError::ProductNotFound(product.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductUnit;

    #[test]
    fn test_unit_price_lookup() {
        let mut catalog = MemoryCatalog::new();
        let apples = Product::new("apples", ProductUnit::Kilo);
        catalog.add_product(apples.clone(), Money::from_cents(199));

        assert_eq!(catalog.unit_price(&apples).unwrap().cents(), 199);
    }

    #[test]
    fn test_unknown_product_fails() {
        let catalog = MemoryCatalog::new();
        let ghost = Product::new("ghost", ProductUnit::Each);

        let err = catalog.unit_price(&ghost).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(name) if name == "ghost"));
    }

    #[test]
    fn test_reregistration_replaces_price() {
        let mut catalog = MemoryCatalog::new();
        let rice = Product::new("rice", ProductUnit::Each);
        catalog.add_product(rice.clone(), Money::from_cents(249));
        catalog.add_product(rice.clone(), Money::from_cents(229));

        assert_eq!(catalog.unit_price(&rice).unwrap().cents(), 229);
    }
}
