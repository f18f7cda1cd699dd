//! # Teller
//!
//! The checkout orchestrator: turns a cart plus registered offers and
//! bundles into a completed receipt.
//!
//! ## Checkout Step Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        check_out(cart)                                  │
//! │                                                                         │
//! │  Step 1: every cart line  ──► catalog lookup ──► receipt line           │
//! │                                                                         │
//! │  Step 2: every distinct product with a bundle ──► Bundle engine         │
//! │          (skipped if the receipt already discounts that product)        │
//! │                                                                         │
//! │  Step 3: every distinct product with an offer ──► Offer engine          │
//! │                                                                         │
//! │  Bundles run BEFORE single-product offers. The skip rule in step 2      │
//! │  reads the discounts accumulated so far; running offers first would     │
//! │  make that check suppress bundles that should fire.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registry Semantics
//! At most one offer and one bundle are active per product; registering
//! again overwrites (last write wins). A product shared by two bundles
//! therefore keeps only the most recently registered one. That is almost
//! certainly a configuration bug on the part of whoever set up the promos,
//! so the overwrite is logged at warn level.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cart::ShoppingCart;
use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::offers::{Bundle, Offer, OfferArgument, SpecialOfferType};
use crate::receipt::Receipt;
use crate::types::{Product, ProductQuantity};

/// The checkout orchestrator.
///
/// Owns the catalog and the offer/bundle registries. Checkout itself is a
/// pure computation: many tellers can run concurrently as long as each cart
/// and receipt belongs to one logical request.
#[derive(Debug)]
pub struct Teller<C: Catalog> {
    catalog: C,
    offers: HashMap<Product, Offer>,
    /// Bundles are indexed under every constituent product so a cart
    /// touching any member triggers evaluation; the Arc shares one bundle
    /// across its index entries.
    bundles: HashMap<Product, Arc<Bundle>>,
}

impl<C: Catalog> Teller<C> {
    /// Creates a teller over a catalog, with empty registries.
    pub fn new(catalog: C) -> Self {
        Teller {
            catalog,
            offers: HashMap::new(),
            bundles: HashMap::new(),
        }
    }

    /// Registers a single-product offer. Last write wins per product.
    ///
    /// ## Errors
    /// A missing or wrongly-shaped argument for the kind fails here, at
    /// registration time, leaving the registry untouched.
    pub fn add_special_offer(
        &mut self,
        kind: SpecialOfferType,
        product: Product,
        argument: Option<OfferArgument>,
    ) -> CoreResult<()> {
        let offer = Offer::new(kind, product.clone(), argument)?;
        if self.offers.insert(product.clone(), offer).is_some() {
            debug!(product = %product.name, "replacing previously registered offer");
        }
        Ok(())
    }

    /// Registers a bundle offer, indexing it under each required product.
    /// Last write wins per product.
    ///
    /// ## Errors
    /// Fails at registration time for a non-percent kind, an empty or
    /// non-positive requirement list, or a missing percentage.
    pub fn add_bundle_offer(
        &mut self,
        kind: SpecialOfferType,
        product_quantities: Vec<ProductQuantity>,
        argument: Option<OfferArgument>,
    ) -> CoreResult<()> {
        let bundle = Arc::new(Bundle::new(kind, product_quantities, argument)?);
        for pq in bundle.items() {
            if self
                .bundles
                .insert(pq.product.clone(), Arc::clone(&bundle))
                .is_some()
            {
                warn!(
                    product = %pq.product.name,
                    "product already belongs to a bundle; keeping only the newest registration"
                );
            }
        }
        Ok(())
    }

    /// Checks out a cart into a completed receipt.
    ///
    /// Step sequence is deliberate (see module docs): lines, then bundles,
    /// then single-product offers. The only error source is a cart product
    /// missing from the catalog, which is propagated unrecovered.
    pub fn check_out(&self, cart: &ShoppingCart) -> CoreResult<Receipt> {
        debug!(lines = cart.lines().len(), "checking out cart");
        let mut receipt = Receipt::new();

        // Step 1: receipt lines, priced from the catalog.
        for line in cart.lines() {
            let unit_price = self.catalog.unit_price(&line.product)?;
            receipt.add_line(line.product.clone(), line.quantity, unit_price);
        }

        // Step 2: bundles, before single-product offers.
        self.apply_bundles(cart, &mut receipt)?;

        // Step 3: single-product offers on aggregate quantities.
        self.apply_offers(cart, &mut receipt)?;

        debug!(
            receipt = %receipt.id(),
            total = receipt.total().cents(),
            discounts = receipt.discounts().len(),
            "checkout complete"
        );
        Ok(receipt)
    }

    /// Evaluates registered bundles for every distinct cart product.
    ///
    /// A bundle spanning several cart products is reached once per member;
    /// the skip rule keeps it from being applied again, because the first
    /// firing already put discounts on the other members.
    fn apply_bundles(&self, cart: &ShoppingCart, receipt: &mut Receipt) -> CoreResult<()> {
        for product in cart.products() {
            let Some(bundle) = self.bundles.get(product) else {
                continue;
            };
            if receipt.has_discount_for(product) {
                debug!(product = %product.name, "already discounted, skipping bundle");
                continue;
            }
            let discounts = bundle.discounts_for(cart.product_quantities(), &self.catalog)?;
            receipt.add_discounts(discounts);
        }
        Ok(())
    }

    /// Evaluates registered single-product offers on aggregate quantities.
    fn apply_offers(&self, cart: &ShoppingCart, receipt: &mut Receipt) -> CoreResult<()> {
        for product in cart.products() {
            let Some(offer) = self.offers.get(product) else {
                continue;
            };
            if let Some(discount) = offer.discount_for(cart.quantity_of(product), &self.catalog)? {
                receipt.add_discount(discount);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
