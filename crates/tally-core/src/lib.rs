//! # tally-core: Pure Checkout Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It computes retail checkout
//! receipts: line totals from a price catalog, plus promotional discounts
//! from single-product offers and multi-product bundles.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Register frontends / catalog loaders (out of crate)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  offers   │  │  teller   │  │  receipt  │  │   │
//! │  │   │ lines +   │  │ Offer     │  │ checkout  │  │ lines +   │  │   │
//! │  │   │ aggregate │  │ Bundle    │  │ sequence  │  │ discounts │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductQuantity, Percentage)
//! - [`money`] - Money type with integer-cent arithmetic
//! - [`catalog`] - The price lookup trait plus an in-memory implementation
//! - [`cart`] - Cart line recording and per-product aggregation
//! - [`offers`] - Offer and bundle rules and their discount engines
//! - [`receipt`] - The checkout output
//! - [`teller`] - The checkout orchestrator
//! - [`printer`] - Fixed-width text rendering of receipts
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every checkout is deterministic over its inputs
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices and discounts are cents (i64); only
//!    quantities are floating point, and amounts round exactly once
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Fail at the edge**: Bad quantities and bad offer arguments are
//!    rejected when added/registered, so checkout itself can only fail on
//!    an unknown product
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{
//!     Money, MemoryCatalog, Product, ProductUnit, ShoppingCart,
//!     SpecialOfferType, Teller,
//! };
//!
//! let toothbrush = Product::new("toothbrush", ProductUnit::Each);
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_product(toothbrush.clone(), Money::from_cents(99));
//!
//! let mut teller = Teller::new(catalog);
//! teller.add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush.clone(), None)?;
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item_quantity(&toothbrush, 3.0)?;
//!
//! let receipt = teller.check_out(&cart)?;
//! assert_eq!(receipt.total(), Money::from_cents(198)); // paid 2, got 3
//! # Ok::<(), tally_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod offers;
pub mod printer;
pub mod receipt;
pub mod teller;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use cart::ShoppingCart;
pub use catalog::{Catalog, MemoryCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offers::{Bundle, Discount, Offer, OfferArgument, SpecialOfferType};
pub use printer::ReceiptPrinter;
pub use receipt::{Receipt, ReceiptLine};
pub use teller::Teller;
pub use types::{Percentage, Product, ProductQuantity, ProductUnit};
