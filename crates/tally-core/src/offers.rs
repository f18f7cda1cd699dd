//! # Offers Module
//!
//! Promotional rules and the engines that turn them into discounts.
//!
//! ## Offer Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind            Threshold   Discount (u = unit price, q = quantity)    │
//! │  ─────────────   ─────────   ─────────────────────────────────────────  │
//! │  3 for 2         q ≥ 3       −(q·u − (⌊q/3⌋·2·u + (q mod 3)·u))         │
//! │  percent off     none        −(q·u·a/100)                               │
//! │  2 for amount    q ≥ 2       paid = a·⌊q/2⌋ + (q mod 2)·u               │
//! │  5 for amount    q ≥ 5       paid = a·⌊q/5⌋ + (q mod 5)·u               │
//! │                              discount = −(q·u − paid)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Below its threshold an offer yields no discount. Quotient and remainder
//! use true floating floor division: weighed products with fractional
//! quantities are valid inputs.
//!
//! A [`Bundle`] is the multi-product counterpart: it requires a fixed list
//! of (product, quantity) pairs and fires only when the cart satisfies all
//! of them. See [`Bundle::discounts_for`] for the multiplier rule.
//!
//! Offer arguments are validated at registration time ([`Offer::new`],
//! [`Bundle::new`]); the evaluation paths never fail on configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Percentage, Product, ProductQuantity};
use crate::validation::validate_quantity;

// =============================================================================
// Offer Kind & Argument
// =============================================================================

/// The enumerated kinds of single-product offers.
///
/// The kind plus its argument fully determines the discount formula; there
/// is no per-kind dispatch hierarchy, just [`Offer::discount_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialOfferType {
    /// Buy three, pay for two.
    ThreeForTwo,
    /// A percentage off the whole line.
    PercentOff,
    /// Two units for a fixed amount.
    TwoForAmount,
    /// Five units for a fixed amount.
    FiveForAmount,
}

/// The argument supplied when registering an offer or bundle.
///
/// Its meaning depends on the kind: a percentage for [`PercentOff`], a
/// fixed amount for the n-for-amount kinds. [`ThreeForTwo`] takes none.
///
/// [`PercentOff`]: SpecialOfferType::PercentOff
/// [`ThreeForTwo`]: SpecialOfferType::ThreeForTwo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferArgument {
    Percent(Percentage),
    Amount(Money),
}

/// Resolves an argument into a percentage, or fails with the registration
/// error the caller reports.
fn require_percent(argument: Option<OfferArgument>) -> Result<Percentage, ValidationError> {
    match argument {
        Some(OfferArgument::Percent(pct)) => Ok(pct),
        Some(OfferArgument::Amount(_)) => Err(ValidationError::InvalidFormat {
            field: "argument".to_string(),
            reason: "expected a percentage, got a fixed amount".to_string(),
        }),
        None => Err(ValidationError::Required {
            field: "argument".to_string(),
        }),
    }
}

/// Resolves an argument into a fixed amount.
fn require_amount(argument: Option<OfferArgument>) -> Result<Money, ValidationError> {
    match argument {
        Some(OfferArgument::Amount(amount)) => Ok(amount),
        Some(OfferArgument::Percent(_)) => Err(ValidationError::InvalidFormat {
            field: "argument".to_string(),
            reason: "expected a fixed amount, got a percentage".to_string(),
        }),
        None => Err(ValidationError::Required {
            field: "argument".to_string(),
        }),
    }
}

// =============================================================================
// Offer (single product)
// =============================================================================

/// The fully-validated rule stored for a product. Kind and argument are
/// fused at construction so evaluation cannot hit a missing argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OfferRule {
    ThreeForTwo,
    PercentOff(Percentage),
    TwoForAmount(Money),
    FiveForAmount(Money),
}

/// A single-product promotional rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    product: Product,
    rule: OfferRule,
}

impl Offer {
    /// Creates an offer, validating the argument against the kind.
    ///
    /// ## Errors
    /// - [`ValidationError::Required`] if the kind needs an argument and
    ///   none was given
    /// - [`ValidationError::InvalidFormat`] if the argument has the wrong
    ///   shape for the kind
    ///
    /// Registration is the only place this can fail; checkout never does.
    pub fn new(
        kind: SpecialOfferType,
        product: Product,
        argument: Option<OfferArgument>,
    ) -> CoreResult<Self> {
        let rule = match kind {
            // The 3-for-2 deal carries no argument; a stray one is ignored.
            SpecialOfferType::ThreeForTwo => OfferRule::ThreeForTwo,
            SpecialOfferType::PercentOff => OfferRule::PercentOff(require_percent(argument)?),
            SpecialOfferType::TwoForAmount => OfferRule::TwoForAmount(require_amount(argument)?),
            SpecialOfferType::FiveForAmount => OfferRule::FiveForAmount(require_amount(argument)?),
        };

        Ok(Offer { product, rule })
    }

    /// The product this offer targets.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Evaluates the offer against the product's aggregate purchased
    /// quantity. Returns `None` when the quantity is below the kind's
    /// threshold.
    ///
    /// The only failure mode is the catalog lookup.
    pub fn discount_for(&self, quantity: f64, catalog: &dyn Catalog) -> CoreResult<Option<Discount>> {
        let unit_price = catalog.unit_price(&self.product)?;

        let discount = match self.rule {
            OfferRule::ThreeForTwo if quantity >= 3.0 => {
                Some(self.three_for_two(quantity, unit_price))
            }
            OfferRule::PercentOff(pct) => Some(self.percent_off(quantity, unit_price, pct)),
            OfferRule::TwoForAmount(amount) if quantity >= 2.0 => {
                self.n_for_amount(quantity, unit_price, 2.0, amount)
            }
            OfferRule::FiveForAmount(amount) if quantity >= 5.0 => {
                self.n_for_amount(quantity, unit_price, 5.0, amount)
            }
            _ => None,
        };

        if let Some(d) = &discount {
            debug!(product = %self.product.name, amount = d.amount.cents(), "offer fired");
        }

        Ok(discount)
    }

    /// Buy three, pay for two: every full group of three earns one free
    /// unit; the remainder is charged at full price.
    fn three_for_two(&self, quantity: f64, unit_price: Money) -> Discount {
        let unit = unit_price.as_fractional_cents();
        let groups = (quantity / 3.0).floor();
        let remainder = quantity % 3.0;

        let gross = quantity * unit;
        let paid = groups * 2.0 * unit + remainder * unit;

        Discount::new(
            self.product.clone(),
            "3 for 2".to_string(),
            Money::from_fractional_cents(paid - gross),
        )
    }

    /// A flat percentage off the line. No quantity threshold.
    fn percent_off(&self, quantity: f64, unit_price: Money, pct: Percentage) -> Discount {
        let amount = -(quantity * unit_price.as_fractional_cents() * pct.fraction());

        Discount::new(
            self.product.clone(),
            format!("{}% off", pct),
            Money::from_fractional_cents(amount),
        )
    }

    /// N units for a fixed amount: every full group of `n` is charged the
    /// fixed amount, the remainder at full price.
    ///
    /// A fixed amount at or above n × unit price is not a saving (the
    /// catalog price may have dropped below the promo since registration),
    /// so the offer yields no discount rather than a positive amount;
    /// discounts are reductions, always.
    fn n_for_amount(
        &self,
        quantity: f64,
        unit_price: Money,
        n: f64,
        fixed: Money,
    ) -> Option<Discount> {
        let unit = unit_price.as_fractional_cents();
        let groups = (quantity / n).floor();
        let remainder = quantity % n;

        let gross = quantity * unit;
        let paid = fixed.as_fractional_cents() * groups + remainder * unit;

        if paid >= gross {
            debug!(
                product = %self.product.name,
                "fixed amount is no saving at the current unit price, no discount"
            );
            return None;
        }

        Some(Discount::new(
            self.product.clone(),
            format!("{} for {}", n as i64, fixed.to_price_string()),
            Money::from_fractional_cents(paid - gross),
        ))
    }
}

// =============================================================================
// Bundle (multi product)
// =============================================================================

/// A multi-product promotional rule: a percentage off a fixed basket of
/// required (product, quantity) pairs, earned once per completed basket.
///
/// Only the percent-off kind is supported for bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    items: Vec<ProductQuantity>,
    percent: Percentage,
}

impl Bundle {
    /// Creates a bundle, validating kind, requirements, and argument.
    ///
    /// ## Errors
    /// - [`ValidationError::InvalidFormat`] for a non-percent kind, an
    ///   empty requirement list, or a non-positive required quantity
    /// - [`ValidationError::Required`] when the percentage is missing
    pub fn new(
        kind: SpecialOfferType,
        product_quantities: Vec<ProductQuantity>,
        argument: Option<OfferArgument>,
    ) -> CoreResult<Self> {
        if kind != SpecialOfferType::PercentOff {
            return Err(ValidationError::InvalidFormat {
                field: "offer_type".to_string(),
                reason: "bundles support percent-off only".to_string(),
            }
            .into());
        }

        if product_quantities.is_empty() {
            return Err(ValidationError::Required {
                field: "product_quantities".to_string(),
            }
            .into());
        }

        for pq in &product_quantities {
            validate_quantity(pq.quantity)?;
            if pq.quantity == 0.0 {
                return Err(ValidationError::InvalidFormat {
                    field: "product_quantities".to_string(),
                    reason: format!("required quantity for {} must be positive", pq.product.name),
                }
                .into());
            }
        }

        let percent = require_percent(argument)?;

        Ok(Bundle {
            items: product_quantities,
            percent,
        })
    }

    /// The required (product, quantity) pairs, in declared order.
    pub fn items(&self) -> &[ProductQuantity] {
        &self.items
    }

    /// Evaluates the bundle against the cart's aggregate quantities.
    ///
    /// ## Completion Rule
    /// The bundle fires only if every required pair is satisfied:
    /// cart quantity ≥ required quantity for all members. A partial bundle
    /// yields nothing, no partial credit.
    ///
    /// ## Multiplier Rule
    /// ```text
    /// multiplier = min over pairs of ⌊cart_quantity / required_quantity⌋
    ///
    /// Requirements {A:2, B:1}, cart {A:4, B:3}:
    ///     min(⌊4/2⌋, ⌊3/1⌋) = 2   → the basket was completed twice
    /// ```
    /// One discount is emitted per required pair, in declared order:
    /// −(multiplier · required_quantity · unit_price · percent).
    pub fn discounts_for(
        &self,
        quantities: &std::collections::HashMap<Product, f64>,
        catalog: &dyn Catalog,
    ) -> CoreResult<Vec<Discount>> {
        let mut multiplier = f64::INFINITY;
        for pq in &self.items {
            match quantities.get(&pq.product) {
                Some(&in_cart) if in_cart >= pq.quantity => {
                    multiplier = multiplier.min((in_cart / pq.quantity).floor());
                }
                _ => {
                    debug!(product = %pq.product.name, "bundle incomplete, no discount");
                    return Ok(Vec::new());
                }
            }
        }

        let mut discounts = Vec::with_capacity(self.items.len());
        for pq in &self.items {
            let unit_price = catalog.unit_price(&pq.product)?;
            let amount = -(multiplier
                * pq.quantity
                * unit_price.as_fractional_cents()
                * self.percent.fraction());

            discounts.push(Discount::new(
                pq.product.clone(),
                format!("{}% off", self.percent),
                Money::from_fractional_cents(amount),
            ));
        }

        Ok(discounts)
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A negative monetary adjustment attached to one product on a receipt.
///
/// Invariant: the amount is never positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub product: Product,
    pub description: String,
    pub amount: Money,
}

impl Discount {
    /// Creates a discount. The amount must be a reduction (≤ 0).
    pub fn new(product: Product, description: String, amount: Money) -> Self {
        debug_assert!(
            !amount.cents().is_positive(),
            "discount amount must be non-positive, got {amount}"
        );
        Discount {
            product,
            description,
            amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
