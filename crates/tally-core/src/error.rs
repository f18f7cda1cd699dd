//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors (catalog lookups)         │
//! │  └── ValidationError  - Input validation failures (quantities, offers)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller of check_out / add_*        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Validation fires at the earliest surface: cart addition or offer
//!    registration, never at checkout time

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core checkout errors.
///
/// These represent domain failures surfaced to the caller of the teller.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is not in the catalog.
    ///
    /// ## When This Occurs
    /// - A cart references a product the catalog was never configured with
    ///
    /// The core assumes every product it processes is catalog-resident; this
    /// error is propagated out of checkout, never recovered internally.
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a quantity or an offer registration doesn't meet
/// requirements. Raised before any state is mutated: a failed cart addition
/// leaves the cart untouched, a failed registration leaves the registry
/// untouched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required value is missing (e.g. a percent-off offer registered
    /// without its percentage).
    #[error("{field} is required")]
    Required { field: String },

    /// Quantity is negative.
    #[error("quantity must be non-negative, got {quantity}")]
    NegativeQuantity { quantity: f64 },

    /// Quantity is NaN or infinite.
    #[error("quantity must be a finite number")]
    NonFiniteQuantity,

    /// Value has the wrong shape for its context (e.g. a fixed amount where
    /// a percentage is expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
