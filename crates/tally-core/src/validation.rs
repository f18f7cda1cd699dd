//! # Validation Module
//!
//! Input validation utilities for Tally POS.
//!
//! Validation runs at the edge, on cart additions and offer registrations,
//! so the discount engines can assume well-formed inputs and checkout never
//! fails on bad configuration.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a cart or bundle quantity.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities are rejected)
/// - Must be non-negative; zero is allowed (an empty weigh-in is not an
///   error, it just never earns a discount)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2.5).is_ok());
/// assert!(validate_quantity(0.0).is_ok());
/// assert!(validate_quantity(-1.0).is_err());
/// assert!(validate_quantity(f64::NAN).is_err());
/// ```
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NonFiniteQuantity);
    }

    if quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity { quantity });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_quantities() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(2.5).is_ok());
        assert!(validate_quantity(999.0).is_ok());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        assert!(matches!(
            validate_quantity(-1.0),
            Err(ValidationError::NegativeQuantity { quantity }) if quantity == -1.0
        ));
    }

    #[test]
    fn test_non_finite_quantity_rejected() {
        assert!(matches!(
            validate_quantity(f64::NAN),
            Err(ValidationError::NonFiniteQuantity)
        ));
        assert!(matches!(
            validate_quantity(f64::INFINITY),
            Err(ValidationError::NonFiniteQuantity)
        ));
    }
}
