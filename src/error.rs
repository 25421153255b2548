//! Error type returned by the pricing core.
//!
//! The pricers are pure functions, so every failure is a property of the inputs:
//! nothing is transient and nothing is retried.

use thiserror::Error;

/// Failure modes of [`price_call`](crate::price_call) and [`price_put`](crate::price_put).
///
/// # Examples
///
/// ```rust
/// use bs_pricing_lib::{price_call, PricingError};
///
/// let err = price_call(100.0, 0.0, 100.0, 1.0, 0.01).unwrap_err();
/// assert!(matches!(err, PricingError::InvalidParameter { name: "asset_volatility", .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input is outside the domain where the Black-Scholes formula is defined.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Field name as it appears on [`ContractParams`](crate::ContractParams)
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human readable constraint that was violated
        reason: &'static str,
    },

    /// An intermediate quantity left the representable range.
    #[error("Numeric overflow while computing {context}")]
    NumericOverflow {
        /// Which quantity overflowed
        context: &'static str,
    },
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn overflow(context: &'static str) -> Self {
        PricingError::NumericOverflow { context }
    }

    /// Returns true for errors caused by out-of-domain inputs.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, PricingError::InvalidParameter { .. })
    }
}

/// Returned when a string is not a recognised option type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid option type: {0}")]
pub struct ParseOptionTypeError(pub String);

/// Result alias used throughout the pricing core.
pub type PricingResult<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PricingError::invalid("strike_price", -1.0, "must be positive");
        let msg = format!("{}", err);
        assert!(msg.contains("strike_price"));
        assert!(msg.contains("-1"));
        assert!(msg.contains("must be positive"));

        let err = PricingError::overflow("discount factor");
        assert_eq!(format!("{}", err), "Numeric overflow while computing discount factor");
        assert!(!err.is_invalid_parameter());

        let err = ParseOptionTypeError("straddle".to_string());
        assert_eq!(format!("{}", err), "Invalid option type: straddle");
    }
}
