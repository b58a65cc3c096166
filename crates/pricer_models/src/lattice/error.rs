//! Lattice error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Binomial lattice construction errors.
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeError;
///
/// let err = LatticeError::InvalidSteps { steps: 0 };
/// assert!(err.to_string().contains("steps"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Spot price non-positive or non-finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Strike non-positive or non-finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Volatility non-positive or non-finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Time to expiry non-positive or non-finite.
    #[error("Invalid time to expiry: T = {expiry} years")]
    InvalidExpiry {
        /// The invalid expiry value (years)
        expiry: f64,
    },

    /// Rate non-finite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Step count of zero.
    #[error("Invalid number of steps: {steps} (must be at least 1)")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LatticeError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(err.to_string(), "Invalid time to expiry: T = 0 years");
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = LatticeError::InvalidSteps { steps: 0 }.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("at least 1")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
