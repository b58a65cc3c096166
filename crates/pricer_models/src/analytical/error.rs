//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from the closed-form pricer, its Greeks, and
//!   the implied-volatility solver

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Analytical pricing errors.
///
/// Every failure is terminal for the call that raised it; no partial
/// results are returned.
///
/// # Variants
/// - `InvalidOptionType`: Discriminator is neither call nor put
/// - `InvalidSpot` / `InvalidStrike` / `InvalidVolatility` / `InvalidExpiry`
///   / `InvalidRate`: Input outside its domain
/// - `InvalidPremium`: Observed premium not positive or not finite
/// - `DegeneratePrice`: Lambda requested for a contract priced at zero
/// - `InvalidConfig`: Implied-volatility solver settings rejected
/// - `ConvergenceFailure`: Implied-volatility root finding failed
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Option type discriminator not in {"call", "put"}.
    #[error(transparent)]
    InvalidOptionType(#[from] InstrumentError),

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time to expiry (negative or non-finite).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value (days)
        expiry: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid observed premium.
    #[error("Invalid premium: {premium}")]
    InvalidPremium {
        /// The invalid premium value
        premium: f64,
    },

    /// Price used as a denominator is zero or not finite.
    #[error("Degenerate option price {price}: elasticity is undefined")]
    DegeneratePrice {
        /// The offending price
        price: f64,
    },

    /// Solver configuration failed validation.
    #[error("Invalid implied volatility configuration: {message}")]
    InvalidConfig {
        /// Validation message
        message: String,
    },

    /// Root finder failed to produce an implied volatility.
    #[error("Implied volatility did not converge: {source}")]
    ConvergenceFailure {
        /// Underlying solver failure
        #[source]
        source: SolverError,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidOptionType(_)
            | AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidStrike { .. }
            | AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::InvalidExpiry { .. }
            | AnalyticalError::InvalidRate { .. }
            | AnalyticalError::InvalidPremium { .. }
            | AnalyticalError::InvalidConfig { .. } => PricingError::InvalidInput(err.to_string()),
            AnalyticalError::DegeneratePrice { .. }
            | AnalyticalError::ConvergenceFailure { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_option_type_is_transparent() {
        let err: AnalyticalError = InstrumentError::InvalidOptionType {
            value: "straddle".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Invalid option type"));
    }

    #[test]
    fn test_convergence_failure_exposes_source() {
        use std::error::Error as _;

        let err = AnalyticalError::ConvergenceFailure {
            source: SolverError::MaxIterationsExceeded { iterations: 100 },
        };
        assert!(err.to_string().contains("100 iterations"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_input_errors_map_to_invalid_input() {
        let errors = [
            AnalyticalError::InvalidSpot { spot: -1.0 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: -3.0 },
            AnalyticalError::InvalidPremium { premium: 0.0 },
            AnalyticalError::InvalidConfig {
                message: "max_iterations".to_string(),
            },
        ];
        for err in errors {
            match PricingError::from(err) {
                PricingError::InvalidInput(_) => {}
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_numeric_errors_map_to_instability() {
        let err = AnalyticalError::DegeneratePrice { price: 0.0 };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("elasticity")),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }
}
