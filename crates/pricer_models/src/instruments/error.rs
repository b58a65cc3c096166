//! Instrument error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type discriminator is neither call nor put
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidOptionType { value: "straddle".to_string() };
/// assert!(format!("{}", err).contains("straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option type discriminator not in {"call", "put"}.
    #[error("Invalid option type: {value:?} (expected \"call\" or \"put\")")]
    InvalidOptionType {
        /// The rejected discriminator text
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
