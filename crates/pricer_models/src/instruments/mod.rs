//! Instrument definitions.
//!
//! - [`OptionType`]: call/put discriminator shared by the analytic and
//!   lattice pricers, parsed case-insensitively from text
//! - [`InstrumentError`]: rejection of unsupported discriminators
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{InstrumentError, OptionType};
//!
//! let put: OptionType = "Put".parse().unwrap();
//! assert!(put.is_put());
//!
//! let err = "straddle".parse::<OptionType>().unwrap_err();
//! assert!(matches!(err, InstrumentError::InvalidOptionType { .. }));
//! ```

pub mod error;
pub mod option_type;

pub use error::InstrumentError;
pub use option_type::OptionType;
