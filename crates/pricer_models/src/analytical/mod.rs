//! Closed-form approximation for American option prices.
//!
//! This module provides:
//! - [`BlackScholes`]: prices and Greeks for one contract (expiry in days)
//! - [`implied_volatility`]: Newton-Raphson inversion of the price
//! - [`american`]: `f64` free functions taking the option type as text
//! - [`ImpliedVolConfig`]: solver settings, loadable from TOML
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` and `f32` share one implementation
//! - **Validated construction**: domain checks happen once in `new`; the
//!   formulas propagate IEEE NaN/Inf instead of clamping
//! - **Numerical Stability**: erfc-based CDF, continuous at the origin

pub mod american;
pub mod black_scholes;
pub mod config;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, DAYS_PER_YEAR};
pub use config::{ConfigError, ImpliedVolConfig};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::Greeks;
pub use implied_vol::{implied_volatility, implied_volatility_with_config};
