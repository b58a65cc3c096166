//! Numerical methods shared by the pricing models.
//!
//! - `solvers`: scalar root finding used by implied volatility

pub mod solvers;
