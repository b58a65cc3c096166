//! Discrete-time binomial lattice pricing.
//!
//! - [`BinomialTree`]: validated inputs, per-step [`LatticeParameters`]
//! - [`LatticeState`]: inspectable asset and option-value grids
//! - [`lattice_call_price`]: one-shot `f64` call price

pub mod binomial;
pub mod error;

pub use binomial::{lattice_call_price, BinomialTree, LatticeParameters, LatticeState};
pub use error::LatticeError;
