//! Bundled price and sensitivities for one contract.

use pricer_core::traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price and Greeks of a single option, as produced by
/// [`BlackScholes::greeks`](super::BlackScholes::greeks).
///
/// Theta, Vega and Rho follow the desk conventions documented on
/// [`BlackScholes`](super::BlackScholes) and use the raw day count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks<T: Float> {
    /// Option price
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// Time decay
    pub theta: T,
    /// Volatility sensitivity
    pub vega: T,
    /// Rate sensitivity
    pub rho: T,
    /// Elasticity Δ·S/V
    pub lambda: T,
    /// ∂²V/∂S∂σ
    pub vanna: T,
}
