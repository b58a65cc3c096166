//! Cox-Ross-Rubinstein binomial lattice for calls.
//!
//! With `n` steps over `T` years:
//!
//! - `dt = T/n`, `u = e^(σ√dt)`, `d = 1/u`
//! - `q = (e^(r·dt) − d)/(u − d)`, `disc = e^(−r·dt)`
//!
//! Node `(i, j)` sits at step `i` after `j` down moves, so its asset price
//! is `S·u^(i−j)·d^j`. Terminal values are the call payoff and are rolled
//! back with `V[i, j] = disc·(q·V[i+1, j] + (1−q)·V[i+1, j+1])`.
//!
//! The roll-back never compares against exercise value, so the result is
//! the European call price on the tree.

use pricer_core::traits::Float;
use tracing::{debug, trace, warn};

use super::error::LatticeError;
use crate::instruments::OptionType;

/// Per-step tree constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParameters<T: Float> {
    /// Step length in years
    pub dt: T,
    /// Up factor e^(σ√dt)
    pub u: T,
    /// Down factor 1/u
    pub d: T,
    /// Risk-neutral up probability
    pub q: T,
    /// One-step discount factor e^(−r·dt)
    pub disc: T,
}

/// Asset and option-value grids of one pricing run.
///
/// Both grids are `(n+1) x (n+1)`, indexed `(step, node)`; entries with
/// `node > step` are never written and stay zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeState<T: Float> {
    steps: usize,
    asset: Vec<T>,
    value: Vec<T>,
}

impl<T: Float> LatticeState<T> {
    fn zeros(steps: usize) -> Self {
        let len = (steps + 1) * (steps + 1);
        Self {
            steps,
            asset: vec![T::zero(); len],
            value: vec![T::zero(); len],
        }
    }

    #[inline]
    fn index(&self, step: usize, node: usize) -> usize {
        debug_assert!(step <= self.steps && node <= self.steps);
        step * (self.steps + 1) + node
    }

    /// Number of time steps `n`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Asset price at `(step, node)`.
    ///
    /// # Panics
    /// If either index exceeds `n`.
    #[inline]
    pub fn asset(&self, step: usize, node: usize) -> T {
        self.asset[self.index(step, node)]
    }

    /// Option value at `(step, node)`.
    ///
    /// # Panics
    /// If either index exceeds `n`.
    #[inline]
    pub fn value(&self, step: usize, node: usize) -> T {
        self.value[self.index(step, node)]
    }

    /// Option value at the root node `(0, 0)`.
    #[inline]
    pub fn root_value(&self) -> T {
        self.value[0]
    }
}

/// Binomial tree for a call on a non-dividend-paying asset.
///
/// # Examples
/// ```
/// use pricer_models::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(100.0_f64, 100.0, 0.02, 1.0, 0.2, 200).unwrap();
/// let price = tree.price_call();
/// assert!((price - 8.916).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialTree<T: Float> {
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    volatility: T,
    steps: usize,
}

impl<T: Float> BinomialTree<T> {
    /// Creates a tree.
    ///
    /// # Arguments
    /// * `spot` - Underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Annualised risk-free rate
    /// * `expiry` - Time to expiry in **years** (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `steps` - Number of time steps (at least 1)
    pub fn new(
        spot: T,
        strike: T,
        rate: T,
        expiry: T,
        volatility: T,
        steps: usize,
    ) -> Result<Self, LatticeError> {
        let zero = T::zero();
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        if !(spot > zero && spot.is_finite()) {
            return Err(LatticeError::InvalidSpot { spot: as_f64(spot) });
        }
        if !(strike > zero && strike.is_finite()) {
            return Err(LatticeError::InvalidStrike {
                strike: as_f64(strike),
            });
        }
        if !rate.is_finite() {
            return Err(LatticeError::InvalidRate { rate: as_f64(rate) });
        }
        if !(expiry > zero && expiry.is_finite()) {
            return Err(LatticeError::InvalidExpiry {
                expiry: as_f64(expiry),
            });
        }
        if !(volatility > zero && volatility.is_finite()) {
            return Err(LatticeError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }
        if steps == 0 {
            return Err(LatticeError::InvalidSteps { steps });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            volatility,
            steps,
        })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Per-step constants `dt, u, d, q, disc`.
    pub fn parameters(&self) -> LatticeParameters<T> {
        let steps = T::from(self.steps).unwrap();
        let dt = self.expiry / steps;
        let u = (self.volatility * dt.sqrt()).exp();
        let d = T::one() / u;
        let q = ((self.rate * dt).exp() - d) / (u - d);
        let disc = (-self.rate * dt).exp();
        LatticeParameters { dt, u, d, q, disc }
    }

    /// Fills both grids and returns them.
    pub fn build(&self) -> LatticeState<T> {
        let n = self.steps;
        let params = self.parameters();
        let LatticeParameters { u, d, q, disc, .. } = params;

        debug!(
            steps = n,
            dt = params.dt.to_f64(),
            u = u.to_f64(),
            d = d.to_f64(),
            q = q.to_f64(),
            "building binomial lattice"
        );
        if !(q >= T::zero() && q <= T::one()) {
            warn!(
                q = q.to_f64(),
                "risk-neutral probability outside [0, 1]; increase the step count"
            );
        }

        let mut state = LatticeState::zeros(n);

        for i in 0..=n {
            for j in 0..=i {
                let idx = state.index(i, j);
                state.asset[idx] = self.spot * u.powi((i - j) as i32) * d.powi(j as i32);
            }
        }

        for j in 0..=n {
            let idx = state.index(n, j);
            state.value[idx] = OptionType::Call.intrinsic(state.asset[idx], self.strike);
        }

        let one_minus_q = T::one() - q;
        for i in (0..n).rev() {
            for j in 0..=i {
                let up = state.value(i + 1, j);
                let down = state.value(i + 1, j + 1);
                let idx = state.index(i, j);
                state.value[idx] = disc * (q * up + one_minus_q * down);
            }
        }

        trace!(root = state.root_value().to_f64(), "lattice rolled back");
        state
    }

    /// Call value at the root of the tree.
    #[inline]
    pub fn price_call(&self) -> T {
        self.build().root_value()
    }
}

/// Lattice call price for `f64` inputs, `expiry` in years.
///
/// ```
/// use pricer_models::lattice::lattice_call_price;
///
/// let price = lattice_call_price(100.0, 100.0, 0.02, 1.0, 0.2, 500).unwrap();
/// assert!((price - 8.916).abs() / 8.916 < 0.01);
/// assert!(lattice_call_price(100.0, 100.0, 0.02, 1.0, 0.2, 0).is_err());
/// ```
pub fn lattice_call_price(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    steps: usize,
) -> Result<f64, LatticeError> {
    Ok(BinomialTree::new(spot, strike, rate, expiry, volatility, steps)?.price_call())
}
