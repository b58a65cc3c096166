//! Black-Scholes style approximation for American option prices and Greeks.
//!
//! Time to expiry is quoted in **days**. The shared intermediates use the
//! year fraction τ = T/365:
//!
//! - d₁ = (ln(S/K) + (r + σ²/2)·τ) / (σ·√τ)
//! - d₂ = d₁ − σ·√τ
//!
//! **Call Price**: C = S·Φ(d₁) − K·e^(−r·τ)·Φ(d₂)
//! **Put Price**: P = K·e^(−r·τ)·Φ(−d₂) − S·Φ(−d₁)
//!
//! The Greek formulas are kept exactly as quoted by the desk, including
//! terms that use the raw day count T rather than τ:
//!
//! | Greek | Call | Put |
//! |---|---|---|
//! | Delta | Φ(d₁) | Φ(d₁) − 1 |
//! | Gamma | φ(d₁)/(S·σ·√T) | same |
//! | Theta | −S·φ(d₁)·σ/(2√T) − r·K·e^(−rT)·Φ(d₂) | −S·φ(d₁)·σ/(2√T) + r·K·e^(−rT)·Φ(−d₂) |
//! | Vega | S·φ(d₁)·√T | same |
//! | Rho | K·T·e^(−rT)·Φ(d₁) | −K·T·e^(−rT)·Φ(−d₁) |
//! | Lambda | Δ·S/C | Δ·S/P |
//! | Vanna | e^(−r·τ)·√τ·(d₂/σ)·e^(−d₁²/2)/(2π) | negated |
//!
//! Domain violations inside the formulas (e.g. a call at T = 0) propagate
//! as IEEE NaN/Inf; only Lambda raises an explicit error for a zero price.

use pricer_core::traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::Greeks;
use crate::instruments::OptionType;

/// Day count used to turn the expiry into a year fraction.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Closed-form pricer for one contract.
///
/// Holds the validated inputs; every price and Greek recomputes d₁/d₂ on
/// demand.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// // 1-year (365-day) at-the-money contract
/// let bs = BlackScholes::new(100.0_f64, 100.0, 0.2, 365.0, 0.02).unwrap();
/// let call = bs.call_price();
/// assert!((call - 8.916).abs() < 1e-3);
///
/// // Put-call parity with the τ-discounted strike
/// let parity = call - bs.put_price() - (100.0 - 100.0 * (-0.02_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Annualised volatility (σ)
    volatility: T,
    /// Time to expiry in days (T)
    expiry_days: T,
    /// Annualised risk-free rate (r)
    rate: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a pricer for one contract.
    ///
    /// # Arguments
    /// * `spot` - Underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `expiry_days` - Time to expiry in days (must be non-negative)
    /// * `rate` - Annualised risk-free rate (any sign)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `AnalyticalError::InvalidExpiry` if expiry_days < 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 100.0, 0.2, 30.0, 0.02).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 100.0, 0.2, 30.0, 0.02).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 100.0, 0.0, 30.0, 0.02).is_err());
    /// ```
    pub fn new(
        spot: T,
        strike: T,
        volatility: T,
        expiry_days: T,
        rate: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        if !(spot > zero && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot: as_f64(spot) });
        }
        if !(strike > zero && strike.is_finite()) {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(strike),
            });
        }
        if !(volatility > zero && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }
        if !(expiry_days >= zero && expiry_days.is_finite()) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(expiry_days),
            });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: as_f64(rate) });
        }

        Ok(Self {
            spot,
            strike,
            volatility,
            expiry_days,
            rate,
        })
    }

    /// Returns a copy priced at another volatility.
    ///
    /// Skips validation: the implied-volatility solver tries trial values
    /// the constructor would reject.
    #[inline]
    pub(crate) fn with_volatility(&self, volatility: T) -> Self {
        Self { volatility, ..*self }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to expiry in days.
    #[inline]
    pub fn expiry_days(&self) -> T {
        self.expiry_days
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Year fraction τ = T/365.
    #[inline]
    pub fn year_fraction(&self) -> T {
        self.expiry_days / T::from(DAYS_PER_YEAR).unwrap()
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)·τ) / (σ·√τ)
    #[inline]
    pub fn d1(&self) -> T {
        let half = T::from(0.5).unwrap();
        let tau = self.year_fraction();
        let drift = (self.rate + half * self.volatility * self.volatility) * tau;
        ((self.spot / self.strike).ln() + drift) / (self.volatility * tau.sqrt())
    }

    /// d₂ = d₁ − σ·√τ
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.volatility * self.year_fraction().sqrt()
    }

    /// e^(−r·τ)
    #[inline]
    fn discount(&self) -> T {
        (-self.rate * self.year_fraction()).exp()
    }

    /// e^(−r·T) with T in days, as used by Theta and Rho.
    #[inline]
    fn raw_discount(&self) -> T {
        (-self.rate * self.expiry_days).exp()
    }

    /// Call price C = S·Φ(d₁) − K·e^(−r·τ)·Φ(d₂).
    #[inline]
    pub fn call_price(&self) -> T {
        let d1 = self.d1();
        let d2 = self.d2();
        self.spot * norm_cdf(d1) - self.strike * self.discount() * norm_cdf(d2)
    }

    /// Put price P = K·e^(−r·τ)·Φ(−d₂) − S·Φ(−d₁).
    ///
    /// An expired put (T = 0) is worth exactly zero; d₁/d₂ are not
    /// evaluated in that case.
    ///
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let expired = BlackScholes::new(80.0_f64, 100.0, 0.3, 0.0, 0.05).unwrap();
    /// assert_eq!(expired.put_price(), 0.0);
    /// ```
    #[inline]
    pub fn put_price(&self) -> T {
        if self.expiry_days == T::zero() {
            return T::zero();
        }
        let d1 = self.d1();
        let d2 = self.d2();
        self.strike * self.discount() * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Price of the given option type.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    /// Delta: Φ(d₁) for calls, Φ(d₁) − 1 for puts.
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> T {
        let n_d1 = norm_cdf(self.d1());
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Gamma: φ(d₁)/(S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        norm_pdf(self.d1()) / (self.spot * self.volatility * self.expiry_days.sqrt())
    }

    /// Theta.
    ///
    /// - Call: −S·φ(d₁)·σ/(2√T) − r·K·e^(−rT)·Φ(d₂)
    /// - Put: −S·φ(d₁)·σ/(2√T) + r·K·e^(−rT)·Φ(−d₂)
    #[inline]
    pub fn theta(&self, option_type: OptionType) -> T {
        let d1 = self.d1();
        let d2 = self.d2();
        let two = T::from(2.0).unwrap();

        let decay = -self.spot * norm_pdf(d1) * self.volatility / (two * self.expiry_days.sqrt());
        let carry = self.rate * self.strike * self.raw_discount();

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Vega: S·φ(d₁)·√T, identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> T {
        self.spot * norm_pdf(self.d1()) * self.expiry_days.sqrt()
    }

    /// Rho.
    ///
    /// - Call: K·T·e^(−rT)·Φ(d₁)
    /// - Put: −K·T·e^(−rT)·Φ(−d₁)
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> T {
        let d1 = self.d1();
        let scale = self.strike * self.expiry_days * self.raw_discount();
        match option_type {
            OptionType::Call => scale * norm_cdf(d1),
            OptionType::Put => -scale * norm_cdf(-d1),
        }
    }

    /// Lambda (elasticity): Δ·S / price.
    ///
    /// # Errors
    /// `AnalyticalError::DegeneratePrice` when the contract's own price is
    /// zero or not finite.
    ///
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 100.0, 0.2, 365.0, 0.02).unwrap();
    /// assert!(bs.lambda(OptionType::Call).unwrap() > 1.0);
    ///
    /// let expired = BlackScholes::new(100.0_f64, 100.0, 0.2, 0.0, 0.02).unwrap();
    /// assert!(expired.lambda(OptionType::Put).is_err());
    /// ```
    pub fn lambda(&self, option_type: OptionType) -> Result<T, AnalyticalError> {
        let price = self.price(option_type);
        if price == T::zero() || !price.is_finite() {
            return Err(AnalyticalError::DegeneratePrice {
                price: price.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.delta(option_type) * self.spot / price)
    }

    /// Vanna: e^(−r·τ)·√τ·(d₂/σ)·e^(−d₁²/2)/(2π) for calls, negated for puts.
    ///
    /// The e^(−d₁²/2)/(2π) factor is the quoted desk formula, not φ(d₁).
    #[inline]
    pub fn vanna(&self, option_type: OptionType) -> T {
        let d1 = self.d1();
        let d2 = self.d2();
        let half = T::from(0.5).unwrap();
        let two_pi = T::from(2.0 * std::f64::consts::PI).unwrap();
        let tau = self.year_fraction();

        let gaussian = (-half * d1 * d1).exp() / two_pi;
        let call_vanna = self.discount() * tau.sqrt() * (d2 / self.volatility) * gaussian;
        match option_type {
            OptionType::Call => call_vanna,
            OptionType::Put => -call_vanna,
        }
    }

    /// Exact derivative of the price with respect to σ.
    ///
    /// ∂C/∂σ = ∂P/∂σ = (K·e^(−r·τ)·φ(d₂)·d₁ − S·φ(d₁)·d₂) / σ
    ///
    /// Unlike [`vega`](Self::vega) this is consistent with the τ-based
    /// price formulas, so it is the slope the implied-volatility Newton
    /// iteration follows.
    #[inline]
    pub fn price_sensitivity_to_vol(&self) -> T {
        let d1 = self.d1();
        let d2 = self.d2();
        (self.strike * self.discount() * norm_pdf(d2) * d1 - self.spot * norm_pdf(d1) * d2)
            / self.volatility
    }

    /// All sensitivities for one option type.
    ///
    /// # Errors
    /// Propagates `AnalyticalError::DegeneratePrice` from Lambda.
    pub fn greeks(&self, option_type: OptionType) -> Result<Greeks<T>, AnalyticalError> {
        Ok(Greeks {
            price: self.price(option_type),
            delta: self.delta(option_type),
            gamma: self.gamma(),
            theta: self.theta(option_type),
            vega: self.vega(),
            rho: self.rho(option_type),
            lambda: self.lambda(option_type)?,
            vanna: self.vanna(option_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_one_year() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 100.0, 0.2, 365.0, 0.02).unwrap()
    }

    fn month() -> BlackScholes<f64> {
        BlackScholes::new(105.0, 100.0, 0.25, 30.0, 0.03).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_rejects_invalid_inputs() {
        match BlackScholes::new(0.0_f64, 100.0, 0.2, 30.0, 0.02) {
            Err(AnalyticalError::InvalidSpot { spot }) => assert_eq!(spot, 0.0),
            other => panic!("Expected InvalidSpot, got {:?}", other),
        }
        match BlackScholes::new(100.0_f64, -5.0, 0.2, 30.0, 0.02) {
            Err(AnalyticalError::InvalidStrike { strike }) => assert_eq!(strike, -5.0),
            other => panic!("Expected InvalidStrike, got {:?}", other),
        }
        match BlackScholes::new(100.0_f64, 100.0, -0.2, 30.0, 0.02) {
            Err(AnalyticalError::InvalidVolatility { volatility }) => assert_eq!(volatility, -0.2),
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
        match BlackScholes::new(100.0_f64, 100.0, 0.2, -1.0, 0.02) {
            Err(AnalyticalError::InvalidExpiry { expiry }) => assert_eq!(expiry, -1.0),
            other => panic!("Expected InvalidExpiry, got {:?}", other),
        }
        assert!(BlackScholes::new(f64::NAN, 100.0, 0.2, 30.0, 0.02).is_err());
        assert!(BlackScholes::new(100.0, 100.0, f64::INFINITY, 30.0, 0.02).is_err());
        assert!(BlackScholes::new(100.0, 100.0, 0.2, 30.0, f64::NAN).is_err());
    }

    #[test]
    fn test_new_allows_negative_rate_and_zero_expiry() {
        assert!(BlackScholes::new(100.0_f64, 100.0, 0.2, 30.0, -0.01).is_ok());
        assert!(BlackScholes::new(100.0_f64, 100.0, 0.2, 0.0, 0.02).is_ok());
    }

    #[test]
    fn test_accessors() {
        let bs = month();
        assert_eq!(bs.spot(), 105.0);
        assert_eq!(bs.strike(), 100.0);
        assert_eq!(bs.volatility(), 0.25);
        assert_eq!(bs.expiry_days(), 30.0);
        assert_eq!(bs.rate(), 0.03);
        assert_relative_eq!(bs.year_fraction(), 30.0 / 365.0, epsilon = 1e-15);
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_one_year_atm() {
        // τ = 1: d1 = (0.02 + 0.02) / 0.2 = 0.2, d2 = 0
        let bs = atm_one_year();
        assert_relative_eq!(bs.d1(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_offset() {
        let bs = month();
        let expected = bs.d1() - 0.25 * (30.0_f64 / 365.0).sqrt();
        assert_relative_eq!(bs.d2(), expected, epsilon = 1e-14);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S·Φ(0.2) − K·e^(−0.02)·Φ(0) = 57.9260 − 49.0099
        let call = atm_one_year().call_price();
        assert_relative_eq!(call, 8.916, epsilon = 1e-3);
        let lower = (100.0 - 100.0 * (-0.02_f64).exp()).max(0.0);
        assert!(call > lower && call < 100.0);
    }

    #[test]
    fn test_put_price_reference_value() {
        // K·e^(−0.02)·Φ(0) − S·Φ(−0.2) = 49.0099 − 42.0740
        let put = atm_one_year().put_price();
        assert_relative_eq!(put, 6.936, epsilon = 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        for strike in [80.0, 95.0, 100.0, 110.0, 130.0] {
            for days in [7.0, 30.0, 182.0, 365.0, 730.0] {
                let bs = BlackScholes::new(100.0_f64, strike, 0.3, days, 0.04).unwrap();
                let forward = 100.0 - strike * (-0.04 * days / 365.0_f64).exp();
                assert_relative_eq!(bs.call_price() - bs.put_price(), forward, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_expired_put_is_exactly_zero() {
        for (spot, strike) in [(80.0, 100.0), (100.0, 100.0), (120.0, 100.0)] {
            let bs = BlackScholes::new(spot, strike, 0.4, 0.0, 0.05).unwrap();
            assert_eq!(bs.put_price(), 0.0);
            assert_eq!(bs.price(OptionType::Put), 0.0);
        }
    }

    #[test]
    fn test_expired_call_propagates_ieee_values() {
        let atm = BlackScholes::new(100.0_f64, 100.0, 0.2, 0.0, 0.02).unwrap();
        assert!(atm.call_price().is_nan());
    }

    #[test]
    fn test_price_dispatch() {
        let bs = month();
        assert_eq!(bs.price(OptionType::Call), bs.call_price());
        assert_eq!(bs.price(OptionType::Put), bs.put_price());
    }

    #[test]
    fn test_call_price_increases_with_volatility() {
        let low = BlackScholes::new(100.0_f64, 100.0, 0.1, 90.0, 0.02).unwrap();
        let high = BlackScholes::new(100.0_f64, 100.0, 0.4, 90.0, 0.02).unwrap();
        assert!(high.call_price() > low.call_price());
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_call_minus_put_is_one() {
        let bs = month();
        assert_relative_eq!(
            bs.delta(OptionType::Call) - bs.delta(OptionType::Put),
            1.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 100.0, 0.2, 365.0, 0.02).unwrap();
        let dn = BlackScholes::new(100.0 - h, 100.0, 0.2, 365.0, 0.02).unwrap();
        let fd = (up.call_price() - dn.call_price()) / (2.0 * h);
        assert_relative_eq!(atm_one_year().delta(OptionType::Call), fd, epsilon = 1e-6);
    }

    #[test]
    fn test_gamma_uses_raw_day_count() {
        let bs = atm_one_year();
        let expected = norm_pdf(0.2) / (100.0 * 0.2 * 365.0_f64.sqrt());
        assert_relative_eq!(bs.gamma(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_vega_uses_raw_day_count() {
        let bs = atm_one_year();
        let expected = 100.0 * norm_pdf(0.2) * 365.0_f64.sqrt();
        assert_relative_eq!(bs.vega(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_theta_literal_formula() {
        let bs = month();
        let (d1, d2) = (bs.d1(), bs.d2());
        let decay = -105.0 * norm_pdf(d1) * 0.25 / (2.0 * 30.0_f64.sqrt());
        let carry = 0.03 * 100.0 * (-0.03 * 30.0_f64).exp();
        assert_relative_eq!(
            bs.theta(OptionType::Call),
            decay - carry * norm_cdf(d2),
            epsilon = 1e-14
        );
        assert_relative_eq!(
            bs.theta(OptionType::Put),
            decay + carry * norm_cdf(-d2),
            epsilon = 1e-14
        );
        assert!(bs.theta(OptionType::Call) < 0.0);
    }

    #[test]
    fn test_rho_literal_formula() {
        let bs = month();
        let scale = 100.0 * 30.0 * (-0.03 * 30.0_f64).exp();
        assert_relative_eq!(bs.rho(OptionType::Call), scale * norm_cdf(bs.d1()), epsilon = 1e-12);
        assert_relative_eq!(bs.rho(OptionType::Put), -scale * norm_cdf(-bs.d1()), epsilon = 1e-12);
        assert!(bs.rho(OptionType::Call) > 0.0);
        assert!(bs.rho(OptionType::Put) < 0.0);
    }

    #[test]
    fn test_lambda() {
        let bs = atm_one_year();
        let expected = bs.delta(OptionType::Call) * 100.0 / bs.call_price();
        assert_relative_eq!(bs.lambda(OptionType::Call).unwrap(), expected, epsilon = 1e-14);

        let put_lambda = bs.lambda(OptionType::Put).unwrap();
        assert!(put_lambda < 0.0);
    }

    #[test]
    fn test_lambda_degenerate_price() {
        let expired = BlackScholes::new(120.0_f64, 100.0, 0.2, 0.0, 0.02).unwrap();
        match expired.lambda(OptionType::Put) {
            Err(AnalyticalError::DegeneratePrice { price }) => assert_eq!(price, 0.0),
            other => panic!("Expected DegeneratePrice, got {:?}", other),
        }
    }

    #[test]
    fn test_vanna_literal_formula_and_sign() {
        let bs = month();
        let tau = 30.0_f64 / 365.0;
        let expected = (-0.03 * tau).exp() * tau.sqrt() * (bs.d2() / 0.25)
            * (-bs.d1() * bs.d1() / 2.0).exp()
            / (2.0 * std::f64::consts::PI);
        assert_relative_eq!(bs.vanna(OptionType::Call), expected, epsilon = 1e-15);
        assert_relative_eq!(bs.vanna(OptionType::Put), -expected, epsilon = 1e-15);
    }

    #[test]
    fn test_price_sensitivity_matches_finite_difference() {
        let h = 1e-5;
        for option_type in [OptionType::Call, OptionType::Put] {
            let bs = month();
            let fd = (bs.with_volatility(0.25 + h).price(option_type)
                - bs.with_volatility(0.25 - h).price(option_type))
                / (2.0 * h);
            assert_relative_eq!(bs.price_sensitivity_to_vol(), fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_greeks_bundle_matches_individual_calls() {
        let bs = month();
        let g = bs.greeks(OptionType::Put).unwrap();
        assert_eq!(g.price, bs.put_price());
        assert_eq!(g.delta, bs.delta(OptionType::Put));
        assert_eq!(g.gamma, bs.gamma());
        assert_eq!(g.theta, bs.theta(OptionType::Put));
        assert_eq!(g.vega, bs.vega());
        assert_eq!(g.rho, bs.rho(OptionType::Put));
        assert_eq!(g.lambda, bs.lambda(OptionType::Put).unwrap());
        assert_eq!(g.vanna, bs.vanna(OptionType::Put));
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 100.0, 0.2, 365.0, 0.02).unwrap();
        assert!((bs.call_price() - 8.916).abs() < 1e-2);
    }
}
