//! Free-function surface over [`BlackScholes`] for `f64` callers.
//!
//! Arguments follow the desk order `(S, K, σ, T, r[, type])` with `T` in
//! days. Option types are given as text (`"call"` / `"put"`, any case) and
//! rejected with [`AnalyticalError::InvalidOptionType`] otherwise.
//!
//! ```
//! use pricer_models::analytical::american;
//!
//! let call = american::call_price(100.0, 100.0, 0.2, 365.0, 0.02).unwrap();
//! assert!((call - 8.92).abs() < 0.01);
//!
//! assert!(american::delta(100.0, 100.0, 0.2, 365.0, 0.02, "straddle").is_err());
//! ```

use std::str::FromStr;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use super::greeks::Greeks;
use super::implied_vol;
use crate::instruments::OptionType;

fn parse_type(option_type: &str) -> Result<OptionType, AnalyticalError> {
    Ok(OptionType::from_str(option_type)?)
}

/// Parses the type before touching the numeric inputs, so an unsupported
/// type is reported even when the other arguments are also invalid.
fn model_for(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<(BlackScholes<f64>, OptionType), AnalyticalError> {
    let option_type = parse_type(option_type)?;
    let model = BlackScholes::new(spot, strike, volatility, expiry_days, rate)?;
    Ok((model, option_type))
}

/// Analytic call price.
pub fn call_price(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
) -> Result<f64, AnalyticalError> {
    Ok(BlackScholes::new(spot, strike, volatility, expiry_days, rate)?.call_price())
}

/// Analytic put price; exactly zero at `expiry_days == 0`.
pub fn put_price(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
) -> Result<f64, AnalyticalError> {
    Ok(BlackScholes::new(spot, strike, volatility, expiry_days, rate)?.put_price())
}

/// Implied volatility from an observed premium.
///
/// Note the argument order `(S, K, T, premium, r, type)`.
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    expiry_days: f64,
    premium: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let option_type = parse_type(option_type)?;
    implied_vol::implied_volatility(spot, strike, expiry_days, premium, rate, option_type)
}

/// Delta of a call or put.
pub fn delta(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, option_type) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    Ok(model.delta(option_type))
}

/// Gamma; the type is validated even though calls and puts agree.
pub fn gamma(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, _) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    Ok(model.gamma())
}

/// Theta of a call or put.
pub fn theta(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, option_type) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    Ok(model.theta(option_type))
}

/// Vega; the type is validated even though calls and puts agree.
pub fn vega(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, _) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    Ok(model.vega())
}

/// Rho of a call or put.
pub fn rho(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, option_type) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    Ok(model.rho(option_type))
}

/// Lambda (elasticity); fails with `DegeneratePrice` for a zero price.
pub fn lambda(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, option_type) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    model.lambda(option_type)
}

/// Vanna of a call or put.
pub fn vanna(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    let (model, option_type) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    Ok(model.vanna(option_type))
}

/// Price and all Greeks in one call.
pub fn greeks(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry_days: f64,
    rate: f64,
    option_type: &str,
) -> Result<Greeks<f64>, AnalyticalError> {
    let (model, option_type) = model_for(spot, strike, volatility, expiry_days, rate, option_type)?;
    model.greeks(option_type)
}
