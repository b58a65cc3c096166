//! Implied volatility by Newton-Raphson on the analytic price.
//!
//! Solves `Price(σ) − Premium = 0` for σ, starting from
//! [`ImpliedVolConfig::initial_guess`]. The slope is the exact model
//! derivative [`BlackScholes::price_sensitivity_to_vol`], which is the same
//! for calls and puts.
//!
//! The price is increasing in σ, so the residual changes sign across
//! `[min_volatility, max_volatility]` for any attainable premium. Iterates
//! stay inside that bracket; a step that would leave it, or that collapses
//! on the flat tails of an away-from-the-money contract, is replaced by
//! bisection.

use pricer_core::math::solvers::NewtonRaphsonSolver;
use tracing::{debug, warn};

use super::black_scholes::BlackScholes;
use super::config::ImpliedVolConfig;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Implied volatility with the default configuration.
///
/// # Arguments
/// * `spot` - Underlying price (must be positive)
/// * `strike` - Strike price (must be positive)
/// * `expiry_days` - Time to expiry in days (must be positive)
/// * `premium` - Observed option price (must be positive)
/// * `rate` - Annualised risk-free rate
/// * `option_type` - Call or put
///
/// # Errors
/// - `InvalidSpot` / `InvalidStrike` / `InvalidExpiry` / `InvalidPremium` /
///   `InvalidRate` for inputs outside their domain
/// - `InvalidConfig` if the solver settings fail [`ImpliedVolConfig::validate`]
/// - `ConvergenceFailure` if the premium is not attained inside the
///   volatility bounds or the iteration budget runs out
///
/// # Examples
/// ```
/// use pricer_models::analytical::{implied_volatility, BlackScholes};
/// use pricer_models::instruments::OptionType;
///
/// let premium = BlackScholes::new(100.0, 100.0, 0.2, 30.0, 0.02)
///     .unwrap()
///     .call_price();
/// let sigma = implied_volatility(100.0, 100.0, 30.0, premium, 0.02, OptionType::Call).unwrap();
/// assert!((sigma - 0.2).abs() < 1e-4);
/// ```
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    expiry_days: f64,
    premium: f64,
    rate: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    implied_volatility_with_config(
        spot,
        strike,
        expiry_days,
        premium,
        rate,
        option_type,
        &ImpliedVolConfig::default(),
    )
}

/// Implied volatility with explicit solver settings.
///
/// See [`implied_volatility`] for arguments and errors.
pub fn implied_volatility_with_config(
    spot: f64,
    strike: f64,
    expiry_days: f64,
    premium: f64,
    rate: f64,
    option_type: OptionType,
    config: &ImpliedVolConfig,
) -> Result<f64, AnalyticalError> {
    debug!(
        spot,
        strike,
        expiry_days,
        premium,
        rate,
        option_type = %option_type,
        "solving implied volatility"
    );

    config
        .validate()
        .map_err(|e| AnalyticalError::InvalidConfig {
            message: e.to_string(),
        })?;

    if !(premium > 0.0 && premium.is_finite()) {
        return Err(AnalyticalError::InvalidPremium { premium });
    }
    if !(expiry_days > 0.0) {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: expiry_days,
        });
    }

    // The seed only anchors validation of S, K, T and r; every trial σ is
    // swapped in below.
    let seed = BlackScholes::new(spot, strike, config.initial_guess, expiry_days, rate)?;

    let solver = NewtonRaphsonSolver::new(config.solver_config());
    let objective = |sigma: f64| seed.with_volatility(sigma).price(option_type) - premium;
    let slope = |sigma: f64| seed.with_volatility(sigma).price_sensitivity_to_vol();

    let result = solver.solve_bracketed(
        objective,
        slope,
        config.min_volatility,
        config.max_volatility,
        config.initial_guess,
    );

    match result {
        Ok(result) => {
            debug!(
                sigma = result.root,
                iterations = result.iterations,
                "implied volatility converged"
            );
            Ok(result.root)
        }
        Err(source) => {
            warn!(error = %source, premium, "implied volatility failed");
            Err(AnalyticalError::ConvergenceFailure { source })
        }
    }
}
