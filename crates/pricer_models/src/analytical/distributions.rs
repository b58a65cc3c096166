//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are generic over `T: Float`. The CDF evaluates `erfc` in `f64`
//! through `statrs`, which is accurate to machine precision and continuous
//! at the origin; polynomial approximations carry a small jump at zero that
//! the implied-volatility Newton iteration would otherwise have to cross.

use pricer_core::traits::Float;
use statrs::function::erf::erfc;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½·erfc(−x/√2)
///
/// Returns NaN for NaN input; saturates to 0 and 1 in the tails.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96_f64) - 0.9750021048517795).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let x = match x.to_f64() {
        Some(value) => value,
        None => return T::nan(),
    };
    let cdf = 0.5 * erfc(-x / std::f64::consts::SQRT_2);
    T::from(cdf).unwrap_or_else(T::nan)
}

/// Standard normal probability density function.
///
/// φ(x) = (1/√(2π))·e^(−x²/2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-15);
/// assert!((norm_pdf(1.0_f64) - 0.24197072451914337).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}
