//! Core numeric traits.
//!
//! Pricing models in this workspace are generic over a floating-point
//! type so that the same formulas serve `f64` production code and `f32`
//! compatibility checks.

/// Generic floating-point trait for numeric computations.
///
/// Re-exported from `num_traits` so downstream crates depend on a single
/// bound without naming `num_traits` themselves.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn year_fraction<T: Float>(days: T) -> T {
///     days / T::from(365.0).unwrap()
/// }
///
/// let tau: f64 = year_fraction(73.0);
/// assert!((tau - 0.2).abs() < 1e-12);
/// ```
pub use num_traits::Float;
