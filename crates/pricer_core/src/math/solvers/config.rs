//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Holds the convergence tolerance and the iteration limit. Every solve is
/// bounded: a solver that exhausts `max_iterations` reports
/// `SolverError::MaxIterationsExceeded` instead of looping.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// assert!(custom.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Whether the configuration can drive a solver.
    ///
    /// Literal and deserialised configurations are unchecked, so callers
    /// loading settings from a file test this before solving.
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let nan_tolerance = SolverConfig { tolerance: f64::NAN, max_iterations: 10 };
    /// assert!(!nan_tolerance.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.tolerance > T::zero() && self.tolerance.is_finite() && self.max_iterations > 0
    }
}
