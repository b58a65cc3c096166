//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Root located by a solver together with the work it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T> {
    /// Point where `|f(root)| < tolerance`
    pub root: T,
    /// Steps taken before convergence
    pub iterations: usize,
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root. The unbounded
/// [`solve`](Self::solve) fails, with a [`SolverError`], if:
/// - the derivative is near zero (`DerivativeNearZero`)
/// - an iterate becomes non-finite (`NumericalInstability`)
/// - the iteration budget runs out (`MaxIterationsExceeded`)
///
/// [`solve_bracketed`](Self::solve_bracketed) keeps every iterate inside a
/// sign-changing interval and bisects whenever a Newton step would leave it
/// or stall, so a flat derivative far from the root cannot throw it away.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.solve(f, f_prime, x0).map(|result| result.root)
    }

    /// Same as [`find_root`](Self::find_root), also reporting the iteration count.
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// let result = solver.solve(|x: f64| x - 3.0, |_| 1.0, 0.0).unwrap();
    /// assert_eq!(result.root, 3.0);
    /// assert_eq!(result.iterations, 1);
    /// ```
    pub fn solve<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::from(1e-30).unwrap();

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(RootResult {
                    root: x,
                    iterations: iteration,
                });
            }

            let f_prime_val = f_prime(x);

            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            x = x - f_val / f_prime_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Newton iteration safeguarded by bisection on `[lower, upper]`.
    ///
    /// `f(lower)` and `f(upper)` must differ in sign. Each step takes the
    /// Newton update when it lands strictly inside the current bracket and
    /// at least halves the previous step; otherwise it bisects. The bracket
    /// shrinks every iteration, so the search cannot escape the interval.
    ///
    /// `x0` outside the open interval is replaced by its midpoint.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - No sign change between the endpoints
    /// * `SolverError::NumericalInstability` - `f` returned a non-finite value
    /// * `SolverError::MaxIterationsExceeded` - Budget ran out
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// // atan has a vanishing slope far from 0; plain Newton from 10 diverges.
    /// let result = solver
    ///     .solve_bracketed(|x: f64| x.atan(), |x| 1.0 / (1.0 + x * x), -20.0, 20.0, 10.0)
    ///     .unwrap();
    /// assert!(result.root.abs() < 1e-10);
    /// ```
    pub fn solve_bracketed<F, G>(
        &self,
        f: F,
        f_prime: G,
        lower: T,
        upper: T,
        x0: T,
    ) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let tolerance = self.config.tolerance;
        let two = T::from(2.0).unwrap();
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        let f_lower = checked(&f, lower)?;
        if f_lower.abs() < tolerance {
            return Ok(RootResult {
                root: lower,
                iterations: 0,
            });
        }
        let f_upper = checked(&f, upper)?;
        if f_upper.abs() < tolerance {
            return Ok(RootResult {
                root: upper,
                iterations: 0,
            });
        }
        if (f_lower < T::zero()) == (f_upper < T::zero()) {
            return Err(SolverError::NoBracket {
                a: as_f64(lower),
                b: as_f64(upper),
            });
        }

        // `neg` always holds the end where f < 0.
        let (mut neg, mut pos) = if f_lower < T::zero() {
            (lower, upper)
        } else {
            (upper, lower)
        };

        let inside = |x: T, a: T, b: T| x > a.min(b) && x < a.max(b);
        let mut x = if inside(x0, lower, upper) {
            x0
        } else {
            (lower + upper) / two
        };
        let mut step_before_last = (upper - lower).abs();
        let mut last_step = step_before_last;

        for iteration in 0..self.config.max_iterations {
            let f_val = checked(&f, x)?;

            if f_val.abs() < tolerance {
                return Ok(RootResult {
                    root: x,
                    iterations: iteration,
                });
            }

            if f_val < T::zero() {
                neg = x;
            } else {
                pos = x;
            }

            let slope = f_prime(x);
            let newton = x - f_val / slope;
            let accept = slope.is_finite()
                && slope != T::zero()
                && inside(newton, neg, pos)
                && (two * f_val).abs() <= (step_before_last * slope).abs();

            step_before_last = last_step;
            let next = if accept {
                newton
            } else {
                (neg + pos) / two
            };
            last_step = (next - x).abs();
            x = next;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

fn checked<T: Float, F: Fn(T) -> T>(f: &F, x: T) -> Result<T, SolverError> {
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NumericalInstability(format!(
            "objective is not finite at x = {}",
            x.to_f64().unwrap_or(f64::NAN)
        )))
    }
}
