//! Implied-volatility solver configuration.
//!
//! Defaults reproduce the desk settings (σ₀ = 0.1, tolerance 1e-10,
//! 100 iterations). The search is confined to
//! `[min_volatility, max_volatility]`. With the `serde` feature the
//! configuration can be loaded from TOML; missing keys fall back to the
//! defaults.
//!
//! ```toml
//! initial_guess = 0.25
//! tolerance = 1e-12
//! max_iterations = 200
//! max_volatility = 3.0
//! ```

use pricer_core::math::solvers::SolverConfig;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default starting volatility for the Newton iteration.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Default absolute tolerance on `Price(σ) − Premium`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default lower end of the volatility search interval.
pub const DEFAULT_MIN_VOLATILITY: f64 = 1e-6;

/// Default upper end of the volatility search interval.
pub const DEFAULT_MAX_VOLATILITY: f64 = 5.0;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a configuration.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Parsed values are outside their domain.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the implied-volatility Newton iteration.
///
/// # Examples
/// ```
/// use pricer_models::analytical::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default();
/// assert_eq!(config.initial_guess, 0.1);
/// assert_eq!(config.max_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpliedVolConfig {
    /// Starting volatility σ₀
    pub initial_guess: f64,
    /// Absolute tolerance on the pricing residual
    pub tolerance: f64,
    /// Maximum Newton steps
    pub max_iterations: usize,
    /// Lowest volatility the search may visit
    pub min_volatility: f64,
    /// Highest volatility the search may visit
    pub max_volatility: f64,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_volatility: DEFAULT_MIN_VOLATILITY,
            max_volatility: DEFAULT_MAX_VOLATILITY,
        }
    }
}

impl ImpliedVolConfig {
    /// Overrides the starting volatility.
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.solver_config().is_valid() {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be positive and finite and max_iterations at least 1, \
                 got tolerance = {}, max_iterations = {}",
                self.tolerance, self.max_iterations
            )));
        }
        if !(self.min_volatility > 0.0 && self.max_volatility.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "volatility bounds must be positive and finite, got [{}, {}]",
                self.min_volatility, self.max_volatility
            )));
        }
        let bounds = self.min_volatility..=self.max_volatility;
        if !bounds.contains(&self.initial_guess) {
            return Err(ConfigError::Invalid(format!(
                "initial_guess {} outside [{}, {}]",
                self.initial_guess, self.min_volatility, self.max_volatility
            )));
        }
        Ok(())
    }

    /// Root-finder settings derived from this configuration.
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// ```
    /// use pricer_models::analytical::ImpliedVolConfig;
    ///
    /// let config = ImpliedVolConfig::from_toml_str("max_iterations = 250").unwrap();
    /// assert_eq!(config.max_iterations, 250);
    /// assert_eq!(config.tolerance, 1e-10);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ImpliedVolConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
