//! Implied-volatility configuration loading and solver diagnostics.

#![cfg(feature = "serde")]

use std::path::PathBuf;

use pricer_core::types::SolverError;
use pricer_models::analytical::{
    implied_volatility_with_config, AnalyticalError, BlackScholes, ConfigError, ImpliedVolConfig,
};
use pricer_models::instruments::OptionType;

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("pricer_models=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_load_config_from_file() {
    let path = scratch_file(
        "implied-vol-config",
        "initial_guess = 0.3\ntolerance = 1e-12\nmax_iterations = 50\n",
    );
    let config = ImpliedVolConfig::from_toml_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.initial_guess, 0.3);
    assert_eq!(config.tolerance, 1e-12);
    assert_eq!(config.max_iterations, 50);
}

#[test]
fn test_invalid_file_config_is_rejected() {
    let path = scratch_file("implied-vol-invalid", "max_iterations = 0\n");
    let result = ImpliedVolConfig::from_toml_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_loaded_config_drives_solver() {
    init_tracing();

    let config = ImpliedVolConfig::from_toml_str("initial_guess = 0.4\ntolerance = 1e-12").unwrap();
    let premium = BlackScholes::new(100.0, 110.0, 0.35, 120.0, 0.01)
        .unwrap()
        .put_price();

    let sigma = implied_volatility_with_config(
        100.0,
        110.0,
        120.0,
        premium,
        0.01,
        OptionType::Put,
        &config,
    )
    .unwrap();
    assert!((sigma - 0.35).abs() < 1e-8);
}

#[test]
fn test_exhausted_budget_is_a_convergence_failure() {
    init_tracing();

    let config = ImpliedVolConfig::from_toml_str("max_iterations = 1").unwrap();
    let premium = BlackScholes::new(100.0, 100.0, 0.6, 30.0, 0.02)
        .unwrap()
        .call_price();

    let err = implied_volatility_with_config(
        100.0,
        100.0,
        30.0,
        premium,
        0.02,
        OptionType::Call,
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AnalyticalError::ConvergenceFailure { .. }));
    assert!(err.to_string().contains("did not converge"));
}

#[test]
fn test_volatility_cap_limits_the_search() {
    init_tracing();

    let config = ImpliedVolConfig::from_toml_str("max_volatility = 0.5").unwrap();
    let premium = BlackScholes::new(100.0, 100.0, 0.8, 30.0, 0.02)
        .unwrap()
        .call_price();

    let err = implied_volatility_with_config(
        100.0,
        100.0,
        30.0,
        premium,
        0.02,
        OptionType::Call,
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AnalyticalError::ConvergenceFailure {
            source: SolverError::NoBracket { .. }
        }
    ));
}
