//! # pricer_core: Numeric Foundation for the American Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Generic floating-point trait re-export (`traits::Float`)
//! - Root-finding solvers and their configuration (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Deserialisable solver configuration (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve e^x - 2 = 0
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x.exp() - 2.0, |x: f64| x.exp(), 0.5).unwrap();
//! assert!((root - 2.0_f64.ln()).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable deserialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
