//! # Pricer Models (L2: Business Logic)
//!
//! Prices and risk sensitivities for American-style options.
//!
//! This crate provides:
//! - Option type discriminator with case-insensitive parsing
//! - Closed-form approximation with Delta, Gamma, Theta, Vega, Rho,
//!   Lambda and Vanna
//! - Implied volatility by Newton-Raphson
//! - Cox-Ross-Rubinstein binomial lattice for calls
//!
//! ## Design Principles
//!
//! - **Validated models**: `new` rejects out-of-domain inputs with typed errors
//! - **Generic over `T: Float`** for the model structs
//! - **Thin facades** (`analytical::american`, `lattice::lattice_call_price`)
//!   for `f64` callers
//!
//! ## Time units
//!
//! The analytic pricer takes time to expiry in **days** (τ = T/365); the
//! lattice takes it in **years**.
//!
//! ```
//! use pricer_models::analytical::american;
//! use pricer_models::lattice::lattice_call_price;
//!
//! let analytic = american::call_price(100.0, 100.0, 0.2, 365.0, 0.02).unwrap();
//! let lattice = lattice_call_price(100.0, 100.0, 0.02, 1.0, 0.2, 500).unwrap();
//! assert!((analytic - lattice).abs() / analytic < 0.01);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
