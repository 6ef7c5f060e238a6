//! # quadkit
//!
//! Adaptive Simpson quadrature with recursive error control.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `quad-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! quadkit = "0.1"
//! ```
//!
//! ```rust
//! use quadkit::{integrate_adaptive, Error};
//!
//! let mut calls = 0;
//! let pi = std::f64::consts::PI;
//! let area = integrate_adaptive(Some(|x: f64| x.sin()), 0.0, pi, 1e-9, &mut calls)?;
//! assert!((area - 2.0).abs() < 1e-9);
//! assert!(calls > 1);
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use quad_core as core;

/// Simpson rule and adaptive integrators.
pub use quad_integrals as integrals;

pub use quad_core::{Error, Real, Result, Settings, Size};
pub use quad_integrals::{
    integrate_adaptive, integrate_adaptive_legacy, integrate_adaptive_parallel, simpson_rule,
    AdaptiveSimpsonIntegral, IntegrationReport, Integrator,
};
