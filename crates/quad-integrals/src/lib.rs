//! # quad-integrals
//!
//! Simpson's rule and adaptive Simpson quadrature with recursive error
//! control, tolerance halving, and a bounded recursion depth.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Quadrature rules and integrators.
pub mod integrals;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use integrals::{
    integrate_adaptive, integrate_adaptive_legacy, integrate_adaptive_parallel, simpson_rule,
    AdaptiveSimpsonIntegral, IntegrationReport, Integrator,
};
