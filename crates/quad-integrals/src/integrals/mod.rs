//! Numerical integration.
//!
//! Provides the three-point Simpson rule and adaptive Simpson quadrature in
//! serial, fork-join, and sentinel-returning forms.

pub mod adaptive;
pub mod legacy;
pub mod parallel;
pub mod simpson;

use quad_core::{errors::Result, Real};

pub use adaptive::{
    integrate_adaptive, AdaptiveSimpsonIntegral, IntegrationReport, RICHARDSON_FACTOR,
};
pub use legacy::{integrate_adaptive_legacy, LEGACY_FAILURE};
pub use parallel::integrate_adaptive_parallel;
pub use simpson::simpson_rule;

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}
