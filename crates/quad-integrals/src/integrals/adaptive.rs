//! Adaptive Simpson quadrature with recursive error control.
//!
//! Each invocation compares the Simpson estimate on the whole interval with
//! the sum of the estimates on its two halves. If the discrepancy is below
//! `15 τ` the refined sum is accepted; otherwise both halves are integrated
//! recursively with tolerance `τ / 2`, so their combined error budget never
//! exceeds the parent's.
//!
//! Subdivision stops with [`Error::ToleranceUnreachable`] once the recursion
//! depth exceeds the configured maximum, the midpoint can no longer be
//! separated from the endpoints, or the error estimate is not finite.

use quad_core::{
    ensure,
    errors::{Error, Result},
    fail, Real, Settings, Size, DEFAULT_MAX_RECURSION_DEPTH,
};
use tracing::{debug, trace, warn};

use super::{simpson_rule, Integrator};

/// Ratio between the coarse/refined discrepancy and the error of the
/// refined estimate for an `O(h⁵)` rule.
pub const RICHARDSON_FACTOR: Real = 15.0;

// Checks run in the order tolerance, function, interval; the first failure
// wins. NaN tolerances and NaN limits are rejected.
fn check<F>(f: Option<F>, begin: Real, end: Real, tolerance: Real) -> Result<F> {
    ensure!(tolerance > 0.0, Error::InvalidTolerance { tolerance });
    let Some(f) = f else {
        fail!(Error::InvalidFunction);
    };
    ensure!(begin <= end, Error::InvalidInterval { begin, end });
    Ok(f)
}

/// Check the caller-supplied arguments and unwrap the integrand, logging a
/// warning on rejection.
pub(crate) fn validate<F>(f: Option<F>, begin: Real, end: Real, tolerance: Real) -> Result<F> {
    check(f, begin, end, tolerance).map_err(|error| {
        warn!(%error, begin, end, tolerance, "rejected integration request");
        error
    })
}

/// Simpson estimates for one invocation: the whole interval, the midpoint,
/// and the two-half sum.
#[inline]
pub(crate) fn estimates<F: Fn(Real) -> Real>(f: &F, begin: Real, end: Real) -> (Real, Real, Real) {
    let whole = simpson_rule(f, begin, end);
    let midpoint = (begin + end) / 2.0;
    let halves = simpson_rule(f, begin, midpoint) + simpson_rule(f, midpoint, end);
    (whole, midpoint, halves)
}

/// Outcome of comparing the two estimates of one invocation.
pub(crate) enum Step {
    /// The refined estimate is accepted.
    Accept(Real),
    /// Both halves must be refined around this midpoint.
    Split(Real),
}

/// Decide whether one invocation accepts or splits, enforcing the depth cap
/// and the interval-width floor.
pub(crate) fn step<F: Fn(Real) -> Real>(
    f: &F,
    begin: Real,
    end: Real,
    tolerance: Real,
    depth: Size,
    max_depth: Size,
) -> Result<Step> {
    let (whole, midpoint, halves) = estimates(f, begin, end);
    let errest = (halves - whole).abs();

    if errest < RICHARDSON_FACTOR * tolerance {
        trace!(begin, end, errest, depth, "sub-interval accepted");
        return Ok(Step::Accept(halves));
    }
    // A NaN/Inf estimate never satisfies the test above, and splitting
    // cannot make it finite.
    let stuck = !errest.is_finite() || depth >= max_depth;
    if stuck || !(begin < midpoint && midpoint < end) {
        warn!(begin, end, depth, errest, "tolerance unreachable");
        fail!(Error::ToleranceUnreachable { depth, begin, end });
    }
    Ok(Step::Split(midpoint))
}

/// Serial recursion state shared by every frame under one top-level call.
struct Refinement<'a, F> {
    f: &'a F,
    max_depth: Size,
    calls: &'a mut Size,
    deepest: Size,
}

impl<F: Fn(Real) -> Real> Refinement<'_, F> {
    fn run(&mut self, begin: Real, end: Real, tolerance: Real, depth: Size) -> Result<Real> {
        *self.calls = self.calls.saturating_add(1);
        self.deepest = self.deepest.max(depth);

        match step(self.f, begin, end, tolerance, depth, self.max_depth)? {
            Step::Accept(value) => Ok(value),
            Step::Split(midpoint) => {
                let left = self.run(begin, midpoint, tolerance / 2.0, depth + 1)?;
                let right = self.run(midpoint, end, tolerance / 2.0, depth + 1)?;
                Ok(left + right)
            }
        }
    }
}

/// Summary of one adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationReport {
    /// The integral estimate.
    pub value: Real,
    /// Number of recursive invocations, root included.
    pub calls: Size,
    /// Deepest recursion level visited (the root is level 0).
    pub max_depth_reached: Size,
}

/// Adaptive Simpson integration to an absolute accuracy.
///
/// `absolute_accuracy` is the tolerance `τ` handed to the root interval;
/// `max_depth` bounds the number of successive halvings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveSimpsonIntegral {
    absolute_accuracy: Real,
    max_depth: Size,
}

impl AdaptiveSimpsonIntegral {
    /// Create a new integrator.
    pub fn new(absolute_accuracy: Real, max_depth: Size) -> Self {
        Self {
            absolute_accuracy,
            max_depth,
        }
    }

    /// Create with the given accuracy and the depth currently configured in
    /// [`Settings`].
    pub fn with_accuracy(absolute_accuracy: Real) -> Self {
        Self::new(absolute_accuracy, Settings::instance().max_recursion_depth())
    }

    /// Create with default parameters (accuracy 1e-8, depth
    /// [`DEFAULT_MAX_RECURSION_DEPTH`]).
    pub fn default_params() -> Self {
        Self::new(1e-8, DEFAULT_MAX_RECURSION_DEPTH)
    }

    /// The root tolerance.
    pub fn absolute_accuracy(&self) -> Real {
        self.absolute_accuracy
    }

    /// The maximum recursion depth.
    pub fn max_depth(&self) -> Size {
        self.max_depth
    }

    /// Integrate `f` on `[a, b]`, adding the number of recursive
    /// invocations to `call_counter`.
    ///
    /// The counter saturates at `usize::MAX` and is left untouched when
    /// validation fails. On
    /// [`Error::ToleranceUnreachable`] it still holds every invocation made
    /// before the failure.
    pub fn integrate_counted<F: Fn(Real) -> Real>(
        &self,
        f: F,
        a: Real,
        b: Real,
        call_counter: &mut Size,
    ) -> Result<Real> {
        self.run(Some(f), a, b, call_counter).map(|report| report.value)
    }

    /// Integrate `f` on `[a, b]` and report the call count and depth.
    pub fn integrate_with_report<F: Fn(Real) -> Real>(
        &self,
        f: F,
        a: Real,
        b: Real,
    ) -> Result<IntegrationReport> {
        let mut calls = 0;
        self.run(Some(f), a, b, &mut calls)
    }

    pub(crate) fn run<F: Fn(Real) -> Real>(
        &self,
        f: Option<F>,
        a: Real,
        b: Real,
        call_counter: &mut Size,
    ) -> Result<IntegrationReport> {
        ensure!(
            self.max_depth > 0,
            Error::InvalidArgument("maximum recursion depth must be positive".into())
        );
        let f = validate(f, a, b, self.absolute_accuracy)?;

        let start = *call_counter;
        let mut refinement = Refinement {
            f: &f,
            max_depth: self.max_depth,
            calls: call_counter,
            deepest: 0,
        };
        let value = refinement.run(a, b, self.absolute_accuracy, 0)?;
        let report = IntegrationReport {
            value,
            calls: *refinement.calls - start,
            max_depth_reached: refinement.deepest,
        };
        debug!(
            value,
            calls = report.calls,
            depth = report.max_depth_reached,
            "adaptive Simpson converged"
        );
        Ok(report)
    }
}

impl Default for AdaptiveSimpsonIntegral {
    fn default() -> Self {
        Self::default_params()
    }
}

impl Integrator for AdaptiveSimpsonIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        let mut calls = 0;
        self.integrate_counted(f, a, b, &mut calls)
    }
}

/// Integrate `f` on `[begin, end]` to absolute tolerance `tolerance`.
///
/// `call_counter` is incremented once per recursive invocation, the
/// top-level one included, and is never reset. A `None` integrand, a
/// non-positive tolerance, or `begin > end` fail validation without
/// touching the counter. Subdivision is capped at
/// [`Settings::max_recursion_depth`].
///
/// # Example
/// ```
/// use quad_integrals::integrals::integrate_adaptive;
/// let mut calls = 0;
/// let value = integrate_adaptive(Some(|x: f64| x), 0.0, 1.0, 0.005, &mut calls).unwrap();
/// assert!((value - 0.5).abs() < 1e-15);
/// assert_eq!(calls, 1);
/// ```
pub fn integrate_adaptive<F: Fn(Real) -> Real>(
    f: Option<F>,
    begin: Real,
    end: Real,
    tolerance: Real,
    call_counter: &mut Size,
) -> Result<Real> {
    AdaptiveSimpsonIntegral::with_accuracy(tolerance)
        .run(f, begin, end, call_counter)
        .map(|report| report.value)
}
