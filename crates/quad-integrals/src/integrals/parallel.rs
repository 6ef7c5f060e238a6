//! Fork-join variant of the adaptive Simpson integrator.
//!
//! The two half-intervals of a split are independent, so the upper levels of
//! the recursion tree run under `rayon::join`. Both branch results are
//! summed only after both complete. The call counter is an `AtomicUsize`
//! shared by every branch.

use std::sync::atomic::{AtomicUsize, Ordering};

use quad_core::{errors::Result, Real, Settings, Size};
use tracing::debug;

use super::adaptive::{step, validate, Step};

/// Levels below this depth fork; deeper levels recurse on the current
/// worker thread.
pub const FORK_DEPTH: Size = 12;

struct ParallelRefinement<'a, F> {
    f: &'a F,
    max_depth: Size,
    calls: &'a AtomicUsize,
}

impl<F: Fn(Real) -> Real + Sync> ParallelRefinement<'_, F> {
    fn run(&self, begin: Real, end: Real, tolerance: Real, depth: Size) -> Result<Real> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let midpoint = match step(self.f, begin, end, tolerance, depth, self.max_depth)? {
            Step::Accept(value) => return Ok(value),
            Step::Split(midpoint) => midpoint,
        };
        let half = tolerance / 2.0;
        if depth < FORK_DEPTH {
            let (left, right) = rayon::join(
                || self.run(begin, midpoint, half, depth + 1),
                || self.run(midpoint, end, half, depth + 1),
            );
            Ok(left? + right?)
        } else {
            let left = self.run(begin, midpoint, half, depth + 1)?;
            let right = self.run(midpoint, end, half, depth + 1)?;
            Ok(left + right)
        }
    }
}

/// Parallel counterpart of [`integrate_adaptive`](super::integrate_adaptive).
///
/// Validation, acceptance test, and depth cap are identical, so converged
/// results and call counts match the serial version exactly. When
/// subdivision fails, sibling branches that were already running still
/// finish, so the counter may exceed the serial count.
pub fn integrate_adaptive_parallel<F: Fn(Real) -> Real + Sync>(
    f: Option<F>,
    begin: Real,
    end: Real,
    tolerance: Real,
    call_counter: &AtomicUsize,
) -> Result<Real> {
    let f = validate(f, begin, end, tolerance)?;
    let refinement = ParallelRefinement {
        f: &f,
        max_depth: Settings::instance().max_recursion_depth(),
        calls: call_counter,
    };
    let value = refinement.run(begin, end, tolerance, 0)?;
    debug!(
        value,
        calls = call_counter.load(Ordering::Relaxed),
        "parallel adaptive Simpson converged"
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrals::integrate_adaptive;
    use quad_core::Error;

    #[test]
    fn matches_serial() {
        let f = |x: Real| (3.0 * x).sin() * (-x).exp();
        let mut serial_calls = 0;
        let serial = integrate_adaptive(Some(f), 0.0, 4.0, 1e-9, &mut serial_calls).unwrap();

        let parallel_calls = AtomicUsize::new(0);
        let parallel =
            integrate_adaptive_parallel(Some(f), 0.0, 4.0, 1e-9, &parallel_calls).unwrap();

        assert_eq!(serial, parallel);
        assert_eq!(serial_calls, parallel_calls.into_inner());
    }

    #[test]
    fn rejects_absent_integrand() {
        let calls = AtomicUsize::new(0);
        let err = integrate_adaptive_parallel(None::<fn(Real) -> Real>, 0.0, 1.0, 1e-6, &calls)
            .unwrap_err();
        assert_eq!(err, Error::InvalidFunction);
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn step_function_unreachable() {
        let calls = AtomicUsize::new(0);
        let err = integrate_adaptive_parallel(
            Some(|x: Real| if x < 1.0 / 3.0 { 0.0 } else { 1.0 }),
            0.0,
            1.0,
            1e-6,
            &calls,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ToleranceUnreachable { .. }));
    }
}
