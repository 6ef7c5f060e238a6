//! Error types for quadkit.
//!
//! Every caller-input problem detected by the integrators maps to one
//! variant of a single `thiserror`-derived enum. Early returns go through
//! the `ensure!` and `fail!` convenience macros defined here.

use thiserror::Error;

use crate::{Real, Size};

/// The top-level error type used throughout quadkit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The requested absolute tolerance is zero, negative, or NaN.
    #[error("invalid tolerance {tolerance}: must be strictly positive")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: Real,
    },

    /// No integrand was supplied.
    #[error("invalid function: no integrand supplied")]
    InvalidFunction,

    /// The lower limit lies above the upper limit.
    #[error("invalid interval [{begin}, {end}]: begin exceeds end")]
    InvalidInterval {
        /// Lower integration limit.
        begin: Real,
        /// Upper integration limit.
        end: Real,
    },

    /// Subdivision hit the recursion-depth cap or the interval became too
    /// narrow to split before the error estimate fell under tolerance.
    #[error("tolerance unreachable on [{begin}, {end}] at recursion depth {depth}")]
    ToleranceUnreachable {
        /// Depth of the frame that gave up (root is 0).
        depth: Size,
        /// Lower limit of the offending sub-interval.
        begin: Real,
        /// Upper limit of the offending sub-interval.
        end: Real,
    },

    /// Invalid configuration argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for the errors raised by input validation, as opposed
    /// to failures found while subdividing.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidTolerance { .. } | Error::InvalidFunction | Error::InvalidInterval { .. }
        )
    }
}

/// Shorthand `Result` type used throughout quadkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` early if `$cond` is false.
///
/// # Example
/// ```
/// use quad_core::{ensure, errors::{Error, Result}};
/// fn positive(tolerance: f64) -> Result<f64> {
///     ensure!(tolerance > 0.0, Error::InvalidTolerance { tolerance });
///     Ok(tolerance)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(
///     positive(-1.0),
///     Err(Error::InvalidTolerance { tolerance: -1.0 })
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err($err)` immediately.
///
/// # Example
/// ```
/// use quad_core::{fail, errors::{Error, Result}};
/// fn always_err() -> Result<()> {
///     fail!(Error::InvalidFunction);
/// }
/// assert_eq!(always_err(), Err(Error::InvalidFunction));
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_interval(begin: Real, end: Real) -> Result<Real> {
        ensure!(begin <= end, Error::InvalidInterval { begin, end });
        Ok(end - begin)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(check_interval(0.0, 2.0), Ok(2.0));
    }

    #[test]
    fn ensure_returns_error() {
        assert_eq!(
            check_interval(1.0, 0.0),
            Err(Error::InvalidInterval {
                begin: 1.0,
                end: 0.0
            })
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidFunction.to_string(),
            "invalid function: no integrand supplied"
        );
        let e = Error::ToleranceUnreachable {
            depth: 50,
            begin: 0.0,
            end: 0.5,
        };
        assert_eq!(
            e.to_string(),
            "tolerance unreachable on [0, 0.5] at recursion depth 50"
        );
    }

    #[test]
    fn validation_classification() {
        assert!(Error::InvalidFunction.is_validation());
        assert!(Error::InvalidTolerance { tolerance: 0.0 }.is_validation());
        assert!(!Error::InvalidArgument("x".into()).is_validation());
        assert!(!Error::ToleranceUnreachable {
            depth: 1,
            begin: 0.0,
            end: 1.0
        }
        .is_validation());
    }
}
