//! Three-point Simpson rule on a single interval.

use num_traits::Float;

/// Simpson's rule on `[a, b]`:
///
/// $$\frac{b-a}{6}\bigl(f(a) + 4 f(\tfrac{a+b}{2}) + f(b)\bigr).$$
///
/// Exact for polynomials up to degree three. No validation is performed:
/// the caller guarantees `a <= b`, and NaN or infinite values returned by
/// `f` propagate into the estimate unchanged.
///
/// # Example
/// ```
/// use quad_integrals::integrals::simpson_rule;
/// let area = simpson_rule(|x: f64| x * x, 0.0, 2.0);
/// assert!((area - 8.0 / 3.0).abs() < 1e-14);
/// ```
pub fn simpson_rule<T: Float, F: Fn(T) -> T>(f: F, a: T, b: T) -> T {
    let two = T::one() + T::one();
    let four = two + two;
    let six = four + two;
    let midpoint = (a + b) / two;
    (b - a) / six * (f(a) + four * f(midpoint) + f(b))
}
