//! Rational function evaluation `P(x) / Q(x)`.

use strided_traits::KernelFloat;

/// Evaluate the rational function `P(x)/Q(x)`.
///
/// `p` and `q` hold coefficients in ascending degree and must have the same
/// (non-zero) length; otherwise the result is NaN.
///
/// For `|x| <= 1` both polynomials are evaluated with Horner's rule from the
/// highest degree down. For `|x| > 1` the evaluation is done in `1/x`, from
/// the lowest degree up: numerator and denominator are both scaled by
/// `x^(n-1)`, which cancels in the ratio and keeps the intermediate
/// values bounded.
///
/// ```rust
/// use strided_special::evalrational;
///
/// let p = [-6.0, -5.0];
/// let q = [3.0, 0.5];
/// assert_eq!(evalrational(&p, &q, 6.0), -6.0);
/// ```
pub fn evalrational<F: KernelFloat>(p: &[F], q: &[F], x: F) -> F {
    let n = p.len();
    if n == 0 || n != q.len() {
        return F::nan();
    }
    if n == 1 || x == F::zero() {
        return p[0] / q[0];
    }
    let (num, den) = if x.abs() <= F::one() {
        let mut s1 = p[n - 1];
        let mut s2 = q[n - 1];
        for i in (0..n - 1).rev() {
            s1 = s1 * x + p[i];
            s2 = s2 * x + q[i];
        }
        (s1, s2)
    } else {
        let x = x.recip();
        let mut s1 = p[0];
        let mut s2 = q[0];
        for i in 1..n {
            s1 = s1 * x + p[i];
            s2 = s2 * x + q[i];
        }
        (s1, s2)
    };
    num / den
}

/// Capture coefficient slices and return an evaluator closure.
///
/// Malformed coefficients produce a closure that always returns NaN.
pub fn evalrational_fn<F: KernelFloat>(p: &[F], q: &[F]) -> impl Fn(F) -> F {
    let p = p.to_vec();
    let q = q.to_vec();
    move |x| evalrational(&p, &q, x)
}
