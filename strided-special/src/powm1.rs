//! `b^x - 1` without cancellation near `b^x == 1`.

use strided_traits::KernelFloat;

/// Compute `b^x - 1`.
///
/// When the result is close to zero (`|x (b - 1)| < 0.5` or `|x| < 0.2`)
/// it is evaluated as `expm1(x ln b)`, which keeps full relative accuracy.
///
/// - `x == 0` or `b == 1` gives `0`, even when the other argument is NaN
/// - a negative base requires an integer exponent; otherwise NaN
/// - a negative base with an even exponent is folded onto `|b|`
pub fn powm1<F: KernelFloat>(b: F, x: F) -> F {
    if x == F::zero() || b == F::one() {
        return F::zero();
    }
    if b.is_nan() || x.is_nan() {
        return F::nan();
    }
    if b.is_sign_negative() && b != F::zero() {
        if x.trunc() != x {
            return F::nan();
        }
        let half = x / F::lit(2.0);
        if half.trunc() == half {
            return powm1(-b, x);
        }
    } else if (x * (b - F::one())).abs() < F::lit(0.5) || x.abs() < F::lit(0.2) {
        let l = x * b.ln();
        if l < F::lit(0.5) {
            return l.exp_m1();
        }
        if l > F::max_value().ln() {
            return F::infinity();
        }
    }
    b.powf(x) - F::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_powm1_basic() {
        assert_relative_eq!(powm1(2.0, 3.0), 7.0, max_relative = 1e-15);
        assert_relative_eq!(powm1(4.0, 0.5), 1.0, max_relative = 1e-15);
        assert_relative_eq!(powm1(10.0, -1.0), -0.9, max_relative = 1e-15);
    }

    #[test]
    fn test_powm1_near_one_keeps_precision() {
        let b = 1.0 + 1e-10;
        let exact = 1e-10 * 3.0;
        assert_relative_eq!(powm1(b, 3.0), exact, max_relative = 1e-6);
        assert_relative_eq!(powm1(2.0f64, 1e-12), 1e-12 * 2f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_powm1_domain() {
        assert_eq!(powm1(f64::NAN, 0.0), 0.0);
        assert_eq!(powm1(1.0, f64::NAN), 0.0);
        assert!(powm1(-2.0f64, 0.5).is_nan());
        assert!(powm1(f64::NAN, 2.0).is_nan());
        assert_relative_eq!(powm1(-2.0, 2.0), 3.0, max_relative = 1e-15);
        assert_relative_eq!(powm1(-2.0, 3.0), -9.0, max_relative = 1e-15);
        assert_eq!(powm1(0.0, 2.0), -1.0);
    }
}
