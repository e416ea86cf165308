//! Hyperbolic tangent.

use strided_traits::KernelFloat;

use crate::evalrational::evalrational;

/// Natural log of the largest finite `f64`.
const MAXLOG: f64 = 8.8029691931113054295988e+01;

/// Rational approximation of `(tanh(x) - x) / x^3` in `s = x^2` for `|x| < 0.625`.
const P: [f64; 4] = [
    -1.61468768441708447952e3,
    -9.92877231001918586564e1,
    -9.64399179425052238628e-1,
    0.0,
];
const Q: [f64; 4] = [
    4.84406305325125486048e3,
    2.23548839060100448583e3,
    1.12811678491632931402e2,
    1.0,
];

/// Hyperbolic tangent.
///
/// Small arguments (`|x| < 0.625`) use `x + x^3 R(x^2)` with the rational
/// approximation `R`; larger ones use `1 - 2/(e^(2|x|) + 1)` and saturate
/// to `±1` once `|x| > MAXLOG/2`. NaN propagates and the sign of zero is
/// preserved.
///
/// ```rust
/// use strided_special::tanh;
///
/// assert_eq!(tanh(0.0f64), 0.0);
/// assert_eq!(tanh(100.0f64), 1.0);
/// assert!((tanh(0.5f64) - 0.5f64.tanh()).abs() < 1e-15);
/// ```
pub fn tanh<F: KernelFloat>(x: F) -> F {
    if x.is_nan() || x == F::zero() {
        return x;
    }
    let ax = x.abs();
    if ax > F::lit(0.5 * MAXLOG) {
        return if x < F::zero() { -F::one() } else { F::one() };
    }
    if ax >= F::lit(0.625) {
        let s = (ax + ax).exp();
        let z = F::one() - F::lit(2.0) / (s + F::one());
        return if x < F::zero() { -z } else { z };
    }
    let s = x * x;
    let p = P.map(F::lit);
    let q = Q.map(F::lit);
    x + x * s * evalrational(&p, &q, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_matches_std() {
        for &x in &[-20.0, -3.0, -0.7, -0.625, -0.3, 1e-8, 0.1, 0.6, 0.625, 1.0, 5.0, 19.0] {
            assert_relative_eq!(tanh(x), f64::tanh(x), max_relative = 1e-14);
        }
    }

    #[test]
    fn test_tanh_special_values() {
        assert!(tanh(f64::NAN).is_nan());
        assert!(tanh(-0.0f64).is_sign_negative());
        assert_eq!(tanh(f64::INFINITY), 1.0);
        assert_eq!(tanh(f64::NEG_INFINITY), -1.0);
        assert_eq!(tanh(-50.0f64), -1.0);
    }

    #[test]
    fn test_tanh_single_precision() {
        for &x in &[-2.0f32, -0.5, 0.25, 0.9, 3.0] {
            assert_relative_eq!(tanh(x), x.tanh(), max_relative = 1e-6);
        }
    }
}
