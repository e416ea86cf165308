//! One-parameter Box-Cox power transformation.

use strided_traits::KernelFloat;

use crate::powm1::powm1;

/// Box-Cox transform `(x^lambda - 1) / lambda`, or `ln x` when `lambda == 0`.
///
/// Negative `x` and NaN inputs give NaN. At `x == 0` a negative `lambda`
/// gives NaN and `lambda == 0` gives `-inf`.
///
/// ```rust
/// use strided_special::boxcox;
///
/// assert_eq!(boxcox(1.0f64, 2.5), 0.0);
/// assert_eq!(boxcox(4.0f64, 1.0), 3.0);
/// ```
pub fn boxcox<F: KernelFloat>(x: F, lambda: F) -> F {
    if x.is_nan() || lambda.is_nan() || x < F::zero() {
        return F::nan();
    }
    if x == F::zero() && lambda < F::zero() {
        return F::nan();
    }
    if lambda.abs() < F::lit(1.0e-19) {
        return x.ln();
    }
    powm1(x, lambda) / lambda
}
