//! Polynomial evaluation with Horner's rule.

use strided_traits::KernelFloat;

/// Evaluate `c[0] + c[1]*x + ... + c[n-1]*x^(n-1)`.
///
/// An empty coefficient slice evaluates to `0`.
pub fn evalpoly<F: KernelFloat>(c: &[F], x: F) -> F {
    let Some((&last, rest)) = c.split_last() else {
        return F::zero();
    };
    if rest.is_empty() || x == F::zero() {
        return c[0];
    }
    rest.iter().rev().fold(last, |acc, &v| acc * x + v)
}

/// Capture a coefficient slice and return an evaluator closure.
pub fn evalpoly_fn<F: KernelFloat>(c: &[F]) -> impl Fn(F) -> F {
    let c = c.to_vec();
    move |x| evalpoly(&c, x)
}
