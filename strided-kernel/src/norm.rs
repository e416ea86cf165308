//! Euclidean norm and sums of absolute values.

use strided_traits::{Accessor, KernelFloat};
use strided_view::StridedIndices;

use crate::acc::{fold, pairwise, Ors};
use crate::sum::collapses;

/// L2 norm with explicit offset.
///
/// Uses the scaled sum-of-squares recurrence: `scale` tracks the largest
/// magnitude seen so far and `ssq` the sum of `(|x|/scale)^2`, so no
/// intermediate square overflows or underflows.
pub fn nrm2_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return x.get(offset).abs();
    }
    let mut scale = F::zero();
    let mut ssq = F::one();
    let mut infinite = false;
    for ix in StridedIndices::new(n, stride, offset) {
        let v = x.get(ix);
        if v.is_nan() {
            return v;
        }
        // Keep scanning: a later NaN still wins over an infinity.
        if v.is_infinite() {
            infinite = true;
            continue;
        }
        if infinite {
            continue;
        }
        if v != F::zero() {
            let a = v.abs();
            if scale < a {
                let r = scale / a;
                ssq = F::one() + ssq * r * r;
                scale = a;
            } else {
                let r = a / scale;
                ssq = ssq + r * r;
            }
        }
    }
    if infinite {
        return F::infinity();
    }
    scale * ssq.sqrt()
}

/// Sum of absolute values (pairwise) with explicit offset.
pub fn asum_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return x.get(offset).abs();
    }
    pairwise(n, x, stride, offset, &|v: F| v.abs())
}

/// Sum of absolute values ignoring NaN, explicit offset.
pub fn nanasum_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        let v = x.get(offset);
        return if v.is_nan() { F::zero() } else { v.abs() };
    }
    fold(Ors::new(F::zero()), n, x, stride, offset, |v: F| {
        (!v.is_nan()).then(|| v.abs())
    })
    .0
}

base_reduction! {
    /// Euclidean (L2) norm of a strided view.
    ///
    /// ```rust
    /// use strided_kernel::nrm2;
    ///
    /// let x = [3.0, 9.0, -4.0];
    /// assert_eq!(nrm2(2, &x[..], 2), 5.0);
    /// ```
    nrm2 => nrm2_ndarray -> F
}
base_reduction! {
    /// Sum of absolute values of a strided view.
    asum => asum_ndarray -> F
}
base_reduction! {
    /// Sum of absolute values of a strided view, ignoring NaN.
    nanasum => nanasum_ndarray -> F
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nrm2_basic() {
        let x = [1.0, -2.0, -4.0, 5.0, 0.0, 3.0];
        assert_relative_eq!(nrm2(6, &x[..], 1), 55f64.sqrt(), max_relative = 1e-14);
        assert_relative_eq!(nrm2(3, &x[..], -2), 17f64.sqrt(), max_relative = 1e-14);
        assert_eq!(nrm2(0, &x[..], 1), 0.0);
        assert_eq!(nrm2(4, &x[..], 0), 1.0);
    }

    #[test]
    fn test_nrm2_does_not_overflow() {
        let x = [1e200, 1e200];
        assert_relative_eq!(nrm2(2, &x[..], 1), 2f64.sqrt() * 1e200, max_relative = 1e-14);
        let y = [1e-200f64, -1e-200];
        assert_relative_eq!(nrm2(2, &y[..], 1), 2f64.sqrt() * 1e-200, max_relative = 1e-14);
    }

    #[test]
    fn test_nrm2_all_zero_and_nan() {
        assert_eq!(nrm2(3, &[0.0f32; 3][..], 1), 0.0);
        assert!(nrm2(3, &[1.0, f64::NAN, 2.0][..], 1).is_nan());
    }

    #[test]
    fn test_nrm2_infinite_entries() {
        let inf = f64::INFINITY;
        assert_eq!(nrm2(2, &[inf, inf][..], 1), inf);
        assert_eq!(nrm2(3, &[inf, 1.0, -inf][..], 1), inf);
        assert_eq!(nrm2(3, &[1.0, -inf, 2.0][..], -1), inf);
        assert_eq!(nrm2(2, &[-f32::INFINITY, 3.0][..], 1), f32::INFINITY);
        assert!(nrm2(3, &[inf, 1.0, f64::NAN][..], 1).is_nan());
        assert!(nrm2(3, &[f64::NAN, inf, inf][..], 1).is_nan());
    }

    #[test]
    fn test_asum_and_nanasum() {
        let x = [1.0, -2.0, f64::NAN, -4.0];
        assert_eq!(asum(2, &x[..], 1), 3.0);
        assert!(asum(4, &x[..], 1).is_nan());
        assert_eq!(nanasum(4, &x[..], 1), 7.0);
        assert_eq!(nanasum(2, &x[..], -2), 1.0);
        assert_eq!(asum(5, &x[..], 0), 1.0);
    }
}
