//! Add a constant to every element of a strided view.

use std::ops::Add;

use num_traits::Zero;
use strided_traits::AccessorMut;
use strided_view::{stride2offset, StridedIndices};

pub fn apx_ndarray<'x, B>(
    n: usize,
    alpha: B::Elem,
    x: &'x mut B,
    stride: isize,
    offset: usize,
) -> &'x mut B
where
    B: AccessorMut + ?Sized,
    B::Elem: Add<Output = B::Elem> + Zero + PartialEq,
{
    if n == 0 || alpha == B::Elem::zero() {
        return x;
    }
    for ix in StridedIndices::new(n, stride, offset) {
        let v = x.get(ix);
        x.set(ix, v + alpha);
    }
    x
}

/// `x[i] += alpha` over a strided view.
///
/// ```rust
/// use strided_kernel::apx;
///
/// let mut x = [1.0, 2.0, 3.0, 4.0];
/// apx(2, 5.0, &mut x[..], -2);
/// assert_eq!(x, [6.0, 2.0, 8.0, 4.0]);
/// ```
#[inline]
pub fn apx<B>(n: usize, alpha: B::Elem, x: &mut B, stride: isize) -> &mut B
where
    B: AccessorMut + ?Sized,
    B::Elem: Add<Output = B::Elem> + Zero + PartialEq,
{
    apx_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use strided_traits::InterleavedComplex;

    #[test]
    fn test_apx_offsets() {
        let mut x = [0.0f32; 5];
        apx_ndarray(2, 1.5, &mut x[..], 3, 1);
        assert_eq!(x, [0.0, 1.5, 0.0, 0.0, 1.5]);
    }

    #[test]
    fn test_apx_zero_alpha_and_empty() {
        let mut x = [1.0, f64::NAN];
        apx(2, 0.0, &mut x[..], 1);
        assert_eq!(x[0], 1.0);
        apx(0, 1.0, &mut x[..], 1);
        assert_eq!(x[0], 1.0);
    }

    #[test]
    fn test_apx_complex() {
        let mut buf = [1.0, 1.0, 2.0, 2.0];
        apx(2, Complex64::new(1.0, -1.0), &mut InterleavedComplex::new(&mut buf[..]), 1);
        assert_eq!(buf, [2.0, 0.0, 3.0, 1.0]);
    }
}
