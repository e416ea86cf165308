//! In-place reversal of a strided view.

use strided_traits::AccessorMut;
use strided_view::{min_view_buffer_index, stride2offset};

/// Reverse a strided view in place, explicit offset.
///
/// The traversal is rebased on the lowest buffer index the view touches
/// and `floor(n/2)` symmetric pairs are exchanged; for odd `n` the middle
/// element is untouched. A zero stride addresses a single element and is a
/// no-op.
pub fn rev_ndarray<'x, B>(n: usize, x: &'x mut B, stride: isize, offset: usize) -> &'x mut B
where
    B: AccessorMut + ?Sized,
{
    if n <= 1 || stride == 0 {
        return x;
    }
    let step = stride.unsigned_abs();
    let mut lo = min_view_buffer_index(n, stride, offset);
    let mut hi = lo + (n - 1) * step;
    for _ in 0..n / 2 {
        x.swap_elems(lo, hi);
        lo += step;
        hi -= step;
    }
    x
}

/// Reverse a strided view in place.
///
/// ```rust
/// use strided_kernel::rev;
///
/// let mut x = [1.0, -2.0, 3.0, -4.0, 5.0, -6.0];
/// rev(6, &mut x[..], 1);
/// assert_eq!(x, [-6.0, 5.0, -4.0, 3.0, -2.0, 1.0]);
/// ```
#[inline]
pub fn rev<'x, B>(n: usize, x: &'x mut B, stride: isize) -> &'x mut B
where
    B: AccessorMut + ?Sized,
{
    rev_ndarray(n, x, stride, stride2offset(n, stride))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use strided_traits::{Accessor, InterleavedComplex};

    #[test]
    fn test_rev_strided_leaves_gaps() {
        let mut x = [1.0, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0];
        rev(4, &mut x[..], 2);
        assert_eq!(x, [4.0, 0.0, 3.0, 0.0, 2.0, 0.0, 1.0]);
        // negative stride reverses the same elements
        rev(4, &mut x[..], -2);
        assert_eq!(x, [1.0, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0]);
    }

    #[test]
    fn test_rev_odd_middle_untouched() {
        let mut x = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        rev_ndarray(3, &mut x[..], 1, 1);
        assert_eq!(x, [1.0, 4.0, 3.0, 2.0, 5.0]);
    }

    #[test]
    fn test_rev_noop_cases() {
        let mut x = [1.0, 2.0];
        rev(0, &mut x[..], 1);
        rev(1, &mut x[..], 1);
        rev(2, &mut x[..], 0);
        assert_eq!(x, [1.0, 2.0]);
    }

    #[test]
    fn test_rev_interleaved_complex() {
        let mut buf = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut z = InterleavedComplex::new(&mut buf[..]);
        rev(3, &mut z, 1);
        assert_eq!(z.get(0), Complex64::new(5.0, 6.0));
        assert_eq!(buf, [5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
    }
}
