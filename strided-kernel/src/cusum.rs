//! Cumulative sums written into a second strided view.

use strided_traits::{Accessor, AccessorMut, KernelFloat};
use strided_view::{stride2offset, StridedIndices};

use crate::acc::{Accumulate, Kbn, Kbn2, Ors};

#[allow(clippy::too_many_arguments)]
fn running<'y, F, A, B, S>(
    mut acc: S,
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
    S: Accumulate<F>,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (ix, iy) in xs.zip(ys) {
        acc.push(x.get(ix));
        y.set(iy, acc.total());
    }
    y
}

macro_rules! cusum_kernel {
    ($(#[$meta:meta])* $name:ident, $ndarray:ident, $acc:ident) => {
        #[allow(clippy::too_many_arguments)]
        pub fn $ndarray<'y, F, A, B>(
            n: usize,
            sum0: F,
            x: &A,
            stride_x: isize,
            offset_x: usize,
            y: &'y mut B,
            stride_y: isize,
            offset_y: usize,
        ) -> &'y mut B
        where
            F: KernelFloat,
            A: Accessor<Elem = F> + ?Sized,
            B: AccessorMut<Elem = F> + ?Sized,
        {
            running($acc::new(sum0), n, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        $(#[$meta])*
        pub fn $name<'y, F, A, B>(
            n: usize,
            sum0: F,
            x: &A,
            stride_x: isize,
            y: &'y mut B,
            stride_y: isize,
        ) -> &'y mut B
        where
            F: KernelFloat,
            A: Accessor<Elem = F> + ?Sized,
            B: AccessorMut<Elem = F> + ?Sized,
        {
            $ndarray(
                n,
                sum0,
                x,
                stride_x,
                stride2offset(n, stride_x),
                y,
                stride_y,
                stride2offset(n, stride_y),
            )
        }
    };
}

cusum_kernel!(
    /// Cumulative sum (ordinary recursive summation).
    cusumors, cusumors_ndarray, Ors
);
cusum_kernel!(
    /// Cumulative sum (first-order Kahan-Babuska).
    cusumkbn, cusumkbn_ndarray, Kbn
);
cusum_kernel!(
    /// Cumulative sum (second-order Kahan-Babuska).
    cusumkbn2, cusumkbn2_ndarray, Kbn2
);

/// Cumulative sum of `x` added to `sum0`, written into `y`.
///
/// ```rust
/// use strided_kernel::cusum;
///
/// let x = [1.0, -2.0, 2.0];
/// let mut y = [0.0; 3];
/// cusum(3, 0.0, &x[..], 1, &mut y[..], 1);
/// assert_eq!(y, [1.0, -1.0, 1.0]);
/// ```
#[inline]
pub fn cusum<'y, F, A, B>(
    n: usize,
    sum0: F,
    x: &A,
    stride_x: isize,
    y: &'y mut B,
    stride_y: isize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
{
    cusumkbn(n, sum0, x, stride_x, y, stride_y)
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn cusum_ndarray<'y, F, A, B>(
    n: usize,
    sum0: F,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
{
    cusumkbn_ndarray(n, sum0, x, stride_x, offset_x, y, stride_y, offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cusum_with_initial_sum() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0; 4];
        cusum(4, 10.0, &x[..], 1, &mut y[..], 1);
        assert_eq!(y, [11.0, 13.0, 16.0, 20.0]);
    }

    #[test]
    fn test_cusum_empty_leaves_output() {
        let x = [1.0, 2.0];
        let mut y = [-1.0, -1.0];
        cusumkbn2(0, 0.0, &x[..], 1, &mut y[..], 1);
        assert_eq!(y, [-1.0, -1.0]);
    }

    #[test]
    fn test_cusum_negative_strides() {
        let x = [1.0, 0.0, 2.0, 0.0, 3.0];
        let mut y = [0.0; 3];
        // x walked backwards: 3, 2, 1; y filled from the end
        cusumors(3, 0.0, &x[..], -2, &mut y[..], -1);
        assert_eq!(y, [6.0, 5.0, 3.0]);
    }

    #[test]
    fn test_cusum_ndarray_offsets() {
        let x = [9.0, 1.0, 1.0, 1.0];
        let mut y = [0.0; 6];
        cusum_ndarray(3, 0.5, &x[..], 1, 1, &mut y[..], 2, 0);
        assert_eq!(y, [1.5, 0.0, 2.5, 0.0, 3.5, 0.0]);
    }

    #[test]
    fn test_cusum_compensated_running_total() {
        let x = [1e16, 1.0, -1e16];
        let mut y = [0.0; 3];
        cusumkbn2(3, 0.0, &x[..], 1, &mut y[..], 1);
        assert_eq!(y[2], 1.0);
        cusumors(3, 0.0, &x[..], 1, &mut y[..], 1);
        assert_eq!(y[2], 0.0);
    }

    #[test]
    fn test_cusum_stride_zero_broadcasts_input() {
        let x = [2.0f32];
        let mut y = [0.0f32; 3];
        cusum(3, 0.0, &x[..], 0, &mut y[..], 1);
        assert_eq!(y, [2.0, 4.0, 6.0]);
    }
}
