//! BLAS level-1 style update kernels: `axpy`, `scal`, plane rotations.
//!
//! `axpy` and `scal` work for any element supporting the arithmetic they
//! need, so interleaved complex views go through the same code. The
//! rotations take real coefficients and apply to real or complex elements.

use std::ops::{Add, Mul};

use num_traits::Zero;
use strided_traits::{Accessor, AccessorMut, KernelFloat};
use strided_view::{stride2offset, StridedIndices};

/// `y += alpha * x`, explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn axpy_ndarray<'y, A, B>(
    n: usize,
    alpha: B::Elem,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut B
where
    A: Accessor<Elem = B::Elem> + ?Sized,
    B: AccessorMut + ?Sized,
    B::Elem: Mul<Output = B::Elem> + Add<Output = B::Elem> + Zero + PartialEq,
{
    if n == 0 || alpha == B::Elem::zero() {
        return y;
    }
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (ix, iy) in xs.zip(ys) {
        let v = y.get(iy);
        y.set(iy, v + alpha * x.get(ix));
    }
    y
}

/// `y += alpha * x` over strided views. A zero `alpha` leaves `y` untouched.
///
/// ```rust
/// use strided_kernel::axpy;
///
/// let x = [1.0, 2.0, 3.0];
/// let mut y = [10.0, 20.0, 30.0];
/// axpy(3, 2.0, &x[..], 1, &mut y[..], -1);
/// assert_eq!(y, [16.0, 24.0, 32.0]);
/// ```
#[inline]
pub fn axpy<'y, A, B>(
    n: usize,
    alpha: B::Elem,
    x: &A,
    stride_x: isize,
    y: &'y mut B,
    stride_y: isize,
) -> &'y mut B
where
    A: Accessor<Elem = B::Elem> + ?Sized,
    B: AccessorMut + ?Sized,
    B::Elem: Mul<Output = B::Elem> + Add<Output = B::Elem> + Zero + PartialEq,
{
    axpy_ndarray(
        n,
        alpha,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// `x *= alpha`, explicit offset.
pub fn scal_ndarray<'x, B>(
    n: usize,
    alpha: B::Elem,
    x: &'x mut B,
    stride: isize,
    offset: usize,
) -> &'x mut B
where
    B: AccessorMut + ?Sized,
    B::Elem: Mul<Output = B::Elem>,
{
    for ix in StridedIndices::new(n, stride, offset) {
        let v = x.get(ix);
        x.set(ix, alpha * v);
    }
    x
}

/// `x *= alpha` over a strided view.
///
/// ```rust
/// use strided_kernel::scal;
///
/// let mut x = [1.0, 2.0, 3.0, 4.0];
/// scal(2, -3.0, &mut x[..], 2);
/// assert_eq!(x, [-3.0, 2.0, -9.0, 4.0]);
/// ```
#[inline]
pub fn scal<B>(n: usize, alpha: B::Elem, x: &mut B, stride: isize) -> &mut B
where
    B: AccessorMut + ?Sized,
    B::Elem: Mul<Output = B::Elem>,
{
    scal_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// Apply the 2x2 map `(x, y) -> (h11 x + h12 y, h21 x + h22 y)` pairwise.
#[allow(clippy::too_many_arguments)]
fn apply_2x2<F, T, B, C>(
    n: usize,
    [h11, h12, h21, h22]: [F; 4],
    x: &mut B,
    stride_x: isize,
    offset_x: usize,
    y: &mut C,
    stride_y: isize,
    offset_y: usize,
) where
    F: KernelFloat,
    T: Copy + Mul<F, Output = T> + Add<Output = T>,
    B: AccessorMut<Elem = T> + ?Sized,
    C: AccessorMut<Elem = T> + ?Sized,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (ix, iy) in xs.zip(ys) {
        let a = x.get(ix);
        let b = y.get(iy);
        x.set(ix, a * h11 + b * h12);
        y.set(iy, a * h21 + b * h22);
    }
}

/// Plane rotation with explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn rot_ndarray<F, T, B, C>(
    n: usize,
    x: &mut B,
    stride_x: isize,
    offset_x: usize,
    y: &mut C,
    stride_y: isize,
    offset_y: usize,
    c: F,
    s: F,
) where
    F: KernelFloat,
    T: Copy + Mul<F, Output = T> + Add<Output = T>,
    B: AccessorMut<Elem = T> + ?Sized,
    C: AccessorMut<Elem = T> + ?Sized,
{
    apply_2x2(n, [c, s, -s, c], x, stride_x, offset_x, y, stride_y, offset_y);
}

/// Plane rotation: `x = c*x + s*y`, `y = c*y - s*x`.
///
/// ```rust
/// use strided_kernel::rot;
///
/// let mut x = [1.0, 2.0];
/// let mut y = [3.0, 4.0];
/// rot(2, &mut x[..], 1, &mut y[..], 1, 0.0, 1.0);
/// assert_eq!(x, [3.0, 4.0]);
/// assert_eq!(y, [-1.0, -2.0]);
/// ```
#[inline]
pub fn rot<F, T, B, C>(
    n: usize,
    x: &mut B,
    stride_x: isize,
    y: &mut C,
    stride_y: isize,
    c: F,
    s: F,
) where
    F: KernelFloat,
    T: Copy + Mul<F, Output = T> + Add<Output = T>,
    B: AccessorMut<Elem = T> + ?Sized,
    C: AccessorMut<Elem = T> + ?Sized,
{
    rot_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        c,
        s,
    );
}

/// Modified-Givens matrix encoded as `[flag, h11, h21, h12, h22]`.
///
/// - `flag == -2`: identity, nothing is written
/// - `flag == -1`: full matrix from `h11, h12, h21, h22`
/// - `flag == 0`: unit diagonal, `h12` and `h21` from `param`
/// - `flag == 1`: `h12 = 1`, `h21 = -1`, diagonal from `param`
///
/// Any other flag is treated as identity.
fn rotm_matrix<F: KernelFloat>(param: &[F; 5]) -> Option<[F; 4]> {
    let [flag, h11, h21, h12, h22] = *param;
    let one = F::one();
    if flag == -one {
        Some([h11, h12, h21, h22])
    } else if flag == F::zero() {
        Some([one, h12, h21, one])
    } else if flag == one {
        Some([h11, one, -one, h22])
    } else {
        None
    }
}

/// Modified Givens rotation with explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn rotm_ndarray<F, T, B, C>(
    n: usize,
    x: &mut B,
    stride_x: isize,
    offset_x: usize,
    y: &mut C,
    stride_y: isize,
    offset_y: usize,
    param: &[F; 5],
) where
    F: KernelFloat,
    T: Copy + Mul<F, Output = T> + Add<Output = T>,
    B: AccessorMut<Elem = T> + ?Sized,
    C: AccessorMut<Elem = T> + ?Sized,
{
    if let Some(h) = rotm_matrix(param) {
        apply_2x2(n, h, x, stride_x, offset_x, y, stride_y, offset_y);
    }
}

/// Modified Givens rotation: `(x, y) = H (x, y)` with `H` from `param`.
#[inline]
pub fn rotm<F, T, B, C>(
    n: usize,
    x: &mut B,
    stride_x: isize,
    y: &mut C,
    stride_y: isize,
    param: &[F; 5],
) where
    F: KernelFloat,
    T: Copy + Mul<F, Output = T> + Add<Output = T>,
    B: AccessorMut<Elem = T> + ?Sized,
    C: AccessorMut<Elem = T> + ?Sized,
{
    rotm_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        param,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use strided_traits::InterleavedComplex;

    #[test]
    fn test_axpy_negative_strides_and_offsets() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0; 3];
        // x walked 4, 2 backwards from offset 3
        axpy_ndarray(2, 0.5, &x[..], -2, 3, &mut y[..], 2, 0);
        assert_eq!(y, [2.0, 0.0, 1.0]);
        axpy(2, 1.0, &x[..], -2, &mut y[..], -2);
        assert_eq!(y, [3.0, 0.0, 4.0]);
    }

    #[test]
    fn test_axpy_zero_alpha_keeps_nan_out() {
        let x = [f64::NAN, f64::INFINITY];
        let mut y = [1.0, 2.0];
        axpy(2, 0.0, &x[..], 1, &mut y[..], 1);
        assert_eq!(y, [1.0, 2.0]);
    }

    #[test]
    fn test_axpy_complex() {
        let x = [1.0, 0.0, 0.0, 1.0];
        let mut y = [0.0f64; 4];
        let xs = InterleavedComplex::new(&x[..]);
        let mut ys = InterleavedComplex::new(&mut y[..]);
        axpy(2, Complex64::new(0.0, 2.0), &xs, 1, &mut ys, 1);
        assert_eq!(y, [0.0, 2.0, -2.0, 0.0]);
    }

    #[test]
    fn test_scal() {
        let mut x = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        scal_ndarray(2, 10.0, &mut x[..], -3, 4);
        assert_eq!(x, [1.0, 20.0, 3.0, 4.0, 50.0]);
        scal(0, 0.0, &mut x[..], 1);
        assert_eq!(x[0], 1.0);
        scal(5, 2.0, &mut x[..], -1);
        assert_eq!(x, [2.0, 40.0, 6.0, 8.0, 100.0]);
    }

    #[test]
    fn test_rot_preserves_norm() {
        let (c, s) = (0.6f64, 0.8f64);
        let mut x = [3.0, 1.0, -2.0];
        let mut y = [4.0, 0.0, 5.0];
        rot(3, &mut x[..], 1, &mut y[..], -1, c, s);
        // pairs: (3,5), (1,0), (-2,4)
        assert_relative_eq!(x[0], 0.6 * 3.0 + 0.8 * 5.0, epsilon = 1e-15);
        assert_relative_eq!(y[2], 0.6 * 5.0 - 0.8 * 3.0, epsilon = 1e-15);
        assert_relative_eq!(x[2], 0.6 * -2.0 + 0.8 * 4.0, epsilon = 1e-15);
        assert_relative_eq!(y[0], 0.6 * 4.0 + 0.8 * 2.0, epsilon = 1e-15);
        assert_relative_eq!(x[1] * x[1] + y[1] * y[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rot_complex_elements() {
        let mut x = [Complex64::new(1.0, 1.0)];
        let mut y = [Complex64::new(0.0, -1.0)];
        rot(1, &mut x[..], 1, &mut y[..], 1, 0.0f64, 1.0);
        assert_eq!(x[0], Complex64::new(0.0, -1.0));
        assert_eq!(y[0], Complex64::new(-1.0, -1.0));
    }

    #[test]
    fn test_rotm_flags() {
        let run = |param: [f64; 5]| {
            let mut x = [1.0, 2.0];
            let mut y = [3.0, 4.0];
            rotm(2, &mut x[..], 1, &mut y[..], -1, &param);
            (x, y)
        };
        // pairs are (1, 4) and (2, 3)
        assert_eq!(run([-2.0, 9.0, 9.0, 9.0, 9.0]), ([1.0, 2.0], [3.0, 4.0]));
        assert_eq!(
            run([-1.0, 2.0, 3.0, 5.0, 7.0]),
            ([2.0 + 20.0, 4.0 + 15.0], [6.0 + 21.0, 3.0 + 28.0])
        );
        assert_eq!(
            run([0.0, 9.0, 2.0, 3.0, 9.0]),
            ([1.0 + 12.0, 2.0 + 9.0], [4.0 + 3.0, 2.0 + 4.0])
        );
        assert_eq!(
            run([1.0, 2.0, 9.0, 9.0, 3.0]),
            ([2.0 + 4.0, 4.0 + 3.0], [-2.0 + 9.0, -1.0 + 12.0])
        );
    }
}
