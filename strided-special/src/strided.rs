//! Strided drivers applying the special functions element-wise.
//!
//! These route through the generic map kernels in `strided-kernel`, so
//! they accept any accessor and any (possibly negative) strides.

use strided_kernel::{binary, binary_ndarray, unary, unary_ndarray};
use strided_traits::{Accessor, AccessorMut, KernelFloat};

use crate::{boxcox, powm1, tanh};

/// `y[i] = tanh(x[i])`.
///
/// ```rust
/// use strided_special::tanh_strided;
///
/// let x = [0.0, 100.0, -100.0];
/// let mut y = [9.0; 3];
/// tanh_strided(3, &x[..], 1, &mut y[..], -1);
/// assert_eq!(y, [-1.0, 1.0, 0.0]);
/// ```
pub fn tanh_strided<'y, F, A, B>(
    n: usize,
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
    unary(n, x, stride_x, y, stride_y, tanh)
}

#[allow(clippy::too_many_arguments)]
pub fn tanh_strided_ndarray<'y, F, A, B>(
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
{
    unary_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, tanh)
}

/// `y[i] = b[i]^x[i] - 1`.
#[allow(clippy::too_many_arguments)]
pub fn powm1_strided<'y, F, A, X, B>(
    n: usize,
    b: &A,
    stride_b: isize,
    x: &X,
    stride_x: isize,
    y: &'y mut B,
    stride_y: isize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    X: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
{
    binary(n, b, stride_b, x, stride_x, y, stride_y, powm1)
}

#[allow(clippy::too_many_arguments)]
pub fn powm1_strided_ndarray<'y, F, A, X, B>(
    n: usize,
    b: &A,
    stride_b: isize,
    offset_b: usize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    X: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
{
    binary_ndarray(
        n, b, stride_b, offset_b, x, stride_x, offset_x, y, stride_y, offset_y, powm1,
    )
}

/// `y[i] = boxcox(x[i], lambda[i])`. A zero `stride_lambda` applies one
/// `lambda` to every element.
#[allow(clippy::too_many_arguments)]
pub fn boxcox_strided<'y, F, A, L, B>(
    n: usize,
    x: &A,
    stride_x: isize,
    lambda: &L,
    stride_lambda: isize,
    y: &'y mut B,
    stride_y: isize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    L: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
{
    binary(n, x, stride_x, lambda, stride_lambda, y, stride_y, boxcox)
}

#[allow(clippy::too_many_arguments)]
pub fn boxcox_strided_ndarray<'y, F, A, L, B>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    lambda: &L,
    stride_lambda: isize,
    offset_lambda: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut B
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    L: Accessor<Elem = F> + ?Sized,
    B: AccessorMut<Elem = F> + ?Sized,
{
    binary_ndarray(
        n,
        x,
        stride_x,
        offset_x,
        lambda,
        stride_lambda,
        offset_lambda,
        y,
        stride_y,
        offset_y,
        boxcox,
    )
}
