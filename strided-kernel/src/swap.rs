//! Two-view exchange and assignment kernels, plus the batched swap along
//! an axis of n-d views.

use smallvec::SmallVec;
use strided_traits::{Accessor, AccessorMut};
use strided_view::{normalize_axis, stride2offset, Result, StridedError, StridedIndices, StridedViewMut};

type SVec<T> = SmallVec<[T; 8]>;

/// Exchange the elements of two strided views, explicit offsets.
pub fn swap_ndarray<'y, B, C>(
    n: usize,
    x: &mut B,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut C,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut C
where
    B: AccessorMut + ?Sized,
    C: AccessorMut<Elem = B::Elem> + ?Sized,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (ix, iy) in xs.zip(ys) {
        let t = x.get(ix);
        x.set(ix, y.get(iy));
        y.set(iy, t);
    }
    y
}

/// Exchange the elements of two strided views.
///
/// ```rust
/// use strided_kernel::swap;
///
/// let mut x = [1.0, 2.0, 3.0];
/// let mut y = [4.0, 5.0, 6.0];
/// swap(3, &mut x[..], 1, &mut y[..], -1);
/// assert_eq!(x, [6.0, 5.0, 4.0]);
/// assert_eq!(y, [3.0, 2.0, 1.0]);
/// ```
#[inline]
pub fn swap<'y, B, C>(n: usize, x: &mut B, stride_x: isize, y: &'y mut C, stride_y: isize) -> &'y mut C
where
    B: AccessorMut + ?Sized,
    C: AccessorMut<Elem = B::Elem> + ?Sized,
{
    swap_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// Copy `x` into `y`, explicit offsets.
pub fn copy_ndarray<'y, A, B>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    B: AccessorMut<Elem = A::Elem> + ?Sized,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (ix, iy) in xs.zip(ys) {
        y.set(iy, x.get(ix));
    }
    y
}

/// Copy `x` into `y`.
#[inline]
pub fn copy<'y, A, B>(n: usize, x: &A, stride_x: isize, y: &'y mut B, stride_y: isize) -> &'y mut B
where
    A: Accessor + ?Sized,
    B: AccessorMut<Elem = A::Elem> + ?Sized,
{
    copy_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

pub fn fill_ndarray<'x, B>(
    n: usize,
    alpha: B::Elem,
    x: &'x mut B,
    stride: isize,
    offset: usize,
) -> &'x mut B
where
    B: AccessorMut + ?Sized,
{
    for ix in StridedIndices::new(n, stride, offset) {
        x.set(ix, alpha);
    }
    x
}

/// Set every element of a strided view to `alpha`.
#[inline]
pub fn fill<B>(n: usize, alpha: B::Elem, x: &mut B, stride: isize) -> &mut B
where
    B: AccessorMut + ?Sized,
{
    fill_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// Replace each element with `clbk(value, i, ix)`, explicit offset.
pub fn fill_by_ndarray<'x, B, C>(
    n: usize,
    x: &'x mut B,
    stride: isize,
    offset: usize,
    mut clbk: C,
) -> &'x mut B
where
    B: AccessorMut + ?Sized,
    C: FnMut(B::Elem, usize, usize) -> B::Elem,
{
    for (i, ix) in StridedIndices::new(n, stride, offset).enumerate() {
        let v = clbk(x.get(ix), i, ix);
        x.set(ix, v);
    }
    x
}

#[inline]
pub fn fill_by<B, C>(n: usize, x: &mut B, stride: isize, clbk: C) -> &mut B
where
    B: AccessorMut + ?Sized,
    C: FnMut(B::Elem, usize, usize) -> B::Elem,
{
    fill_by_ndarray(n, x, stride, stride2offset(n, stride), clbk)
}

/// Interchange the vectors of two n-d views along `axis`.
///
/// `axis` may be negative (`-1` is the last axis). Both views must have the
/// same rank and shape. Every vector pair is exchanged with the 1-d
/// [`swap_ndarray`] kernel; views with a zero-length dimension are left as-is.
pub fn swap_along<T: Copy>(
    x: &mut StridedViewMut<'_, T>,
    y: &mut StridedViewMut<'_, T>,
    axis: isize,
) -> Result<()> {
    if x.ndim() != y.ndim() {
        return Err(StridedError::RankMismatch(x.ndim(), y.ndim()));
    }
    if x.dims() != y.dims() {
        return Err(StridedError::ShapeMismatch(
            x.dims().to_vec(),
            y.dims().to_vec(),
        ));
    }
    let axis = normalize_axis(axis, x.ndim())?;

    let len = x.dims()[axis];
    let sx = x.strides()[axis];
    let sy = y.strides()[axis];

    // Odometer over every axis except `axis`.
    let outer_dims: SVec<usize> = x
        .dims()
        .iter()
        .enumerate()
        .filter(|&(d, _)| d != axis)
        .map(|(_, &n)| n)
        .collect();
    let outer_sx: SVec<isize> = outer_strides(x.strides(), axis);
    let outer_sy: SVec<isize> = outer_strides(y.strides(), axis);

    let vectors: usize = outer_dims.iter().product();
    tracing::debug!(axis, len, vectors, sx, sy, "swap_along");
    if len == 0 || vectors == 0 {
        return Ok(());
    }

    let mut idx: SVec<usize> = SmallVec::from_elem(0, outer_dims.len());
    let mut ox = x.offset();
    let mut oy = y.offset();
    for _ in 0..vectors {
        swap_ndarray(
            len,
            x.data_mut(),
            sx,
            ox as usize,
            y.data_mut(),
            sy,
            oy as usize,
        );
        // advance the odometer, innermost (last) outer axis fastest
        for d in (0..idx.len()).rev() {
            idx[d] += 1;
            ox += outer_sx[d];
            oy += outer_sy[d];
            if idx[d] < outer_dims[d] {
                break;
            }
            ox -= outer_sx[d] * idx[d] as isize;
            oy -= outer_sy[d] * idx[d] as isize;
            idx[d] = 0;
        }
    }
    Ok(())
}

fn outer_strides(strides: &[isize], axis: usize) -> SVec<isize> {
    strides
        .iter()
        .enumerate()
        .filter(|&(d, _)| d != axis)
        .map(|(_, &s)| s)
        .collect()
}
