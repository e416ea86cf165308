//! Element-wise unary and binary maps between strided views.
//!
//! Each input and output view carries its own stride and offset; base
//! variants derive every offset independently with `stride2offset`, so a
//! negative stride on any operand walks that operand from its far end.
//! Output views are returned for chaining.

use strided_traits::{Accessor, AccessorMut};
use strided_view::{stride2offset, StridedIndices};

/// `y[i] = f(x[i])`, explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn unary_ndarray<'y, A, B, Fn1>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
    f: Fn1,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    B: AccessorMut + ?Sized,
    Fn1: Fn(A::Elem) -> B::Elem,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (ix, iy) in xs.zip(ys) {
        y.set(iy, f(x.get(ix)));
    }
    y
}

/// `y[i] = f(x[i])`.
///
/// ```rust
/// use strided_kernel::unary;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let mut y = [0.0; 2];
/// unary(2, &x[..], -2, &mut y[..], 1, |v: f64| v * 10.0);
/// assert_eq!(y, [30.0, 10.0]);
/// ```
pub fn unary<'y, A, B, Fn1>(
    n: usize,
    x: &A,
    stride_x: isize,
    y: &'y mut B,
    stride_y: isize,
    f: Fn1,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    B: AccessorMut + ?Sized,
    Fn1: Fn(A::Elem) -> B::Elem,
{
    unary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        f,
    )
}

/// Unary map with a per-element callback, explicit offsets.
///
/// `clbk(x[i], i, [ix, iy])` returns the value handed to `f`; `None`
/// leaves `y[iy]` unwritten.
#[allow(clippy::too_many_arguments)]
pub fn unary_by_ndarray<'y, A, B, Fn1, C>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
    f: Fn1,
    mut clbk: C,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    B: AccessorMut + ?Sized,
    Fn1: Fn(A::Elem) -> B::Elem,
    C: FnMut(A::Elem, usize, [usize; 2]) -> Option<A::Elem>,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for (i, (ix, iy)) in xs.zip(ys).enumerate() {
        if let Some(v) = clbk(x.get(ix), i, [ix, iy]) {
            y.set(iy, f(v));
        }
    }
    y
}

#[allow(clippy::too_many_arguments)]
pub fn unary_by<'y, A, B, Fn1, C>(
    n: usize,
    x: &A,
    stride_x: isize,
    y: &'y mut B,
    stride_y: isize,
    f: Fn1,
    clbk: C,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    B: AccessorMut + ?Sized,
    Fn1: Fn(A::Elem) -> B::Elem,
    C: FnMut(A::Elem, usize, [usize; 2]) -> Option<A::Elem>,
{
    unary_by_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        f,
        clbk,
    )
}

/// Masked unary map, explicit offsets: `y[i] = f(x[i])` where `mask[i] == 0`.
#[allow(clippy::too_many_arguments)]
pub fn mskunary_ndarray<'y, A, M, B, Fn1>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    mask: &M,
    stride_mask: isize,
    offset_mask: usize,
    y: &'y mut B,
    stride_y: isize,
    offset_y: usize,
    f: Fn1,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    M: Accessor<Elem = u8> + ?Sized,
    B: AccessorMut + ?Sized,
    Fn1: Fn(A::Elem) -> B::Elem,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ms = StridedIndices::new(n, stride_mask, offset_mask);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    for ((ix, im), iy) in xs.zip(ms).zip(ys) {
        if mask.get(im) == 0 {
            y.set(iy, f(x.get(ix)));
        }
    }
    y
}

/// Masked unary map: elements with a non-zero mask are skipped.
#[allow(clippy::too_many_arguments)]
pub fn mskunary<'y, A, M, B, Fn1>(
    n: usize,
    x: &A,
    stride_x: isize,
    mask: &M,
    stride_mask: isize,
    y: &'y mut B,
    stride_y: isize,
    f: Fn1,
) -> &'y mut B
where
    A: Accessor + ?Sized,
    M: Accessor<Elem = u8> + ?Sized,
    B: AccessorMut + ?Sized,
    Fn1: Fn(A::Elem) -> B::Elem,
{
    mskunary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        mask,
        stride_mask,
        stride2offset(n, stride_mask),
        y,
        stride_y,
        stride2offset(n, stride_y),
        f,
    )
}

/// `z[i] = f(x[i], y[i])`, explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn binary_ndarray<'z, A, B, C, Fn2>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &B,
    stride_y: isize,
    offset_y: usize,
    z: &'z mut C,
    stride_z: isize,
    offset_z: usize,
    f: Fn2,
) -> &'z mut C
where
    A: Accessor + ?Sized,
    B: Accessor + ?Sized,
    C: AccessorMut + ?Sized,
    Fn2: Fn(A::Elem, B::Elem) -> C::Elem,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    let zs = StridedIndices::new(n, stride_z, offset_z);
    for ((ix, iy), iz) in xs.zip(ys).zip(zs) {
        z.set(iz, f(x.get(ix), y.get(iy)));
    }
    z
}

/// `z[i] = f(x[i], y[i])`.
#[allow(clippy::too_many_arguments)]
pub fn binary<'z, A, B, C, Fn2>(
    n: usize,
    x: &A,
    stride_x: isize,
    y: &B,
    stride_y: isize,
    z: &'z mut C,
    stride_z: isize,
    f: Fn2,
) -> &'z mut C
where
    A: Accessor + ?Sized,
    B: Accessor + ?Sized,
    C: AccessorMut + ?Sized,
    Fn2: Fn(A::Elem, B::Elem) -> C::Elem,
{
    binary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        z,
        stride_z,
        stride2offset(n, stride_z),
        f,
    )
}

/// Binary map with a per-element callback, explicit offsets.
///
/// For each `i` the pair `(x[ix], y[iy])` is passed to
/// `clbk(pair, i, [ix, iy, iz])`. `Some((a, b))` stores `f(a, b)` in
/// `z[iz]`; `None` skips the write and leaves `z[iz]` unchanged.
#[allow(clippy::too_many_arguments)]
pub fn map_by2_ndarray<'z, A, B, C, Fn2, Cb>(
    n: usize,
    x: &A,
    stride_x: isize,
    offset_x: usize,
    y: &B,
    stride_y: isize,
    offset_y: usize,
    z: &'z mut C,
    stride_z: isize,
    offset_z: usize,
    f: Fn2,
    mut clbk: Cb,
) -> &'z mut C
where
    A: Accessor + ?Sized,
    B: Accessor + ?Sized,
    C: AccessorMut + ?Sized,
    Fn2: Fn(A::Elem, B::Elem) -> C::Elem,
    Cb: FnMut((A::Elem, B::Elem), usize, [usize; 3]) -> Option<(A::Elem, B::Elem)>,
{
    let xs = StridedIndices::new(n, stride_x, offset_x);
    let ys = StridedIndices::new(n, stride_y, offset_y);
    let zs = StridedIndices::new(n, stride_z, offset_z);
    for (i, ((ix, iy), iz)) in xs.zip(ys).zip(zs).enumerate() {
        if let Some((a, b)) = clbk((x.get(ix), y.get(iy)), i, [ix, iy, iz]) {
            z.set(iz, f(a, b));
        }
    }
    z
}

/// Binary map with a per-element callback; `None` from `clbk` skips the write.
///
/// ```rust
/// use strided_kernel::map_by2;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [10.0, 20.0, 30.0];
/// let mut z = [-1.0; 3];
/// map_by2(3, &x[..], 1, &y[..], 1, &mut z[..], 1, |a: f64, b: f64| a + b, |p, i, _| {
///     (i != 1).then_some(p)
/// });
/// assert_eq!(z, [11.0, -1.0, 33.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn map_by2<'z, A, B, C, Fn2, Cb>(
    n: usize,
    x: &A,
    stride_x: isize,
    y: &B,
    stride_y: isize,
    z: &'z mut C,
    stride_z: isize,
    f: Fn2,
    clbk: Cb,
) -> &'z mut C
where
    A: Accessor + ?Sized,
    B: Accessor + ?Sized,
    C: AccessorMut + ?Sized,
    Fn2: Fn(A::Elem, B::Elem) -> C::Elem,
    Cb: FnMut((A::Elem, B::Elem), usize, [usize; 3]) -> Option<(A::Elem, B::Elem)>,
{
    map_by2_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        z,
        stride_z,
        stride2offset(n, stride_z),
        f,
        clbk,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_negative_output_stride() {
        let x = [1.0, 2.0, 3.0];
        let mut y = [0.0; 3];
        unary(3, &x[..], 1, &mut y[..], -1, |v: f64| v * v);
        assert_eq!(y, [9.0, 4.0, 1.0]);
    }

    #[test]
    fn test_unary_changes_element_type() {
        let x = [1.5f64, -2.5];
        let mut y = [0i64; 2];
        unary(2, &x[..], 1, &mut y[..], 1, |v: f64| v.round() as i64);
        assert_eq!(y, [2, -3]);
    }

    #[test]
    fn test_unary_by_skips_none() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0; 4];
        let mut seen = Vec::new();
        unary_by(
            4,
            &x[..],
            1,
            &mut y[..],
            1,
            |v: f64| -v,
            |v, i, idx| {
                seen.push(idx);
                (i % 2 == 0).then_some(v)
            },
        );
        assert_eq!(y, [-1.0, 0.0, -3.0, 0.0]);
        assert_eq!(seen, vec![[0, 0], [1, 1], [2, 2], [3, 3]]);
    }

    #[test]
    fn test_mskunary() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let mask = [0u8, 1, 0, 1];
        let mut y = [9.0; 4];
        mskunary(4, &x[..], 1, &mask[..], 1, &mut y[..], 1, |v: f64| v + 1.0);
        assert_eq!(y, [2.0, 9.0, 4.0, 9.0]);
    }

    #[test]
    fn test_binary_with_offsets() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [10.0, 20.0];
        let mut z = [0.0; 3];
        binary_ndarray(2, &x[..], 2, 1, &y[..], -1, 1, &mut z[..], 1, 1, |a, b| a * b);
        assert_eq!(z, [0.0, 20.0, 30.0]);
    }

    #[test]
    fn test_map_by2_independent_offsets_and_indices() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let mut z = [0.0; 3];
        let mut visited = Vec::new();
        map_by2(
            3,
            &x[..],
            1,
            &y[..],
            -1,
            &mut z[..],
            1,
            |a: f64, b: f64| a - b,
            |(a, b), _, idx| {
                visited.push(idx);
                Some((a * 2.0, b))
            },
        );
        assert_eq!(z, [2.0 - 6.0, 4.0 - 5.0, 6.0 - 4.0]);
        assert_eq!(visited, vec![[0, 2, 0], [1, 1, 1], [2, 0, 2]]);
    }

    #[test]
    fn test_map_by2_empty_untouched() {
        let x = [1.0];
        let mut z = [7.0];
        map_by2(0, &x[..], 1, &x[..], 1, &mut z[..], 1, |a: f64, b: f64| a + b, |p, _, _| {
            Some(p)
        });
        assert_eq!(z, [7.0]);
    }
}
