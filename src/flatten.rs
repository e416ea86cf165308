//! Flatten nested arrays into strided 1-d buffers.
//!
//! The fixed-rank helpers (`flatten2d` .. `flatten5d`) take any nesting of
//! `AsRef<[_]>` (`Vec<Vec<T>>`, `&[[T; 4]]`, ...). The rank-generic
//! [`flatten`] takes any [`NestedArray`] and a shape slice whose length is
//! the nesting depth.
//!
//! `shape` may describe a leading sub-block of the nested array; a ragged
//! input that is too short for `shape` panics on the out-of-range index.
//! An empty shape (0-d) produces no elements.
//!
//! With `colexicographic == false` elements are emitted in row-major
//! order (last index fastest); with `true` in column-major order (first
//! index fastest).

use num_complex::Complex;
use smallvec::SmallVec;
use strided_traits::AccessorMut;
use strided_view::StridedIndices;

type Index = SmallVec<[usize; 8]>;

/// Step the odometer `ix` within `shape`. Returns `false` once every
/// index has been visited. The fastest axis is 0 for colex, the last
/// otherwise.
fn advance(shape: &[usize], colex: bool, ix: &mut [usize]) -> bool {
    let rank = shape.len();
    for k in 0..rank {
        let axis = if colex { k } else { rank - 1 - k };
        ix[axis] += 1;
        if ix[axis] < shape[axis] {
            return true;
        }
        ix[axis] = 0;
    }
    false
}

/// Visit every multi-index of `shape` in row-major or column-major order.
fn walk<const D: usize>(shape: [usize; D], colex: bool, mut visit: impl FnMut([usize; D])) {
    if D == 0 || shape.contains(&0) {
        return;
    }
    let mut ix = [0usize; D];
    loop {
        visit(ix);
        if !advance(&shape, colex, &mut ix) {
            return;
        }
    }
}

/// [`walk`] for a shape whose rank is only known at run time.
fn walk_dyn(shape: &[usize], colex: bool, mut visit: impl FnMut(&[usize])) {
    if shape.is_empty() || shape.contains(&0) {
        return;
    }
    let mut ix: Index = SmallVec::from_elem(0, shape.len());
    loop {
        visit(&ix[..]);
        if !advance(shape, colex, &mut ix[..]) {
            return;
        }
    }
}

fn collect<T, U, const D: usize>(
    shape: [usize; D],
    colex: bool,
    get: impl Fn([usize; D]) -> T,
    mut f: impl FnMut(T, [usize; D]) -> U,
) -> Vec<U> {
    let mut out = Vec::with_capacity(shape.iter().product());
    walk(shape, colex, |ix| out.push(f(get(ix), ix)));
    out
}

fn write<'o, T, U, B, const D: usize>(
    shape: [usize; D],
    colex: bool,
    get: impl Fn([usize; D]) -> T,
    mut f: impl FnMut(T, [usize; D]) -> U,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    B: AccessorMut<Elem = U> + ?Sized,
{
    let mut dst = StridedIndices::new(shape.iter().product(), stride, offset);
    walk(shape, colex, |ix| {
        if let Some(j) = dst.next() {
            out.set(j, f(get(ix), ix));
        }
    });
    out
}

// ---------------------------------------------------------------------------
// 2-d
// ---------------------------------------------------------------------------

/// Flatten the leading `shape` block of a nested 2-d array.
///
/// ```rust
/// use strided_base::flatten2d;
///
/// let x = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
/// assert_eq!(flatten2d(&x, [2, 2], false), vec![1, 2, 5, 6]);
/// assert_eq!(flatten2d(&x, [2, 2], true), vec![1, 5, 2, 6]);
/// ```
pub fn flatten2d<T, R>(x: &[R], shape: [usize; 2], colexicographic: bool) -> Vec<T>
where
    T: Copy,
    R: AsRef<[T]>,
{
    flatten2d_by(x, shape, colexicographic, |v, _| v)
}

/// Flatten a nested 2-d array into a strided view of `out`.
pub fn flatten2d_into<'o, T, R, B>(
    x: &[R],
    shape: [usize; 2],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    T: Copy,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = T> + ?Sized,
{
    flatten2d_by_into(x, shape, colexicographic, out, stride, offset, |v, _| v)
}

/// Flatten a nested 2-d array, mapping each element with `f(value, [i, j])`.
pub fn flatten2d_by<T, U, R>(
    x: &[R],
    shape: [usize; 2],
    colexicographic: bool,
    f: impl FnMut(T, [usize; 2]) -> U,
) -> Vec<U>
where
    T: Copy,
    R: AsRef<[T]>,
{
    collect(shape, colexicographic, |[i, j]| x[i].as_ref()[j], f)
}

#[allow(clippy::too_many_arguments)]
pub fn flatten2d_by_into<'o, T, U, R, B>(
    x: &[R],
    shape: [usize; 2],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
    f: impl FnMut(T, [usize; 2]) -> U,
) -> &'o mut B
where
    T: Copy,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = U> + ?Sized,
{
    write(shape, colexicographic, |[i, j]| x[i].as_ref()[j], f, out, stride, offset)
}

// ---------------------------------------------------------------------------
// 3-d
// ---------------------------------------------------------------------------

pub fn flatten3d<T, P, R>(x: &[P], shape: [usize; 3], colexicographic: bool) -> Vec<T>
where
    T: Copy,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
{
    flatten3d_by(x, shape, colexicographic, |v, _| v)
}

pub fn flatten3d_into<'o, T, P, R, B>(
    x: &[P],
    shape: [usize; 3],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    T: Copy,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = T> + ?Sized,
{
    flatten3d_by_into(x, shape, colexicographic, out, stride, offset, |v, _| v)
}

pub fn flatten3d_by<T, U, P, R>(
    x: &[P],
    shape: [usize; 3],
    colexicographic: bool,
    f: impl FnMut(T, [usize; 3]) -> U,
) -> Vec<U>
where
    T: Copy,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
{
    collect(
        shape,
        colexicographic,
        |[i, j, k]| x[i].as_ref()[j].as_ref()[k],
        f,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn flatten3d_by_into<'o, T, U, P, R, B>(
    x: &[P],
    shape: [usize; 3],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
    f: impl FnMut(T, [usize; 3]) -> U,
) -> &'o mut B
where
    T: Copy,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = U> + ?Sized,
{
    write(
        shape,
        colexicographic,
        |[i, j, k]| x[i].as_ref()[j].as_ref()[k],
        f,
        out,
        stride,
        offset,
    )
}

// ---------------------------------------------------------------------------
// 4-d
// ---------------------------------------------------------------------------

pub fn flatten4d<T, Q, P, R>(x: &[Q], shape: [usize; 4], colexicographic: bool) -> Vec<T>
where
    T: Copy,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
{
    flatten4d_by(x, shape, colexicographic, |v, _| v)
}

pub fn flatten4d_into<'o, T, Q, P, R, B>(
    x: &[Q],
    shape: [usize; 4],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    T: Copy,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = T> + ?Sized,
{
    flatten4d_by_into(x, shape, colexicographic, out, stride, offset, |v, _| v)
}

pub fn flatten4d_by<T, U, Q, P, R>(
    x: &[Q],
    shape: [usize; 4],
    colexicographic: bool,
    f: impl FnMut(T, [usize; 4]) -> U,
) -> Vec<U>
where
    T: Copy,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
{
    collect(
        shape,
        colexicographic,
        |[i, j, k, l]| x[i].as_ref()[j].as_ref()[k].as_ref()[l],
        f,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn flatten4d_by_into<'o, T, U, Q, P, R, B>(
    x: &[Q],
    shape: [usize; 4],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
    f: impl FnMut(T, [usize; 4]) -> U,
) -> &'o mut B
where
    T: Copy,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = U> + ?Sized,
{
    write(
        shape,
        colexicographic,
        |[i, j, k, l]| x[i].as_ref()[j].as_ref()[k].as_ref()[l],
        f,
        out,
        stride,
        offset,
    )
}

// ---------------------------------------------------------------------------
// 5-d
// ---------------------------------------------------------------------------

pub fn flatten5d<T, S, Q, P, R>(x: &[S], shape: [usize; 5], colexicographic: bool) -> Vec<T>
where
    T: Copy,
    S: AsRef<[Q]>,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
{
    flatten5d_by(x, shape, colexicographic, |v, _| v)
}

pub fn flatten5d_into<'o, T, S, Q, P, R, B>(
    x: &[S],
    shape: [usize; 5],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    T: Copy,
    S: AsRef<[Q]>,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = T> + ?Sized,
{
    flatten5d_by_into(x, shape, colexicographic, out, stride, offset, |v, _| v)
}

pub fn flatten5d_by<T, U, S, Q, P, R>(
    x: &[S],
    shape: [usize; 5],
    colexicographic: bool,
    f: impl FnMut(T, [usize; 5]) -> U,
) -> Vec<U>
where
    T: Copy,
    S: AsRef<[Q]>,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
{
    collect(
        shape,
        colexicographic,
        |[i, j, k, l, m]| x[i].as_ref()[j].as_ref()[k].as_ref()[l].as_ref()[m],
        f,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn flatten5d_by_into<'o, T, U, S, Q, P, R, B>(
    x: &[S],
    shape: [usize; 5],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
    f: impl FnMut(T, [usize; 5]) -> U,
) -> &'o mut B
where
    T: Copy,
    S: AsRef<[Q]>,
    Q: AsRef<[P]>,
    P: AsRef<[R]>,
    R: AsRef<[T]>,
    B: AccessorMut<Elem = U> + ?Sized,
{
    write(
        shape,
        colexicographic,
        |[i, j, k, l, m]| x[i].as_ref()[j].as_ref()[k].as_ref()[l].as_ref()[m],
        f,
        out,
        stride,
        offset,
    )
}

// ---------------------------------------------------------------------------
// Any rank
// ---------------------------------------------------------------------------

/// A nested array whose leaves are `Elem` values.
///
/// Implemented for `Vec`, slices, arrays and references of nested arrays,
/// and for scalar leaves (floats, integers, `bool`, complex).
pub trait NestedArray {
    type Elem: Copy;

    /// Leaf at the multi-index `ix`; `ix.len()` must equal the nesting
    /// depth below `self`.
    fn at(&self, ix: &[usize]) -> Self::Elem;
}

macro_rules! leaf {
    ($($t:ty),* $(,)?) => {$(
        impl NestedArray for $t {
            type Elem = $t;

            #[inline]
            fn at(&self, ix: &[usize]) -> $t {
                assert!(ix.is_empty(), "index has more dimensions than the array");
                *self
            }
        }
    )*};
}

leaf!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

impl<F: Copy> NestedArray for Complex<F> {
    type Elem = Complex<F>;

    #[inline]
    fn at(&self, ix: &[usize]) -> Complex<F> {
        assert!(ix.is_empty(), "index has more dimensions than the array");
        *self
    }
}

impl<R: NestedArray> NestedArray for [R] {
    type Elem = R::Elem;

    #[inline]
    fn at(&self, ix: &[usize]) -> R::Elem {
        self[ix[0]].at(&ix[1..])
    }
}

impl<R: NestedArray, const N: usize> NestedArray for [R; N] {
    type Elem = R::Elem;

    #[inline]
    fn at(&self, ix: &[usize]) -> R::Elem {
        self[..].at(ix)
    }
}

impl<R: NestedArray> NestedArray for Vec<R> {
    type Elem = R::Elem;

    #[inline]
    fn at(&self, ix: &[usize]) -> R::Elem {
        self[..].at(ix)
    }
}

impl<R: NestedArray + ?Sized> NestedArray for &R {
    type Elem = R::Elem;

    #[inline]
    fn at(&self, ix: &[usize]) -> R::Elem {
        (**self).at(ix)
    }
}

/// Flatten the leading `shape` block of a nested array of any rank.
///
/// ```rust
/// use strided_base::flatten;
///
/// let x = vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]];
/// assert_eq!(flatten(&x, &[2, 2, 1], false), vec![1, 3, 5, 7]);
/// assert_eq!(flatten(&x, &[2, 1, 2], true), vec![1, 5, 2, 6]);
/// assert!(flatten(&x, &[], false).is_empty());
/// ```
pub fn flatten<X>(x: &X, shape: &[usize], colexicographic: bool) -> Vec<X::Elem>
where
    X: NestedArray + ?Sized,
{
    flatten_by(x, shape, colexicographic, |v, _| v)
}

/// Flatten a nested array of any rank into a strided view of `out`.
pub fn flatten_into<'o, X, B>(
    x: &X,
    shape: &[usize],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    X: NestedArray + ?Sized,
    B: AccessorMut<Elem = X::Elem> + ?Sized,
{
    flatten_by_into(x, shape, colexicographic, out, stride, offset, |v, _| v)
}

/// Flatten a nested array of any rank, mapping each element with
/// `f(value, indices)`.
pub fn flatten_by<X, U>(
    x: &X,
    shape: &[usize],
    colexicographic: bool,
    mut f: impl FnMut(X::Elem, &[usize]) -> U,
) -> Vec<U>
where
    X: NestedArray + ?Sized,
{
    let len = if shape.is_empty() { 0 } else { shape.iter().product() };
    let mut out = Vec::with_capacity(len);
    walk_dyn(shape, colexicographic, |ix| out.push(f(x.at(ix), ix)));
    out
}

#[allow(clippy::too_many_arguments)]
pub fn flatten_by_into<'o, X, U, B>(
    x: &X,
    shape: &[usize],
    colexicographic: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
    mut f: impl FnMut(X::Elem, &[usize]) -> U,
) -> &'o mut B
where
    X: NestedArray + ?Sized,
    B: AccessorMut<Elem = U> + ?Sized,
{
    let len = if shape.is_empty() { 0 } else { shape.iter().product() };
    let mut dst = StridedIndices::new(len, stride, offset);
    walk_dyn(shape, colexicographic, |ix| {
        if let Some(j) = dst.next() {
            out.set(j, f(x.at(ix), ix));
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Vec<Vec<Vec<i32>>> {
        (0..2)
            .map(|i| (0..3).map(|j| (0..4).map(|k| 100 * i + 10 * j + k).collect()).collect())
            .collect()
    }

    fn grid4() -> Vec<Vec<i32>> {
        (0..4).map(|i| (1..=4).map(|j| 4 * i + j).collect()).collect()
    }

    #[test]
    fn test_flatten_any_rank_zero_and_one_d() {
        let x = vec![1, 2, 3, 4];
        assert!(flatten(&x, &[], false).is_empty());
        assert!(flatten(&x, &[], true).is_empty());
        for colex in [false, true] {
            assert!(flatten(&x, &[0], colex).is_empty());
            assert_eq!(flatten(&x, &[2], colex), vec![1, 2]);
            assert_eq!(flatten(&x, &[4], colex), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_flatten_any_rank_two_d() {
        let x = grid4();
        assert!(flatten(&x, &[0, 1], false).is_empty());
        assert_eq!(flatten(&x, &[1, 1], false), vec![1]);
        assert_eq!(flatten(&x, &[2, 3], false), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(flatten(&x, &[2, 3], true), vec![1, 5, 2, 6, 3, 7]);
        assert_eq!(flatten(&x, &[3, 3], true), vec![1, 5, 9, 2, 6, 10, 3, 7, 11]);
        assert_eq!(flatten(&x, &[4, 4], false), flatten2d(&x, [4, 4], false));
        assert_eq!(flatten(&x, &[4, 2], true), flatten2d(&x, [4, 2], true));
    }

    #[test]
    fn test_flatten_any_rank_arrays_and_into() {
        let x = [[[1.0, 2.0], [3.0, 4.0]], [[5.0, 6.0], [7.0, 8.0]]];
        let mut out = [0.0; 8];
        flatten_into(&x, &[2, 2, 2], true, &mut out[..], -1, 7);
        assert_eq!(out, [8.0, 4.0, 6.0, 2.0, 7.0, 3.0, 5.0, 1.0]);

        let tagged = flatten_by(&x[..], &[1, 2, 1], false, |v, ix| (v, ix.to_vec()));
        assert_eq!(tagged, vec![(1.0, vec![0, 0, 0]), (3.0, vec![0, 1, 0])]);

        let mut sums = vec![0usize; 4];
        flatten_by_into(&x, &[2, 2, 1], false, &mut sums, 1, 0, |_, ix| ix.iter().sum::<usize>());
        assert_eq!(sums, vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_flatten5d() {
        let x = vec![
            vec![vec![vec![vec![1, 2], vec![3, 4]]]],
            vec![vec![vec![vec![5, 6], vec![7, 8]]]],
        ];
        assert_eq!(flatten5d(&x, [2, 1, 1, 2, 2], false), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(flatten5d(&x, [2, 1, 1, 2, 2], true), vec![1, 5, 3, 7, 2, 6, 4, 8]);
        assert_eq!(
            flatten5d_by(&x, [2, 1, 1, 1, 1], false, |v, [i, ..]| v * 10 + i as i32),
            vec![10, 51]
        );
        let mut out = [0; 3];
        flatten5d_into(&x, [1, 1, 1, 1, 2], false, &mut out[..], 2, 0);
        assert_eq!(out, [1, 0, 2]);
        assert_eq!(
            flatten5d(&x, [2, 1, 1, 2, 2], true),
            flatten(&x, &[2, 1, 1, 2, 2], true)
        );
    }

    #[test]
    fn test_walk_orders() {
        let mut row = Vec::new();
        walk([2, 3], false, |ix| row.push(ix));
        assert_eq!(row, vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]);
        let mut col = Vec::new();
        walk([2, 3], true, |ix| col.push(ix));
        assert_eq!(col, vec![[0, 0], [1, 0], [0, 1], [1, 1], [0, 2], [1, 2]]);
        let mut none = 0;
        walk([3, 0, 2], false, |_| none += 1);
        assert_eq!(none, 0);
    }

    #[test]
    fn test_flatten2d_into_negative_stride() {
        let x = [[1.0, 2.0], [3.0, 4.0]];
        let mut out = [0.0; 7];
        flatten2d_into(&x, [2, 2], false, &mut out[..], -2, 6);
        assert_eq!(out, [4.0, 0.0, 3.0, 0.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_flatten3d_sub_block() {
        let x = cube();
        assert_eq!(flatten3d(&x, [2, 1, 2], false), vec![0, 1, 100, 101]);
        assert_eq!(flatten3d(&x, [2, 1, 2], true), vec![0, 100, 1, 101]);
        assert_eq!(flatten3d(&x, [2, 3, 4], false).len(), 24);
    }

    #[test]
    fn test_flatten_by_receives_indices() {
        let x = cube();
        let v = flatten3d_by(&x, [1, 2, 2], true, |v, [i, j, k]| (v, i + j + k));
        assert_eq!(v, vec![(0, 0), (10, 1), (1, 1), (11, 2)]);

        let mut out = vec![0u8; 4];
        flatten2d_by_into(&[[1, 2], [3, 4]], [2, 2], false, &mut out, 1, 0, |v: i32, _| v as u8 * 2);
        assert_eq!(out, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_flatten4d() {
        let x: Vec<Vec<Vec<Vec<usize>>>> = (0..2)
            .map(|a| {
                (0..2)
                    .map(|b| (0..2).map(|c| (0..2).map(|d| 8 * a + 4 * b + 2 * c + d).collect()).collect())
                    .collect()
            })
            .collect();
        assert_eq!(flatten4d(&x, [2, 2, 2, 2], false), (0..16).collect::<Vec<_>>());
        let col = flatten4d(&x, [2, 2, 2, 2], true);
        assert_eq!(&col[..4], &[0, 8, 4, 12]);
    }

    #[test]
    #[should_panic]
    fn test_ragged_input_panics() {
        let x = vec![vec![1, 2], vec![3]];
        flatten2d(&x, [2, 2], false);
    }
}
