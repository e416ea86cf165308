//! Extrema of strided views.
//!
//! Plain variants propagate NaN; `nan`-prefixed variants skip it. On ties
//! between signed zeros `max` prefers `+0` and `min` prefers `-0`.

use strided_traits::{Accessor, KernelFloat};
use strided_view::{stride2offset, StridedIndices};

use crate::sum::collapses;

#[inline(always)]
fn wins_max<F: KernelFloat>(v: F, cur: F) -> bool {
    v > cur || (v == cur && v.is_positive_zero())
}

#[inline(always)]
fn wins_min<F: KernelFloat>(v: F, cur: F) -> bool {
    v < cur || (v == cur && v.is_negative_zero())
}

/// NaN-propagating extremum of `f(x[i])`.
fn extremum<F, A>(
    n: usize,
    x: &A,
    stride: isize,
    offset: usize,
    f: impl Fn(F) -> F,
    wins: fn(F, F) -> bool,
) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::nan();
    }
    if collapses(n, stride) {
        return f(x.get(offset));
    }
    let mut it = StridedIndices::new(n, stride, offset);
    let mut best = F::nan();
    if let Some(first) = it.next() {
        best = f(x.get(first));
    }
    if best.is_nan() {
        return best;
    }
    for ix in it {
        let v = f(x.get(ix));
        if v.is_nan() {
            return v;
        }
        if wins(v, best) {
            best = v;
        }
    }
    best
}

/// NaN-skipping extremum; NaN only when every element is NaN.
fn nan_extremum<F, A>(n: usize, x: &A, stride: isize, offset: usize, wins: fn(F, F) -> bool) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::nan();
    }
    if collapses(n, stride) {
        return x.get(offset);
    }
    let mut best = F::nan();
    for ix in StridedIndices::new(n, stride, offset) {
        let v = x.get(ix);
        if v.is_nan() {
            continue;
        }
        if best.is_nan() || wins(v, best) {
            best = v;
        }
    }
    best
}

/// Maximum with explicit offset; NaN if any element is NaN.
pub fn max_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    extremum(n, x, stride, offset, |v| v, wins_max)
}

/// Minimum with explicit offset; NaN if any element is NaN.
pub fn min_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    extremum(n, x, stride, offset, |v| v, wins_min)
}

/// Largest absolute value with explicit offset.
pub fn maxabs_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    extremum(n, x, stride, offset, |v: F| v.abs(), wins_max)
}

/// Smallest absolute value with explicit offset.
pub fn minabs_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    extremum(n, x, stride, offset, |v: F| v.abs(), wins_min)
}

/// Maximum ignoring NaN, explicit offset.
pub fn nanmax_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nan_extremum(n, x, stride, offset, wins_max)
}

/// Minimum ignoring NaN, explicit offset.
pub fn nanmin_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nan_extremum(n, x, stride, offset, wins_min)
}

/// `max - min` in a single pass; NaN if any element is NaN.
pub fn range_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::nan();
    }
    if collapses(n, stride) {
        let v = x.get(offset);
        return if v.is_nan() { v } else { F::zero() };
    }
    let mut lo = F::infinity();
    let mut hi = F::neg_infinity();
    for ix in StridedIndices::new(n, stride, offset) {
        let v = x.get(ix);
        if v.is_nan() {
            return v;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    hi - lo
}

/// Range ignoring NaN; NaN only when every element is NaN.
pub fn nanrange_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    let hi = nanmax_ndarray(n, x, stride, offset);
    let lo = nanmin_ndarray(n, x, stride, offset);
    hi - lo
}

/// Logical index of the first element with the largest magnitude.
///
/// `None` for an empty view. A NaN element is never selected unless every
/// element is NaN, in which case the first index is returned.
pub fn iamax_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> Option<usize>
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return None;
    }
    if collapses(n, stride) {
        return Some(0);
    }
    let mut best = 0usize;
    let mut best_abs = F::nan();
    for (i, ix) in StridedIndices::new(n, stride, offset).enumerate() {
        let a = x.get(ix).abs();
        if a > best_abs || (best_abs.is_nan() && !a.is_nan()) {
            best = i;
            best_abs = a;
        }
    }
    Some(best)
}

base_reduction! {
    /// Maximum of a strided view (NaN-propagating).
    ///
    /// ```rust
    /// use strided_kernel::max;
    ///
    /// assert_eq!(max(4, &[1.0, -2.0, 4.0, 2.0][..], 1), 4.0);
    /// assert!(max(0, &[1.0f64][..], 1).is_nan());
    /// ```
    max => max_ndarray -> F
}
base_reduction! {
    /// Minimum of a strided view (NaN-propagating).
    min => min_ndarray -> F
}
base_reduction! {
    /// Largest absolute value of a strided view.
    maxabs => maxabs_ndarray -> F
}
base_reduction! {
    /// Smallest absolute value of a strided view.
    minabs => minabs_ndarray -> F
}
base_reduction! {
    /// Maximum ignoring NaN.
    nanmax => nanmax_ndarray -> F
}
base_reduction! {
    /// Minimum ignoring NaN.
    nanmin => nanmin_ndarray -> F
}
base_reduction! {
    /// `max - min` of a strided view.
    range => range_ndarray -> F
}
base_reduction! {
    /// `max - min` ignoring NaN.
    nanrange => nanrange_ndarray -> F
}

/// Logical index of the first element of maximal magnitude.
pub fn iamax<F, A>(n: usize, x: &A, stride: isize) -> Option<usize>
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    iamax_ndarray(n, x, stride, stride2offset(n, stride))
}
