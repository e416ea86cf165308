//! NaN-skipping summation.
//!
//! `nansum*` ignore NaN inputs; `nannsum*` additionally report how many
//! elements took part in the sum.

use strided_traits::{Accessor, KernelFloat};
use strided_view::StridedIndices;

use crate::acc::{fold, pairwise, Accumulate, Kbn, Kbn2, Ors};
use crate::sum::collapses;

#[inline(always)]
fn keep<F: KernelFloat>(v: F) -> Option<F> {
    (!v.is_nan()).then_some(v)
}

fn single<F: KernelFloat>(v: F) -> (F, usize) {
    if v.is_nan() {
        (F::zero(), 0)
    } else {
        (v, 1)
    }
}

fn nannsum_acc<F, A, S>(acc: S, n: usize, x: &A, stride: isize, offset: usize) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    S: Accumulate<F>,
{
    if n == 0 {
        return (F::zero(), 0);
    }
    if collapses(n, stride) {
        return single(x.get(offset));
    }
    fold(acc, n, x, stride, offset, keep)
}

/// Ordinary NaN-skipping sum and non-NaN count, explicit offset.
pub fn nannsumors_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsum_acc(Ors::new(F::zero()), n, x, stride, offset)
}

/// First-order compensated NaN-skipping sum and count, explicit offset.
pub fn nannsumkbn_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsum_acc(Kbn::new(F::zero()), n, x, stride, offset)
}

/// Second-order compensated NaN-skipping sum and count, explicit offset.
pub fn nannsumkbn2_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsum_acc(Kbn2::new(F::zero()), n, x, stride, offset)
}

/// Pairwise NaN-skipping sum and count, explicit offset.
pub fn nannsumpw_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return (F::zero(), 0);
    }
    if collapses(n, stride) {
        return single(x.get(offset));
    }
    let count = StridedIndices::new(n, stride, offset)
        .filter(|&ix| !x.get(ix).is_nan())
        .count();
    let s = pairwise(n, x, stride, offset, &|v: F| if v.is_nan() { F::zero() } else { v });
    (s, count)
}

/// Sum ignoring NaN plus the number of non-NaN elements, explicit offset.
#[inline]
pub fn nannsum_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsumkbn_ndarray(n, x, stride, offset)
}

/// Ordinary sum ignoring NaN, explicit offset.
pub fn nansumors_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsumors_ndarray(n, x, stride, offset).0
}

/// First-order compensated sum ignoring NaN, explicit offset.
pub fn nansumkbn_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsumkbn_ndarray(n, x, stride, offset).0
}

/// Second-order compensated sum ignoring NaN, explicit offset.
pub fn nansumkbn2_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nannsumkbn2_ndarray(n, x, stride, offset).0
}

/// Pairwise sum ignoring NaN, explicit offset.
pub fn nansumpw_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return single(x.get(offset)).0;
    }
    pairwise(n, x, stride, offset, &|v: F| if v.is_nan() { F::zero() } else { v })
}

/// Sum ignoring NaN, explicit offset (first-order compensated).
#[inline]
pub fn nansum_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    nansumkbn_ndarray(n, x, stride, offset)
}

base_reduction! { nansumors => nansumors_ndarray -> F }
base_reduction! { nansumkbn => nansumkbn_ndarray -> F }
base_reduction! { nansumkbn2 => nansumkbn2_ndarray -> F }
base_reduction! { nansumpw => nansumpw_ndarray -> F }
base_reduction! {
    /// Sum of a strided view ignoring NaN elements.
    ///
    /// ```rust
    /// use strided_kernel::nansum;
    ///
    /// assert_eq!(nansum(4, &[1.0, f64::NAN, 2.0, -0.5][..], 1), 2.5);
    /// ```
    nansum => nansum_ndarray -> F
}
base_reduction! { nannsumors => nannsumors_ndarray -> (F, usize) }
base_reduction! { nannsumkbn => nannsumkbn_ndarray -> (F, usize) }
base_reduction! { nannsumkbn2 => nannsumkbn2_ndarray -> (F, usize) }
base_reduction! { nannsumpw => nannsumpw_ndarray -> (F, usize) }
base_reduction! {
    /// Sum ignoring NaN together with the count of non-NaN elements.
    nannsum => nannsum_ndarray -> (F, usize)
}
