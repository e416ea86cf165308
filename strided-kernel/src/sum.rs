//! Strided summation: ordinary, pairwise and compensated strategies.

use strided_traits::{Accessor, KernelFloat};
use strided_view::stride2offset;

use crate::acc::{fold, pairwise, Kbn, Kbn2, Ors};

/// Summation strategy, selected once per call by [`sum_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Summation {
    /// Ordinary recursive summation.
    Ordinary,
    /// Pairwise (cascade) summation.
    Pairwise,
    /// First-order Kahan-Babuska (Neumaier) summation.
    Kbn,
    /// Second-order iterative Kahan-Babuska summation.
    #[default]
    Kbn2,
}

impl Summation {
    /// Short tag used in kernel names (`ors`, `pw`, `kbn`, `kbn2`).
    pub fn as_str(self) -> &'static str {
        match self {
            Summation::Ordinary => "ors",
            Summation::Pairwise => "pw",
            Summation::Kbn => "kbn",
            Summation::Kbn2 => "kbn2",
        }
    }
}

/// Single-element views (`n == 1` or `stride == 0`) reduce to the addressed element.
#[inline(always)]
pub(crate) fn collapses(n: usize, stride: isize) -> bool {
    n == 1 || stride == 0
}

/// Ordinary left-to-right sum with explicit offset.
pub fn sumors_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return x.get(offset);
    }
    fold(Ors::new(F::zero()), n, x, stride, offset, Some).0
}

/// Pairwise sum with explicit offset.
pub fn sumpw_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return x.get(offset);
    }
    pairwise(n, x, stride, offset, &|v| v)
}

/// First-order compensated (Kahan-Babuska) sum with explicit offset.
pub fn sumkbn_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return x.get(offset);
    }
    fold(Kbn::new(F::zero()), n, x, stride, offset, Some).0
}

/// Second-order compensated sum of a strided view with explicit offset.
///
/// ```rust
/// use strided_kernel::sumkbn2_ndarray;
///
/// let x = [9.0, 1e16, 9.0, 1.0, 9.0, -1e16];
/// // every other element, starting at index 1
/// assert_eq!(sumkbn2_ndarray(3, &x[..], 2, 1), 1.0);
/// ```
pub fn sumkbn2_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return x.get(offset);
    }
    fold(Kbn2::new(F::zero()), n, x, stride, offset, Some).0
}

/// Default-strategy sum with explicit offset (second-order Kahan-Babuska).
#[inline]
pub fn sum_ndarray<F, A>(n: usize, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    sumkbn2_ndarray(n, x, stride, offset)
}

/// Sum with a run-time selected strategy and explicit offset.
pub fn sum_with_ndarray<F, A>(
    strategy: Summation,
    n: usize,
    x: &A,
    stride: isize,
    offset: usize,
) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    tracing::trace!(strategy = strategy.as_str(), n, stride, offset, "sum");
    match strategy {
        Summation::Ordinary => sumors_ndarray(n, x, stride, offset),
        Summation::Pairwise => sumpw_ndarray(n, x, stride, offset),
        Summation::Kbn => sumkbn_ndarray(n, x, stride, offset),
        Summation::Kbn2 => sumkbn2_ndarray(n, x, stride, offset),
    }
}

/// Sum with a run-time selected strategy.
#[inline]
pub fn sum_with<F, A>(strategy: Summation, n: usize, x: &A, stride: isize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    sum_with_ndarray(strategy, n, x, stride, stride2offset(n, stride))
}

base_reduction! {
    /// Ordinary recursive sum of a strided view.
    sumors => sumors_ndarray -> F
}
base_reduction! {
    /// Pairwise sum of a strided view.
    sumpw => sumpw_ndarray -> F
}
base_reduction! {
    /// First-order compensated sum of a strided view.
    sumkbn => sumkbn_ndarray -> F
}
base_reduction! {
    /// Second-order compensated sum of a strided view.
    ///
    /// ```rust
    /// use strided_kernel::sumkbn2;
    ///
    /// assert_eq!(sumkbn2(3, &[1e16, 1.0, -1e16][..], 1), 1.0);
    /// ```
    sumkbn2 => sumkbn2_ndarray -> F
}
base_reduction! {
    /// Sum of a strided view using the default strategy ([`Summation::Kbn2`]).
    sum => sum_ndarray -> F
}

// ---------------------------------------------------------------------------
// Sum after adding a constant: sum(alpha + x[i])
// ---------------------------------------------------------------------------

/// Ordinary sum of `alpha + x[i]` with explicit offset.
pub fn apxsumors_ndarray<F, A>(n: usize, alpha: F, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return alpha + x.get(offset);
    }
    fold(Ors::new(F::zero()), n, x, stride, offset, |v| Some(alpha + v)).0
}

/// Pairwise sum of `alpha + x[i]` with explicit offset.
pub fn apxsumpw_ndarray<F, A>(n: usize, alpha: F, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return alpha + x.get(offset);
    }
    pairwise(n, x, stride, offset, &|v| alpha + v)
}

/// First-order compensated sum of `alpha + x[i]` with explicit offset.
pub fn apxsumkbn_ndarray<F, A>(n: usize, alpha: F, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return alpha + x.get(offset);
    }
    fold(Kbn::new(F::zero()), n, x, stride, offset, |v| Some(alpha + v)).0
}

/// Second-order compensated sum of `alpha + x[i]` with explicit offset.
pub fn apxsumkbn2_ndarray<F, A>(n: usize, alpha: F, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    if n == 0 {
        return F::zero();
    }
    if collapses(n, stride) {
        return alpha + x.get(offset);
    }
    fold(Kbn2::new(F::zero()), n, x, stride, offset, |v| Some(alpha + v)).0
}

/// Sum of `alpha + x[i]` with explicit offset, default strategy.
#[inline]
pub fn apxsum_ndarray<F, A>(n: usize, alpha: F, x: &A, stride: isize, offset: usize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    apxsumkbn2_ndarray(n, alpha, x, stride, offset)
}

/// Ordinary sum of `alpha + x[i]`.
#[inline]
pub fn apxsumors<F, A>(n: usize, alpha: F, x: &A, stride: isize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    apxsumors_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// Pairwise sum of `alpha + x[i]`.
#[inline]
pub fn apxsumpw<F, A>(n: usize, alpha: F, x: &A, stride: isize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    apxsumpw_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// First-order compensated sum of `alpha + x[i]`.
#[inline]
pub fn apxsumkbn<F, A>(n: usize, alpha: F, x: &A, stride: isize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    apxsumkbn_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// Second-order compensated sum of `alpha + x[i]`.
#[inline]
pub fn apxsumkbn2<F, A>(n: usize, alpha: F, x: &A, stride: isize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    apxsumkbn2_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// Sum of `alpha + x[i]` using the default strategy.
#[inline]
pub fn apxsum<F, A>(n: usize, alpha: F, x: &A, stride: isize) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
{
    apxsumkbn2(n, alpha, x, stride)
}
