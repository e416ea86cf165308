//! Accumulator state shared by the summation kernels.
//!
//! Each accumulator is a handful of locals folded one element at a time;
//! `total()` can be read after every push, which is what the cumulative
//! kernels need.

use strided_traits::{Accessor, KernelFloat};
use strided_view::StridedIndices;

/// Below this many elements the pairwise kernel falls back to a plain loop
/// (unrolled by 8).
pub(crate) const PAIRWISE_BLOCKSIZE: usize = 128;

pub(crate) trait Accumulate<F> {
    fn push(&mut self, v: F);
    fn total(&self) -> F;
}

/// Ordinary recursive summation.
pub(crate) struct Ors<F> {
    sum: F,
}

impl<F: KernelFloat> Ors<F> {
    pub(crate) fn new(init: F) -> Self {
        Self { sum: init }
    }
}

impl<F: KernelFloat> Accumulate<F> for Ors<F> {
    #[inline(always)]
    fn push(&mut self, v: F) {
        self.sum = self.sum + v;
    }

    #[inline(always)]
    fn total(&self) -> F {
        self.sum
    }
}

/// First-order Kahan-Babuska (Neumaier) summation.
pub(crate) struct Kbn<F> {
    sum: F,
    c: F,
}

impl<F: KernelFloat> Kbn<F> {
    pub(crate) fn new(init: F) -> Self {
        Self {
            sum: init,
            c: F::zero(),
        }
    }
}

impl<F: KernelFloat> Accumulate<F> for Kbn<F> {
    #[inline(always)]
    fn push(&mut self, v: F) {
        let t = self.sum + v;
        if self.sum.abs() >= v.abs() {
            self.c = self.c + ((self.sum - t) + v);
        } else {
            self.c = self.c + ((v - t) + self.sum);
        }
        self.sum = t;
    }

    #[inline(always)]
    fn total(&self) -> F {
        self.sum + self.c
    }
}

/// Second-order iterative Kahan-Babuska summation (Klein).
///
/// `cs` collects the first-order error terms, `ccs` the error of `cs`.
pub(crate) struct Kbn2<F> {
    sum: F,
    cs: F,
    ccs: F,
}

impl<F: KernelFloat> Kbn2<F> {
    pub(crate) fn new(init: F) -> Self {
        Self {
            sum: init,
            cs: F::zero(),
            ccs: F::zero(),
        }
    }
}

impl<F: KernelFloat> Accumulate<F> for Kbn2<F> {
    #[inline(always)]
    fn push(&mut self, v: F) {
        let t = self.sum + v;
        let c = if self.sum.abs() >= v.abs() {
            (self.sum - t) + v
        } else {
            (v - t) + self.sum
        };
        self.sum = t;

        let t = self.cs + c;
        let cc = if self.cs.abs() >= c.abs() {
            (self.cs - t) + c
        } else {
            (c - t) + self.cs
        };
        self.cs = t;
        self.ccs = self.ccs + cc;
    }

    #[inline(always)]
    fn total(&self) -> F {
        self.sum + (self.cs + self.ccs)
    }
}

/// Fold a strided view through `acc`, skipping elements for which `f`
/// returns `None`. Returns the total and the number of folded elements.
pub(crate) fn fold<F, A, S>(
    mut acc: S,
    n: usize,
    x: &A,
    stride: isize,
    offset: usize,
    mut f: impl FnMut(F) -> Option<F>,
) -> (F, usize)
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    S: Accumulate<F>,
{
    let mut count = 0usize;
    for ix in StridedIndices::new(n, stride, offset) {
        if let Some(v) = f(x.get(ix)) {
            acc.push(v);
            count += 1;
        }
    }
    (acc.total(), count)
}

/// Pairwise (cascade) summation of `f(x[i])`.
///
/// Blocks of at most [`PAIRWISE_BLOCKSIZE`] are summed with eight
/// independent partial sums; larger views are split in half (rounded down
/// to a multiple of 8) and summed recursively, giving `O(log n)` error growth.
pub(crate) fn pairwise<F, A, M>(n: usize, x: &A, stride: isize, offset: usize, f: &M) -> F
where
    F: KernelFloat,
    A: Accessor<Elem = F> + ?Sized,
    M: Fn(F) -> F,
{
    if n < 8 {
        let mut s = F::zero();
        for ix in StridedIndices::new(n, stride, offset) {
            s = s + f(x.get(ix));
        }
        return s;
    }
    if n <= PAIRWISE_BLOCKSIZE {
        let mut acc = [F::zero(); 8];
        let m = n - n % 8;
        let mut ix = offset as isize;
        let mut i = 0;
        while i < m {
            for slot in acc.iter_mut() {
                *slot = *slot + f(x.get(ix as usize));
                ix += stride;
            }
            i += 8;
        }
        let mut s = ((acc[0] + acc[1]) + (acc[2] + acc[3])) + ((acc[4] + acc[5]) + (acc[6] + acc[7]));
        for ix in StridedIndices::new(n - m, stride, ix as usize) {
            s = s + f(x.get(ix));
        }
        return s;
    }
    let half = n / 2;
    let half = half - half % 8;
    let second = (offset as isize + half as isize * stride) as usize;
    pairwise(half, x, stride, offset, f) + pairwise(n - half, x, stride, second, f)
}
