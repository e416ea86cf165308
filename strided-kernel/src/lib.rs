//! Strided 1-d kernels: reductions and transforms over `(N, buffer, stride, offset)`.
//!
//! Every kernel comes as a pair:
//!
//! - `foo(n, x, stride, ...)`: the base variant. The starting offset is
//!   derived with [`stride2offset`], so a negative stride walks the buffer
//!   from its far end.
//! - `foo_ndarray(n, x, stride, offset, ...)`: the caller supplies the
//!   starting offset explicitly.
//!
//! Buffers are anything implementing [`Accessor`] / [`AccessorMut`]:
//! slices, arrays, `Vec`s, interleaved complex storage or closure-backed
//! accessors.
//!
//! # Reductions
//!
//! - Sums: [`sum`], [`sumors`], [`sumpw`], [`sumkbn`], [`sumkbn2`],
//!   [`sum_with`] (run-time [`Summation`] strategy), [`apxsum`]
//! - NaN-skipping sums: [`nansum`], [`nannsum`] and strategy variants
//! - Cumulative sums: [`cusum`], [`cusumors`], [`cusumkbn`], [`cusumkbn2`]
//! - Mixed precision: [`dssum`], [`sdssum`], [`dsnansum`], [`sdsnansum`]
//! - Norms: [`nrm2`], [`asum`], [`nanasum`]
//! - Extrema: [`max`], [`min`], [`nanmax`], [`nanmin`], [`maxabs`],
//!   [`minabs`], [`range`], [`nanrange`], [`iamax`]
//! - Sorting: [`sortins`], [`sorthp`], [`sortsh`], [`sort2ins`], [`sort2hp`],
//!   [`sort2sh`]
//!
//! # Transforms
//!
//! [`rev`], [`unary`], [`unary_by`], [`mskunary`], [`binary`], [`map_by2`],
//! [`swap`], [`copy`], [`fill`], [`fill_by`], [`apx`], the BLAS level-1
//! updates [`axpy`], [`scal`], [`rot`], [`rotm`] and the n-d [`swap_along`].
//!
//! # Conventions
//!
//! - `n == 0` returns the neutral element (`0` for sums and norms, NaN for
//!   extrema, `None` for [`iamax`]) and leaves output buffers untouched.
//! - In reductions a zero stride addresses a single element: the result
//!   is that element (or its magnitude for norms). Transform inputs with a
//!   zero stride broadcast the addressed element.
//! - Out-of-range indices are a caller error and panic via the accessor's
//!   bounds check.
//!
//! # Example
//!
//! ```rust
//! use strided_kernel::{nrm2, rev, sum};
//!
//! let mut x = [1.0, -2.0, -4.0, 5.0, 0.0, 3.0];
//! assert_eq!(sum(6, &x[..], 1), 3.0);
//! assert!((nrm2(6, &x[..], 1) - 55f64.sqrt()).abs() < 1e-12);
//!
//! rev(3, &mut x[..], 2);
//! assert_eq!(x, [0.0, -2.0, -4.0, 5.0, 1.0, 3.0]);
//! ```

/// Base variant of a reduction: derive the offset from the stride and
/// forward to the `_ndarray` kernel.
macro_rules! base_reduction {
    ($(#[$meta:meta])* $name:ident => $ndarray:ident -> $ret:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<F, A>(n: usize, x: &A, stride: isize) -> $ret
        where
            F: strided_traits::KernelFloat,
            A: strided_traits::Accessor<Elem = F> + ?Sized,
        {
            $ndarray(n, x, stride, strided_view::stride2offset(n, stride))
        }
    };
}

mod acc;

pub mod apx;
pub mod cusum;
pub mod extrema;
pub mod level1;
pub mod map;
pub mod mixed;
pub mod nansum;
pub mod norm;
pub mod rev;
pub mod sort;
pub mod sum;
pub mod swap;

pub use strided_traits::{Accessor, AccessorMut, InterleavedComplex, KernelFloat};
pub use strided_view::{stride2offset, Result, StridedArray, StridedError, StridedViewMut};

pub use apx::{apx, apx_ndarray};
pub use cusum::{
    cusum, cusum_ndarray, cusumkbn, cusumkbn2, cusumkbn2_ndarray, cusumkbn_ndarray, cusumors,
    cusumors_ndarray,
};
pub use extrema::{
    iamax, iamax_ndarray, max, max_ndarray, maxabs, maxabs_ndarray, min, min_ndarray, minabs,
    minabs_ndarray, nanmax, nanmax_ndarray, nanmin, nanmin_ndarray, nanrange, nanrange_ndarray,
    range, range_ndarray,
};
pub use level1::{
    axpy, axpy_ndarray, rot, rot_ndarray, rotm, rotm_ndarray, scal, scal_ndarray,
};
pub use map::{
    binary, binary_ndarray, map_by2, map_by2_ndarray, mskunary, mskunary_ndarray, unary,
    unary_by, unary_by_ndarray, unary_ndarray,
};
pub use mixed::{
    dsnannsum, dsnannsum_ndarray, dsnansum, dsnansum_ndarray, dssum, dssum_ndarray, sdsnansum,
    sdsnansum_ndarray, sdssum, sdssum_ndarray,
};
pub use nansum::{
    nannsum, nannsum_ndarray, nannsumkbn, nannsumkbn2, nannsumkbn2_ndarray, nannsumkbn_ndarray,
    nannsumors, nannsumors_ndarray, nannsumpw, nannsumpw_ndarray, nansum, nansum_ndarray,
    nansumkbn, nansumkbn2, nansumkbn2_ndarray, nansumkbn_ndarray, nansumors, nansumors_ndarray,
    nansumpw, nansumpw_ndarray,
};
pub use norm::{asum, asum_ndarray, nanasum, nanasum_ndarray, nrm2, nrm2_ndarray};
pub use rev::{rev, rev_ndarray};
pub use sort::{
    sort2hp, sort2hp_ndarray, sort2ins, sort2ins_ndarray, sort2sh, sort2sh_ndarray, sorthp,
    sorthp_ndarray, sortins, sortins_ndarray, sortsh, sortsh_ndarray,
};
pub use sum::{
    apxsum, apxsum_ndarray, apxsumkbn, apxsumkbn2, apxsumkbn2_ndarray, apxsumkbn_ndarray,
    apxsumors, apxsumors_ndarray, apxsumpw, apxsumpw_ndarray, sum, sum_ndarray, sum_with,
    sum_with_ndarray, sumkbn, sumkbn2, sumkbn2_ndarray, sumkbn_ndarray, sumors, sumors_ndarray,
    sumpw, sumpw_ndarray, Summation,
};
pub use swap::{
    copy, copy_ndarray, fill, fill_by, fill_by_ndarray, fill_ndarray, swap, swap_along,
    swap_ndarray,
};
