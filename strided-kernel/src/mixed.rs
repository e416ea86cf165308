//! Mixed-precision sums: single-precision input, double-precision accumulation.

use strided_traits::Accessor;
use strided_view::stride2offset;

use crate::nansum::{nansumpw_ndarray, nannsumpw_ndarray};
use crate::sum::sumpw_ndarray;

/// Presents an `f32` accessor as `f64`, widening on read.
struct Widened<'a, A: ?Sized>(&'a A);

impl<A> Accessor for Widened<'_, A>
where
    A: Accessor<Elem = f32> + ?Sized,
{
    type Elem = f64;

    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> f64 {
        f64::from(self.0.get(idx))
    }
}

/// Sum of an `f32` view accumulated and returned in double precision.
pub fn dssum_ndarray<A>(n: usize, x: &A, stride: isize, offset: usize) -> f64
where
    A: Accessor<Elem = f32> + ?Sized,
{
    sumpw_ndarray(n, &Widened(x), stride, offset)
}

/// Sum of an `f32` view accumulated in double precision, rounded to `f32`.
pub fn sdssum_ndarray<A>(n: usize, x: &A, stride: isize, offset: usize) -> f32
where
    A: Accessor<Elem = f32> + ?Sized,
{
    dssum_ndarray(n, x, stride, offset) as f32
}

/// NaN-skipping `f32` sum accumulated in double precision.
pub fn dsnansum_ndarray<A>(n: usize, x: &A, stride: isize, offset: usize) -> f64
where
    A: Accessor<Elem = f32> + ?Sized,
{
    nansumpw_ndarray(n, &Widened(x), stride, offset)
}

/// NaN-skipping `f32` sum accumulated in double precision, rounded to `f32`.
pub fn sdsnansum_ndarray<A>(n: usize, x: &A, stride: isize, offset: usize) -> f32
where
    A: Accessor<Elem = f32> + ?Sized,
{
    dsnansum_ndarray(n, x, stride, offset) as f32
}

/// Like [`dsnansum_ndarray`] but also returns the number of non-NaN elements.
pub fn dsnannsum_ndarray<A>(n: usize, x: &A, stride: isize, offset: usize) -> (f64, usize)
where
    A: Accessor<Elem = f32> + ?Sized,
{
    nannsumpw_ndarray(n, &Widened(x), stride, offset)
}

/// Double-precision sum of an `f32` view.
pub fn dssum<A>(n: usize, x: &A, stride: isize) -> f64
where
    A: Accessor<Elem = f32> + ?Sized,
{
    dssum_ndarray(n, x, stride, stride2offset(n, stride))
}

/// Double-precision accumulated sum of an `f32` view, rounded to `f32`.
pub fn sdssum<A>(n: usize, x: &A, stride: isize) -> f32
where
    A: Accessor<Elem = f32> + ?Sized,
{
    sdssum_ndarray(n, x, stride, stride2offset(n, stride))
}

/// Double-precision NaN-skipping sum of an `f32` view.
pub fn dsnansum<A>(n: usize, x: &A, stride: isize) -> f64
where
    A: Accessor<Elem = f32> + ?Sized,
{
    dsnansum_ndarray(n, x, stride, stride2offset(n, stride))
}

/// Double-precision NaN-skipping sum of an `f32` view, rounded to `f32`.
pub fn sdsnansum<A>(n: usize, x: &A, stride: isize) -> f32
where
    A: Accessor<Elem = f32> + ?Sized,
{
    sdsnansum_ndarray(n, x, stride, stride2offset(n, stride))
}

/// Double-precision NaN-skipping sum and non-NaN count of an `f32` view.
pub fn dsnannsum<A>(n: usize, x: &A, stride: isize) -> (f64, usize)
where
    A: Accessor<Elem = f32> + ?Sized,
{
    dsnannsum_ndarray(n, x, stride, stride2offset(n, stride))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dssum_accumulates_in_double() {
        // 2^24 + 1 is not representable in f32; a single-precision running
        // sum would drop every unit term.
        let mut x = vec![1.0f32; 9];
        x[0] = 16_777_216.0;
        assert_eq!(dssum(9, &x, 1), 16_777_224.0);
        assert_eq!(sdssum(9, &x, 1), 16_777_224.0f32);
    }

    #[test]
    fn test_ds_nan_variants() {
        let x = [1.0f32, f32::NAN, 2.5, f32::NAN];
        assert_eq!(dsnansum(4, &x[..], 1), 3.5);
        assert_eq!(sdsnansum(2, &x[..], -2), 3.5f32);
        assert_eq!(dsnannsum(4, &x[..], 1), (3.5, 2));
        assert!(dssum(4, &x[..], 1).is_nan());
    }

    #[test]
    fn test_ds_empty_and_offsets() {
        let x = [3.0f32, 4.0, 5.0];
        assert_eq!(dssum(0, &x[..], 1), 0.0);
        assert_eq!(dssum_ndarray(2, &x[..], 1, 1), 9.0);
        assert_eq!(sdssum_ndarray(3, &x[..], -1, 2), 12.0);
    }
}
