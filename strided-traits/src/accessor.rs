//! Indexed element access over arbitrary storage layouts.
//!
//! Kernels are written against [`Accessor`] / [`AccessorMut`] rather than
//! concrete slices, so the same kernel body serves:
//!
//! - plain slices, arrays and `Vec`s (zero-cost, indexes directly)
//! - [`InterleavedComplex`]: complex values stored as `[re0, im0, re1, im1, ...]`
//! - [`FnAccessor`]: user-supplied getter/setter closures over a backing slice
//!
//! Every kernel is generic over the accessor type, so the indirection is
//! resolved by monomorphization and there is no per-element dynamic call.

use std::marker::PhantomData;

use num_complex::Complex;

/// Read access to an indexed buffer.
pub trait Accessor {
    /// Element type produced by [`Accessor::get`].
    type Elem: Copy;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at buffer index `idx`.
    ///
    /// Panics if `idx >= self.len()`.
    fn get(&self, idx: usize) -> Self::Elem;
}

/// Write access to an indexed buffer.
pub trait AccessorMut: Accessor {
    /// Write `value` at buffer index `idx`.
    fn set(&mut self, idx: usize, value: Self::Elem);

    /// Exchange the elements at `i` and `j`.
    #[inline]
    fn swap_elems(&mut self, i: usize, j: usize) {
        let a = self.get(i);
        let b = self.get(j);
        self.set(i, b);
        self.set(j, a);
    }
}

// ---------------------------------------------------------------------------
// Slices, arrays, vectors
// ---------------------------------------------------------------------------

impl<T: Copy> Accessor for [T] {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Copy> AccessorMut for [T] {
    #[inline(always)]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }

    #[inline(always)]
    fn swap_elems(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

impl<T: Copy, const N: usize> Accessor for [T; N] {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Copy, const N: usize> AccessorMut for [T; N] {
    #[inline(always)]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }

    #[inline(always)]
    fn swap_elems(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

impl<T: Copy> Accessor for Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Copy> AccessorMut for Vec<T> {
    #[inline(always)]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }

    #[inline(always)]
    fn swap_elems(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

// ---------------------------------------------------------------------------
// Interleaved complex storage
// ---------------------------------------------------------------------------

/// Complex-valued view over an interleaved real buffer `[re0, im0, re1, im1, ...]`.
///
/// This is the storage layout of a complex typed array: element `i` lives
/// at real indices `2*i` (real part) and `2*i + 1` (imaginary part). A
/// trailing odd real element is not addressable.
///
/// `B` is anything that dereferences to `[F]`: `&[F]`, `&mut [F]` or `Vec<F>`.
#[derive(Debug, Clone)]
pub struct InterleavedComplex<B, F> {
    buf: B,
    _elem: PhantomData<F>,
}

impl<B, F> InterleavedComplex<B, F>
where
    B: AsRef<[F]>,
{
    pub fn new(buf: B) -> Self {
        Self {
            buf,
            _elem: PhantomData,
        }
    }

    /// The underlying real buffer.
    pub fn as_real(&self) -> &[F] {
        self.buf.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<B, F> Accessor for InterleavedComplex<B, F>
where
    B: AsRef<[F]>,
    F: Copy,
{
    type Elem = Complex<F>;

    #[inline(always)]
    fn len(&self) -> usize {
        self.buf.as_ref().len() / 2
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> Complex<F> {
        let buf = self.buf.as_ref();
        Complex::new(buf[2 * idx], buf[2 * idx + 1])
    }
}

impl<B, F> AccessorMut for InterleavedComplex<B, F>
where
    B: AsRef<[F]> + AsMut<[F]>,
    F: Copy,
{
    #[inline(always)]
    fn set(&mut self, idx: usize, value: Complex<F>) {
        let buf = self.buf.as_mut();
        buf[2 * idx] = value.re;
        buf[2 * idx + 1] = value.im;
    }
}

/// Reinterpret a complex slice as its interleaved real storage (zero-copy).
pub fn complex_as_interleaved<F: bytemuck::Pod>(src: &[Complex<F>]) -> &[F] {
    bytemuck::cast_slice(src)
}

/// Mutable variant of [`complex_as_interleaved`].
pub fn complex_as_interleaved_mut<F: bytemuck::Pod>(src: &mut [Complex<F>]) -> &mut [F] {
    bytemuck::cast_slice_mut(src)
}

/// Reinterpret interleaved real storage as complex values (zero-copy).
///
/// Returns `None` when the buffer has odd length.
pub fn interleaved_as_complex<F: bytemuck::Pod>(src: &[F]) -> Option<&[Complex<F>]> {
    bytemuck::try_cast_slice(src).ok()
}

/// Mutable variant of [`interleaved_as_complex`].
pub fn interleaved_as_complex_mut<F: bytemuck::Pod>(src: &mut [F]) -> Option<&mut [Complex<F>]> {
    bytemuck::try_cast_slice_mut(src).ok()
}

// ---------------------------------------------------------------------------
// Closure-backed accessor
// ---------------------------------------------------------------------------

/// Accessor that routes every read and write through user closures.
///
/// `get(data, idx)` produces the element at `idx`; `set(data, idx, value)`
/// stores it. This models "accessor arrays" whose logical values differ
/// from their raw storage (scaled, encoded, bit-packed, ...).
pub struct FnAccessor<'a, T, G, S> {
    data: &'a mut [T],
    getter: G,
    setter: S,
}

impl<'a, T, G, S> FnAccessor<'a, T, G, S> {
    pub fn new(data: &'a mut [T], getter: G, setter: S) -> Self {
        Self {
            data,
            getter,
            setter,
        }
    }

    /// Raw backing storage.
    pub fn data(&self) -> &[T] {
        &*self.data
    }
}

impl<T, E, G, S> Accessor for FnAccessor<'_, T, G, S>
where
    E: Copy,
    G: Fn(&[T], usize) -> E,
{
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, idx: usize) -> E {
        (self.getter)(self.data, idx)
    }
}

impl<T, E, G, S> AccessorMut for FnAccessor<'_, T, G, S>
where
    E: Copy,
    G: Fn(&[T], usize) -> E,
    S: Fn(&mut [T], usize, E),
{
    #[inline]
    fn set(&mut self, idx: usize, value: E) {
        (self.setter)(self.data, idx, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    fn read_all<A: Accessor + ?Sized>(a: &A) -> Vec<A::Elem> {
        (0..a.len()).map(|i| a.get(i)).collect()
    }

    #[test]
    fn test_slice_and_vec_accessors() {
        let mut v = vec![1.0, 2.0, 3.0];
        assert_eq!(read_all(&v), vec![1.0, 2.0, 3.0]);
        AccessorMut::set(&mut v, 1, 5.0);
        v.swap_elems(0, 2);
        assert_eq!(read_all(v.as_slice()), vec![3.0, 5.0, 1.0]);

        let arr = [4i32, 5, 6];
        assert_eq!(Accessor::len(&arr), 3);
        assert_eq!(Accessor::get(&arr, 2), 6);
    }

    #[test]
    fn test_interleaved_complex() {
        let mut buf = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let mut c = InterleavedComplex::new(&mut buf[..]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1), Complex32::new(3.0, 4.0));
        c.set(0, Complex32::new(-1.0, -2.0));
        c.swap_elems(0, 1);
        assert_eq!(buf, [3.0, 4.0, -1.0, -2.0, 5.0]);
    }

    #[test]
    fn test_reinterpret_roundtrip() {
        let mut z = vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
        assert_eq!(complex_as_interleaved(&z), &[1.0, 2.0, 3.0, 4.0]);
        complex_as_interleaved_mut(&mut z)[3] = -4.0;
        assert_eq!(z[1], Complex64::new(3.0, -4.0));

        let re = [1.0f64, 0.0, 0.0, 1.0];
        let c = interleaved_as_complex(&re).unwrap();
        assert_eq!(c[1], Complex64::new(0.0, 1.0));
        assert!(interleaved_as_complex(&re[..3]).is_none());
    }

    #[test]
    fn test_fn_accessor_scales_reads() {
        let mut data = [1.0, 2.0, 3.0];
        let mut acc = FnAccessor::new(
            &mut data,
            |d: &[f64], i: usize| d[i] * 2.0,
            |d: &mut [f64], i: usize, v: f64| d[i] = v,
        );
        assert_eq!(acc.get(2), 6.0);
        acc.set(0, 10.0);
        assert_eq!(acc.data(), &[10.0, 2.0, 3.0]);
    }
}
