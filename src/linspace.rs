//! Linearly spaced sequences, real and complex.

use num_complex::{Complex32, Complex64};
use strided_traits::{AccessorMut, KernelFloat};
use strided_view::StridedIndices;

use crate::dtype::{promote_complex, Dtype, Scalar};

/// A freshly allocated complex sequence in the promoted precision.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexArray {
    Complex64(Vec<Complex32>),
    Complex128(Vec<Complex64>),
}

impl ComplexArray {
    pub fn dtype(&self) -> Dtype {
        match self {
            ComplexArray::Complex64(_) => Dtype::Complex64,
            ComplexArray::Complex128(_) => Dtype::Complex128,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ComplexArray::Complex64(v) => v.len(),
            ComplexArray::Complex128(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values widened to double precision.
    pub fn to_complex128(&self) -> Vec<Complex64> {
        match self {
            ComplexArray::Complex64(v) => v
                .iter()
                .map(|z| Complex64::new(f64::from(z.re), f64::from(z.im)))
                .collect(),
            ComplexArray::Complex128(v) => v.clone(),
        }
    }
}

/// Number of increments between consecutive outputs.
fn steps(len: usize, endpoint: bool) -> usize {
    if endpoint {
        len - 1
    } else {
        len
    }
}

/// `len` evenly spaced values from `start` towards `stop` as double
/// precision components. Increments are applied by repeated addition.
fn complex_values(start: (f64, f64), stop: (f64, f64), len: usize, endpoint: bool) -> Vec<Complex64> {
    match len {
        0 => return Vec::new(),
        1 => {
            let (re, im) = if endpoint { stop } else { start };
            return vec![Complex64::new(re, im)];
        }
        _ => {}
    }
    let n = steps(len, endpoint) as f64;
    let dre = (stop.0 - start.0) / n;
    let dim = (stop.1 - start.1) / n;
    let mut out = Vec::with_capacity(len);
    let (mut re, mut im) = start;
    for _ in 0..len {
        out.push(Complex64::new(re, im));
        re += dre;
        im += dim;
    }
    if endpoint {
        out[len - 1] = Complex64::new(stop.0, stop.1);
    }
    out
}

/// Complex linearly spaced sequence.
///
/// Real operands are treated as complex with a zero imaginary part. The
/// output is `Complex64` only when both `start` and `stop` are
/// `Complex64`; otherwise it is `Complex128`. With `endpoint` the sequence
/// covers `[start, stop]` and its last element is exactly `stop`; without
/// it covers `[start, stop)`.
///
/// ```rust
/// use num_complex::{Complex32, Complex64};
/// use strided_base::{linspace_complex, ComplexArray, Scalar};
///
/// let out = linspace_complex(Scalar::from(0.0), Scalar::from(Complex64::new(2.0, 4.0)), 3, true);
/// assert_eq!(
///     out,
///     ComplexArray::Complex128(vec![
///         Complex64::new(0.0, 0.0),
///         Complex64::new(1.0, 2.0),
///         Complex64::new(2.0, 4.0),
///     ])
/// );
///
/// let narrow = linspace_complex(
///     Scalar::from(Complex32::new(0.0, 0.0)),
///     Scalar::from(Complex32::new(1.0, 1.0)),
///     2,
///     false,
/// );
/// assert_eq!(narrow.len(), 2);
/// ```
pub fn linspace_complex(start: Scalar, stop: Scalar, len: usize, endpoint: bool) -> ComplexArray {
    let dtype = promote_complex(start.dtype(), stop.dtype());
    tracing::debug!(start = %start.dtype(), stop = %stop.dtype(), out = %dtype, len, endpoint, "linspace_complex");
    let values = complex_values(start.components(), stop.components(), len, endpoint);
    match dtype {
        Dtype::Complex64 => ComplexArray::Complex64(
            values
                .into_iter()
                .map(|z| Complex32::new(z.re as f32, z.im as f32))
                .collect(),
        ),
        _ => ComplexArray::Complex128(values),
    }
}

/// Write `n` linearly spaced values into a strided view, explicit offset.
///
/// Same endpoint rules as [`linspace`]; `n == 0` leaves `out` untouched.
#[allow(clippy::too_many_arguments)]
pub fn linspace_into<'o, F, B>(
    n: usize,
    start: F,
    stop: F,
    endpoint: bool,
    out: &'o mut B,
    stride: isize,
    offset: usize,
) -> &'o mut B
where
    F: KernelFloat,
    B: AccessorMut<Elem = F> + ?Sized,
{
    if n == 0 {
        return out;
    }
    let mut idx = StridedIndices::new(n, stride, offset);
    if n == 1 {
        if let Some(ix) = idx.next() {
            out.set(ix, if endpoint { stop } else { start });
        }
        return out;
    }
    let delta = (stop - start) / F::lit(steps(n, endpoint) as f64);
    let mut v = start;
    let mut last = 0;
    for ix in idx {
        out.set(ix, v);
        v = v + delta;
        last = ix;
    }
    if endpoint {
        out.set(last, stop);
    }
    out
}

/// `len` linearly spaced real values from `start` to `stop`.
///
/// ```rust
/// use strided_base::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5, true), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0f32, 1.0, 4, false), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn linspace<F: KernelFloat>(start: F, stop: F, len: usize, endpoint: bool) -> Vec<F> {
    let mut out = vec![F::zero(); len];
    linspace_into(len, start, stop, endpoint, &mut out[..], 1, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_complex_degenerate_lengths() {
        let a = Scalar::from(Complex64::new(1.0, 1.0));
        let b = Scalar::from(Complex64::new(3.0, -1.0));
        assert!(linspace_complex(a, b, 0, true).is_empty());
        assert_eq!(
            linspace_complex(a, b, 1, true),
            ComplexArray::Complex128(vec![Complex64::new(3.0, -1.0)])
        );
        assert_eq!(
            linspace_complex(a, b, 1, false),
            ComplexArray::Complex128(vec![Complex64::new(1.0, 1.0)])
        );
    }

    #[test]
    fn test_linspace_complex_without_endpoint() {
        let out = linspace_complex(Scalar::from(0.0), Scalar::from(Complex64::new(4.0, 8.0)), 4, false);
        assert_eq!(
            out.to_complex128(),
            vec![
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 2.0),
                Complex64::new(2.0, 4.0),
                Complex64::new(3.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_linspace_complex_promotion() {
        let c64 = Scalar::from(Complex32::new(0.0, 1.0));
        let c128 = Scalar::from(Complex64::new(1.0, 0.0));
        assert_eq!(linspace_complex(c64, c64, 3, true).dtype(), Dtype::Complex64);
        assert_eq!(linspace_complex(c64, c128, 3, true).dtype(), Dtype::Complex128);
        assert_eq!(linspace_complex(Scalar::from(1.0f32), c64, 3, true).dtype(), Dtype::Complex128);
    }

    #[test]
    fn test_linspace_endpoint_exact() {
        let v = linspace(0.0, 0.3, 7, true);
        assert_eq!(v[6], 0.3);
        let z = linspace_complex(Scalar::from(0.1), Scalar::from(Complex64::new(0.7, 0.3)), 11, true);
        assert_eq!(z.to_complex128()[10], Complex64::new(0.7, 0.3));
    }

    #[test]
    fn test_linspace_into_strided() {
        let mut out = [0.0; 5];
        linspace_into(3, 1.0, 3.0, true, &mut out[..], -2, 4);
        assert_eq!(out, [3.0, 0.0, 2.0, 0.0, 1.0]);
        let mut one = [0.0f32; 2];
        linspace_into(1, 1.0, 3.0, false, &mut one[..], 1, 1);
        assert_eq!(one, [0.0, 1.0]);
    }
}
