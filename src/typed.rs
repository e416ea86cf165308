//! Runtime-dtype buffers: one enum match per call, then a monomorphized
//! kernel over the concrete element type.

use num_complex::{Complex, Complex32, Complex64};
use strided_kernel::{nrm2_ndarray, rev_ndarray, sorthp_ndarray, sortins_ndarray, sum_with_ndarray, Summation};
use strided_traits::{complex_as_interleaved, KernelFloat};
use strided_view::{check_view, Result, StridedError};

use crate::dtype::{promote, Dtype, Scalar};

/// Views shorter than this are sorted by insertion, longer ones by heapsort.
const INSERTION_SORT_MAX: usize = 20;

/// A buffer whose element precision is only known at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedBuffer {
    Float64(Vec<f64>),
    Float32(Vec<f32>),
    Complex128(Vec<Complex64>),
    Complex64(Vec<Complex32>),
}

impl TypedBuffer {
    pub fn dtype(&self) -> Dtype {
        match self {
            TypedBuffer::Float64(_) => Dtype::Float64,
            TypedBuffer::Float32(_) => Dtype::Float32,
            TypedBuffer::Complex128(_) => Dtype::Complex128,
            TypedBuffer::Complex64(_) => Dtype::Complex64,
        }
    }

    /// Number of elements (complex values count once).
    pub fn len(&self) -> usize {
        match self {
            TypedBuffer::Float64(v) => v.len(),
            TypedBuffer::Float32(v) => v.len(),
            TypedBuffer::Complex128(v) => v.len(),
            TypedBuffer::Complex64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of a strided view using `strategy`.
    ///
    /// Complex buffers are summed component-wise over their interleaved
    /// storage. The result keeps the buffer's precision.
    ///
    /// ```rust
    /// use strided_base::{Scalar, Summation, TypedBuffer};
    ///
    /// let buf = TypedBuffer::Float32(vec![1.0, 2.0, 3.0, 4.0]);
    /// let s = buf.sum(Summation::Kbn2, 2, -2, 3).unwrap();
    /// assert_eq!(s, Scalar::Float32(6.0));
    /// ```
    pub fn sum(&self, strategy: Summation, n: usize, stride: isize, offset: usize) -> Result<Scalar> {
        check_view(self.len(), n, stride, offset)?;
        Ok(match self {
            TypedBuffer::Float64(v) => Scalar::Float64(sum_with_ndarray(strategy, n, &v[..], stride, offset)),
            TypedBuffer::Float32(v) => Scalar::Float32(sum_with_ndarray(strategy, n, &v[..], stride, offset)),
            TypedBuffer::Complex128(v) => Scalar::Complex128(complex_sum(strategy, n, v, stride, offset)),
            TypedBuffer::Complex64(v) => Scalar::Complex64(complex_sum(strategy, n, v, stride, offset)),
        })
    }

    /// Euclidean norm of a strided view, widened to `f64`.
    pub fn nrm2(&self, n: usize, stride: isize, offset: usize) -> Result<f64> {
        check_view(self.len(), n, stride, offset)?;
        Ok(match self {
            TypedBuffer::Float64(v) => nrm2_ndarray(n, &v[..], stride, offset),
            TypedBuffer::Float32(v) => f64::from(nrm2_ndarray(n, &v[..], stride, offset)),
            TypedBuffer::Complex128(v) => complex_nrm2(n, v, stride, offset),
            TypedBuffer::Complex64(v) => complex_nrm2(n, v, stride, offset),
        })
    }

    /// Reverse a strided view in place.
    pub fn rev(&mut self, n: usize, stride: isize, offset: usize) -> Result<()> {
        check_view(self.len(), n, stride, offset)?;
        match self {
            TypedBuffer::Float64(v) => {
                rev_ndarray(n, &mut v[..], stride, offset);
            }
            TypedBuffer::Float32(v) => {
                rev_ndarray(n, &mut v[..], stride, offset);
            }
            TypedBuffer::Complex128(v) => {
                rev_ndarray(n, &mut v[..], stride, offset);
            }
            TypedBuffer::Complex64(v) => {
                rev_ndarray(n, &mut v[..], stride, offset);
            }
        }
        Ok(())
    }

    /// Sort a strided view in place; `order > 0` increasing, `order < 0`
    /// decreasing, `0` leaves the buffer untouched.
    ///
    /// Complex buffers have no total order and are rejected.
    pub fn sort(&mut self, n: usize, order: f64, stride: isize, offset: usize) -> Result<()> {
        check_view(self.len(), n, stride, offset)?;
        let dtype = self.dtype();
        let insertion = n < INSERTION_SORT_MAX;
        tracing::debug!(
            %dtype,
            n,
            algorithm = if insertion { "insertion" } else { "heap" },
            "sort"
        );
        match self {
            TypedBuffer::Float64(v) => sort_real(n, order, &mut v[..], stride, offset, insertion),
            TypedBuffer::Float32(v) => sort_real(n, order as f32, &mut v[..], stride, offset, insertion),
            TypedBuffer::Complex128(_) | TypedBuffer::Complex64(_) => {
                return Err(StridedError::UnsupportedDtype(dtype.as_str()))
            }
        }
        Ok(())
    }

    /// Convert to `dtype`, which must be the promotion of the current
    /// precision with `dtype` (widening only).
    pub fn to_dtype(&self, dtype: Dtype) -> Result<TypedBuffer> {
        if dtype == Dtype::Generic || promote(self.dtype(), dtype) != dtype {
            return Err(StridedError::UnsupportedDtype(dtype.as_str()));
        }
        Ok(match (self, dtype) {
            (TypedBuffer::Float32(v), Dtype::Float64) => {
                TypedBuffer::Float64(v.iter().map(|&x| f64::from(x)).collect())
            }
            (TypedBuffer::Float32(v), Dtype::Complex128) => {
                TypedBuffer::Complex128(v.iter().map(|&x| Complex64::new(f64::from(x), 0.0)).collect())
            }
            (TypedBuffer::Float64(v), Dtype::Complex128) => {
                TypedBuffer::Complex128(v.iter().map(|&x| Complex64::new(x, 0.0)).collect())
            }
            (TypedBuffer::Complex64(v), Dtype::Complex128) => TypedBuffer::Complex128(
                v.iter()
                    .map(|z| Complex64::new(f64::from(z.re), f64::from(z.im)))
                    .collect(),
            ),
            _ => self.clone(),
        })
    }
}

fn sort_real<F: KernelFloat>(n: usize, order: F, x: &mut [F], stride: isize, offset: usize, insertion: bool) {
    if insertion {
        sortins_ndarray(n, order, x, stride, offset);
    } else {
        sorthp_ndarray(n, order, x, stride, offset);
    }
}

fn complex_sum<F>(strategy: Summation, n: usize, v: &[Complex<F>], stride: isize, offset: usize) -> Complex<F>
where
    F: KernelFloat + bytemuck::Pod,
{
    let re = complex_as_interleaved(v);
    let s = 2 * stride;
    Complex::new(
        sum_with_ndarray(strategy, n, re, s, 2 * offset),
        sum_with_ndarray(strategy, n, re, s, 2 * offset + 1),
    )
}

fn complex_nrm2<F>(n: usize, v: &[Complex<F>], stride: isize, offset: usize) -> f64
where
    F: KernelFloat + bytemuck::Pod,
{
    let re = complex_as_interleaved(v);
    let s = 2 * stride;
    let a = nrm2_ndarray(n, re, s, 2 * offset).widen();
    let b = nrm2_ndarray(n, re, s, 2 * offset + 1).widen();
    a.hypot(b)
}

impl From<Vec<f64>> for TypedBuffer {
    fn from(v: Vec<f64>) -> Self {
        TypedBuffer::Float64(v)
    }
}

impl From<Vec<f32>> for TypedBuffer {
    fn from(v: Vec<f32>) -> Self {
        TypedBuffer::Float32(v)
    }
}

impl From<Vec<Complex64>> for TypedBuffer {
    fn from(v: Vec<Complex64>) -> Self {
        TypedBuffer::Complex128(v)
    }
}

impl From<Vec<Complex32>> for TypedBuffer {
    fn from(v: Vec<Complex32>) -> Self {
        TypedBuffer::Complex64(v)
    }
}
