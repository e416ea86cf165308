//! Precision tags and promotion rules for mixed-precision operands.

use std::fmt;

use num_complex::{Complex32, Complex64};

/// Storage precision of a buffer or scalar operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dtype {
    Float64,
    Float32,
    /// Double-precision complex (`Complex<f64>`).
    Complex128,
    /// Single-precision complex (`Complex<f32>`).
    Complex64,
    /// Untyped storage; absorbs every other tag on promotion.
    Generic,
}

impl Dtype {
    /// Canonical lowercase name (`"float64"`, `"complex64"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Dtype::Float64 => "float64",
            Dtype::Float32 => "float32",
            Dtype::Complex128 => "complex128",
            Dtype::Complex64 => "complex64",
            Dtype::Generic => "generic",
        }
    }

    /// Parse a canonical name.
    pub fn from_name(name: &str) -> Option<Dtype> {
        match name {
            "float64" => Some(Dtype::Float64),
            "float32" => Some(Dtype::Float32),
            "complex128" => Some(Dtype::Complex128),
            "complex64" => Some(Dtype::Complex64),
            "generic" => Some(Dtype::Generic),
            _ => None,
        }
    }

    pub fn is_complex(self) -> bool {
        matches!(self, Dtype::Complex128 | Dtype::Complex64)
    }

    pub fn is_real(self) -> bool {
        matches!(self, Dtype::Float64 | Dtype::Float32)
    }

    /// Bytes per element, `None` for [`Dtype::Generic`].
    pub fn byte_size(self) -> Option<usize> {
        match self {
            Dtype::Float64 | Dtype::Complex64 => Some(8),
            Dtype::Float32 => Some(4),
            Dtype::Complex128 => Some(16),
            Dtype::Generic => None,
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complex output precision for two operands.
///
/// `Complex64` only when both operands are `Complex64`; anything else
/// widens to `Complex128`.
pub fn promote_complex(a: Dtype, b: Dtype) -> Dtype {
    if a == Dtype::Complex64 && b == Dtype::Complex64 {
        Dtype::Complex64
    } else {
        Dtype::Complex128
    }
}

/// Common storage precision for combining two operands.
///
/// - `Generic` absorbs everything
/// - any complex operand makes the result complex ([`promote_complex`])
/// - two `Float32` operands stay `Float32`; other real pairs are `Float64`
pub fn promote(a: Dtype, b: Dtype) -> Dtype {
    let out = if a == Dtype::Generic || b == Dtype::Generic {
        Dtype::Generic
    } else if a.is_complex() || b.is_complex() {
        promote_complex(a, b)
    } else if a == Dtype::Float32 && b == Dtype::Float32 {
        Dtype::Float32
    } else {
        Dtype::Float64
    };
    tracing::trace!(%a, %b, %out, "promote");
    out
}

/// A scalar operand tagged with its precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Float64(f64),
    Float32(f32),
    Complex128(Complex64),
    Complex64(Complex32),
}

impl Scalar {
    pub fn dtype(&self) -> Dtype {
        match self {
            Scalar::Float64(_) => Dtype::Float64,
            Scalar::Float32(_) => Dtype::Float32,
            Scalar::Complex128(_) => Dtype::Complex128,
            Scalar::Complex64(_) => Dtype::Complex64,
        }
    }

    /// Real and imaginary components in double precision. Real operands
    /// have a zero imaginary part.
    pub fn components(&self) -> (f64, f64) {
        match *self {
            Scalar::Float64(v) => (v, 0.0),
            Scalar::Float32(v) => (f64::from(v), 0.0),
            Scalar::Complex128(z) => (z.re, z.im),
            Scalar::Complex64(z) => (f64::from(z.re), f64::from(z.im)),
        }
    }

    pub fn to_complex128(&self) -> Complex64 {
        let (re, im) = self.components();
        Complex64::new(re, im)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float32(v)
    }
}

impl From<Complex64> for Scalar {
    fn from(v: Complex64) -> Self {
        Scalar::Complex128(v)
    }
}

impl From<Complex32> for Scalar {
    fn from(v: Complex32) -> Self {
        Scalar::Complex64(v)
    }
}
