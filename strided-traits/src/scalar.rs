//! Scalar type bounds for strided kernels.

use num_traits::{Float, FromPrimitive};

/// Real floating-point element type accepted by the numeric kernels.
///
/// Implemented for `f32` and `f64`. Kernels are monomorphized over this
/// trait, so an `f32` instantiation performs every intermediate operation
/// in single precision and rounds each result to `f32`. Nothing is
/// silently accumulated in `f64`; kernels that want wider accumulation
/// (`dssum`, `sdssum`) say so in their signature.
pub trait KernelFloat:
    Float + FromPrimitive + Default + std::fmt::Debug + Send + Sync + 'static
{
    /// Convert an `f64` literal into this precision (rounding for `f32`).
    fn lit(v: f64) -> Self;

    /// Widen to `f64` (exact for both implementations).
    fn widen(self) -> f64;

    /// `true` for `-0.0`.
    #[inline(always)]
    fn is_negative_zero(self) -> bool {
        self == Self::zero() && self.is_sign_negative()
    }

    /// `true` for `+0.0`.
    #[inline(always)]
    fn is_positive_zero(self) -> bool {
        self == Self::zero() && self.is_sign_positive()
    }
}

impl KernelFloat for f64 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }
}

impl KernelFloat for f32 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }
}
