//! Rational function evaluation and the special functions built on it.
//!
//! - [`evalrational`] / [`evalpoly`]: overflow-aware rational and
//!   polynomial evaluation from ascending-degree coefficients, plus
//!   closure factories [`evalrational_fn`] / [`evalpoly_fn`]
//! - [`tanh`], [`powm1`], [`boxcox`]: scalar kernels generic over
//!   `f32`/`f64`
//! - `*_strided` drivers that apply them over strided views
//!
//! Domain errors never panic or return `Err`; they produce NaN.

pub mod boxcox;
pub mod evalpoly;
pub mod evalrational;
pub mod powm1;
pub mod strided;
pub mod tanh;

pub use boxcox::boxcox;
pub use evalpoly::{evalpoly, evalpoly_fn};
pub use evalrational::{evalrational, evalrational_fn};
pub use powm1::powm1;
pub use strided::{
    boxcox_strided, boxcox_strided_ndarray, powm1_strided, powm1_strided_ndarray, tanh_strided,
    tanh_strided_ndarray,
};
pub use tanh::tanh;
