//! Shared traits for the strided kernel crates.
//!
//! This crate provides the trait definitions shared by `strided-view`,
//! `strided-kernel`, `strided-special` and external crates that want to
//! feed their own storage into the kernels:
//!
//! - [`KernelFloat`]: real floating-point element bound (`f32`, `f64`)
//! - [`Accessor`] / [`AccessorMut`]: indexed get/set over arbitrary storage
//!
//! External crates can depend on `strided-traits` to implement the accessor
//! traits for their buffer types without orphan rule violations.

pub mod accessor;
pub mod scalar;

pub use accessor::{
    complex_as_interleaved, complex_as_interleaved_mut, interleaved_as_complex,
    interleaved_as_complex_mut, Accessor, AccessorMut, FnAccessor, InterleavedComplex,
};
pub use scalar::KernelFloat;
