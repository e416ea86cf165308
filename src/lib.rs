//! Strided numerical kernels over `(N, buffer, stride, offset)` views.
//!
//! This crate is the facade of the workspace:
//!
//! - [`strided_view`]: offset/stride resolution ([`stride2offset`],
//!   [`min_view_buffer_index`], [`max_view_buffer_index`]), errors and n-d views
//! - [`strided_kernel`]: reductions (sums, norms, extrema, sorting) and
//!   transforms (reverse, maps, swap, fill) generic over [`Accessor`]
//! - [`strided_special`]: rational function evaluation and the special
//!   functions built on it
//!
//! and adds the layers that work above a single element type:
//!
//! - [`Dtype`] / [`promote`] / [`promote_complex`]: precision promotion
//! - [`TypedBuffer`]: run-time dtype buffers dispatching once per call
//! - [`linspace`], [`linspace_into`], [`linspace_complex`]
//! - [`flatten`] over any [`NestedArray`], and the fixed-rank
//!   [`flatten2d`] .. [`flatten5d`] with their `_into` / `_by` variants
//!
//! # Example
//!
//! ```rust
//! use strided_base::{evalrational, nrm2, rev, sum};
//!
//! let mut x = [1.0, -2.0, 3.0, -4.0, 5.0, -6.0];
//! rev(6, &mut x[..], 1);
//! assert_eq!(x, [-6.0, 5.0, -4.0, 3.0, -2.0, 1.0]);
//! assert_eq!(sum(3, &x[..], -2), -12.0);
//! assert!((nrm2(2, &[3.0f64, 4.0][..], 1) - 5.0).abs() < 1e-15);
//!
//! assert_eq!(evalrational(&[-6.0, -5.0], &[3.0, 0.5], 6.0), -6.0);
//! ```

pub mod dtype;
pub mod flatten;
pub mod linspace;
pub mod typed;

pub use strided_kernel;
pub use strided_special;
pub use strided_traits;
pub use strided_view;

// ============================================================================
// Kernels
// ============================================================================
pub use strided_kernel::*;
pub use strided_special::*;

// ============================================================================
// Views and accessors
// ============================================================================
pub use strided_traits::{
    complex_as_interleaved, complex_as_interleaved_mut, interleaved_as_complex,
    interleaved_as_complex_mut, FnAccessor,
};
pub use strided_view::{
    check_view, max_view_buffer_index, min_view_buffer_index, StridedIndices,
};

// ============================================================================
// Precision promotion
// ============================================================================
pub use dtype::{promote, promote_complex, Dtype, Scalar};
pub use linspace::{linspace, linspace_complex, linspace_into, ComplexArray};
pub use typed::TypedBuffer;

// ============================================================================
// Flatten helpers
// ============================================================================
pub use flatten::{
    flatten, flatten2d, flatten2d_by, flatten2d_by_into, flatten2d_into, flatten3d, flatten3d_by,
    flatten3d_by_into, flatten3d_into, flatten4d, flatten4d_by, flatten4d_by_into,
    flatten4d_into, flatten5d, flatten5d_by, flatten5d_by_into, flatten5d_into, flatten_by,
    flatten_by_into, flatten_into, NestedArray,
};
