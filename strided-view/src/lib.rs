//! Strided view metadata: offset/stride resolution, errors and n-d views.
//!
//! Every kernel in the workspace shares one execution contract: given a
//! logical count `N`, a buffer, a stride and a starting offset, element
//! `i` lives at `buffer[offset + i*stride]`. This crate owns the index
//! arithmetic behind that contract:
//!
//! - [`offset`]: base-variant offsets, minimum/maximum view indices and
//!   bounds validation for 1-d strided views
//! - [`view`]: owned [`StridedArray`] and borrowed [`StridedViewMut`]
//!   n-d views used by the batched kernels
//!
//! # Example
//!
//! ```rust
//! use strided_view::{min_view_buffer_index, stride2offset};
//!
//! // Base variant: a negative stride starts at the far end of the buffer.
//! assert_eq!(stride2offset(4, -2), 6);
//! // The lowest buffer index touched by a view walking backwards from 6.
//! assert_eq!(min_view_buffer_index(4, -2, 6), 0);
//! ```

pub mod offset;
pub mod view;

pub use offset::{
    check_view, max_view_buffer_index, min_view_buffer_index, stride2offset, StridedIndices,
};
pub use view::{normalize_axis, row_major_strides, StridedArray, StridedViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during strided array operations.
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// Array ranks do not match.
    #[error("rank mismatch: {0} vs {1}")]
    RankMismatch(usize, usize),

    /// Array shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// Invalid axis index for the given array rank.
    #[error("invalid axis {axis} for rank {rank}")]
    InvalidAxis { axis: isize, rank: usize },

    /// Stride array length doesn't match dimensions.
    #[error("stride and dims length mismatch")]
    StrideLengthMismatch,

    /// A view addresses elements outside its buffer.
    #[error("offset overflow while computing buffer index")]
    OffsetOverflow,

    /// Two operands that must hold the same number of elements do not.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// The requested data type is not supported by the operation.
    #[error("unsupported dtype: {0}")]
    UnsupportedDtype(&'static str),
}

/// Result type for strided array operations.
pub type Result<T> = std::result::Result<T, StridedError>;
