//! Offset/stride resolution for 1-d strided views.
//!
//! A 1-d strided view is the triple `(buffer, stride, offset)` plus a
//! logical length `N`; element `i` lives at `buffer[offset + i*stride]`.
//! Strides may be negative, in which case `offset` must point at the
//! *last* buffer element of the view so that every index stays within
//! `[0, buffer.len())`.

use crate::{Result, StridedError};

/// Starting offset for the offset-less ("base") kernel variants.
///
/// A non-negative stride starts at buffer index `0`; a negative stride
/// starts at `(N-1)*|stride|` so that the traversal walks back to `0`.
///
/// ```
/// use strided_view::stride2offset;
/// assert_eq!(stride2offset(3, 2), 0);
/// assert_eq!(stride2offset(3, -2), 4);
/// assert_eq!(stride2offset(0, -2), 0);
/// ```
#[inline]
pub fn stride2offset(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        0
    } else {
        (n - 1) * stride.unsigned_abs()
    }
}

/// Lowest buffer index touched by the view `(n, stride, offset)`.
///
/// For `stride < 0` this is `offset - (N-1)*|stride|`: iterating forward
/// from it with `|stride|` visits the same elements as the negative-stride
/// traversal, in reverse order. For `N <= 1` or `stride >= 0` it is
/// `offset` itself.
///
/// # Panics
/// If the view walks below index `0` (the caller passed an offset that
/// does not leave room for `N` backward steps).
#[inline]
pub fn min_view_buffer_index(n: usize, stride: isize, offset: usize) -> usize {
    if n > 1 && stride < 0 {
        offset - (n - 1) * stride.unsigned_abs()
    } else {
        offset
    }
}

/// Highest buffer index touched by the view `(n, stride, offset)`.
#[inline]
pub fn max_view_buffer_index(n: usize, stride: isize, offset: usize) -> usize {
    if n > 1 && stride > 0 {
        offset + (n - 1) * stride.unsigned_abs()
    } else {
        offset
    }
}

/// Validate that all `n` indices of a view stay within `[0, len)`.
pub fn check_view(len: usize, n: usize, stride: isize, offset: usize) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    let span = stride
        .unsigned_abs()
        .checked_mul(n - 1)
        .ok_or(StridedError::OffsetOverflow)?;
    let (lo, hi) = if stride < 0 {
        (
            offset.checked_sub(span).ok_or(StridedError::OffsetOverflow)?,
            offset,
        )
    } else {
        (
            offset,
            offset.checked_add(span).ok_or(StridedError::OffsetOverflow)?,
        )
    };
    debug_assert!(lo <= hi);
    if hi >= len {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(())
}

/// Iterator over the buffer indices of a 1-d strided view.
///
/// Yields `offset, offset + stride, ..., offset + (n-1)*stride`.
#[derive(Debug, Clone)]
pub struct StridedIndices {
    next: isize,
    stride: isize,
    remaining: usize,
}

impl StridedIndices {
    #[inline]
    pub fn new(n: usize, stride: isize, offset: usize) -> Self {
        Self {
            next: offset as isize,
            stride,
            remaining: n,
        }
    }
}

impl Iterator for StridedIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.next;
        self.remaining -= 1;
        self.next = cur.wrapping_add(self.stride);
        Some(cur as usize)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedIndices {}
