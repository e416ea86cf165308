//! Dynamic-rank strided views for the batched kernels.
//!
//! [`StridedViewMut`] borrows a buffer, [`StridedArray`] owns a row-major
//! one. Both check on construction that every reachable element lies
//! inside the buffer, so the batched kernels walk them without further
//! checks.

use crate::{Result, StridedError};

/// Lowest and highest buffer index reached by `dims`/`strides` from `offset`.
fn reach(dims: &[usize], strides: &[isize], offset: isize) -> Result<(isize, isize)> {
    let mut lo = offset;
    let mut hi = offset;
    for (&dim, &stride) in dims.iter().zip(strides) {
        let span = stride
            .checked_mul(dim as isize - 1)
            .ok_or(StridedError::OffsetOverflow)?;
        let (l, h) = if span < 0 { (span, 0) } else { (0, span) };
        lo = lo.checked_add(l).ok_or(StridedError::OffsetOverflow)?;
        hi = hi.checked_add(h).ok_or(StridedError::OffsetOverflow)?;
    }
    Ok((lo, hi))
}

fn validate_bounds(len: usize, dims: &[usize], strides: &[isize], offset: isize) -> Result<()> {
    if dims.len() != strides.len() {
        return Err(StridedError::StrideLengthMismatch);
    }
    if dims.contains(&0) {
        return Ok(());
    }
    let (lo, hi) = reach(dims, strides, offset)?;
    if lo < 0 || hi as usize >= len {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(())
}

/// Row-major strides (last index varies fastest).
pub fn row_major_strides(dims: &[usize]) -> Vec<isize> {
    let mut strides = vec![1isize; dims.len()];
    for d in (1..dims.len()).rev() {
        strides[d - 1] = strides[d] * dims[d] as isize;
    }
    strides
}

/// Resolve a possibly negative axis against `rank`.
///
/// `-1` names the last axis, `-rank` the first.
pub fn normalize_axis(axis: isize, rank: usize) -> Result<usize> {
    let resolved = if axis < 0 { axis + rank as isize } else { axis };
    if resolved < 0 || resolved as usize >= rank {
        return Err(StridedError::InvalidAxis { axis, rank });
    }
    Ok(resolved as usize)
}

/// Mutable strided view of any rank over a borrowed buffer.
pub struct StridedViewMut<'a, T> {
    data: &'a mut [T],
    dims: Vec<usize>,
    strides: Vec<isize>,
    offset: isize,
}

impl<T> std::fmt::Debug for StridedViewMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedViewMut")
            .field("dims", &self.dims)
            .field("strides", &self.strides)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> StridedViewMut<'a, T> {
    pub fn new(
        data: &'a mut [T],
        dims: &[usize],
        strides: &[isize],
        offset: isize,
    ) -> Result<Self> {
        validate_bounds(data.len(), dims, strides, offset)?;
        Ok(Self {
            data,
            dims: dims.to_vec(),
            strides: strides.to_vec(),
            offset,
        })
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Buffer index of the element at all-zero indices.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Number of viewed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entire backing buffer, not just the viewed elements.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    fn index_of(&self, indices: &[usize]) -> usize {
        assert_eq!(indices.len(), self.dims.len(), "wrong number of indices");
        let mut ix = self.offset;
        for ((&i, &dim), &stride) in indices.iter().zip(&self.dims).zip(&self.strides) {
            assert!(i < dim, "index {i} out of bounds for dim {dim}");
            ix += i as isize * stride;
        }
        ix as usize
    }
}

impl<T: Copy> StridedViewMut<'_, T> {
    pub fn get(&self, indices: &[usize]) -> T {
        self.data[self.index_of(indices)]
    }

    pub fn set(&mut self, indices: &[usize], value: T) {
        let ix = self.index_of(indices);
        self.data[ix] = value;
    }
}

/// Owned row-major array.
#[derive(Debug, Clone, PartialEq)]
pub struct StridedArray<T> {
    data: Vec<T>,
    dims: Vec<usize>,
}

impl<T: Clone + Default> StridedArray<T> {
    /// Row-major array filled with `T::default()`.
    pub fn row_major(dims: &[usize]) -> Self {
        Self {
            data: vec![T::default(); dims.iter().product()],
            dims: dims.to_vec(),
        }
    }
}

impl<T> StridedArray<T> {
    /// Row-major array with values produced by `f(indices)`, called in
    /// storage order.
    pub fn from_fn_row_major(dims: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Self {
        let total: usize = dims.iter().product();
        let mut data = Vec::with_capacity(total);
        let mut idx = vec![0usize; dims.len()];
        for _ in 0..total {
            data.push(f(&idx));
            for d in (0..dims.len()).rev() {
                idx[d] += 1;
                if idx[d] < dims[d] {
                    break;
                }
                idx[d] = 0;
            }
        }
        Self {
            data,
            dims: dims.to_vec(),
        }
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Mutable row-major view over the whole array.
    pub fn view_mut(&mut self) -> StridedViewMut<'_, T> {
        StridedViewMut {
            strides: row_major_strides(&self.dims),
            dims: self.dims.clone(),
            data: &mut self.data,
            offset: 0,
        }
    }
}
