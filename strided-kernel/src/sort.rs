//! In-place sorting of strided views.
//!
//! `order > 0` sorts increasing, `order < 0` decreasing and `order == 0`
//! (or NaN) leaves the buffer untouched. Increasing order puts `-0` before
//! `+0` and NaNs last; decreasing order is the exact mirror, obtained by
//! walking the view backwards.
//!
//! The `sort2*` variants permute a companion view in lockstep with the keys.

use strided_traits::{AccessorMut, KernelFloat};
use strided_view::stride2offset;

/// Ciura's gap sequence.
const SHELL_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Strict "sorts before" relation for increasing order.
#[inline(always)]
fn precedes<F: KernelFloat>(a: F, b: F) -> bool {
    if a.is_nan() {
        return false;
    }
    if b.is_nan() {
        return true;
    }
    a < b || (a == b && a.is_negative_zero() && b.is_positive_zero())
}

/// A logical view being sorted: keys plus whatever travels with them.
trait SortTarget {
    type Key: KernelFloat;
    type Item: Copy;

    fn key(&self, i: usize) -> Self::Key;
    fn read(&self, i: usize) -> Self::Item;
    fn write(&mut self, i: usize, item: Self::Item);
    fn key_of(item: &Self::Item) -> Self::Key;

    fn swap(&mut self, i: usize, j: usize) {
        let a = self.read(i);
        let b = self.read(j);
        self.write(i, b);
        self.write(j, a);
    }
}

#[inline(always)]
fn physical(offset: isize, stride: isize, i: usize) -> usize {
    (offset + i as isize * stride) as usize
}

struct Keys<'a, B: ?Sized> {
    x: &'a mut B,
    stride: isize,
    offset: isize,
}

impl<F, B> SortTarget for Keys<'_, B>
where
    F: KernelFloat,
    B: AccessorMut<Elem = F> + ?Sized,
{
    type Key = F;
    type Item = F;

    #[inline(always)]
    fn key(&self, i: usize) -> F {
        self.x.get(physical(self.offset, self.stride, i))
    }

    #[inline(always)]
    fn read(&self, i: usize) -> F {
        self.key(i)
    }

    #[inline(always)]
    fn write(&mut self, i: usize, item: F) {
        self.x.set(physical(self.offset, self.stride, i), item);
    }

    #[inline(always)]
    fn key_of(item: &F) -> F {
        *item
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        let a = physical(self.offset, self.stride, i);
        let b = physical(self.offset, self.stride, j);
        self.x.swap_elems(a, b);
    }
}

struct KeysWith<'a, B: ?Sized, C: ?Sized> {
    keys: Keys<'a, B>,
    y: &'a mut C,
    stride_y: isize,
    offset_y: isize,
}

impl<F, B, C> SortTarget for KeysWith<'_, B, C>
where
    F: KernelFloat,
    B: AccessorMut<Elem = F> + ?Sized,
    C: AccessorMut + ?Sized,
{
    type Key = F;
    type Item = (F, C::Elem);

    #[inline(always)]
    fn key(&self, i: usize) -> F {
        self.keys.key(i)
    }

    #[inline(always)]
    fn read(&self, i: usize) -> Self::Item {
        (
            self.keys.key(i),
            self.y.get(physical(self.offset_y, self.stride_y, i)),
        )
    }

    #[inline(always)]
    fn write(&mut self, i: usize, item: Self::Item) {
        self.keys.write(i, item.0);
        self.y.set(physical(self.offset_y, self.stride_y, i), item.1);
    }

    #[inline(always)]
    fn key_of(item: &Self::Item) -> F {
        item.0
    }
}

/// Direction-normalized traversal: `None` when the call is a no-op.
fn plan<F: KernelFloat>(n: usize, order: F, stride: isize, offset: usize) -> Option<(isize, isize)> {
    if n <= 1 || stride == 0 || order.is_nan() || order == F::zero() {
        return None;
    }
    let offset = offset as isize;
    if order < F::zero() {
        Some((-stride, offset + (n as isize - 1) * stride))
    } else {
        Some((stride, offset))
    }
}

/// Stable insertion sort.
fn insertion<T: SortTarget>(t: &mut T, n: usize) {
    for i in 1..n {
        let item = t.read(i);
        let k = T::key_of(&item);
        let mut j = i;
        while j > 0 && precedes(k, t.key(j - 1)) {
            let prev = t.read(j - 1);
            t.write(j, prev);
            j -= 1;
        }
        if j != i {
            t.write(j, item);
        }
    }
}

fn sift_down<T: SortTarget>(t: &mut T, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && precedes(t.key(child), t.key(child + 1)) {
            child += 1;
        }
        if precedes(t.key(root), t.key(child)) {
            t.swap(root, child);
            root = child;
        } else {
            break;
        }
    }
}

/// Heapsort (unstable).
fn heap<T: SortTarget>(t: &mut T, n: usize) {
    for start in (0..n / 2).rev() {
        sift_down(t, start, n);
    }
    for end in (1..n).rev() {
        t.swap(0, end);
        sift_down(t, 0, end);
    }
}

/// Shell sort over [`SHELL_GAPS`] (unstable).
fn shell<T: SortTarget>(t: &mut T, n: usize) {
    for &gap in SHELL_GAPS.iter().filter(|&&g| g < n) {
        for i in gap..n {
            let item = t.read(i);
            let k = T::key_of(&item);
            let mut j = i;
            while j >= gap && precedes(k, t.key(j - gap)) {
                let prev = t.read(j - gap);
                t.write(j, prev);
                j -= gap;
            }
            if j != i {
                t.write(j, item);
            }
        }
    }
}

macro_rules! sort_kernel {
    ($(#[$meta:meta])* $name:ident, $ndarray:ident, $algo:ident) => {
        pub fn $ndarray<'x, F, B>(
            n: usize,
            order: F,
            x: &'x mut B,
            stride: isize,
            offset: usize,
        ) -> &'x mut B
        where
            F: KernelFloat,
            B: AccessorMut<Elem = F> + ?Sized,
        {
            if let Some((stride, offset)) = plan(n, order, stride, offset) {
                let mut keys = Keys { x: &mut *x, stride, offset };
                $algo(&mut keys, n);
            }
            x
        }

        $(#[$meta])*
        pub fn $name<'x, F, B>(n: usize, order: F, x: &'x mut B, stride: isize) -> &'x mut B
        where
            F: KernelFloat,
            B: AccessorMut<Elem = F> + ?Sized,
        {
            $ndarray(n, order, x, stride, stride2offset(n, stride))
        }
    };
}

macro_rules! sort2_kernel {
    ($(#[$meta:meta])* $name:ident, $ndarray:ident, $algo:ident) => {
        #[allow(clippy::too_many_arguments)]
        pub fn $ndarray<F, B, C>(
            n: usize,
            order: F,
            x: &mut B,
            stride_x: isize,
            offset_x: usize,
            y: &mut C,
            stride_y: isize,
            offset_y: usize,
        ) where
            F: KernelFloat,
            B: AccessorMut<Elem = F> + ?Sized,
            C: AccessorMut + ?Sized,
        {
            let Some((stride_x, offset_x)) = plan(n, order, stride_x, offset_x) else {
                return;
            };
            let offset_y = offset_y as isize;
            let (stride_y, offset_y) = if order < F::zero() {
                (-stride_y, offset_y + (n as isize - 1) * stride_y)
            } else {
                (stride_y, offset_y)
            };
            let mut target = KeysWith {
                keys: Keys { x, stride: stride_x, offset: offset_x },
                y,
                stride_y,
                offset_y,
            };
            $algo(&mut target, n);
        }

        $(#[$meta])*
        pub fn $name<F, B, C>(
            n: usize,
            order: F,
            x: &mut B,
            stride_x: isize,
            y: &mut C,
            stride_y: isize,
        ) where
            F: KernelFloat,
            B: AccessorMut<Elem = F> + ?Sized,
            C: AccessorMut + ?Sized,
        {
            $ndarray(
                n,
                order,
                x,
                stride_x,
                stride2offset(n, stride_x),
                y,
                stride_y,
                stride2offset(n, stride_y),
            )
        }
    };
}

sort_kernel!(
    /// Stable insertion sort of a strided view, `O(n^2)`.
    ///
    /// ```rust
    /// use strided_kernel::sortins;
    ///
    /// let mut x = [3.0, f64::NAN, -1.0, 2.0];
    /// sortins(4, 1.0, &mut x[..], 1);
    /// assert_eq!(&x[..3], &[-1.0, 2.0, 3.0]);
    /// assert!(x[3].is_nan());
    /// ```
    sortins, sortins_ndarray, insertion
);
sort_kernel!(
    /// Heapsort of a strided view, `O(n log n)`, not stable.
    sorthp, sorthp_ndarray, heap
);
sort_kernel!(
    /// Shell sort of a strided view using Ciura's gaps, not stable.
    sortsh, sortsh_ndarray, shell
);
sort2_kernel!(
    /// Insertion sort of `x`, applying the same permutation to `y`.
    sort2ins, sort2ins_ndarray, insertion
);
sort2_kernel!(
    /// Heapsort of `x`, applying the same permutation to `y`.
    sort2hp, sort2hp_ndarray, heap
);
sort2_kernel!(
    /// Shell sort of `x`, applying the same permutation to `y`.
    sort2sh, sort2sh_ndarray, shell
);

#[cfg(test)]
mod tests {
    use super::*;

    type SortFn = for<'x> fn(usize, f32, &'x mut [f32], isize) -> &'x mut [f32];

    const ALGOS: [SortFn; 3] = [sortins, sorthp, sortsh];

    fn bits(x: &[f32]) -> Vec<u32> {
        x.iter().map(|v| v.to_bits()).collect()
    }

    #[test]
    fn test_sort2hp_increasing_and_decreasing() {
        let mut x = [1.0f32, -1.0, 2.0, -2.0, 2.0, -3.0, 3.0, -3.0];
        let mut y = [0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        sort2hp(8, 1.0, &mut x[..], 1, &mut y[..], 1);
        assert_eq!(x, [-3.0, -3.0, -2.0, -1.0, 1.0, 2.0, 2.0, 3.0]);
        for (k, v) in x.iter().zip(y.iter()) {
            let original = [1.0f32, -1.0, 2.0, -2.0, 2.0, -3.0, 3.0, -3.0][*v as usize];
            assert_eq!(*k, original);
        }

        sort2hp(8, -1.0, &mut x[..], 1, &mut y[..], 1);
        assert_eq!(x, [3.0, 2.0, 2.0, 1.0, -1.0, -2.0, -3.0, -3.0]);
    }

    #[test]
    fn test_nan_placement() {
        let src = [1.0f32, -1.0, 2.0, f32::NAN, -2.0, 2.0, -3.0, 3.0, f32::NAN, -3.0];
        for algo in ALGOS {
            let mut x = src;
            algo(10, 1.0, &mut x[..], 1);
            assert_eq!(&x[..8], &[-3.0, -3.0, -2.0, -1.0, 1.0, 2.0, 2.0, 3.0]);
            assert!(x[8].is_nan() && x[9].is_nan());

            let mut x = src;
            algo(10, -1.0, &mut x[..], 1);
            assert!(x[0].is_nan() && x[1].is_nan());
            assert_eq!(&x[2..], &[3.0, 2.0, 2.0, 1.0, -1.0, -2.0, -3.0, -3.0]);
        }
    }

    #[test]
    fn test_signed_zeros() {
        for algo in ALGOS {
            let mut x = [0.0f32, -0.0, 0.0, -0.0];
            algo(4, 1.0, &mut x[..], 1);
            assert_eq!(bits(&x), bits(&[-0.0, -0.0, 0.0, 0.0]));
            algo(4, -1.0, &mut x[..], 1);
            assert_eq!(bits(&x), bits(&[0.0, 0.0, -0.0, -0.0]));
        }
    }

    #[test]
    fn test_noop_cases() {
        let mut x = [3.0, -4.0, 1.0];
        sorthp(0, 1.0, &mut x[..], 1);
        sorthp(3, 0.0, &mut x[..], 1);
        sortins(3, f64::NAN, &mut x[..], 1);
        sortsh(3, 1.0, &mut x[..], 0);
        assert_eq!(x, [3.0, -4.0, 1.0]);
    }

    #[test]
    fn test_strided_views() {
        let mut x = [1.0, 9.0, -2.0, 9.0, 3.0, 9.0, -4.0];
        let mut y = [1.0, 9.0, 2.0, 9.0, 3.0, 9.0, 4.0];
        sort2hp(4, 1.0, &mut x[..], 2, &mut y[..], 2);
        assert_eq!(x, [-4.0, 9.0, -2.0, 9.0, 1.0, 9.0, 3.0]);
        assert_eq!(y, [4.0, 9.0, 2.0, 9.0, 1.0, 9.0, 3.0]);

        let mut x = [1.0, 9.0, -2.0, 9.0, 3.0, 9.0, -4.0];
        // a negative stride sorts the reversed view
        sortins(4, 1.0, &mut x[..], -2);
        assert_eq!(x, [3.0, 9.0, 1.0, 9.0, -2.0, 9.0, -4.0]);

        let mut x = [0.0, 5.0, 0.0, -1.0, 0.0, 2.0];
        sortsh_ndarray(3, 1.0, &mut x[..], 2, 1);
        assert_eq!(x, [0.0, -1.0, 0.0, 2.0, 0.0, 5.0]);
    }

    #[test]
    fn test_sort2ins_is_stable() {
        let mut x = [2.0, 1.0, 2.0, 1.0];
        let mut y = [0u8, 1, 2, 3];
        sort2ins(4, 1.0, &mut x[..], 1, &mut y[..], 1);
        assert_eq!(x, [1.0, 1.0, 2.0, 2.0]);
        assert_eq!(y, [1, 3, 0, 2]);

        let mut x = [2.0, 1.0, 2.0, 1.0];
        let mut y = [0u8, 1, 2, 3];
        sort2ins(4, -1.0, &mut x[..], 1, &mut y[..], 1);
        assert_eq!(x, [2.0, 2.0, 1.0, 1.0]);
        assert_eq!(y, [0, 2, 1, 3]);
    }

    #[test]
    fn test_shell_sort_long() {
        let mut x: Vec<f64> = (0..2000).map(|i| ((i * 7919) % 2000) as f64).collect();
        sortsh(2000, 1.0, &mut x, 1);
        assert!(x.windows(2).all(|w| w[0] <= w[1]));
        sort2sh(2000, -1.0, &mut x, 1, &mut vec![0i32; 2000], 1);
        assert!(x.windows(2).all(|w| w[0] >= w[1]));
    }
}
