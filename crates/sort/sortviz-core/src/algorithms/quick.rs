//! Quick sort: median-of-three pivot, Hoare partition.
//!
//! Only the smaller side of a partition is recursed into; the larger side is
//! handled by looping, so tracked depth stays within `log2(n) + 1` for sorted,
//! reversed and all-equal input alike.

use crate::context::SortContext;
use crate::sorter::SortAlgorithm;

#[derive(Copy, Clone, Debug, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Sort `data[lo..=hi]`. Each call is one level of tracked recursion.
    fn quick_sort<T: PartialOrd>(ctx: &mut SortContext<'_, T>, lo: usize, hi: usize) {
        ctx.descend(|ctx| {
            let (mut lo, mut hi) = (lo, hi);
            while lo < hi {
                let p = Self::partition(ctx, lo, hi);
                let left = p - lo;
                let right = hi - p;
                if left <= right {
                    if left > 1 {
                        Self::quick_sort(ctx, lo, p - 1);
                    }
                    lo = p + 1;
                } else {
                    if right > 1 {
                        Self::quick_sort(ctx, p + 1, hi);
                    }
                    // left > right >= 0, so p > lo
                    hi = p - 1;
                }
            }
        });
    }

    fn swap_step<T: PartialOrd>(ctx: &mut SortContext<'_, T>, i: usize, j: usize) {
        ctx.swap(i, j);
        ctx.step();
    }

    /// Order `lo`, `mid` and `hi` among themselves and move the median to
    /// `lo`, where the partition expects its pivot.
    fn median_to_front<T: PartialOrd>(ctx: &mut SortContext<'_, T>, lo: usize, hi: usize) {
        if hi - lo < 2 {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        if ctx.out_of_order(lo, mid) {
            Self::swap_step(ctx, lo, mid);
        }
        if ctx.out_of_order(mid, hi) {
            Self::swap_step(ctx, mid, hi);
        }
        if ctx.out_of_order(lo, mid) {
            Self::swap_step(ctx, lo, mid);
        }
        Self::swap_step(ctx, lo, mid);
    }

    /// Hoare partition around the median of three. Scans stop on keys equal
    /// to the pivot, so duplicates are split evenly between the two sides.
    /// Returns the pivot's final index.
    fn partition<T: PartialOrd>(ctx: &mut SortContext<'_, T>, lo: usize, hi: usize) -> usize {
        Self::median_to_front(ctx, lo, hi);
        let (mut i, mut j) = (lo, hi + 1);
        loop {
            ctx.tick_loop();
            loop {
                i += 1;
                if !ctx.out_of_order(lo, i) || i == hi {
                    break;
                }
            }
            // the pivot at `lo` stops this scan
            loop {
                j -= 1;
                if !ctx.out_of_order(j, lo) {
                    break;
                }
            }
            if i >= j {
                break;
            }
            Self::swap_step(ctx, i, j);
        }
        if j != lo {
            Self::swap_step(ctx, lo, j);
        }
        j
    }
}

impl<T: PartialOrd> SortAlgorithm<T> for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort(&mut self, ctx: &mut SortContext<'_, T>) {
        let n = ctx.len();
        if n < 2 {
            return;
        }
        Self::quick_sort(ctx, 0, n - 1);
    }
}
