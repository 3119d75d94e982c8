//! Heap sort.
//!
//! Phase one heapifies from the last non-leaf node down to the root; phase two
//! swaps the root to the end of the shrinking heap and re-heapifies. Ascending
//! runs build a max-heap, descending runs a min-heap: the direction comes from
//! `ctx.out_of_order` alone.

use crate::context::SortContext;
use crate::sorter::SortAlgorithm;

#[derive(Copy, Clone, Debug, Default)]
pub struct HeapSort;

impl HeapSort {
    /// Sift the element at `root` down within `data[..size]`. Recurses into
    /// the affected subtree only after a swap; each call is one level of
    /// tracked recursion.
    fn heapify<T: PartialOrd>(ctx: &mut SortContext<'_, T>, size: usize, root: usize) {
        ctx.descend(|ctx| {
            let left = 2 * root + 1;
            let right = left + 1;
            let mut top = root;

            if left < size && ctx.out_of_order(left, top) {
                top = left;
            }
            if right < size && ctx.out_of_order(right, top) {
                top = right;
            }

            if top != root {
                ctx.swap(root, top);
                ctx.step();
                Self::heapify(ctx, size, top);
            }
        });
    }
}

impl<T: PartialOrd> SortAlgorithm<T> for HeapSort {
    fn name(&self) -> &'static str {
        "heap"
    }

    fn sort(&mut self, ctx: &mut SortContext<'_, T>) {
        let n = ctx.len();
        if n < 2 {
            return;
        }

        for i in (0..n / 2).rev() {
            ctx.tick_loop();
            Self::heapify(ctx, n, i);
        }

        for end in (1..n).rev() {
            ctx.tick_loop();
            ctx.swap(0, end);
            ctx.step();
            Self::heapify(ctx, end, 0);
        }
    }
}
