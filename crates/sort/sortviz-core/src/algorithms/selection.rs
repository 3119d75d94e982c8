//! Selection sort.

use crate::context::SortContext;
use crate::sorter::SortAlgorithm;

/// Picks the extremum of the unsorted tail for each position; at most one
/// swap per position.
#[derive(Copy, Clone, Debug, Default)]
pub struct SelectionSort;

impl<T: PartialOrd> SortAlgorithm<T> for SelectionSort {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn sort(&mut self, ctx: &mut SortContext<'_, T>) {
        let n = ctx.len();
        if n < 2 {
            return;
        }

        for i in 0..n - 1 {
            ctx.tick_loop();
            let mut best = i;
            for j in i + 1..n {
                ctx.tick_loop();
                if ctx.out_of_order(best, j) {
                    best = j;
                }
            }
            if best != i {
                ctx.swap(i, best);
                ctx.step();
            }
        }
    }
}
