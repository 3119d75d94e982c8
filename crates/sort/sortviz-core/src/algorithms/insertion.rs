//! Insertion sort by adjacent swaps.

use crate::context::SortContext;
use crate::sorter::SortAlgorithm;

#[derive(Copy, Clone, Debug, Default)]
pub struct InsertionSort;

impl<T: PartialOrd> SortAlgorithm<T> for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort(&mut self, ctx: &mut SortContext<'_, T>) {
        for i in 1..ctx.len() {
            ctx.tick_loop();
            let mut j = i;
            while j > 0 {
                ctx.tick_loop();
                if !ctx.out_of_order(j - 1, j) {
                    break;
                }
                ctx.swap(j - 1, j);
                ctx.step();
                j -= 1;
            }
        }
    }
}
