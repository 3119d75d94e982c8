//! Bubble sort with early exit.

use crate::context::SortContext;
use crate::sorter::SortAlgorithm;

/// Adjacent compare-and-swap passes over a shrinking unsorted region. A pass
/// without a swap ends the run.
///
/// Every pass and every inner iteration counts as a loop iteration; with gui
/// enabled a frame is rendered after each comparison.
#[derive(Copy, Clone, Debug, Default)]
pub struct BubbleSort;

impl<T: PartialOrd> SortAlgorithm<T> for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort(&mut self, ctx: &mut SortContext<'_, T>) {
        let n = ctx.len();
        if n < 2 {
            return;
        }

        for pass in 0..n - 1 {
            ctx.tick_loop();
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                ctx.tick_loop();
                if ctx.out_of_order(j, j + 1) {
                    ctx.swap(j, j + 1);
                    swapped = true;
                }
                ctx.step();
            }
            if !swapped {
                break;
            }
        }
    }
}
