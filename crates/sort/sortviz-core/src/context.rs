//! The instrumented view an algorithm gets of a run.
//!
//! Every element exchange, comparison, loop iteration and recursive descent an
//! algorithm performs goes through these methods, so metrics stay correct
//! whatever algorithm is plugged in.

use std::thread;
use std::time::Duration;

use log::{trace, warn};

use crate::display::DisplayStrategy;
use crate::metrics::Metrics;
use crate::order::SortOrder;

pub struct SortContext<'a, T> {
    data: &'a mut [T],
    metrics: &'a mut Metrics,
    display: &'a mut dyn DisplayStrategy<T>,
    order: SortOrder,
    speed_ms: u64,
    gui: bool,
}

impl<'a, T: PartialOrd> SortContext<'a, T> {
    pub(crate) fn new(
        data: &'a mut [T],
        metrics: &'a mut Metrics,
        display: &'a mut dyn DisplayStrategy<T>,
        order: SortOrder,
        speed_ms: u64,
        gui: bool,
    ) -> Self {
        Self {
            data,
            metrics,
            display,
            order,
            speed_ms,
            gui,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    #[inline]
    pub fn gui(&self) -> bool {
        self.gui
    }

    #[inline]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Read-only view of the working array.
    #[inline]
    pub fn snapshot(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    pub fn metrics(&self) -> &Metrics {
        &*self.metrics
    }

    /// One comparison: true when the element at `i` belongs after the element
    /// at `j` under the active order.
    #[inline]
    pub fn out_of_order(&mut self, i: usize, j: usize) -> bool {
        self.metrics.comparisons += 1;
        self.order.out_of_order(&self.data[i], &self.data[j])
    }

    /// Exchange two elements. The only way an algorithm may move data.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.metrics.swaps += 1;
    }

    #[inline]
    pub fn tick_loop(&mut self) {
        self.metrics.loop_iterations += 1;
    }

    /// Run `f` one recursion level deeper. Counts the call, keeps the running
    /// maximum depth and restores the depth when `f` returns.
    pub fn descend<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.metrics.enter_frame();
        let out = f(self);
        self.metrics.leave_frame();
        out
    }

    /// Block the calling thread for `milliseconds`. Zero returns immediately.
    pub fn delay(&self, milliseconds: u64) {
        if milliseconds > 0 {
            thread::sleep(Duration::from_millis(milliseconds));
        }
    }

    /// Render the current snapshot. Sink failures are logged, not propagated.
    pub fn display(&mut self) {
        if let Err(err) = self.display.render(&*self.data) {
            warn!("display strategy failed to render step: {err}");
        }
    }

    /// Animation step after an observable change: render, then pace. No-op
    /// unless the run has gui enabled.
    pub fn step(&mut self) {
        if !self.gui {
            return;
        }
        trace!(
            "step: comparisons={} swaps={}",
            self.metrics.comparisons,
            self.metrics.swaps
        );
        self.display();
        self.delay(self.speed_ms);
    }
}
