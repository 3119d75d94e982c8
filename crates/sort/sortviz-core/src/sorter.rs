//! Sorter: owns the working array, order, metrics and display strategy, and
//! drives timed runs of a pluggable algorithm.
//!
//! Methods:
//! - new / with_algorithm / from_config, set_data, set_sort_order
//! - execute_sort (reset → sort → time → render final → report), run
//! - display, display_metrics, report

use std::fmt;
use std::time::Instant;

use log::{debug, warn};

use crate::algorithms::Algorithm;
use crate::config::RunConfig;
use crate::context::SortContext;
use crate::display::DisplayStrategy;
use crate::metrics::{memory_estimate, Metrics, MetricsReport};
use crate::order::SortOrder;

/// A comparison sort expressed purely through the counted primitives of
/// [`SortContext`]. Implementations must read `ctx.order()` implicitly via
/// `ctx.out_of_order` for every ordering decision, exchange elements only with
/// `ctx.swap`, and call `ctx.step()` after each observable change.
pub trait SortAlgorithm<T> {
    fn name(&self) -> &'static str;

    fn sort(&mut self, ctx: &mut SortContext<'_, T>);
}

/// Sorting base generic over element type and display strategy.
pub struct Sorter<T, D> {
    data: Vec<T>,
    order: SortOrder,
    metrics: Metrics,
    display: D,
    algorithm: Box<dyn SortAlgorithm<T> + Send>,
}

impl<T, D> Sorter<T, D>
where
    T: PartialOrd + Clone,
    D: DisplayStrategy<T>,
{
    /// Build a sorter around a concrete algorithm.
    pub fn new<A>(algorithm: A, display: D) -> Self
    where
        A: SortAlgorithm<T> + Send + 'static,
    {
        Self::from_boxed(Box::new(algorithm), display)
    }

    /// Build a sorter for an algorithm selected by kind.
    pub fn with_algorithm(kind: Algorithm, display: D) -> Self {
        Self::from_boxed(kind.build(), display)
    }

    /// Build a sorter from a run configuration (algorithm and order).
    pub fn from_config(cfg: &RunConfig, display: D) -> Self {
        let mut sorter = Self::with_algorithm(cfg.algorithm, display);
        sorter.set_sort_order(cfg.order);
        sorter
    }

    fn from_boxed(algorithm: Box<dyn SortAlgorithm<T> + Send>, display: D) -> Self {
        Self {
            data: Vec::new(),
            order: SortOrder::default(),
            metrics: Metrics::default(),
            display,
            algorithm,
        }
    }

    /// Replace the working array with a copy of `input` and zero the metrics.
    pub fn set_data(&mut self, input: &[T]) {
        self.data = input.to_vec();
        self.metrics.reset();
    }

    /// Takes effect on the next run; metrics of a finished run are untouched.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    #[inline]
    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn display_strategy(&self) -> &D {
        &self.display
    }

    pub fn display_strategy_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_parts(self) -> (Vec<T>, D) {
        (self.data, self.display)
    }

    /// One timed run: reset metrics, sort, record elapsed time, render the
    /// final array and emit the metrics report. Returns the report.
    ///
    /// `speed_ms` paces each rendered step and only matters when `gui` is set.
    pub fn execute_sort(&mut self, speed_ms: u64, gui: bool) -> MetricsReport {
        self.metrics.reset();
        debug!(
            "run start: algorithm={} len={} order={} gui={} speed_ms={}",
            self.algorithm.name(),
            self.data.len(),
            self.order,
            gui,
            speed_ms
        );

        let start = Instant::now();
        self.metrics.function_calls += 1;
        {
            let mut ctx = SortContext::new(
                &mut self.data,
                &mut self.metrics,
                &mut self.display,
                self.order,
                speed_ms,
                gui,
            );
            self.algorithm.sort(&mut ctx);
        }
        self.metrics.run_time = start.elapsed();

        if let Err(err) = self.display.render_final(&self.data) {
            warn!("display strategy failed to render final array: {err}");
        }
        let report = self.report();
        if let Err(err) = self.display.report(&report) {
            warn!("display strategy failed to emit metrics: {err}");
        }
        debug!(
            "run end: algorithm={} comparisons={} swaps={} loops={} max_depth={} secs={}",
            report.algorithm,
            report.comparisons,
            report.swaps,
            report.loop_iterations,
            report.max_recursion_depth,
            report.run_time_secs
        );
        report
    }

    /// Apply the configured algorithm and order, then run with the configured
    /// pacing. A sorter built around a different algorithm (custom ones
    /// included) is switched to `cfg.algorithm` first.
    pub fn run(&mut self, cfg: &RunConfig) -> MetricsReport {
        if cfg.algorithm.name() != self.algorithm.name() {
            debug!(
                "run config switches algorithm from '{}' to '{}'",
                self.algorithm.name(),
                cfg.algorithm
            );
            self.algorithm = cfg.algorithm.build();
        }
        self.set_sort_order(cfg.order);
        self.execute_sort(cfg.speed_ms, cfg.gui)
    }

    /// Render the current array through the display strategy.
    pub fn display(&mut self) {
        if let Err(err) = self.display.render(&self.data) {
            warn!("display strategy failed to render: {err}");
        }
    }

    /// Emit the metrics report of the last run through the display strategy.
    pub fn display_metrics(&mut self) {
        let report = self.report();
        if let Err(err) = self.display.report(&report) {
            warn!("display strategy failed to emit metrics: {err}");
        }
    }

    /// Snapshot of the current metrics, including the memory estimate.
    pub fn report(&self) -> MetricsReport {
        let memory =
            memory_estimate::<T>(self.data.capacity(), self.metrics.max_recursion_depth);
        MetricsReport::new(
            self.algorithm.name(),
            &self.metrics,
            self.data.len(),
            memory,
        )
    }
}

impl<T: fmt::Debug, D> fmt::Debug for Sorter<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("algorithm", &self.algorithm.name())
            .field("order", &self.order)
            .field("data", &self.data)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::BubbleSort;
    use crate::display::SnapshotRecorder;

    #[test]
    fn set_data_copies_and_resets() {
        let mut s = Sorter::new(BubbleSort, SnapshotRecorder::new());
        s.set_data(&[3, 2, 1]);
        s.execute_sort(0, false);
        assert!(s.metrics().swaps() > 0);

        let input = vec![9, 8];
        s.set_data(&input);
        assert_eq!(s.data(), &[9, 8]);
        assert_eq!(s.metrics(), &Metrics::default());
    }

    #[test]
    fn order_change_does_not_touch_previous_metrics() {
        let mut s = Sorter::new(BubbleSort, SnapshotRecorder::new());
        s.set_data(&[2, 1]);
        s.execute_sort(0, false);
        let before = s.metrics().clone();
        s.set_sort_order(SortOrder::Descending);
        assert_eq!(s.metrics(), &before);
        assert_eq!(s.data(), &[1, 2]);
    }

    #[test]
    fn execute_renders_final_and_reports() {
        let mut s = Sorter::new(BubbleSort, SnapshotRecorder::new());
        s.set_data(&[2, 1]);
        let report = s.execute_sort(0, false);
        let rec = s.display_strategy();
        assert!(rec.frames.is_empty());
        assert_eq!(rec.final_frame.as_deref(), Some(&[1, 2][..]));
        assert_eq!(rec.reports, vec![report.clone()]);
        assert_eq!(report.function_calls, 1);
        assert_eq!(report.algorithm, "bubble");
    }

    #[test]
    fn display_and_display_metrics_do_not_mutate() {
        let mut s = Sorter::new(BubbleSort, SnapshotRecorder::new());
        s.set_data(&[5, 4]);
        s.display();
        s.display_metrics();
        assert_eq!(s.data(), &[5, 4]);
        let rec = s.display_strategy();
        assert_eq!(rec.frames, vec![vec![5, 4]]);
        assert_eq!(rec.reports.len(), 1);
        assert_eq!(rec.reports[0].comparisons, 0);
    }

    #[test]
    fn run_switches_to_the_configured_algorithm() {
        let mut s = Sorter::new(BubbleSort, SnapshotRecorder::new());
        s.set_data(&[4, 10, 3, 5, 1]);
        let cfg = RunConfig {
            algorithm: Algorithm::Heap,
            ..RunConfig::default()
        };
        let report = s.run(&cfg);
        assert_eq!(s.algorithm_name(), "heap");
        assert_eq!(report.algorithm, "heap");
        assert_eq!(report.swaps, 9);
        assert_eq!(s.data(), &[1, 3, 4, 5, 10]);
    }
}
