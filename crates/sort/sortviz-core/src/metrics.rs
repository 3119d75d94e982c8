//! Run metrics: counters mutated while an algorithm runs, and the read-only
//! report produced once the run completes.

use std::fmt;
use std::mem;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Assumed stack cost of one recursive frame, in bytes. Illustrative only.
pub const FRAME_BYTES: usize = 64;

/// Live counters for a single run.
///
/// Only `SortContext` and `Sorter` mutate these; everything else reads them
/// through the accessors or a [`MetricsReport`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    pub(crate) comparisons: u64,
    pub(crate) swaps: u64,
    pub(crate) function_calls: u64,
    pub(crate) loop_iterations: u64,
    pub(crate) recursion_depth: u32,
    pub(crate) max_recursion_depth: u32,
    pub(crate) run_time: Duration,
}

impl Metrics {
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    #[inline]
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    #[inline]
    pub fn function_calls(&self) -> u64 {
        self.function_calls
    }

    #[inline]
    pub fn loop_iterations(&self) -> u64 {
        self.loop_iterations
    }

    /// Depth of the recursion currently in progress (0 outside a run).
    #[inline]
    pub fn recursion_depth(&self) -> u32 {
        self.recursion_depth
    }

    #[inline]
    pub fn max_recursion_depth(&self) -> u32 {
        self.max_recursion_depth
    }

    #[inline]
    pub fn run_time(&self) -> Duration {
        self.run_time
    }

    pub(crate) fn enter_frame(&mut self) {
        self.function_calls += 1;
        self.recursion_depth += 1;
        if self.recursion_depth > self.max_recursion_depth {
            self.max_recursion_depth = self.recursion_depth;
        }
    }

    pub(crate) fn leave_frame(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}

/// Estimated bytes held by a run: the array allocation, the `Vec` header and
/// one [`FRAME_BYTES`] frame per level of the deepest recursion.
pub fn memory_estimate<T>(capacity: usize, max_recursion_depth: u32) -> usize {
    capacity * mem::size_of::<T>()
        + mem::size_of::<Vec<T>>()
        + FRAME_BYTES * max_recursion_depth as usize
}

/// Read-only snapshot of a finished run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub algorithm: String,
    pub elements: usize,
    pub comparisons: u64,
    pub swaps: u64,
    pub function_calls: u64,
    pub loop_iterations: u64,
    pub max_recursion_depth: u32,
    pub memory_bytes: usize,
    pub run_time_secs: f64,
}

impl MetricsReport {
    pub fn new(algorithm: &str, metrics: &Metrics, elements: usize, memory_bytes: usize) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            elements,
            comparisons: metrics.comparisons,
            swaps: metrics.swaps,
            function_calls: metrics.function_calls,
            loop_iterations: metrics.loop_iterations,
            max_recursion_depth: metrics.max_recursion_depth,
            memory_bytes,
            run_time_secs: metrics.run_time.as_secs_f64(),
        }
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sorting Metrics:")?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Swaps: {}", self.swaps)?;
        writeln!(f, "  Function Calls: {}", self.function_calls)?;
        writeln!(f, "  Loop Iterations: {}", self.loop_iterations)?;
        writeln!(f, "  Max Recursion Depth: {}", self.max_recursion_depth)?;
        writeln!(f, "  Memory Usage: {} bytes", self.memory_bytes)?;
        writeln!(f, "  Run Time: {} seconds", self.run_time_secs)
    }
}
