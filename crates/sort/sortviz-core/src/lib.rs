//! sortviz core (renderer-agnostic)
//!
//! Instrumented comparison sorts sharing one base: `Sorter` owns the working
//! array, the sort order, the metrics and a display strategy, and runs any
//! `SortAlgorithm` through a `SortContext` that only exposes counted
//! primitives (compare, swap, loop tick, recursive descent, render step).
//! Hosts (terminal, UI, tests) plug in by implementing `DisplayStrategy`.

pub mod algorithms;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod metrics;
pub mod order;
pub mod sorter;

// Re-exports for consumers (hosts)
pub use algorithms::{Algorithm, BubbleSort, HeapSort, InsertionSort, QuickSort, SelectionSort};
pub use config::RunConfig;
pub use context::SortContext;
pub use display::{BarChart, DisplayStrategy, DEFAULT_MAX_WIDTH, Magnitude, NumericList, SnapshotRecorder};
pub use error::SortError;
pub use metrics::{Metrics, MetricsReport};
pub use order::SortOrder;
pub use sorter::{SortAlgorithm, Sorter};
