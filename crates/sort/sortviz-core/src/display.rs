//! Display strategies: pluggable renderers for array snapshots and reports.
//!
//! A strategy owns its output target. Nothing here touches process-wide
//! console state; clearing the screen is an ANSI sequence written to the
//! strategy's own writer.

use std::fmt;
use std::io::{self, Write};

use crate::error::SortError;
use crate::metrics::MetricsReport;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const SEPARATOR_WIDTH: usize = 20;
/// Bar length cap applied unless a caller opts out.
pub const DEFAULT_MAX_WIDTH: usize = 120;
const BAR_CHUNK: &str = "################################################################";

/// Renders snapshots of the working array. Implementations must not retain
/// the borrowed snapshot; copy it if it has to outlive the call.
pub trait DisplayStrategy<T> {
    /// Render one intermediate snapshot.
    fn render(&mut self, snapshot: &[T]) -> Result<(), SortError>;

    /// Render the final array of a run. Defaults to a plain render.
    fn render_final(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        self.render(snapshot)
    }

    /// Emit the metrics report of a finished run.
    fn report(&mut self, report: &MetricsReport) -> Result<(), SortError>;
}

/// Length of the bar drawn for a value in [`BarChart`].
pub trait Magnitude {
    fn magnitude(&self) -> usize;
}

macro_rules! impl_magnitude_int {
    ($($t:ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                #[allow(unused_comparisons)]
                fn magnitude(&self) -> usize {
                    if *self <= 0 {
                        0
                    } else {
                        usize::try_from(*self).unwrap_or(usize::MAX)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_magnitude_float {
    ($($t:ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn magnitude(&self) -> usize {
                    if self.is_finite() && *self > 0.0 {
                        *self as usize
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_magnitude_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_magnitude_float!(f32, f64);

/// One row of `#` per element, each as long as the element's magnitude,
/// followed by a dashed separator. Bars are capped at [`DEFAULT_MAX_WIDTH`]
/// unless changed with `with_max_width` or `without_max_width`.
#[derive(Debug)]
pub struct BarChart<W = io::Stdout> {
    out: W,
    clear: bool,
    max_width: Option<usize>,
}

impl BarChart<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for BarChart<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> BarChart<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: true,
            max_width: Some(DEFAULT_MAX_WIDTH),
        }
    }

    /// Toggle the clear-screen sequence written before every frame.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Cap bar length so large values stay on screen.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Draw every bar at full magnitude. Huge values take as long to write
    /// as their length.
    pub fn without_max_width(mut self) -> Self {
        self.max_width = None;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `len` hashes and a newline without allocating the whole bar.
    fn write_bar(&mut self, len: usize) -> io::Result<()> {
        let mut left = len;
        while left > 0 {
            let n = left.min(BAR_CHUNK.len());
            self.out.write_all(&BAR_CHUNK.as_bytes()[..n])?;
            left -= n;
        }
        writeln!(self.out)
    }

    fn write_bars<T: Magnitude>(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        for value in snapshot {
            self.write_bar(self.bar_len(value.magnitude()))?;
        }
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        self.out.flush()?;
        Ok(())
    }

    fn bar_len(&self, magnitude: usize) -> usize {
        match self.max_width {
            Some(cap) => magnitude.min(cap),
            None => magnitude,
        }
    }
}

impl<T: Magnitude, W: Write> DisplayStrategy<T> for BarChart<W> {
    fn render(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.write_bars(snapshot)
    }

    fn render_final(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        writeln!(self.out, "Sorted Array:")?;
        self.write_bars(snapshot)
    }

    fn report(&mut self, report: &MetricsReport) -> Result<(), SortError> {
        write!(self.out, "{report}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Space-separated values on one line.
#[derive(Debug)]
pub struct NumericList<W = io::Stdout> {
    out: W,
}

impl NumericList<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for NumericList<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> NumericList<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_values<T: fmt::Display>(&mut self, snapshot: &[T]) -> io::Result<()> {
        for value in snapshot {
            write!(self.out, "{value} ")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<T: fmt::Display, W: Write> DisplayStrategy<T> for NumericList<W> {
    fn render(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        Ok(self.write_values(snapshot)?)
    }

    fn render_final(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        write!(self.out, "Sorted Array: ")?;
        Ok(self.write_values(snapshot)?)
    }

    fn report(&mut self, report: &MetricsReport) -> Result<(), SortError> {
        write!(self.out, "{report}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps a copy of every rendered frame and report, for replay by a host
/// or for inspection in tests.
#[derive(Clone, Debug)]
pub struct SnapshotRecorder<T> {
    pub frames: Vec<Vec<T>>,
    pub final_frame: Option<Vec<T>>,
    pub reports: Vec<MetricsReport>,
}

impl<T> Default for SnapshotRecorder<T> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            final_frame: None,
            reports: Vec::new(),
        }
    }
}

impl<T> SnapshotRecorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear();
        self.final_frame = None;
        self.reports.clear();
    }
}

impl<T: Clone> DisplayStrategy<T> for SnapshotRecorder<T> {
    fn render(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        self.frames.push(snapshot.to_vec());
        Ok(())
    }

    fn render_final(&mut self, snapshot: &[T]) -> Result<(), SortError> {
        self.final_frame = Some(snapshot.to_vec());
        Ok(())
    }

    fn report(&mut self, report: &MetricsReport) -> Result<(), SortError> {
        self.reports.push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_clamps_negatives_and_nan() {
        assert_eq!((-4i32).magnitude(), 0);
        assert_eq!(7u8.magnitude(), 7);
        assert_eq!(3.9f64.magnitude(), 3);
        assert_eq!(f32::NAN.magnitude(), 0);
        assert_eq!((-1.5f32).magnitude(), 0);
    }

    #[test]
    fn bar_chart_draws_rows_and_separator() {
        let mut chart = BarChart::new(Vec::new()).with_clear(false);
        chart.render(&[3, 0, 1]).unwrap();
        let text = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(text, "###\n\n#\n--------------------\n");
    }

    #[test]
    fn bar_chart_clears_and_caps() {
        let mut chart = BarChart::new(Vec::new()).with_max_width(2);
        chart.render(&[5u32]).unwrap();
        let text = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(text, format!("{CLEAR_SCREEN}##\n--------------------\n"));
    }

    #[test]
    fn bar_chart_caps_by_default() {
        let mut chart = BarChart::new(Vec::new()).with_clear(false);
        chart.render(&[u128::MAX, 10u128.pow(12)]).unwrap();
        let text = String::from_utf8(chart.into_inner()).unwrap();
        let bar = "#".repeat(DEFAULT_MAX_WIDTH);
        assert_eq!(text, format!("{bar}\n{bar}\n--------------------\n"));
    }

    #[test]
    fn bar_chart_uncapped_bars_span_chunks() {
        let mut chart = BarChart::new(Vec::new())
            .with_clear(false)
            .without_max_width();
        chart.render(&[300i64]).unwrap();
        let text = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(text, format!("{}\n--------------------\n", "#".repeat(300)));
    }

    #[test]
    fn bar_chart_final_frame_is_labelled() {
        let mut chart = BarChart::new(Vec::new()).with_clear(false);
        chart.render_final(&[1, 2]).unwrap();
        let text = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(text, "Sorted Array:\n#\n##\n--------------------\n");
    }

    #[test]
    fn numeric_list_formats_values() {
        let mut list = NumericList::new(Vec::new());
        list.render(&[1, 2, 3]).unwrap();
        list.render_final(&[4, 5]).unwrap();
        let text = String::from_utf8(list.into_inner()).unwrap();
        assert_eq!(text, "1 2 3 \nSorted Array: 4 5 \n");
    }

    #[test]
    fn recorder_copies_frames() {
        let mut rec = SnapshotRecorder::new();
        let data = vec![2, 1];
        rec.render(&data).unwrap();
        rec.render_final(&[1, 2]).unwrap();
        assert_eq!(rec.frames, vec![vec![2, 1]]);
        assert_eq!(rec.final_frame.as_deref(), Some(&[1, 2][..]));
    }
}
