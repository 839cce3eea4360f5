//! The presentation boundary the simulation core draws through.

use crate::data::log::LogLine;
use crate::data::pareto::ScatterGroup;

/// Sink for everything a tick wants to show.
///
/// Calls are fire-and-forget; the controller never inspects what the
/// presenter does with the data.
pub trait Presenter {
    /// Replace the Pareto scatter with `groups`.
    fn render_scatter_points(&mut self, groups: &[ScatterGroup]);
    /// Replace the comparison chart with the two `[time, value]` series.
    fn render_line_series(&mut self, series_a: &[[f64; 2]], series_b: &[[f64; 2]]);
    /// Append one line to the timing log.
    fn append_log_line(&mut self, line: &LogLine);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_scatter_points(&mut self, groups: &[ScatterGroup]) {
        (**self).render_scatter_points(groups)
    }

    fn render_line_series(&mut self, series_a: &[[f64; 2]], series_b: &[[f64; 2]]) {
        (**self).render_line_series(series_a, series_b)
    }

    fn append_log_line(&mut self, line: &LogLine) {
        (**self).append_log_line(line)
    }
}

/// Presenter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_scatter_points(&mut self, _groups: &[ScatterGroup]) {}
    fn render_line_series(&mut self, _series_a: &[[f64; 2]], _series_b: &[[f64; 2]]) {}
    fn append_log_line(&mut self, _line: &LogLine) {}
}

/// Presenter that keeps the latest frame and the full log in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub scatter_renders: usize,
    pub line_renders: usize,
    pub scatter: Vec<ScatterGroup>,
    pub series_a: Vec<[f64; 2]>,
    pub series_b: Vec<[f64; 2]>,
    pub log: Vec<LogLine>,
}

impl Presenter for RecordingPresenter {
    fn render_scatter_points(&mut self, groups: &[ScatterGroup]) {
        self.scatter_renders += 1;
        self.scatter = groups.to_vec();
    }

    fn render_line_series(&mut self, series_a: &[[f64; 2]], series_b: &[[f64; 2]]) {
        self.line_renders += 1;
        self.series_a = series_a.to_vec();
        self.series_b = series_b.to_vec();
    }

    fn append_log_line(&mut self, line: &LogLine) {
        self.log.push(*line);
    }
}
