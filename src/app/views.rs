use crate::data::log::LogLine;
use crate::data::pareto::ScatterGroup;
use crate::panels::{ComparisonPanel, LogPanel, ParetoPanel};
use crate::simulation::Presenter;

/// The three panels the simulation draws into.
#[derive(Default)]
pub struct ChartViews {
    pub pareto: ParetoPanel,
    pub comparison: ComparisonPanel,
    pub log: LogPanel,
}

impl ChartViews {
    pub fn new(max_log_lines: usize) -> Self {
        Self {
            log: LogPanel::new(max_log_lines),
            ..Default::default()
        }
    }
}

impl Presenter for ChartViews {
    fn render_scatter_points(&mut self, groups: &[ScatterGroup]) {
        self.pareto.set_groups(groups);
    }

    fn render_line_series(&mut self, series_a: &[[f64; 2]], series_b: &[[f64; 2]]) {
        self.comparison.set_series(series_a, series_b);
    }

    fn append_log_line(&mut self, line: &LogLine) {
        self.log.push(line.to_string());
    }
}
