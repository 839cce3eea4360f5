use egui_plot::{Legend, Line, Plot};

use super::panel_trait::Panel;
use crate::data::log::SeriesKind;
use crate::data::look::SeriesLook;

/// Line chart comparing the two generated series over the run.
#[derive(Default)]
pub struct ComparisonPanel {
    /// `[time, value_b]`
    pub optimal: Vec<[f64; 2]>,
    /// `[time, value_a]`
    pub other: Vec<[f64; 2]>,
}

impl ComparisonPanel {
    pub fn set_series(&mut self, series_a: &[[f64; 2]], series_b: &[[f64; 2]]) {
        self.other = series_a.to_vec();
        self.optimal = series_b.to_vec();
    }

    fn series(&self, kind: SeriesKind) -> &[[f64; 2]] {
        match kind {
            SeriesKind::Optimal => &self.optimal,
            SeriesKind::Other => &self.other,
        }
    }
}

impl Panel for ComparisonPanel {
    fn title(&self) -> &'static str {
        "Comparison chart"
    }

    fn render_panel(&mut self, ui: &mut egui::Ui) {
        Plot::new("comparison_plot")
            .allow_scroll(false)
            .x_axis_label("t, s")
            .legend(Legend::default())
            .auto_bounds(egui::Vec2b::TRUE)
            .show(ui, |plot_ui| {
                for kind in [SeriesKind::Optimal, SeriesKind::Other] {
                    let look = SeriesLook::for_series(kind);
                    let line = Line::new(kind.label(), self.series(kind).to_vec())
                        .color(look.color)
                        .width(look.width);
                    plot_ui.line(line);
                }
            });
    }
}
