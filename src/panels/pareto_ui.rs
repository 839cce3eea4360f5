use egui_plot::{Legend, Plot, Points};

use super::panel_trait::Panel;
use crate::data::look::SeriesLook;
use crate::data::pareto::{ScatterGroup, AXIS_MAX};

/// Scatter chart of the (decorative) Pareto front.
#[derive(Default)]
pub struct ParetoPanel {
    pub groups: Vec<ScatterGroup>,
}

impl ParetoPanel {
    pub fn set_groups(&mut self, groups: &[ScatterGroup]) {
        self.groups = groups.to_vec();
    }
}

impl Panel for ParetoPanel {
    fn title(&self) -> &'static str {
        "Pareto set"
    }

    fn render_panel(&mut self, ui: &mut egui::Ui) {
        let plot = Plot::new("pareto_plot")
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .include_x(0.0)
            .include_x(AXIS_MAX)
            .include_y(0.0)
            .include_y(AXIS_MAX)
            .legend(Legend::default());
        plot.show(ui, |plot_ui| {
            for g in &self.groups {
                let look = SeriesLook::for_scatter(g.role);
                let name = g.role.label().unwrap_or_default();
                let points = Points::new(name, g.points.clone())
                    .radius(g.marker_size / 2.0)
                    .shape(look.marker)
                    .filled(true)
                    .color(look.color);
                plot_ui.points(points);
            }
        });
    }
}
