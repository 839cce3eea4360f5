//! SeriesLook: visual styling for chart series.

use egui_plot::MarkerShape;

use super::log::SeriesKind;
use super::pareto::ScatterRole;

/// The visual presentation of a series (color, line width, marker).
#[derive(Debug, Clone)]
pub struct SeriesLook {
    pub color: egui::Color32,
    pub width: f32,
    pub marker: MarkerShape,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 1.5,
            marker: MarkerShape::Circle,
        }
    }
}

impl SeriesLook {
    /// Create a look with a color allocated from the palette by index.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Allocate a distinct color for the given series index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 6] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }

    /// Look of a comparison-chart line.
    pub fn for_series(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Optimal => Self::new(2),
            SeriesKind::Other => Self::new(0),
        }
    }

    /// Look of a Pareto scatter group.
    pub fn for_scatter(role: ScatterRole) -> Self {
        match role {
            ScatterRole::Candidate => Self {
                color: egui::Color32::RED,
                ..Default::default()
            },
            ScatterRole::Utopia => Self::new(1),
            ScatterRole::Optimal => Self::new(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_and_scatter_share_the_optimal_color() {
        assert_eq!(
            SeriesLook::for_series(SeriesKind::Optimal).color,
            SeriesLook::for_scatter(ScatterRole::Optimal).color
        );
        assert_ne!(
            SeriesLook::for_series(SeriesKind::Optimal).color,
            SeriesLook::for_series(SeriesKind::Other).color
        );
        assert_eq!(SeriesLook::for_scatter(ScatterRole::Candidate).color, egui::Color32::RED);
    }
}
