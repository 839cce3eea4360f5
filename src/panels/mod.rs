pub mod comparison_ui;
pub mod controls_ui;
pub mod log_ui;
pub mod panel_trait;
pub mod pareto_ui;

pub use comparison_ui::ComparisonPanel;
pub use controls_ui::{ControlAction, ControlsPanel};
pub use log_ui::LogPanel;
pub use panel_trait::{show_group, Panel};
pub use pareto_ui::ParetoPanel;
