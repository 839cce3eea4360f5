use egui_phosphor::regular::{FLOPPY_DISK, PLAY, STOP};

use super::panel_trait::Panel;
use crate::config::{
    UserInput, QUERY_COUNT_RANGE, QUERY_COUNT_STEP, UPDATE_FREQUENCY_RANGE, UPDATE_FREQUENCY_STEP,
};

/// A button press in the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Stop,
    ExportCsv,
}

/// Start/stop buttons and the query-parameter inputs.
#[derive(Default)]
pub struct ControlsPanel {
    pub input: UserInput,
    /// One-line run summary shown under the buttons.
    pub status: String,
    pub running: bool,
    pub can_export: bool,
    pending: Option<ControlAction>,
}

impl ControlsPanel {
    pub fn new(input: UserInput) -> Self {
        Self {
            input: input.snapped(),
            ..Default::default()
        }
    }

    /// Take the action clicked during the last render, if any.
    pub fn take_action(&mut self) -> Option<ControlAction> {
        self.pending.take()
    }
}

impl Panel for ControlsPanel {
    fn title(&self) -> &'static str {
        "Controls"
    }

    fn render_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(format!("{PLAY} Start")).clicked() {
                self.pending = Some(ControlAction::Start);
            }
            if ui
                .add_enabled(self.running, egui::Button::new(format!("{STOP} Stop")))
                .clicked()
            {
                self.pending = Some(ControlAction::Stop);
            }
            if ui
                .add_enabled(self.can_export, egui::Button::new(format!("{FLOPPY_DISK} Export CSV")))
                .on_hover_text("Save the samples of the current run")
                .clicked()
            {
                self.pending = Some(ControlAction::ExportCsv);
            }
        });
        if !self.status.is_empty() {
            ui.label(&self.status);
        }

        ui.add_space(6.0);
        ui.strong("Query parameters");
        egui::Grid::new("query_params").num_columns(2).show(ui, |ui| {
            ui.label("Query count:");
            ui.add(
                egui::Slider::new(&mut self.input.query_count, QUERY_COUNT_RANGE)
                    .step_by(f64::from(QUERY_COUNT_STEP)),
            );
            ui.end_row();

            ui.label("Update frequency (ms):");
            ui.add(
                egui::Slider::new(&mut self.input.update_frequency_ms, UPDATE_FREQUENCY_RANGE)
                    .step_by(f64::from(UPDATE_FREQUENCY_STEP)),
            );
            ui.end_row();
        });
    }
}
