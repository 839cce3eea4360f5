//! Standalone application wrapper.
//!
//! [`ParetoApp`] owns the [`SimulationController`] and the panels it draws
//! into, and implements [`eframe::App`] so the demo can run as a native
//! window. Each frame it applies button clicks and remote requests, polls the
//! controller's timer and lays out the panels.

use std::time::{Duration, Instant};

use tracing::{error, info};

use super::dialogs::{error_dialog, exit_dialog, ExitChoice};
use super::views::ChartViews;
use crate::config::{DemoConfig, SimulationConfig};
use crate::controllers::{SimulationInfo, SimulationRemote};
use crate::data::export;
use crate::error::SimulationError;
use crate::panels::{show_group, ControlAction, ControlsPanel};
use crate::simulation::{RunState, SimulationController};

/// Repaint period while a remote controller may push requests.
const REMOTE_POLL: Duration = Duration::from_millis(100);

/// The demo window: controls, Pareto chart, comparison chart and log.
pub struct ParetoApp {
    pub controller: SimulationController,
    pub views: ChartViews,
    pub controls: ControlsPanel,
    /// Optional handle for driving the app from other threads.
    pub remote: Option<SimulationRemote>,
    quadratic_coefficient: f64,
    /// Message of the error dialog currently shown.
    error: Option<String>,
    show_exit_dialog: bool,
    allowed_to_close: bool,
}

impl ParetoApp {
    pub fn new(cfg: &DemoConfig) -> Self {
        let mut controller = SimulationController::new();
        let mut views = ChartViews::new(cfg.max_log_lines);
        controller.render_pareto(&mut views);
        Self {
            controller,
            views,
            controls: ControlsPanel::new(cfg.input),
            remote: None,
            quadratic_coefficient: cfg.quadratic_coefficient,
            error: None,
            show_exit_dialog: false,
            allowed_to_close: false,
        }
    }

    /// Attach a remote controller.
    pub fn with_remote(mut self, remote: SimulationRemote) -> Self {
        self.remote = Some(remote);
        self
    }

    fn show_error(&mut self, message: String) {
        error!("{message}");
        self.error = Some(message);
    }

    fn handle_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::Start => {
                let input = self.controls.input.snapped();
                self.controls.input = input;
                let started = SimulationConfig::from_input(&input, self.quadratic_coefficient)
                    .map_err(SimulationError::from)
                    .and_then(|cfg| self.controller.start_and_render(cfg, &mut self.views));
                if let Err(e) = started {
                    self.show_error(format!("Failed to start simulation: {e}"));
                }
            }
            ControlAction::Stop => self.controller.stop(),
            ControlAction::ExportCsv => self.export_csv(),
        }
    }

    fn export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::default_export_name())
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        match export::save_history_csv(&path, self.controller.history()) {
            Ok(()) => info!(?path, samples = self.controller.history().len(), "exported history"),
            Err(e) => self.show_error(format!("Failed to export history CSV: {e}")),
        }
    }

    fn apply_remote(&mut self) {
        let Some(remote) = self.remote.clone() else {
            return;
        };
        if let Err(e) = remote.apply(&mut self.controller, &mut self.views, self.quadratic_coefficient) {
            self.show_error(format!("Remote start rejected: {e}"));
        }
    }

    fn publish_remote(&self) {
        if let Some(remote) = &self.remote {
            remote.publish(SimulationInfo::from_controller(&self.controller));
        }
    }

    fn refresh_controls(&mut self) {
        let state = self.controller.state();
        let samples = state.history().len();
        self.controls.running = state.run_state() == RunState::Running;
        self.controls.can_export = samples > 0;
        self.controls.status = match state.run_state() {
            RunState::Idle => "Idle".to_string(),
            rs => format!(
                "{}: {} samples, {:.1} s",
                rs.label(),
                samples,
                state.elapsed_ms() as f64 / 1000.0
            ),
        };
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_exit_dialog = true;
        }
        if self.show_exit_dialog {
            match exit_dialog(ctx) {
                Some(ExitChoice::Yes) => {
                    self.show_exit_dialog = false;
                    self.allowed_to_close = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Some(ExitChoice::No) => self.show_exit_dialog = false,
                None => {}
            }
        }
    }
}

impl eframe::App for ParetoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_remote();
        let now = Instant::now();
        self.controller.poll(now, &mut self.views);
        self.publish_remote();
        self.refresh_controls();

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| show_group(ui, &mut self.views.log));

        egui::SidePanel::right("side_panel")
            .resizable(true)
            .default_width(460.0)
            .show(ctx, |ui| {
                show_group(ui, &mut self.controls);
                ui.add_space(4.0);
                show_group(ui, &mut self.views.comparison);
            });

        egui::CentralPanel::default().show(ctx, |ui| show_group(ui, &mut self.views.pareto));

        if let Some(action) = self.controls.take_action() {
            self.handle_action(action);
        }

        if let Some(msg) = self.error.clone() {
            if error_dialog(ctx, &msg) {
                self.error = None;
            }
        }
        self.handle_close_request(ctx);

        // Wake up for the next tick even without user input.
        let mut wait = self.controller.time_until_next_tick(Instant::now());
        if self.remote.is_some() {
            wait = Some(wait.map_or(REMOTE_POLL, |d| d.min(REMOTE_POLL)));
        }
        if let Some(d) = wait {
            ctx.request_repaint_after(d);
        }
    }
}
