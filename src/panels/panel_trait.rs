use egui::Ui;

/// A titled section of the window.
pub trait Panel {
    fn title(&self) -> &'static str;
    /// Render the panel contents (without the surrounding frame).
    fn render_panel(&mut self, ui: &mut Ui);
}

/// Render `panel` inside a group frame with its title on top.
pub fn show_group(ui: &mut Ui, panel: &mut dyn Panel) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong(panel.title());
        ui.separator();
        panel.render_panel(ui);
    });
}
