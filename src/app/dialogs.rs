//! Small centred dialogs: exit confirmation and error message.


/// Answer to the exit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Yes,
    No,
}

fn centred(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Show the "really quit?" dialog; returns the choice once the user clicks.
pub fn exit_dialog(ctx: &egui::Context) -> Option<ExitChoice> {
    let mut choice = None;
    centred("Exit").show(ctx, |ui| {
        ui.label("Are you sure you want to exit?");
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                choice = Some(ExitChoice::Yes);
            }
            if ui.button("No").clicked() {
                choice = Some(ExitChoice::No);
            }
        });
    });
    choice
}

/// Show an error message; returns `true` once dismissed.
pub fn error_dialog(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;
    centred("Error").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(egui_phosphor::regular::WARNING)
                    .color(ui.visuals().warn_fg_color)
                    .size(20.0),
            );
            ui.label(message);
        });
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });
    dismissed
}
