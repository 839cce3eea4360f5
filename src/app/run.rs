//! Top-level entry point for running the demo as a native window.


use super::ParetoApp;
use crate::config::DemoConfig;
use crate::controllers::SimulationRemote;

/// Launch the demo in a native window.
///
/// 1. Constructs a [`ParetoApp`] from `cfg`, attaching `remote` if given.
/// 2. Sizes the window and sets its icon unless `cfg.native_options` does.
/// 3. Installs the Phosphor icon font and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_paretoplot(
    mut cfg: DemoConfig,
    remote: Option<SimulationRemote>,
) -> eframe::Result<()> {
    let mut app = ParetoApp::new(&cfg);
    if let Some(remote) = remote {
        app = app.with_remote(remote);
    }

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
