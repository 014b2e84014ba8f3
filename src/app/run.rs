//! Top-level entry point for running the demo as a native window.

use eframe::egui;

use crate::config::DemoConfig;

use super::DemoApp;

/// Open the demo window and block until it is closed.
pub fn run_demo(config: DemoConfig) -> eframe::Result<()> {
    let title = config.window_title.clone();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1200.0, 800.0)),
        ..Default::default()
    };
    let app = DemoApp::new(config);

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
