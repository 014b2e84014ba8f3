//! Example: every chart demo at once in a 2 x 2 tile grid
//!
//! What it demonstrates
//! - Building a [`DemoApp`] and switching it to the dashboard view before the window opens.
//! - Each tile runs its own behavior, so Shift+drag in one tile never reaches another.
//!
//! How to run
//! ```bash
//! cargo run --example dashboard
//! ```

use eframe::{egui, NativeOptions};
use customplot::app::ViewMode;
use customplot::{ColorScheme, DemoApp, DemoConfig};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config = DemoConfig {
        window_title: "customplot dashboard".to_owned(),
        color_scheme: ColorScheme::Light,
        ..DemoConfig::default()
    };
    let mut app = DemoApp::new(config);
    app.mode = ViewMode::Dashboard;

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        "customplot dashboard",
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
