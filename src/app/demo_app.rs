use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::DemoConfig;
use crate::panels::{
    ClickableScatterPanel, Panel, ParallelCoordinatesPanel, RectSelectionPanel, ScatterLinePanel,
};
use crate::view_models::{
    ClickableScatterViewModel, ParallelCoordinatesViewModel, RectSelectionViewModel,
    ScatterLineViewModel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One chart at a time, picked from the tab bar.
    Single,
    /// All charts in a tile grid.
    #[cfg(feature = "tiles")]
    Dashboard,
}

pub struct DemoApp {
    pub panels: Vec<Box<dyn Panel>>,
    pub active: usize,
    pub mode: ViewMode,
    config: DemoConfig,
    scheme_applied: bool,
    #[cfg(feature = "tiles")]
    tree: egui_tiles::Tree<crate::tiles::PanelPaneRef>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let mut panels: Vec<Box<dyn Panel>> = vec![
            Box::new(ClickableScatterPanel::new(ClickableScatterViewModel::new(
                (&config.clickable).into(),
            ))),
            Box::new(RectSelectionPanel::new(RectSelectionViewModel::new(
                (&config.selection).into(),
            ))),
            Box::new(ParallelCoordinatesPanel::new(ParallelCoordinatesViewModel::new(
                (&config.parallel).into(),
            ))),
            Box::new(ScatterLinePanel::new(ScatterLineViewModel::new(
                (&config.scatter_line).into(),
            ))),
        ];
        for p in &mut panels {
            p.apply_scheme(config.color_scheme);
        }
        Self {
            #[cfg(feature = "tiles")]
            tree: crate::tiles::build_grid_tree("customplot_dashboard", panels.len(), 2),
            panels,
            active: 0,
            mode: ViewMode::Single,
            config,
            scheme_applied: false,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.config.color_scheme = scheme;
        for p in &mut self.panels {
            p.apply_scheme(scheme);
        }
        self.scheme_applied = false;
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (i, panel) in self.panels.iter().enumerate() {
                let caption = format!("{} {}", panel.icon(), panel.name());
                let selected = self.mode == ViewMode::Single && self.active == i;
                if ui.selectable_label(selected, caption).clicked() {
                    self.active = i;
                    self.mode = ViewMode::Single;
                }
            }
            #[cfg(feature = "tiles")]
            {
                let caption = format!("{} Dashboard", egui_phosphor::regular::SQUARES_FOUR);
                if ui
                    .selectable_label(self.mode == ViewMode::Dashboard, caption)
                    .clicked()
                {
                    self.mode = ViewMode::Dashboard;
                }
            }

            ui.separator();
            let mut scheme = self.config.color_scheme;
            egui::ComboBox::from_id_salt("color_scheme")
                .selected_text(scheme.label())
                .show_ui(ui, |ui| {
                    for s in ColorScheme::all() {
                        ui.selectable_value(&mut scheme, *s, s.label());
                    }
                });
            if scheme != self.config.color_scheme {
                self.set_color_scheme(scheme);
            }
            if ui
                .button(format!("{} Save settings", egui_phosphor::regular::FLOPPY_DISK))
                .clicked()
            {
                match self.config.save_to_default_path() {
                    Ok(path) => tracing::info!(?path, "settings saved"),
                    Err(e) => tracing::warn!(error = %e, "failed to save settings"),
                }
            }
        });
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.scheme_applied {
            self.config.color_scheme.apply(ctx);
            self.scheme_applied = true;
        }

        egui::TopBottomPanel::top("customplot_top_bar").show(ctx, |ui| self.top_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            ViewMode::Single => {
                if let Some(panel) = self.panels.get_mut(self.active) {
                    let plot_id = ui.id().with(("customplot_single", self.active));
                    panel.show(ui, plot_id);
                }
            }
            #[cfg(feature = "tiles")]
            ViewMode::Dashboard => {
                crate::tiles::render_tile_grid(ui, &mut self.tree, &mut self.panels, "customplot_tile");
            }
        });
    }
}
