use egui::{self, Id, Ui};

use super::panel_trait::{Panel, PanelState};
use super::{command_bar, paint_series, plot_frame};
use crate::behaviors::{PointerTracker, RectSelectionBehavior};
use crate::render::InteractiveSeries;
use crate::view_models::RectSelectionViewModel;

pub struct RectSelectionPanel {
    state: PanelState,
    pub vm: RectSelectionViewModel,
    behavior: RectSelectionBehavior,
    tracker: PointerTracker,
}

impl RectSelectionPanel {
    pub fn new(vm: RectSelectionViewModel) -> Self {
        Self {
            state: PanelState { visible: true },
            vm,
            behavior: RectSelectionBehavior::default(),
            tracker: PointerTracker::default(),
        }
    }

    fn export_dialog(&mut self) {
        if !std::mem::take(&mut self.vm.export_requested) {
            return;
        }
        let name = format!("selection_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&name)
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            // Failures are reported on the status line.
            let _ = self.vm.export_selection_to(&path);
        }
    }

    fn selection_list(&self, ui: &mut Ui) {
        ui.strong(self.vm.selected_count_text());
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for info in self.vm.selected() {
                    ui.monospace(info.to_string());
                }
            });
    }
}

impl Panel for RectSelectionPanel {
    fn name(&self) -> &'static str {
        "Rectangle selection"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::SELECTION_PLUS
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui) {
        command_bar(ui, &mut self.vm);
        self.export_dialog();
        ui.separator();
        let mark = if self.vm.is_selection_enabled() { "on" } else { "off" };
        ui.label(format!("Selection {mark}"));
        ui.label(&self.vm.status);
    }

    fn render_panel(&mut self, ui: &mut Ui, plot_id: Id) {
        egui::SidePanel::right(plot_id.with("selected"))
            .resizable(true)
            .default_width(220.0)
            .show_inside(ui, |ui| self.selection_list(ui));

        let shift = ui.input(|i| i.modifiers.shift);
        let dragging = self.behavior.is_dragging();
        let resp = plot_frame(ui, plot_id, self.vm.series.data_bounds(), !shift && !dragging);
        let transform = resp.transform;
        for ev in self.tracker.poll(&resp.response, *transform.frame()) {
            self.behavior
                .handle(&ev, &mut [&mut self.vm.series], &transform);
        }
        self.vm.pump_events();
        paint_series(ui, &mut self.vm.series, &transform);
        if self.behavior.is_dragging() {
            ui.ctx().request_repaint();
        }
    }
}
