use egui::{Id, Ui};

use super::panel_trait::{Panel, PanelState};
use super::{command_bar, paint_series, plot_frame};
use crate::behaviors::{ClickableScatterBehavior, PointerTracker};
use crate::render::InteractiveSeries;
use crate::view_models::ClickableScatterViewModel;

pub struct ClickableScatterPanel {
    state: PanelState,
    pub vm: ClickableScatterViewModel,
    behavior: ClickableScatterBehavior,
    tracker: PointerTracker,
}

impl ClickableScatterPanel {
    pub fn new(vm: ClickableScatterViewModel) -> Self {
        Self {
            state: PanelState { visible: true },
            vm,
            behavior: ClickableScatterBehavior::default(),
            tracker: PointerTracker::default(),
        }
    }
}

impl Panel for ClickableScatterPanel {
    fn name(&self) -> &'static str {
        "Clickable scatter"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::CURSOR_CLICK
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui) {
        command_bar(ui, &mut self.vm);
        ui.separator();
        ui.label(self.vm.points_text());
        ui.label(&self.vm.status);
    }

    fn render_panel(&mut self, ui: &mut Ui, plot_id: Id) {
        // Panning would swallow clicks, so the plot only zooms here.
        let resp = plot_frame(ui, plot_id, self.vm.series.data_bounds(), false);
        let transform = resp.transform;
        for ev in self.tracker.poll(&resp.response, *transform.frame()) {
            self.behavior
                .handle(&ev, &mut [&mut self.vm.series], &transform);
        }
        self.vm.pump_events();
        paint_series(ui, &mut self.vm.series, &transform);
    }
}
