use egui::{Id, Ui};

use super::panel_trait::{Panel, PanelState};
use super::{command_bar, paint_series, plot_frame};
use crate::render::InteractiveSeries;
use crate::view_models::ScatterLineViewModel;

pub struct ScatterLinePanel {
    state: PanelState,
    pub vm: ScatterLineViewModel,
}

impl ScatterLinePanel {
    pub fn new(vm: ScatterLineViewModel) -> Self {
        Self {
            state: PanelState { visible: true },
            vm,
        }
    }
}

impl Panel for ScatterLinePanel {
    fn name(&self) -> &'static str {
        "Scatter line"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::CHART_LINE
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui) {
        command_bar(ui, &mut self.vm);
    }

    fn render_panel(&mut self, ui: &mut Ui, plot_id: Id) {
        let resp = plot_frame(ui, plot_id, self.vm.series.data_bounds(), true);
        paint_series(ui, &mut self.vm.series, &resp.transform);
    }
}
