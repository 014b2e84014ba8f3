use egui::{self, Id, Sense, Ui};

use super::command_bar;
use super::panel_trait::{Panel, PanelState};
use crate::behaviors::{ParallelCoordinatesBehavior, PointerTracker};
use crate::color_scheme::ColorScheme;
use crate::data::geometry::ScreenRect;
use crate::data::transform::LinearTransform;
use crate::render::{InteractiveSeries, PainterContext};
use crate::view_models::ParallelCoordinatesViewModel;

pub struct ParallelCoordinatesPanel {
    state: PanelState,
    pub vm: ParallelCoordinatesViewModel,
    behavior: ParallelCoordinatesBehavior,
    tracker: PointerTracker,
}

impl ParallelCoordinatesPanel {
    pub fn new(vm: ParallelCoordinatesViewModel) -> Self {
        Self {
            state: PanelState { visible: true },
            vm,
            behavior: ParallelCoordinatesBehavior,
            tracker: PointerTracker::default(),
        }
    }
}

impl Panel for ParallelCoordinatesPanel {
    fn name(&self) -> &'static str {
        "Parallel coordinates"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::CHART_LINE_UP
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn apply_scheme(&mut self, scheme: ColorScheme) {
        self.vm.series.config.axis_color = scheme.chart_foreground();
    }

    fn render_menu(&mut self, ui: &mut Ui) {
        command_bar(ui, &mut self.vm);
        ui.separator();
        ui.label(&self.vm.status);
    }

    fn render_panel(&mut self, ui: &mut Ui, _plot_id: Id) {
        ui.vertical_centered(|ui| ui.strong(&self.vm.title));
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

        // The layout works in pixels; the unit ranges are never used for data.
        let transform = LinearTransform::new(ScreenRect::from(rect), [0.0, 1.0], [0.0, 1.0]);
        for ev in self.tracker.poll(&response, rect) {
            self.behavior.handle(&ev, &mut self.vm.series, &transform);
        }
        self.vm.pump_events();

        let mut rc = PainterContext::new(&painter);
        self.vm.series.render(&mut rc, &transform);
        if self.vm.series.take_redraw().is_some() {
            ui.ctx().request_repaint();
        }
        response.on_hover_cursor(egui::CursorIcon::Crosshair).context_menu(|ui| {
            if ui.button("Reset").clicked() {
                self.vm.reset();
                ui.close();
            }
        });
    }
}
