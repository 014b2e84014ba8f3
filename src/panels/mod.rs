//! One egui panel per demo. A panel owns its view-model and the behavior that
//! feeds pointer input into the view-model's series.

pub mod clickable_ui;
pub mod panel_trait;
pub mod parallel_ui;
pub mod rect_selection_ui;
pub mod scatter_line_ui;

pub use clickable_ui::ClickableScatterPanel;
pub use panel_trait::{Panel, PanelState};
pub use parallel_ui::ParallelCoordinatesPanel;
pub use rect_selection_ui::RectSelectionPanel;
pub use scatter_line_ui::ScatterLinePanel;

use egui::{self, Ui};
use egui_plot::{Plot, PlotResponse, PlotTransform};

use crate::commands::CommandSource;
use crate::render::{InteractiveSeries, PainterContext};

/// Toolbar with one button per command; disabled when the guard says so.
pub fn command_bar<VM: CommandSource>(ui: &mut Ui, vm: &mut VM) {
    for cmd in VM::commands() {
        let enabled = cmd.can_execute(vm);
        if ui
            .add_enabled(enabled, egui::Button::new(cmd.caption()))
            .clicked()
        {
            cmd.execute(vm);
        }
    }
}

/// Empty egui_plot frame (axes and grid) sized to include `bounds` plus a
/// 10% margin. The series draw on top of it afterwards.
pub(crate) fn plot_frame(
    ui: &mut Ui,
    plot_id: egui::Id,
    bounds: Option<[f64; 4]>,
    allow_drag: bool,
) -> PlotResponse<()> {
    let mut plot = Plot::new(plot_id)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_drag(allow_drag);
    if let Some([x0, y0, x1, y1]) = bounds {
        let mx = ((x1 - x0) * 0.1).max(0.5);
        let my = ((y1 - y0) * 0.1).max(0.5);
        plot = plot
            .include_x(x0 - mx)
            .include_x(x1 + mx)
            .include_y(y0 - my)
            .include_y(y1 + my);
    }
    plot.show(ui, |_plot_ui| {})
}

/// Draw `series` clipped to the plot frame and forward its redraw request.
pub(crate) fn paint_series<S: InteractiveSeries>(ui: &Ui, series: &mut S, transform: &PlotTransform) {
    let painter = ui.painter_at(*transform.frame());
    let mut rc = PainterContext::new(&painter);
    series.render(&mut rc, transform);
    if series.take_redraw().is_some() {
        ui.ctx().request_repaint();
    }
}
