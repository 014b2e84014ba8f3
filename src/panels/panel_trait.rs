use egui::{Id, Ui};

use crate::color_scheme::ColorScheme;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub visible: bool,
}

pub trait Panel {
    fn name(&self) -> &'static str;
    fn icon(&self) -> &'static str {
        ""
    }
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    /// Adjust chart colors that depend on the window theme.
    fn apply_scheme(&mut self, _scheme: ColorScheme) {}

    /// Toolbar and status line above the chart.
    fn render_menu(&mut self, _ui: &mut Ui) {}
    /// The chart itself. `plot_id` keeps widget ids apart when the same
    /// panel type is shown more than once.
    fn render_panel(&mut self, ui: &mut Ui, plot_id: Id);

    fn show(&mut self, ui: &mut Ui, plot_id: Id) {
        ui.horizontal_wrapped(|ui| self.render_menu(ui));
        ui.separator();
        self.render_panel(ui, plot_id);
    }
}
