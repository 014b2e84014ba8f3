//! Dashboard layout that shows several demo panels side by side.

use egui_tiles::{Behavior, Container, ContainerKind, TileId, Tiles, Tree, UiResponse};

use crate::panels::Panel;

/// Identifier stored inside an `egui_tiles::Tree`, referencing a panel by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelPaneRef {
    pub index: usize,
}

/// Lay out `pane_count` panels across `columns` columns (rows filled top-down).
pub fn build_grid_tree(tree_id: &'static str, pane_count: usize, columns: usize) -> Tree<PanelPaneRef> {
    let columns = columns.max(1);
    if pane_count == 0 {
        return Tree::empty(tree_id);
    }

    let mut tiles: Tiles<PanelPaneRef> = Tiles::default();
    let pane_ids: Vec<_> = (0..pane_count)
        .map(|index| tiles.insert_pane(PanelPaneRef { index }))
        .collect();

    let rows: Vec<_> = pane_ids
        .chunks(columns)
        .map(|chunk| tiles.insert_container(Container::new(ContainerKind::Horizontal, chunk.to_vec())))
        .collect();

    let root = if rows.len() == 1 {
        rows[0]
    } else {
        tiles.insert_container(Container::new(ContainerKind::Vertical, rows))
    };

    Tree::new(tree_id, root, tiles)
}

/// Render the tree into the remaining space of `ui`.
pub fn render_tile_grid(
    ui: &mut egui::Ui,
    tree: &mut Tree<PanelPaneRef>,
    panels: &mut [Box<dyn Panel>],
    plot_id_prefix: &str,
) {
    let desired = ui.available_size();
    if desired.min_elem() <= 0.0 {
        ui.label("Expand the window to see the charts.");
        return;
    }

    ui.allocate_ui(desired, |dashboard_ui| {
        dashboard_ui.set_min_size(desired);
        dashboard_ui.set_clip_rect(dashboard_ui.max_rect());
        tree.set_width(desired.x);
        tree.set_height(desired.y);
        let mut behavior = PanelTilesBehavior {
            panels,
            plot_id_prefix,
        };
        tree.ui(&mut behavior, dashboard_ui);
    });
}

struct PanelTilesBehavior<'a> {
    panels: &'a mut [Box<dyn Panel>],
    plot_id_prefix: &'a str,
}

impl Behavior<PanelPaneRef> for PanelTilesBehavior<'_> {
    fn tab_title_for_pane(&mut self, pane: &PanelPaneRef) -> egui::WidgetText {
        match self.panels.get(pane.index) {
            Some(panel) => panel.name().into(),
            None => format!("Chart {}", pane.index + 1).into(),
        }
    }

    fn pane_ui(&mut self, ui: &mut egui::Ui, tile_id: TileId, pane: &mut PanelPaneRef) -> UiResponse {
        let Some(panel) = self.panels.get_mut(pane.index) else {
            ui.colored_label(egui::Color32::LIGHT_RED, "Missing chart");
            return UiResponse::None;
        };
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                ui.strong(panel.name());
                let plot_id = ui.id().with((self.plot_id_prefix, tile_id));
                panel.show(ui, plot_id);
            });
        UiResponse::None
    }
}
