use customplot::panels::*;
use customplot::view_models::{
    ClickableScatterViewModel, ParallelCoordinatesViewModel, RectSelectionViewModel, ScatterLineViewModel,
};
use customplot::ColorScheme;

fn all_panels() -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(ClickableScatterPanel::new(ClickableScatterViewModel::default())),
        Box::new(RectSelectionPanel::new(RectSelectionViewModel::default())),
        Box::new(ParallelCoordinatesPanel::new(ParallelCoordinatesViewModel::default())),
        Box::new(ScatterLinePanel::new(ScatterLineViewModel::default())),
    ]
}

#[test]
fn panels_have_distinct_names_and_icons() {
    let panels = all_panels();
    let mut names: Vec<&str> = panels.iter().map(|p| p.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 4);
    assert!(panels.iter().all(|p| !p.icon().is_empty()));
}

#[test]
fn panels_start_visible() {
    let mut panels = all_panels();
    assert!(panels.iter().all(|p| p.state().visible));
    panels[0].state_mut().visible = false;
    assert!(!panels[0].state().visible);
}

#[test]
fn dark_scheme_lightens_parallel_axes() {
    let mut panel = ParallelCoordinatesPanel::new(ParallelCoordinatesViewModel::default());
    panel.apply_scheme(ColorScheme::Dark);
    assert_eq!(panel.vm.series.config.axis_color, ColorScheme::Dark.chart_foreground());
    panel.apply_scheme(ColorScheme::Light);
    assert_eq!(panel.vm.series.config.axis_color, egui::Color32::BLACK);
}
