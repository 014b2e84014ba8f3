use std::fmt;
use std::path::Path;
use std::sync::mpsc::Receiver;

use egui_phosphor::regular;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::commands::{CommandSource, RelayCommand};
use crate::data::export::{save_selection_csv, ExportError};
use crate::events::{EventController, EventFilter, EventKind, SeriesEvent};
use crate::series::{PointRecord, RectSelectionConfig, RectSelectionScatterSeries};

pub const SAMPLE_POINT_COUNT: usize = 50;
const SAMPLE_SEED: u64 = 42;

/// One row of the selected-points list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedPointInfo {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl fmt::Display for SelectedPointInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point {}: ({:.2}, {:.2}) size: {:.1}",
            self.index, self.x, self.y, self.size
        )
    }
}

pub struct RectSelectionViewModel {
    pub series: RectSelectionScatterSeries,
    pub status: String,
    selected: Vec<SelectedPointInfo>,
    /// Set by the export command; the panel opens a save dialog and clears it.
    pub export_requested: bool,
    events: Receiver<SeriesEvent>,
}

impl RectSelectionViewModel {
    pub fn new(config: RectSelectionConfig) -> Self {
        let controller = EventController::new();
        let events = controller.subscribe(EventFilter::only(
            EventKind::SELECTION_CHANGED | EventKind::RECT_SELECTION_STARTED,
        ));
        let mut vm = Self {
            series: RectSelectionScatterSeries::new(config, controller),
            status: String::new(),
            selected: Vec::new(),
            export_requested: false,
            events,
        };
        vm.generate_sample_data();
        vm
    }

    /// Replace the points with 50 seeded random points in `[0, 100)²`.
    pub fn generate_sample_data(&mut self) {
        let mut rng = SmallRng::seed_from_u64(SAMPLE_SEED);
        let points: Vec<PointRecord> = (0..SAMPLE_POINT_COUNT)
            .map(|_| {
                let x = rng.random::<f64>() * 100.0;
                let y = rng.random::<f64>() * 100.0;
                let size = 5.0 + rng.random::<f64>() * 5.0;
                PointRecord::new(x, y, size)
            })
            .collect();
        self.series.set_points(points);
        self.pump_events();
        self.selected.clear();
        self.status = format!(
            "Generated {} sample points. Hold Shift and drag to select.",
            SAMPLE_POINT_COUNT
        );
    }

    pub fn pump_events(&mut self) -> usize {
        let mut n = 0;
        while let Ok(ev) = self.events.try_recv() {
            n += 1;
            if ev.kinds.contains(EventKind::RECT_SELECTION_STARTED) {
                self.status = "Selecting...".to_owned();
            }
            if let Some(sel) = ev.selection {
                self.refresh_selected(&sel.indices);
                self.status = format!("{} points selected.", sel.indices.len());
            }
        }
        n
    }

    fn refresh_selected(&mut self, indices: &[usize]) {
        let points = self.series.points();
        self.selected = indices
            .iter()
            .filter_map(|&index| {
                points.get(index).map(|p| SelectedPointInfo {
                    index,
                    x: p.x,
                    y: p.y,
                    size: p.size,
                })
            })
            .collect();
    }

    pub fn selected(&self) -> &[SelectedPointInfo] {
        &self.selected
    }

    pub fn selected_count_text(&self) -> String {
        format!("{} points are selected.", self.selected.len())
    }

    pub fn has_selection(&self) -> bool {
        self.series.selected_count() > 0
    }

    pub fn is_selection_enabled(&self) -> bool {
        self.series.is_selection_enabled()
    }

    pub fn clear_selection(&mut self) {
        self.series.clear_selection();
        self.pump_events();
        self.status = "Selection cleared.".to_owned();
    }

    pub fn toggle_selection(&mut self) {
        let enabled = !self.series.is_selection_enabled();
        self.series.set_selection_enabled(enabled);
        self.status = if enabled {
            "Selection enabled.".to_owned()
        } else {
            "Selection disabled.".to_owned()
        };
    }

    pub fn clear_rectangles(&mut self) {
        self.series.clear_persisted_rectangles();
        self.status = "Rectangles cleared.".to_owned();
    }

    pub fn toggle_rectangles(&mut self) {
        self.series.toggle_persisted_rectangles();
        self.status = if self.series.config.show_persisted_rectangles {
            "Rectangles shown.".to_owned()
        } else {
            "Rectangles hidden.".to_owned()
        };
    }

    pub fn request_export(&mut self) {
        self.export_requested = true;
    }

    /// Write the current selection as CSV.
    pub fn export_selection_to(&mut self, path: &Path) -> Result<usize, ExportError> {
        let rows: Vec<(usize, PointRecord)> = self
            .series
            .selected_indices()
            .into_iter()
            .filter_map(|i| self.series.points().get(i).map(|p| (i, *p)))
            .collect();
        match save_selection_csv(path, &rows) {
            Ok(()) => {
                self.status = format!("Exported {} points to {}", rows.len(), path.display());
                Ok(rows.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "selection export failed");
                self.status = format!("Export failed: {e}");
                Err(e)
            }
        }
    }
}

impl CommandSource for RectSelectionViewModel {
    fn commands() -> Vec<RelayCommand<Self>> {
        vec![
            RelayCommand::new("Clear selection", regular::BROOM, Self::clear_selection)
                .with_guard(Self::has_selection),
            RelayCommand::new("Generate sample data", regular::SHUFFLE, Self::generate_sample_data),
            RelayCommand::new("Toggle selection", regular::TOGGLE_LEFT, Self::toggle_selection),
            RelayCommand::new("Clear rectangles", regular::ERASER, Self::clear_rectangles),
            RelayCommand::new("Toggle rectangles", regular::SELECTION, Self::toggle_rectangles),
            RelayCommand::new("Export selection", regular::EXPORT, Self::request_export)
                .with_guard(Self::has_selection),
        ]
    }
}

impl Default for RectSelectionViewModel {
    fn default() -> Self {
        Self::new(RectSelectionConfig::default())
    }
}
