//! Interactive chart series.
//!
//! Each series owns its points and interaction state, draws itself through a
//! [`RenderContext`](crate::render::RenderContext) and reports changes on an
//! [`EventController`](crate::events::EventController).

pub mod clickable;
pub mod parallel;
pub mod rect_selection;
pub mod scatter_line;

use eframe::egui::Color32;

use crate::data::geometry::DataPoint;

pub use clickable::{ClickableScatterConfig, ClickableScatterSeries};
pub use parallel::{Dimension, ParallelCoordinatesConfig, ParallelCoordinatesSeries, TooltipStyle};
pub use rect_selection::{RectSelectionConfig, RectSelectionScatterSeries};
pub use scatter_line::{ErrorPoint, ScatterLineConfig, ScatterLineSeries};

/// One scatter point with its inline interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    /// Marker radius in pixels.
    pub size: f64,
    /// Overrides the series' color policy when set.
    pub color: Option<Color32>,
    pub selected: bool,
}

impl PointRecord {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            color: None,
            selected: false,
        }
    }

    pub fn position(&self) -> DataPoint {
        DataPoint::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
