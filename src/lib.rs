//! customplot crate root: re-exports and module wiring.
//!
//! Interactive chart series on top of egui/egui_plot:
//! - click-to-add scatter (`series::clickable`)
//! - Shift+drag rectangle selection scatter (`series::rect_selection`)
//! - parallel coordinates with highlight, selection and tooltips (`series::parallel`)
//! - scatter with error bars and a connector line (`series::scatter_line`)
//!
//! Series draw through the [`render::RenderContext`] trait and map coordinates
//! through [`data::transform::CoordinateTransform`], so they can be driven
//! headless with [`data::transform::LinearTransform`] and
//! [`render::RecordingContext`].

pub mod app;
pub mod behaviors;
pub mod color_scheme;
pub mod commands;
pub mod config;
pub mod data;
pub mod events;
pub mod panels;
pub mod render;
pub mod series;
pub mod view_models;

#[cfg(feature = "tiles")]
pub mod tiles;

pub use app::{run_demo, DemoApp};
pub use color_scheme::ColorScheme;
pub use config::{ConfigError, DemoConfig};
pub use data::export::ExportError;
pub use data::geometry::{DataPoint, DataRect, ScreenPoint, ScreenRect};
pub use data::transform::{CoordinateTransform, LinearTransform};
pub use events::{EventController, EventFilter, EventKind, SeriesEvent};
pub use render::{InteractiveSeries, Redraw, RenderContext};
