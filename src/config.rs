//! User-editable settings for the demo application.
//!
//! Everything is optional on disk: missing fields fall back to the series
//! defaults. Colors are stored as `[r, g, b, a]` (unmultiplied).

use std::fs;
use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color_scheme::ColorScheme;
use crate::render::MarkerShape;
use crate::series::{ClickableScatterConfig, ParallelCoordinatesConfig, RectSelectionConfig};

pub type Rgba = [u8; 4];

pub fn rgba(c: Color32) -> Rgba {
    c.to_srgba_unmultiplied()
}

pub fn color(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME is not set")]
    NoHome,
    #[error("config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-demo settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickableConfig {
    pub clickable: bool,
    pub marker_shape: MarkerShape,
    pub marker_size: f64,
    pub marker_fill: Rgba,
    pub new_point_size: f64,
    pub new_point_color: Rgba,
    pub clicked_color: Rgba,
    pub clicked_size: f64,
    pub tolerance: f64,
}

impl Default for ClickableConfig {
    fn default() -> Self {
        (&ClickableScatterConfig::default()).into()
    }
}

impl From<&ClickableScatterConfig> for ClickableConfig {
    fn from(c: &ClickableScatterConfig) -> Self {
        Self {
            clickable: c.clickable,
            marker_shape: c.marker_shape,
            marker_size: c.marker_size,
            marker_fill: rgba(c.marker_fill),
            new_point_size: c.new_point_size,
            new_point_color: rgba(c.new_point_color),
            clicked_color: rgba(c.clicked_color),
            clicked_size: c.clicked_size,
            tolerance: c.tolerance,
        }
    }
}

impl From<&ClickableConfig> for ClickableScatterConfig {
    fn from(c: &ClickableConfig) -> Self {
        Self {
            clickable: c.clickable,
            marker_shape: c.marker_shape,
            marker_size: c.marker_size,
            marker_fill: color(c.marker_fill),
            new_point_size: c.new_point_size,
            new_point_color: color(c.new_point_color),
            clicked_color: color(c.clicked_color),
            clicked_size: c.clicked_size,
            tolerance: c.tolerance,
            ..ClickableScatterConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub selection_enabled: bool,
    pub selected_color: Rgba,
    pub selected_size: f64,
    pub unselected_color: Rgba,
    pub unselected_size: f64,
    pub rect_stroke: Rgba,
    pub rect_stroke_width: f64,
    pub rect_fill: Rgba,
    pub show_persisted_rectangles: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        (&RectSelectionConfig::default()).into()
    }
}

impl From<&RectSelectionConfig> for SelectionConfig {
    fn from(c: &RectSelectionConfig) -> Self {
        Self {
            selection_enabled: c.selection_enabled,
            selected_color: rgba(c.selected_color),
            selected_size: c.selected_size,
            unselected_color: rgba(c.unselected_color),
            unselected_size: c.unselected_size,
            rect_stroke: rgba(c.rect_stroke),
            rect_stroke_width: c.rect_stroke_width,
            rect_fill: rgba(c.rect_fill),
            show_persisted_rectangles: c.show_persisted_rectangles,
        }
    }
}

impl From<&SelectionConfig> for RectSelectionConfig {
    fn from(c: &SelectionConfig) -> Self {
        Self {
            selection_enabled: c.selection_enabled,
            selected_color: color(c.selected_color),
            selected_size: c.selected_size,
            unselected_color: color(c.unselected_color),
            unselected_size: c.unselected_size,
            rect_stroke: color(c.rect_stroke),
            rect_stroke_width: c.rect_stroke_width,
            rect_fill: color(c.rect_fill),
            show_persisted_rectangles: c.show_persisted_rectangles,
            ..RectSelectionConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    pub line_color: Rgba,
    pub line_thickness: f64,
    pub line_opacity: f64,
    pub highlight_thickness: f64,
    pub selected_thickness: f64,
    pub unselected_opacity: f64,
    pub tick_count: usize,
    pub mouse_sensitivity: f64,
    pub show_labels_top: bool,
    pub show_labels_bottom: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            line_color: [70, 130, 180, 255],
            line_thickness: 1.5,
            ..(&ParallelCoordinatesConfig::default()).into()
        }
    }
}

impl From<&ParallelCoordinatesConfig> for ParallelConfig {
    fn from(c: &ParallelCoordinatesConfig) -> Self {
        Self {
            line_color: rgba(c.line_color),
            line_thickness: c.line_thickness,
            line_opacity: c.line_opacity,
            highlight_thickness: c.highlight_thickness,
            selected_thickness: c.selected_thickness,
            unselected_opacity: c.unselected_opacity,
            tick_count: c.tick_count,
            mouse_sensitivity: c.mouse_sensitivity,
            show_labels_top: c.show_labels_top,
            show_labels_bottom: c.show_labels_bottom,
        }
    }
}

impl From<&ParallelConfig> for ParallelCoordinatesConfig {
    fn from(c: &ParallelConfig) -> Self {
        Self {
            line_color: color(c.line_color),
            line_thickness: c.line_thickness,
            line_opacity: c.line_opacity,
            highlight_thickness: c.highlight_thickness,
            selected_thickness: c.selected_thickness,
            unselected_opacity: c.unselected_opacity,
            tick_count: c.tick_count,
            mouse_sensitivity: c.mouse_sensitivity,
            show_labels_top: c.show_labels_top,
            show_labels_bottom: c.show_labels_bottom,
            ..ParallelCoordinatesConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterLineConfig {
    pub line_color: Rgba,
    pub line_thickness: f64,
    pub marker_shape: MarkerShape,
    pub marker_size: f64,
    pub marker_color: Rgba,
    pub error_bar_color: Rgba,
    pub error_bar_thickness: f64,
    pub error_bar_stop_width: f64,
}

impl Default for ScatterLineConfig {
    fn default() -> Self {
        (&crate::series::ScatterLineConfig::default()).into()
    }
}

impl From<&crate::series::ScatterLineConfig> for ScatterLineConfig {
    fn from(c: &crate::series::ScatterLineConfig) -> Self {
        Self {
            line_color: rgba(c.line_color),
            line_thickness: c.line_thickness,
            marker_shape: c.marker_shape,
            marker_size: c.marker_size,
            marker_color: rgba(c.marker_color),
            error_bar_color: rgba(c.error_bar_color),
            error_bar_thickness: c.error_bar_thickness,
            error_bar_stop_width: c.error_bar_stop_width,
        }
    }
}

impl From<&ScatterLineConfig> for crate::series::ScatterLineConfig {
    fn from(c: &ScatterLineConfig) -> Self {
        Self {
            line_color: color(c.line_color),
            line_thickness: c.line_thickness,
            marker_shape: c.marker_shape,
            marker_size: c.marker_size,
            marker_color: color(c.marker_color),
            error_bar_color: color(c.error_bar_color),
            error_bar_thickness: c.error_bar_thickness,
            error_bar_stop_width: c.error_bar_stop_width,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Top level
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window_title: String,
    pub color_scheme: ColorScheme,
    pub clickable: ClickableConfig,
    pub selection: SelectionConfig,
    pub parallel: ParallelConfig,
    pub scatter_line: ScatterLineConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Custom Plot Demo".to_owned(),
            color_scheme: ColorScheme::default(),
            clickable: ClickableConfig::default(),
            selection: SelectionConfig::default(),
            parallel: ParallelConfig::default(),
            scatter_line: ScatterLineConfig::default(),
        }
    }
}

impl DemoConfig {
    /// `~/.customplot/config.yaml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var_os("HOME").ok_or(ConfigError::NoHome)?;
        Ok(PathBuf::from(home).join(".customplot").join("config.yaml"))
    }

    /// Load from the default path; a missing file yields the defaults.
    pub fn load_from_default_path() -> Result<DemoConfig, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(DemoConfig::default());
        }
        Self::load(&path)
    }

    /// Load from `path`; `.json` is read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<DemoConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = if is_json(path) {
            serde_json::from_str(&text)?
        } else {
            serde_yaml::from_str(&text)?
        };
        tracing::info!(?path, "config loaded");
        Ok(cfg)
    }

    /// Save to `path`, choosing the format from the extension like [`load`](Self::load).
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let text = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, text).map_err(io_err)?;
        Ok(())
    }

    pub fn save_to_default_path(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path()?;
        self.save(&path)?;
        Ok(path)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: DemoConfig = serde_yaml::from_str("window_title: Plots\nclickable:\n  tolerance: 4.0\n").unwrap();
        assert_eq!(cfg.window_title, "Plots");
        assert_eq!(cfg.clickable.tolerance, 4.0);
        assert_eq!(cfg.clickable.clicked_color, rgba(Color32::GOLD));
        assert_eq!(cfg.selection, SelectionConfig::default());
    }

    #[test]
    fn series_configs_survive_conversion() {
        let cfg = DemoConfig::default();
        assert_eq!(ClickableScatterConfig::from(&cfg.clickable), ClickableScatterConfig::default());
        let selection = RectSelectionConfig::from(&cfg.selection);
        assert_eq!(selection.selected_color, Color32::RED);
        assert_eq!(selection.rect_fill.a(), 50);
        let parallel = ParallelCoordinatesConfig::from(&cfg.parallel);
        assert_eq!(parallel.line_color, Color32::from_rgb(70, 130, 180));
        assert_eq!(parallel.vertical_margin, 30.0);
    }

    #[test]
    fn extension_selects_format() {
        assert!(is_json(Path::new("a/b.JSON")));
        assert!(!is_json(Path::new("a/b.yaml")));
        assert!(!is_json(Path::new("config")));
    }
}
