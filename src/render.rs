//! Drawing seam between the series and the GUI.
//!
//! Series emit primitive draw calls through [`RenderContext`]. The egui
//! implementation is [`PainterContext`]; [`RecordingContext`] captures the
//! calls for headless tests and tooling.

use egui::{self, Align2, Color32, FontId, Shape, Stroke};
use serde::{Deserialize, Serialize};

use crate::data::geometry::{ScreenPoint, ScreenRect};
use crate::data::transform::CoordinateTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Marker radius in pixels.
    pub size: f64,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f64,
}

impl MarkerStyle {
    pub fn filled(shape: MarkerShape, size: f64, fill: Color32) -> Self {
        Self {
            shape,
            size,
            fill,
            stroke: Color32::TRANSPARENT,
            stroke_width: 0.0,
        }
    }

    pub fn with_outline(mut self, color: Color32, width: f64) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

/// Invalidation requested by a series after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Redraw {
    /// Repaint with the current data (hover, drag rectangle).
    Visual,
    /// Data changed; axes and extents must be recomputed too.
    Full,
}

impl Redraw {
    /// Keep the stronger of two pending requests.
    pub fn merge(pending: Option<Redraw>, next: Redraw) -> Option<Redraw> {
        Some(pending.map_or(next, |p| p.max(next)))
    }
}

pub trait RenderContext {
    fn draw_line(&mut self, points: &[ScreenPoint], color: Color32, thickness: f64);
    fn draw_marker(&mut self, center: ScreenPoint, style: &MarkerStyle);
    fn draw_text(&mut self, pos: ScreenPoint, text: &str, font: &FontSpec, color: Color32, anchor: Align2);
    fn draw_rect(&mut self, rect: ScreenRect, fill: Color32, stroke: Option<(Color32, f64)>);
    /// Width and height of `text` laid out on a single line.
    fn measure_text(&self, text: &str, font: &FontSpec) -> (f64, f64);
}

/// Common surface of the interactive series, used by panels.
pub trait InteractiveSeries {
    fn render(&self, rc: &mut dyn RenderContext, transform: &dyn CoordinateTransform);

    /// Index of the element under `pos` (point or line), if any.
    fn hit_test(&self, pos: ScreenPoint, transform: &dyn CoordinateTransform) -> Option<usize>;

    /// Take and clear the pending redraw request.
    fn take_redraw(&mut self) -> Option<Redraw>;

    /// Data extents `[min_x, min_y, max_x, max_y]` the plot should include.
    fn data_bounds(&self) -> Option<[f64; 4]> {
        None
    }
}

/// Extents of the finite points of an iterator, as `[min_x, min_y, max_x, max_y]`.
pub fn bounds_of(points: impl Iterator<Item = (f64, f64)>) -> Option<[f64; 4]> {
    points
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc, (x, y)| {
            Some(match acc {
                None => [x, y, x, y],
                Some([a, b, c, d]) => [a.min(x), b.min(y), c.max(x), d.max(y)],
            })
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// egui
// ─────────────────────────────────────────────────────────────────────────────

/// [`RenderContext`] over an `egui::Painter` (usually clipped to the plot frame).
pub struct PainterContext<'a> {
    painter: &'a egui::Painter,
}

impl<'a> PainterContext<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }

    fn font_id(font: &FontSpec) -> FontId {
        FontId::proportional(font.size as f32)
    }
}

impl RenderContext for PainterContext<'_> {
    fn draw_line(&mut self, points: &[ScreenPoint], color: Color32, thickness: f64) {
        if points.len() < 2 {
            return;
        }
        let pts: Vec<egui::Pos2> = points.iter().map(|p| (*p).into()).collect();
        self.painter
            .add(Shape::line(pts, Stroke::new(thickness as f32, color)));
    }

    fn draw_marker(&mut self, center: ScreenPoint, style: &MarkerStyle) {
        let c: egui::Pos2 = center.into();
        let r = style.size as f32;
        let stroke = Stroke::new(style.stroke_width as f32, style.stroke);
        match style.shape {
            MarkerShape::Circle => {
                self.painter.circle(c, r, style.fill, stroke);
            }
            MarkerShape::Square => {
                let rect = egui::Rect::from_center_size(c, egui::vec2(2.0 * r, 2.0 * r));
                self.painter.rect_filled(rect, 0.0, style.fill);
                self.painter
                    .rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Middle);
            }
            MarkerShape::Diamond => {
                let pts = vec![
                    c + egui::vec2(0.0, -r),
                    c + egui::vec2(r, 0.0),
                    c + egui::vec2(0.0, r),
                    c + egui::vec2(-r, 0.0),
                ];
                self.painter
                    .add(Shape::convex_polygon(pts, style.fill, stroke));
            }
            MarkerShape::Triangle => {
                let pts = vec![
                    c + egui::vec2(0.0, -r),
                    c + egui::vec2(r * 0.866, r * 0.5),
                    c + egui::vec2(-r * 0.866, r * 0.5),
                ];
                self.painter
                    .add(Shape::convex_polygon(pts, style.fill, stroke));
            }
            MarkerShape::Cross => {
                let s = Stroke::new(style.stroke_width.max(1.0) as f32, style.fill);
                self.painter
                    .line_segment([c + egui::vec2(-r, -r), c + egui::vec2(r, r)], s);
                self.painter
                    .line_segment([c + egui::vec2(-r, r), c + egui::vec2(r, -r)], s);
            }
        }
    }

    fn draw_text(&mut self, pos: ScreenPoint, text: &str, font: &FontSpec, color: Color32, anchor: Align2) {
        let p: egui::Pos2 = pos.into();
        let id = Self::font_id(font);
        self.painter.text(p, anchor, text, id.clone(), color);
        if font.bold {
            // no bold face in the default font set
            self.painter
                .text(p + egui::vec2(0.6, 0.0), anchor, text, id, color);
        }
    }

    fn draw_rect(&mut self, rect: ScreenRect, fill: Color32, stroke: Option<(Color32, f64)>) {
        let r: egui::Rect = rect.into();
        self.painter.rect_filled(r, 0.0, fill);
        if let Some((color, width)) = stroke {
            self.painter.rect_stroke(
                r,
                0.0,
                Stroke::new(width as f32, color),
                egui::StrokeKind::Middle,
            );
        }
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> (f64, f64) {
        let size = self
            .painter
            .layout_no_wrap(text.to_owned(), Self::font_id(font), Color32::WHITE)
            .size();
        (size.x as f64, size.y as f64)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        points: Vec<ScreenPoint>,
        color: Color32,
        thickness: f64,
    },
    Marker {
        center: ScreenPoint,
        style: MarkerStyle,
    },
    Text {
        pos: ScreenPoint,
        text: String,
        font: FontSpec,
        color: Color32,
    },
    Rect {
        rect: ScreenRect,
        fill: Color32,
        stroke: Option<(Color32, f64)>,
    },
}

/// Captures draw calls instead of painting. Text is measured with a fixed
/// advance of `0.6 * size` per character and a line height of `1.2 * size`.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&[ScreenPoint], Color32, f64)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                points,
                color,
                thickness,
            } => Some((points.as_slice(), *color, *thickness)),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = (ScreenPoint, &MarkerStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Marker { center, style } => Some((*center, style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (ScreenRect, Color32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, fill, .. } => Some((*rect, *fill)),
            _ => None,
        })
    }
}

impl RenderContext for RecordingContext {
    fn draw_line(&mut self, points: &[ScreenPoint], color: Color32, thickness: f64) {
        self.commands.push(DrawCommand::Line {
            points: points.to_vec(),
            color,
            thickness,
        });
    }

    fn draw_marker(&mut self, center: ScreenPoint, style: &MarkerStyle) {
        self.commands.push(DrawCommand::Marker {
            center,
            style: *style,
        });
    }

    fn draw_text(&mut self, pos: ScreenPoint, text: &str, font: &FontSpec, color: Color32, _anchor: Align2) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            font: *font,
            color,
        });
    }

    fn draw_rect(&mut self, rect: ScreenRect, fill: Color32, stroke: Option<(Color32, f64)>) {
        self.commands.push(DrawCommand::Rect { rect, fill, stroke });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> (f64, f64) {
        (text.chars().count() as f64 * font.size * 0.6, font.size * 1.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_merge_keeps_full() {
        assert_eq!(Redraw::merge(None, Redraw::Visual), Some(Redraw::Visual));
        assert_eq!(Redraw::merge(Some(Redraw::Full), Redraw::Visual), Some(Redraw::Full));
        assert_eq!(Redraw::merge(Some(Redraw::Visual), Redraw::Full), Some(Redraw::Full));
    }

    #[test]
    fn bounds_skip_nan() {
        let b = bounds_of([(1.0, 2.0), (f64::NAN, 9.0), (-1.0, 5.0)].into_iter());
        assert_eq!(b, Some([-1.0, 2.0, 1.0, 5.0]));
        assert_eq!(bounds_of(std::iter::empty()), None);
    }

    #[test]
    fn recording_measures_deterministically() {
        let rc = RecordingContext::new();
        assert_eq!(rc.measure_text("abcd", &FontSpec::regular(10.0)), (24.0, 12.0));
    }
}
