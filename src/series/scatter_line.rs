//! Scatter series with x/y error bars whose points are also joined by a
//! connector line.

use eframe::egui::Color32;

use crate::data::geometry::{nearest_within, DataPoint, ScreenPoint};
use crate::data::transform::CoordinateTransform;
use crate::render::{bounds_of, InteractiveSeries, MarkerShape, MarkerStyle, Redraw, RenderContext};

/// A point with symmetric error extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorPoint {
    pub x: f64,
    pub y: f64,
    pub error_x: f64,
    pub error_y: f64,
}

impl ErrorPoint {
    pub fn new(x: f64, y: f64, error_x: f64, error_y: f64) -> Self {
        Self {
            x,
            y,
            error_x,
            error_y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLineConfig {
    pub line_color: Color32,
    pub line_thickness: f64,
    pub marker_shape: MarkerShape,
    pub marker_size: f64,
    pub marker_color: Color32,
    pub error_bar_color: Color32,
    pub error_bar_thickness: f64,
    /// Width of the caps at the end of each error bar.
    pub error_bar_stop_width: f64,
}

impl Default for ScatterLineConfig {
    fn default() -> Self {
        Self {
            line_color: Color32::from_rgb(70, 130, 180),
            line_thickness: 1.5,
            marker_shape: MarkerShape::Circle,
            marker_size: 8.0,
            marker_color: Color32::BLACK,
            error_bar_color: Color32::BLACK,
            error_bar_thickness: 1.0,
            error_bar_stop_width: 4.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScatterLineSeries {
    pub config: ScatterLineConfig,
    points: Vec<ErrorPoint>,
    redraw: Option<Redraw>,
}

impl ScatterLineSeries {
    pub fn new(config: ScatterLineConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            redraw: None,
        }
    }

    pub fn set_points(&mut self, points: Vec<ErrorPoint>) {
        self.points = points;
        self.redraw = Redraw::merge(self.redraw, Redraw::Full);
    }

    pub fn points(&self) -> &[ErrorPoint] {
        &self.points
    }

    /// Connector polylines in screen space. A non-finite point ends the
    /// current run; a point landing on the previous screen position adds no
    /// vertex.
    pub fn connector_runs(&self, transform: &dyn CoordinateTransform) -> Vec<Vec<ScreenPoint>> {
        let mut runs = Vec::new();
        let mut current: Vec<ScreenPoint> = Vec::new();
        for p in &self.points {
            let sp = if p.is_finite() {
                transform.to_screen(DataPoint::new(p.x, p.y))
            } else {
                ScreenPoint::new(f64::NAN, f64::NAN)
            };
            if !sp.is_finite() {
                if current.len() > 1 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
                continue;
            }
            if current.last() != Some(&sp) {
                current.push(sp);
            }
        }
        if current.len() > 1 {
            runs.push(current);
        }
        runs
    }

    fn render_error_bars(&self, rc: &mut dyn RenderContext, transform: &dyn CoordinateTransform, p: &ErrorPoint) {
        let c = &self.config;
        let half_stop = c.error_bar_stop_width / 2.0;
        if p.error_x > 0.0 {
            let l = transform.to_screen(DataPoint::new(p.x - p.error_x, p.y));
            let r = transform.to_screen(DataPoint::new(p.x + p.error_x, p.y));
            rc.draw_line(&[l, r], c.error_bar_color, c.error_bar_thickness);
            for end in [l, r] {
                rc.draw_line(
                    &[
                        ScreenPoint::new(end.x, end.y - half_stop),
                        ScreenPoint::new(end.x, end.y + half_stop),
                    ],
                    c.error_bar_color,
                    c.error_bar_thickness,
                );
            }
        }
        if p.error_y > 0.0 {
            let b = transform.to_screen(DataPoint::new(p.x, p.y - p.error_y));
            let t = transform.to_screen(DataPoint::new(p.x, p.y + p.error_y));
            rc.draw_line(&[b, t], c.error_bar_color, c.error_bar_thickness);
            for end in [b, t] {
                rc.draw_line(
                    &[
                        ScreenPoint::new(end.x - half_stop, end.y),
                        ScreenPoint::new(end.x + half_stop, end.y),
                    ],
                    c.error_bar_color,
                    c.error_bar_thickness,
                );
            }
        }
    }
}

impl InteractiveSeries for ScatterLineSeries {
    fn render(&self, rc: &mut dyn RenderContext, transform: &dyn CoordinateTransform) {
        for run in self.connector_runs(transform) {
            rc.draw_line(&run, self.config.line_color, self.config.line_thickness);
        }
        let marker = MarkerStyle::filled(
            self.config.marker_shape,
            self.config.marker_size,
            self.config.marker_color,
        );
        for p in self.points.iter().filter(|p| p.is_finite()) {
            self.render_error_bars(rc, transform, p);
            rc.draw_marker(transform.to_screen(DataPoint::new(p.x, p.y)), &marker);
        }
    }

    fn hit_test(&self, pos: ScreenPoint, transform: &dyn CoordinateTransform) -> Option<usize> {
        let candidates = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(i, p)| (i, transform.to_screen(DataPoint::new(p.x, p.y)).distance_to(pos)));
        nearest_within(candidates, self.config.marker_size)
    }

    fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }

    fn data_bounds(&self) -> Option<[f64; 4]> {
        bounds_of(self.points.iter().flat_map(|p| {
            [(p.x - p.error_x, p.y - p.error_y), (p.x + p.error_x, p.y + p.error_y)]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geometry::ScreenRect;
    use crate::data::transform::LinearTransform;
    use crate::render::RecordingContext;

    fn transform() -> LinearTransform {
        LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 10.0], [0.0, 10.0])
    }

    #[test]
    fn nan_breaks_the_connector() {
        let mut s = ScatterLineSeries::new(ScatterLineConfig::default());
        s.set_points(vec![
            ErrorPoint::new(0.0, 0.0, 0.0, 0.0),
            ErrorPoint::new(1.0, 1.0, 0.0, 0.0),
            ErrorPoint::new(f64::NAN, 2.0, 0.0, 0.0),
            ErrorPoint::new(3.0, 3.0, 0.0, 0.0),
            ErrorPoint::new(4.0, 3.0, 0.0, 0.0),
        ]);
        let runs = s.connector_runs(&transform());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1][0], ScreenPoint::new(30.0, 70.0));
    }

    #[test]
    fn duplicate_screen_points_add_no_segment() {
        let mut s = ScatterLineSeries::new(ScatterLineConfig::default());
        s.set_points(vec![
            ErrorPoint::new(1.0, 1.0, 0.0, 0.0),
            ErrorPoint::new(1.0, 1.0, 0.0, 0.0),
            ErrorPoint::new(2.0, 1.0, 0.0, 0.0),
        ]);
        let runs = s.connector_runs(&transform());
        assert_eq!(runs, vec![vec![ScreenPoint::new(10.0, 90.0), ScreenPoint::new(20.0, 90.0)]]);
    }

    #[test]
    fn markers_are_drawn_after_connector() {
        let mut s = ScatterLineSeries::new(ScatterLineConfig::default());
        s.set_points(vec![
            ErrorPoint::new(0.0, 0.0, 0.4, 0.2),
            ErrorPoint::new(1.0, 1.0, 0.0, 0.0),
        ]);
        let mut rc = RecordingContext::new();
        s.render(&mut rc, &transform());
        // connector, 2 bars + 4 caps, then markers
        assert_eq!(rc.lines().count(), 7);
        assert!(matches!(rc.commands[0], crate::render::DrawCommand::Line { thickness, .. } if thickness == 1.5));
        assert!(matches!(rc.commands.last(), Some(crate::render::DrawCommand::Marker { .. })));
        assert_eq!(rc.markers().count(), 2);
    }

    #[test]
    fn bounds_include_error_bars() {
        let mut s = ScatterLineSeries::new(ScatterLineConfig::default());
        s.set_points(vec![ErrorPoint::new(1.0, 2.0, 0.5, 0.25)]);
        assert_eq!(s.data_bounds(), Some([0.5, 1.75, 1.5, 2.25]));
    }
}
