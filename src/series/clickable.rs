//! Scatter series where a click either activates the nearest point or appends
//! a new one at the clicked position.

use eframe::egui::Color32;

use crate::data::geometry::{nearest_within, DataPoint, ScreenPoint};
use crate::data::transform::CoordinateTransform;
use crate::events::{EventController, EventKind, SeriesEvent};
use crate::render::{bounds_of, InteractiveSeries, MarkerShape, MarkerStyle, Redraw, RenderContext};

use super::PointRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ClickableScatterConfig {
    pub clickable: bool,
    pub marker_shape: MarkerShape,
    pub marker_size: f64,
    pub marker_fill: Color32,
    pub marker_stroke: Color32,
    pub marker_stroke_width: f64,
    pub new_point_shape: MarkerShape,
    pub new_point_size: f64,
    pub new_point_color: Color32,
    pub clicked_color: Color32,
    pub clicked_size: f64,
    /// Pick radius in pixels.
    pub tolerance: f64,
}

impl Default for ClickableScatterConfig {
    fn default() -> Self {
        Self {
            clickable: true,
            marker_shape: MarkerShape::Circle,
            marker_size: 8.0,
            marker_fill: Color32::BLUE,
            marker_stroke: Color32::BLACK,
            marker_stroke_width: 1.0,
            new_point_shape: MarkerShape::Circle,
            new_point_size: 6.0,
            new_point_color: Color32::RED,
            clicked_color: Color32::GOLD,
            clicked_size: 10.0,
            tolerance: 10.0,
        }
    }
}

#[derive(Debug)]
pub struct ClickableScatterSeries {
    pub config: ClickableScatterConfig,
    points: Vec<PointRecord>,
    initial_count: usize,
    active: Option<usize>,
    events: EventController,
    redraw: Option<Redraw>,
}

impl ClickableScatterSeries {
    pub fn new(config: ClickableScatterConfig, events: EventController) -> Self {
        Self {
            config,
            points: Vec::new(),
            initial_count: 0,
            active: None,
            events,
            redraw: None,
        }
    }

    /// Replace all points; they become the "initial" points.
    pub fn set_initial_points(&mut self, points: impl IntoIterator<Item = PointRecord>) {
        self.points = points
            .into_iter()
            .map(|p| PointRecord { color: None, ..p })
            .collect();
        self.initial_count = self.points.len();
        self.active = None;
        self.request(Redraw::Full);
    }

    /// Append a point without emitting an event.
    pub fn add_point(&mut self, point: PointRecord) {
        self.points.push(point);
        self.request(Redraw::Full);
    }

    /// Treat every current point as an initial point.
    pub fn mark_initial_points(&mut self) {
        self.initial_count = self.points.len();
        for p in &mut self.points {
            p.color = None;
        }
        if let Some(a) = self.active {
            self.points[a].color = Some(self.config.clicked_color);
        }
    }

    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    pub fn added_count(&self) -> usize {
        self.points.len().saturating_sub(self.initial_count)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Color a point has when it is not active.
    pub fn original_color(&self, index: usize) -> Color32 {
        if index < self.initial_count {
            self.config.marker_fill
        } else {
            self.config.new_point_color
        }
    }

    /// Color the point is drawn with right now.
    pub fn display_color(&self, index: usize) -> Option<Color32> {
        let p = self.points.get(index)?;
        Some(p.color.unwrap_or_else(|| self.original_color(index)))
    }

    /// Handle a primary click at `pos`. Returns `true` when the click was
    /// consumed (a point was activated or added).
    pub fn handle_click(&mut self, pos: ScreenPoint, transform: &dyn CoordinateTransform) -> bool {
        if !self.config.clickable || !transform.plot_area().contains(pos) {
            return false;
        }
        let data = transform.to_data(pos);
        if !data.is_finite() {
            return false;
        }

        match self.hit_test(pos, transform) {
            Some(index) if self.active == Some(index) => {
                self.events.emit(
                    SeriesEvent::new(EventKind::POINT_CLICKED)
                        .with_point(index, self.points[index].position())
                        .at(pos),
                );
            }
            Some(index) => {
                if let Some(prev) = self.active.take() {
                    if let Some(p) = self.points.get_mut(prev) {
                        p.color = None;
                    }
                }
                self.points[index].color = Some(self.config.clicked_color);
                self.active = Some(index);
                tracing::debug!(index, "scatter point activated");
                self.request(Redraw::Full);
                self.events.emit(
                    SeriesEvent::new(EventKind::POINT_CLICKED)
                        .with_point(index, self.points[index].position())
                        .at(pos),
                );
            }
            None => {
                let index = self.push_new_point(data);
                tracing::debug!(index, x = data.x, y = data.y, "scatter point added");
                self.events.emit(
                    SeriesEvent::new(EventKind::POINT_ADDED)
                        .with_point(index, data)
                        .at(pos),
                );
            }
        }
        true
    }

    fn push_new_point(&mut self, at: DataPoint) -> usize {
        self.points.push(PointRecord {
            color: Some(self.config.new_point_color),
            ..PointRecord::new(at.x, at.y, self.config.new_point_size)
        });
        self.request(Redraw::Full);
        self.points.len() - 1
    }

    /// Remove a point; out-of-range indices are ignored.
    pub fn remove_point_at(&mut self, index: usize) {
        if index >= self.points.len() {
            return;
        }
        let removed = self.points.remove(index);
        if index < self.initial_count {
            self.initial_count -= 1;
        }
        self.active = match self.active {
            Some(a) if a == index => None,
            Some(a) if a > index => Some(a - 1),
            other => other,
        };
        self.request(Redraw::Full);
        self.events.emit(
            SeriesEvent::new(EventKind::POINT_REMOVED).with_point(index, removed.position()),
        );
    }

    /// Drop every point appended after the initial ones.
    pub fn clear_added_points(&mut self) {
        while self.points.len() > self.initial_count {
            self.remove_point_at(self.points.len() - 1);
        }
    }

    pub fn remove_last_added_point(&mut self) -> bool {
        if self.points.len() > self.initial_count {
            self.remove_point_at(self.points.len() - 1);
            true
        } else {
            false
        }
    }

    fn request(&mut self, r: Redraw) {
        self.redraw = Redraw::merge(self.redraw, r);
    }
}

impl InteractiveSeries for ClickableScatterSeries {
    fn render(&self, rc: &mut dyn RenderContext, transform: &dyn CoordinateTransform) {
        for (i, p) in self.points.iter().enumerate() {
            if !p.is_finite() {
                continue;
            }
            let center = transform.to_screen(p.position());
            if !center.is_finite() {
                continue;
            }
            let (shape, size) = if self.active == Some(i) {
                (self.config.marker_shape, self.config.clicked_size)
            } else if i < self.initial_count {
                (self.config.marker_shape, p.size)
            } else {
                (self.config.new_point_shape, p.size)
            };
            let fill = p.color.unwrap_or_else(|| self.original_color(i));
            let style = MarkerStyle::filled(shape, size, fill)
                .with_outline(self.config.marker_stroke, self.config.marker_stroke_width);
            rc.draw_marker(center, &style);
        }
    }

    fn hit_test(&self, pos: ScreenPoint, transform: &dyn CoordinateTransform) -> Option<usize> {
        let candidates = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(i, p)| (i, transform.to_screen(p.position()).distance_to(pos)));
        nearest_within(candidates, self.config.tolerance)
    }

    fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }

    fn data_bounds(&self) -> Option<[f64; 4]> {
        bounds_of(self.points.iter().map(|p| (p.x, p.y)))
    }
}
