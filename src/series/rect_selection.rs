//! Scatter series with rubber-band (rectangle drag) multi-selection.
//!
//! The drag itself lives in screen space; when it ends the rectangle is
//! converted to data space, replaces the persisted rectangle and selects
//! every point inside it (bounds inclusive).

use eframe::egui::Color32;

use crate::data::geometry::{nearest_within, DataPoint, DataRect, ScreenPoint, ScreenRect};
use crate::data::transform::CoordinateTransform;
use crate::events::{EventController, EventKind, SeriesEvent};
use crate::render::{bounds_of, InteractiveSeries, MarkerShape, MarkerStyle, Redraw, RenderContext};

use super::PointRecord;

/// Live-rectangle changes at or below this many pixels are ignored.
pub const RECT_DEADBAND_PX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RectSelectionConfig {
    pub selection_enabled: bool,
    pub selected_color: Color32,
    pub selected_size: f64,
    pub unselected_color: Color32,
    pub unselected_size: f64,
    pub marker_stroke: Color32,
    pub marker_stroke_width: f64,
    pub rect_stroke: Color32,
    pub rect_stroke_width: f64,
    pub rect_fill: Color32,
    pub show_persisted_rectangles: bool,
}

impl Default for RectSelectionConfig {
    fn default() -> Self {
        Self {
            selection_enabled: true,
            selected_color: Color32::RED,
            selected_size: 10.0,
            unselected_color: Color32::BLUE,
            unselected_size: 6.0,
            marker_stroke: Color32::BLACK,
            marker_stroke_width: 1.0,
            rect_stroke: Color32::ORANGE,
            rect_stroke_width: 2.0,
            rect_fill: Color32::from_rgba_unmultiplied(255, 165, 0, 50),
            show_persisted_rectangles: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_screen: ScreenPoint,
    start_data: DataPoint,
    live: ScreenRect,
}

#[derive(Debug)]
pub struct RectSelectionScatterSeries {
    pub config: RectSelectionConfig,
    points: Vec<PointRecord>,
    drag: Option<DragState>,
    persisted: Option<DataRect>,
    events: EventController,
    redraw: Option<Redraw>,
}

impl RectSelectionScatterSeries {
    pub fn new(config: RectSelectionConfig, events: EventController) -> Self {
        Self {
            config,
            points: Vec::new(),
            drag: None,
            persisted: None,
            events,
            redraw: None,
        }
    }

    pub fn set_points(&mut self, points: impl IntoIterator<Item = PointRecord>) {
        self.points = points
            .into_iter()
            .map(|p| PointRecord {
                selected: false,
                ..p
            })
            .collect();
        self.drag = None;
        self.persisted = None;
        self.request(Redraw::Full);
    }

    pub fn add_point(&mut self, point: PointRecord) {
        self.points.push(PointRecord {
            selected: false,
            ..point
        });
        self.request(Redraw::Full);
    }

    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    pub fn is_selecting(&self) -> bool {
        self.drag.is_some()
    }

    /// Rectangle being dragged right now, in screen pixels.
    pub fn live_rectangle(&self) -> Option<ScreenRect> {
        self.drag.map(|d| d.live)
    }

    /// Rectangle of the last completed drag, in data space.
    pub fn persisted_rectangle(&self) -> Option<DataRect> {
        self.persisted
    }

    pub fn is_selection_enabled(&self) -> bool {
        self.config.selection_enabled
    }

    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.config.selection_enabled = enabled;
        if !enabled && self.drag.take().is_some() {
            self.request(Redraw::Visual);
        }
    }

    pub fn start_rectangle_selection(&mut self, pos: ScreenPoint, transform: &dyn CoordinateTransform) {
        if !self.config.selection_enabled {
            return;
        }
        self.persisted = None;
        for p in &mut self.points {
            p.selected = false;
        }
        self.drag = Some(DragState {
            start_screen: pos,
            start_data: transform.to_data(pos),
            live: ScreenRect::from_corners(pos, pos),
        });
        tracing::debug!(x = pos.x, y = pos.y, "rectangle selection started");
        self.events
            .emit(SeriesEvent::new(EventKind::RECT_SELECTION_STARTED).at(pos));
        self.request(Redraw::Visual);
    }

    /// Move the free corner. Returns `true` if the live rectangle changed.
    pub fn update_rectangle_selection(&mut self, pos: ScreenPoint) -> bool {
        if !self.config.selection_enabled {
            return false;
        }
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let rect = ScreenRect::from_corners(drag.start_screen, pos);
        if !drag.live.differs_from(&rect, RECT_DEADBAND_PX) {
            return false;
        }
        drag.live = rect;
        self.request(Redraw::Visual);
        true
    }

    /// Complete the drag at `pos` and select the covered points.
    pub fn end_rectangle_selection(&mut self, pos: ScreenPoint, transform: &dyn CoordinateTransform) {
        if !self.config.selection_enabled {
            return;
        }
        let Some(drag) = self.drag.take() else {
            return;
        };
        let far = transform.to_data(pos);
        let rect = DataRect::from_corners(drag.start_data, far);

        self.persisted = Some(rect);
        for p in &mut self.points {
            p.selected = rect.contains(p.x, p.y);
        }
        let indices = self.selected_indices();
        tracing::debug!(selected = indices.len(), "rectangle selection ended");
        self.events.emit(
            SeriesEvent::new(EventKind::SELECTION_CHANGED | EventKind::RECT_SELECTION_ENDED)
                .with_selection(indices, Some(rect))
                .at(pos),
        );
        self.request(Redraw::Visual);
    }

    /// Drop an in-progress drag without touching the selection.
    pub fn abort_rectangle_selection(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("rectangle selection aborted");
            self.request(Redraw::Visual);
        }
    }

    pub fn select_point(&mut self, index: usize) {
        if let Some(p) = self.points.get_mut(index) {
            p.selected = true;
            self.selection_changed();
        }
    }

    pub fn deselect_point(&mut self, index: usize) {
        if let Some(p) = self.points.get_mut(index) {
            p.selected = false;
            self.selection_changed();
        }
    }

    pub fn clear_selection(&mut self) {
        for p in &mut self.points {
            p.selected = false;
        }
        self.selection_changed();
    }

    pub fn clear_persisted_rectangles(&mut self) {
        self.persisted = None;
        self.request(Redraw::Visual);
    }

    pub fn toggle_persisted_rectangles(&mut self) {
        self.config.show_persisted_rectangles = !self.config.show_persisted_rectangles;
        self.request(Redraw::Visual);
    }

    /// Selected indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_points(&self) -> Vec<PointRecord> {
        self.points.iter().filter(|p| p.selected).copied().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.points.iter().filter(|p| p.selected).count()
    }

    fn selection_changed(&mut self) {
        let indices = self.selected_indices();
        self.events
            .emit(SeriesEvent::new(EventKind::SELECTION_CHANGED).with_selection(indices, self.persisted));
        self.request(Redraw::Visual);
    }

    fn request(&mut self, r: Redraw) {
        self.redraw = Redraw::merge(self.redraw, r);
    }

    fn draw_band(&self, rc: &mut dyn RenderContext, rect: ScreenRect) {
        rc.draw_rect(
            rect,
            self.config.rect_fill,
            Some((self.config.rect_stroke, self.config.rect_stroke_width)),
        );
    }
}

impl InteractiveSeries for RectSelectionScatterSeries {
    fn render(&self, rc: &mut dyn RenderContext, transform: &dyn CoordinateTransform) {
        for p in &self.points {
            if !p.is_finite() {
                continue;
            }
            let center = transform.to_screen(p.position());
            let (color, size) = if p.selected {
                (self.config.selected_color, self.config.selected_size)
            } else {
                (self.config.unselected_color, self.config.unselected_size)
            };
            let style = MarkerStyle::filled(MarkerShape::Circle, size, color)
                .with_outline(self.config.marker_stroke, self.config.marker_stroke_width);
            rc.draw_marker(center, &style);
        }

        if self.config.show_persisted_rectangles {
            if let Some(r) = self.persisted {
                let a = transform.to_screen(DataPoint::new(r.left, r.top));
                let b = transform.to_screen(DataPoint::new(r.right(), r.bottom()));
                if a.is_finite() && b.is_finite() {
                    self.draw_band(rc, ScreenRect::from_corners(a, b));
                }
            }
        }

        if let Some(drag) = self.drag {
            self.draw_band(rc, drag.live);
        }
    }

    fn hit_test(&self, pos: ScreenPoint, transform: &dyn CoordinateTransform) -> Option<usize> {
        let candidates = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(i, p)| (i, transform.to_screen(p.position()).distance_to(pos)));
        nearest_within(candidates, self.config.selected_size)
    }

    fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }

    fn data_bounds(&self) -> Option<[f64; 4]> {
        bounds_of(self.points.iter().map(|p| (p.x, p.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::transform::LinearTransform;
    use crate::events::EventFilter;
    use crate::render::RecordingContext;

    fn transform() -> LinearTransform {
        LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 100.0], [0.0, 100.0])
    }

    fn series(events: &EventController) -> RectSelectionScatterSeries {
        let mut s = RectSelectionScatterSeries::new(RectSelectionConfig::default(), events.clone());
        s.set_points([
            PointRecord::new(10.0, 10.0, 5.0),
            PointRecord::new(50.0, 50.0, 5.0),
            PointRecord::new(90.0, 90.0, 5.0),
            PointRecord::new(f64::NAN, 50.0, 5.0),
        ]);
        s
    }

    #[test]
    fn drag_selects_points_inside() {
        let events = EventController::new();
        let rx = events.subscribe(EventFilter::only(EventKind::SELECTION_CHANGED));
        let mut s = series(&events);
        let t = transform();
        // data (0..60, 0..60) => screen x 0..60, y 40..100
        s.start_rectangle_selection(ScreenPoint::new(0.0, 100.0), &t);
        assert!(s.is_selecting());
        s.update_rectangle_selection(ScreenPoint::new(60.0, 40.0));
        s.end_rectangle_selection(ScreenPoint::new(60.0, 40.0), &t);

        assert!(!s.is_selecting());
        assert_eq!(s.selected_indices(), vec![0, 1]);
        let evt = rx.try_recv().unwrap();
        assert!(evt.kinds.contains(EventKind::RECT_SELECTION_ENDED));
        assert_eq!(evt.selection.unwrap().indices, vec![0, 1]);
    }

    #[test]
    fn selection_is_independent_of_drag_direction() {
        let t = transform();
        let corners = [
            (ScreenPoint::new(0.0, 100.0), ScreenPoint::new(60.0, 40.0)),
            (ScreenPoint::new(60.0, 40.0), ScreenPoint::new(0.0, 100.0)),
            (ScreenPoint::new(0.0, 40.0), ScreenPoint::new(60.0, 100.0)),
            (ScreenPoint::new(60.0, 100.0), ScreenPoint::new(0.0, 40.0)),
        ];
        let mut rects = Vec::new();
        for (a, b) in corners {
            let mut s = series(&EventController::new());
            s.start_rectangle_selection(a, &t);
            s.end_rectangle_selection(b, &t);
            assert_eq!(s.selected_indices(), vec![0, 1]);
            rects.push(s.persisted_rectangle().unwrap());
        }
        for r in &rects[1..] {
            assert!((r.left - rects[0].left).abs() < 1e-9);
            assert!((r.top - rects[0].top).abs() < 1e-9);
            assert!((r.width - rects[0].width).abs() < 1e-9);
            assert!((r.height - rects[0].height).abs() < 1e-9);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut s = series(&EventController::new());
        let t = transform();
        // exactly (50,50) on the corner
        s.start_rectangle_selection(ScreenPoint::new(50.0, 50.0), &t);
        s.end_rectangle_selection(ScreenPoint::new(95.0, 5.0), &t);
        assert_eq!(s.selected_indices(), vec![1, 2]);
    }

    #[test]
    fn new_drag_clears_previous_selection_and_rectangle() {
        let mut s = series(&EventController::new());
        let t = transform();
        s.start_rectangle_selection(ScreenPoint::new(0.0, 100.0), &t);
        s.end_rectangle_selection(ScreenPoint::new(60.0, 40.0), &t);
        s.start_rectangle_selection(ScreenPoint::new(80.0, 20.0), &t);
        assert!(s.persisted_rectangle().is_none());
        assert!(s.selected_indices().is_empty());
    }

    #[test]
    fn small_moves_are_swallowed() {
        let mut s = series(&EventController::new());
        let t = transform();
        s.start_rectangle_selection(ScreenPoint::new(10.0, 10.0), &t);
        s.take_redraw();
        assert!(!s.update_rectangle_selection(ScreenPoint::new(10.5, 10.9)));
        assert_eq!(s.take_redraw(), None);
        assert!(s.update_rectangle_selection(ScreenPoint::new(30.0, 30.0)));
        assert_eq!(s.live_rectangle(), Some(ScreenRect::new(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn disabled_selection_ignores_drags() {
        let mut s = series(&EventController::new());
        s.set_selection_enabled(false);
        s.start_rectangle_selection(ScreenPoint::new(0.0, 0.0), &transform());
        assert!(!s.is_selecting());
    }

    #[test]
    fn out_of_range_select_is_noop() {
        let events = EventController::new();
        let mut s = series(&events);
        let rx = events.subscribe_all();
        s.select_point(42);
        s.deselect_point(42);
        assert!(rx.try_recv().is_err());
        s.select_point(2);
        s.select_point(0);
        assert_eq!(s.selected_indices(), vec![0, 2]);
        assert_eq!(s.selected_points().len(), 2);
    }

    #[test]
    fn render_draws_band_only_when_visible() {
        let mut s = series(&EventController::new());
        let t = transform();
        s.start_rectangle_selection(ScreenPoint::new(0.0, 100.0), &t);
        s.end_rectangle_selection(ScreenPoint::new(60.0, 40.0), &t);

        let mut rc = RecordingContext::new();
        s.render(&mut rc, &t);
        assert_eq!(rc.rects().count(), 1);
        assert_eq!(rc.markers().filter(|(_, m)| m.fill == Color32::RED).count(), 2);

        s.toggle_persisted_rectangles();
        let mut rc = RecordingContext::new();
        s.render(&mut rc, &t);
        assert_eq!(rc.rects().count(), 0);
    }
}
