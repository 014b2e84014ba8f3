//! Pointer dispatchers that turn raw input into series operations.
//!
//! A panel polls egui once per frame through [`PointerTracker`] and feeds the
//! resulting [`PointerEvent`]s to the behavior of its demo. Each behavior
//! applies its modifier-key and drag policy and reports whether the event was
//! consumed; unconsumed events fall through to the view-model.

use std::time::{Duration, Instant};


use crate::data::geometry::ScreenPoint;
use crate::data::transform::CoordinateTransform;
use crate::series::{ClickableScatterSeries, ParallelCoordinatesSeries, RectSelectionScatterSeries};

/// Minimum spacing between two live-rectangle updates (about 60 Hz).
pub const DRAG_UPDATE_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    /// Primary button pressed.
    Down,
    /// Primary button released.
    Up,
    /// Pointer left the plot area.
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: ScreenPoint,
    pub shift: bool,
    pub time: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, pos: ScreenPoint, shift: bool, time: Instant) -> Self {
        Self {
            kind,
            pos,
            shift,
            time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Passthrough,
}

impl Handled {
    pub fn consumed(self) -> bool {
        self == Handled::Consumed
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// egui input
// ─────────────────────────────────────────────────────────────────────────────

/// Pointer state of one frame as seen from a single plot widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<egui::Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub shift: bool,
    /// The plot widget is the topmost thing under the pointer, or holds the
    /// current press.
    pub over: bool,
}

/// Translates egui's per-frame pointer state into [`PointerEvent`]s for one
/// plot rectangle.
///
/// Presses only count when the plot's own response owns the pointer, so
/// popups and windows layered above the plot keep their clicks. Once a press
/// started on the plot, moves and the release are reported wherever the
/// pointer goes.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
    pressed_here: bool,
    last_pos: Option<egui::Pos2>,
}

impl PointerTracker {
    pub fn poll(&mut self, response: &egui::Response, rect: egui::Rect) -> Vec<PointerEvent> {
        let ctx = &response.ctx;
        let (pos, pressed, down, released, shift) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.modifiers.shift,
            )
        });
        let on_top = pos.is_some_and(|p| {
            response.contains_pointer()
                && ctx.layer_id_at(p).is_none_or(|layer| layer == response.layer_id)
        });
        let sample = PointerSample {
            pos,
            pressed,
            down,
            released,
            shift,
            over: on_top || response.is_pointer_button_down_on(),
        };
        self.step(sample, rect, Instant::now())
    }

    pub fn step(&mut self, s: PointerSample, rect: egui::Rect, now: Instant) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        let Some(pos) = s.pos else {
            // pointer left the window
            let p = self.last_pos.map(ScreenPoint::from).unwrap_or_default();
            if self.pressed_here && (s.released || !s.down) {
                self.pressed_here = false;
                out.push(PointerEvent::new(PointerKind::Up, p, s.shift, now));
            }
            if std::mem::take(&mut self.inside) {
                out.push(PointerEvent::new(PointerKind::Leave, p, s.shift, now));
            }
            return out;
        };
        let sp = ScreenPoint::from(pos);
        let inside = s.over && rect.contains(pos);

        if self.last_pos != Some(pos) && (inside || self.inside || self.pressed_here) {
            out.push(PointerEvent::new(PointerKind::Move, sp, s.shift, now));
        }
        if s.pressed && inside {
            self.pressed_here = true;
            out.push(PointerEvent::new(PointerKind::Down, sp, s.shift, now));
        }
        if self.pressed_here && (s.released || !s.down) {
            self.pressed_here = false;
            out.push(PointerEvent::new(PointerKind::Up, sp, s.shift, now));
        }
        if self.inside && !inside {
            out.push(PointerEvent::new(PointerKind::Leave, sp, s.shift, now));
        }
        self.inside = inside;
        self.last_pos = Some(pos);
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clickable scatter
// ─────────────────────────────────────────────────────────────────────────────

/// Primary clicks go to the first clickable series that accepts them.
#[derive(Debug, Clone)]
pub struct ClickableScatterBehavior {
    pub enabled: bool,
}

impl Default for ClickableScatterBehavior {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ClickableScatterBehavior {
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        series: &mut [&mut ClickableScatterSeries],
        transform: &dyn CoordinateTransform,
    ) -> Handled {
        if !self.enabled || event.kind != PointerKind::Down {
            return Handled::Passthrough;
        }
        for s in series.iter_mut() {
            if s.handle_click(event.pos, transform) {
                return Handled::Consumed;
            }
        }
        Handled::Passthrough
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rectangle selection
// ─────────────────────────────────────────────────────────────────────────────

/// Shift + drag draws a selection rectangle on the first series with
/// selection enabled.
///
/// The drag keeps going while the pointer is outside the plot (positions are
/// clamped to the plot area) and only a release ends it. Releasing without
/// Shift drops the drag without selecting anything.
#[derive(Debug, Clone)]
pub struct RectSelectionBehavior {
    pub enabled: bool,
    dragging: bool,
    last_update: Option<Instant>,
}

impl Default for RectSelectionBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            dragging: false,
            last_update: None,
        }
    }
}

impl RectSelectionBehavior {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn handle(
        &mut self,
        event: &PointerEvent,
        series: &mut [&mut RectSelectionScatterSeries],
        transform: &dyn CoordinateTransform,
    ) -> Handled {
        match event.kind {
            PointerKind::Down if self.enabled && event.shift => {
                let Some(s) = first_enabled(series) else {
                    return Handled::Passthrough;
                };
                s.start_rectangle_selection(event.pos, transform);
                self.dragging = true;
                self.last_update = None;
                Handled::Consumed
            }
            PointerKind::Move if self.enabled && self.dragging && event.shift => {
                let due = self
                    .last_update
                    .is_none_or(|t| event.time.duration_since(t) >= DRAG_UPDATE_INTERVAL);
                if due {
                    if let Some(s) = first_enabled(series) {
                        s.update_rectangle_selection(transform.plot_area().clamp(event.pos));
                    }
                    self.last_update = Some(event.time);
                }
                Handled::Consumed
            }
            PointerKind::Up if self.dragging && event.shift => {
                if let Some(s) = first_enabled(series) {
                    s.end_rectangle_selection(transform.plot_area().clamp(event.pos), transform);
                }
                self.dragging = false;
                Handled::Consumed
            }
            PointerKind::Up if self.dragging => {
                for s in series.iter_mut() {
                    s.abort_rectangle_selection();
                }
                self.dragging = false;
                Handled::Passthrough
            }
            _ => Handled::Passthrough,
        }
    }
}

fn first_enabled<'a>(
    series: &'a mut [&mut RectSelectionScatterSeries],
) -> Option<&'a mut RectSelectionScatterSeries> {
    series
        .iter_mut()
        .find(|s| s.is_selection_enabled())
        .map(|s| &mut **s)
}

// ─────────────────────────────────────────────────────────────────────────────
// Parallel coordinates
// ─────────────────────────────────────────────────────────────────────────────

/// Moves update the highlight, primary presses select lines.
#[derive(Debug, Clone, Default)]
pub struct ParallelCoordinatesBehavior;

impl ParallelCoordinatesBehavior {
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        series: &mut ParallelCoordinatesSeries,
        transform: &dyn CoordinateTransform,
    ) -> Handled {
        let area = transform.plot_area();
        match event.kind {
            PointerKind::Move if area.contains(event.pos) => {
                series.update_highlight(event.pos, area);
                Handled::Passthrough
            }
            PointerKind::Down => {
                series.handle_mouse_down(event.pos, area);
                Handled::Consumed
            }
            PointerKind::Leave => {
                series.clear_highlight();
                Handled::Passthrough
            }
            _ => Handled::Passthrough,
        }
    }
}
