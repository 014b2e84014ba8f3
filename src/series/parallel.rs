//! Parallel-coordinates plot.
//!
//! D vertical axes are spread evenly across the plot area (inside a
//! horizontal margin). Line *i* is the polyline through `values[d][i]` on
//! every axis `d`. The line nearest to the pointer is highlighted; a click
//! selects it and pins a tooltip next to the click.

use eframe::egui::{Align2, Color32};

use crate::data::color_scale::{with_opacity, ColorScale};
use crate::data::geometry::{nearest_within, polyline_distance, ScreenPoint, ScreenRect};
use crate::data::transform::CoordinateTransform;
use crate::events::{EventController, EventKind, SeriesEvent};
use crate::render::{FontSpec, InteractiveSeries, Redraw, RenderContext};

/// One axis of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub label: String,
    pub values: Vec<f64>,
    /// `[min, max]` mapped to the bottom and top of the axis.
    pub range: [f64; 2],
}

impl Dimension {
    /// Dimension with a range padded by 10% of the value span on each side,
    /// or `[0, 1]` when there are no finite values.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let range = if min.is_finite() {
            let pad = (max - min) * 0.1;
            [min - pad, max + pad]
        } else {
            [0.0, 1.0]
        };
        Self {
            label: label.into(),
            values,
            range,
        }
    }

    pub fn with_range(label: impl Into<String>, values: Vec<f64>, range: [f64; 2]) -> Self {
        Self {
            label: label.into(),
            values,
            range,
        }
    }

    /// `(v - min) / (max - min)`; a zero-width range maps everything to 0.5.
    pub fn normalize(&self, v: f64) -> f64 {
        let [min, max] = self.range;
        let span = max - min;
        if span == 0.0 {
            0.5
        } else {
            (v - min) / span
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub background: Color32,
    pub border: Color32,
    pub border_thickness: f64,
    pub text: Color32,
    pub bold: bool,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgba_unmultiplied(255, 255, 255, 240),
            border: Color32::from_rgb(128, 128, 128),
            border_thickness: 1.0,
            text: Color32::BLACK,
            bold: false,
        }
    }
}

/// Builds tooltip text from `(line, dimensions, color values)`.
pub type TooltipFormatter = Box<dyn Fn(usize, &[Dimension], Option<&[f64]>) -> String>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParallelCoordinatesConfig {
    pub line_color: Color32,
    pub line_thickness: f64,
    pub line_opacity: f64,
    pub highlight_thickness: f64,
    pub highlight_opacity: f64,
    pub selected_thickness: f64,
    pub unselected_opacity: f64,
    pub tick_count: usize,
    /// Space kept free above and below the axes.
    pub vertical_margin: f64,
    /// Space kept free left of the first and right of the last axis.
    pub horizontal_margin: f64,
    /// Pick radius for lines in pixels.
    pub mouse_sensitivity: f64,
    pub axis_title_font_size: f64,
    pub axis_label_font_size: f64,
    pub tooltip_font_size: f64,
    pub tooltip_line_height: f64,
    pub tooltip_padding: f64,
    pub tick_length: f64,
    pub tooltip_offset: f64,
    pub axis_title_offset: f64,
    pub axis_label_offset: f64,
    pub tick_label_offset: f64,
    pub axis_color: Color32,
    pub axis_thickness: f64,
    pub show_labels_top: bool,
    pub show_labels_bottom: bool,
}

impl Default for ParallelCoordinatesConfig {
    fn default() -> Self {
        Self {
            line_color: Color32::BLUE,
            line_thickness: 1.0,
            line_opacity: 0.7,
            highlight_thickness: 3.0,
            highlight_opacity: 1.0,
            selected_thickness: 2.5,
            unselected_opacity: 0.3,
            tick_count: 5,
            vertical_margin: 30.0,
            horizontal_margin: 40.0,
            mouse_sensitivity: 20.0,
            axis_title_font_size: 12.0,
            axis_label_font_size: 10.0,
            tooltip_font_size: 11.0,
            tooltip_line_height: 16.0,
            tooltip_padding: 8.0,
            tick_length: 5.0,
            tooltip_offset: 15.0,
            axis_title_offset: 10.0,
            axis_label_offset: 20.0,
            tick_label_offset: 10.0,
            axis_color: Color32::BLACK,
            axis_thickness: 1.0,
            show_labels_top: true,
            show_labels_bottom: false,
        }
    }
}

/// Tooltip pinned by a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTooltip {
    pub anchor: ScreenPoint,
    pub line: usize,
}

/// Axis placement for one plot area.
#[derive(Debug, Clone, Copy)]
pub struct AxisLayout {
    pub area: ScreenRect,
    pub axis_count: usize,
    pub horizontal_margin: f64,
    pub vertical_margin: f64,
}

impl AxisLayout {
    pub fn axis_x(&self, index: usize) -> f64 {
        let available = self.area.width - 2.0 * self.horizontal_margin;
        let start = self.area.left + self.horizontal_margin;
        if self.axis_count < 2 {
            return start;
        }
        start + available * index as f64 / (self.axis_count - 1) as f64
    }

    pub fn top(&self) -> f64 {
        self.area.top + self.vertical_margin
    }

    pub fn bottom(&self) -> f64 {
        self.area.bottom() - self.vertical_margin
    }

    /// Screen y for a normalized value (0 = bottom, 1 = top).
    pub fn y_for(&self, norm: f64) -> f64 {
        let available = self.area.height - 2.0 * self.vertical_margin;
        self.bottom() - norm * available
    }
}

pub struct ParallelCoordinatesSeries {
    pub config: ParallelCoordinatesConfig,
    dimensions: Vec<Dimension>,
    color_values: Option<Vec<f64>>,
    color_scale: Option<ColorScale>,
    highlighted: Option<usize>,
    selected: Option<usize>,
    tooltip: Option<FixedTooltip>,
    pub tooltip_style: TooltipStyle,
    formatter: Option<TooltipFormatter>,
    events: EventController,
    redraw: Option<Redraw>,
}

impl ParallelCoordinatesSeries {
    pub fn new(config: ParallelCoordinatesConfig, events: EventController) -> Self {
        Self {
            config,
            dimensions: Vec::new(),
            color_values: None,
            color_scale: None,
            highlighted: None,
            selected: None,
            tooltip: None,
            tooltip_style: TooltipStyle::default(),
            formatter: None,
            events,
            redraw: None,
        }
    }

    /// Replace the data; interaction state is reset.
    pub fn set_dimensions(&mut self, dimensions: Vec<Dimension>) {
        self.dimensions = dimensions;
        self.highlighted = None;
        self.selected = None;
        self.tooltip = None;
        self.request(Redraw::Full);
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Per-line scalars looked up in the color scale. Without both values and
    /// a scale every line uses `line_color`.
    pub fn set_color_mapping(&mut self, values: Option<Vec<f64>>, scale: Option<ColorScale>) {
        self.color_values = values;
        self.color_scale = scale;
        self.request(Redraw::Visual);
    }

    pub fn color_values(&self) -> Option<&[f64]> {
        self.color_values.as_deref()
    }

    pub fn set_tooltip_formatter(&mut self, formatter: Option<TooltipFormatter>) {
        self.formatter = formatter;
        self.request(Redraw::Visual);
    }

    pub fn has_custom_tooltip(&self) -> bool {
        self.formatter.is_some()
    }

    pub fn set_tooltip_style(&mut self, style: TooltipStyle) {
        self.tooltip_style = style;
        self.request(Redraw::Visual);
    }

    pub fn highlighted_line(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selected_line(&self) -> Option<usize> {
        self.selected
    }

    pub fn fixed_tooltip(&self) -> Option<FixedTooltip> {
        self.tooltip
    }

    pub fn line_count(&self) -> usize {
        self.dimensions.first().map_or(0, |d| d.values.len())
    }

    pub fn layout(&self, area: ScreenRect) -> AxisLayout {
        AxisLayout {
            area,
            axis_count: self.dimensions.len(),
            horizontal_margin: self.config.horizontal_margin,
            vertical_margin: self.config.vertical_margin,
        }
    }

    /// Screen vertices of a line; stops at the first dimension lacking a value.
    pub fn line_vertices(&self, line: usize, layout: &AxisLayout) -> Vec<ScreenPoint> {
        self.dimensions
            .iter()
            .enumerate()
            .map_while(|(d, dim)| {
                dim.values
                    .get(line)
                    .map(|v| ScreenPoint::new(layout.axis_x(d), layout.y_for(dim.normalize(*v))))
            })
            .collect()
    }

    /// Nearest line within `mouse_sensitivity`, ties going to the lower index.
    pub fn find_nearest_line(&self, pos: ScreenPoint, area: ScreenRect) -> Option<usize> {
        let layout = self.layout(area);
        let candidates = (0..self.line_count()).filter_map(|i| {
            polyline_distance(pos, &self.line_vertices(i, &layout)).map(|d| (i, d))
        });
        nearest_within(candidates, self.config.mouse_sensitivity)
    }

    /// Recompute the highlighted line for a pointer move. Returns `true` if
    /// the highlight changed.
    pub fn update_highlight(&mut self, pos: ScreenPoint, area: ScreenRect) -> bool {
        let nearest = self.find_nearest_line(pos, area);
        if nearest == self.highlighted {
            return false;
        }
        self.highlighted = nearest;
        self.events.emit(
            SeriesEvent::new(EventKind::LINE_HIGHLIGHTED)
                .with_line(nearest)
                .at(pos),
        );
        self.request(Redraw::Visual);
        true
    }

    /// Drop the highlight (pointer left the plot).
    pub fn clear_highlight(&mut self) {
        if self.highlighted.take().is_some() {
            self.events
                .emit(SeriesEvent::new(EventKind::LINE_HIGHLIGHTED).with_line(None));
            self.request(Redraw::Visual);
        }
    }

    /// Primary click: toggle/replace the selected line, or clear it when the
    /// click hits nothing.
    pub fn handle_mouse_down(&mut self, pos: ScreenPoint, area: ScreenRect) {
        match self.find_nearest_line(pos, area) {
            Some(line) if self.selected == Some(line) => {
                self.selected = None;
                self.tooltip = None;
                tracing::debug!(line, "parallel line deselected");
                self.emit_selected(pos);
            }
            Some(line) => {
                self.selected = Some(line);
                self.tooltip = Some(FixedTooltip { anchor: pos, line });
                tracing::debug!(line, "parallel line selected");
                self.emit_selected(pos);
            }
            None => {
                if self.selected.is_some() || self.tooltip.is_some() {
                    self.selected = None;
                    self.tooltip = None;
                    self.emit_selected(pos);
                }
            }
        }
    }

    fn emit_selected(&mut self, pos: ScreenPoint) {
        self.events.emit(
            SeriesEvent::new(EventKind::LINE_SELECTED)
                .with_line(self.selected)
                .at(pos),
        );
        self.request(Redraw::Visual);
    }

    /// Clear highlight, selection and tooltip. Returns `true` if anything was set.
    pub fn reset_highlight_and_selection(&mut self) -> bool {
        let changed = self.highlighted.take().is_some()
            | self.selected.take().is_some()
            | self.tooltip.take().is_some();
        if changed {
            self.events.emit(SeriesEvent::new(EventKind::HIGHLIGHT_RESET));
            self.request(Redraw::Visual);
        }
        changed
    }

    fn base_color(&self, line: usize) -> Color32 {
        match (&self.color_values, &self.color_scale) {
            (Some(values), Some(scale)) => values
                .get(line)
                .and_then(|v| scale.color_at(*v))
                .unwrap_or(self.config.line_color),
            _ => self.config.line_color,
        }
    }

    /// Color (with opacity applied) and thickness a line is drawn with.
    pub fn line_visuals(&self, line: usize) -> (Color32, f64) {
        let c = &self.config;
        let (opacity, thickness) = if self.highlighted == Some(line) {
            (c.highlight_opacity, c.highlight_thickness)
        } else if self.selected == Some(line) {
            (c.line_opacity, c.selected_thickness)
        } else if self.selected.is_some() {
            (c.unselected_opacity, c.line_thickness)
        } else {
            (c.line_opacity, c.line_thickness)
        };
        (with_opacity(self.base_color(line), opacity), thickness)
    }

    /// Tooltip text for a line, from the custom formatter when one is set.
    pub fn tooltip_text(&self, line: usize) -> String {
        if let Some(f) = &self.formatter {
            return f(line, &self.dimensions, self.color_values.as_deref());
        }
        let mut out = vec![format!("Data Point {line}"), String::new()];
        for dim in &self.dimensions {
            if let Some(v) = dim.values.get(line) {
                out.push(format!("{}: {:.2}", dim.label, v));
            }
        }
        if let Some(c) = self.color_values.as_ref().and_then(|cv| cv.get(line)) {
            out.push(String::new());
            out.push(format!("Color Value: {c:.2}"));
        }
        out.join("\n")
    }

    /// Top-left corner for a `width` × `height` tooltip anchored at `click`.
    pub fn tooltip_position(&self, click: ScreenPoint, width: f64, height: f64, area: ScreenRect) -> ScreenPoint {
        let c = &self.config;
        let layout = self.layout(area);
        let n = self.dimensions.len();
        let mut x = click.x + c.tooltip_offset;
        let mut y = click.y - height - c.tooltip_offset;

        for d in 0..n {
            let axis = layout.axis_x(d);
            if (x + width / 2.0 - axis).abs() < width / 2.0 + c.tick_label_offset {
                if d + 1 < n {
                    x = (axis + layout.axis_x(d + 1) - width) / 2.0;
                } else if d > 0 {
                    x = (layout.axis_x(d - 1) + axis - width) / 2.0;
                }
            }
        }

        if x + width > area.right() {
            x = area.right() - width - c.tick_length;
        }
        if x < area.left {
            x = area.left + c.tick_length;
        }
        if y < area.top {
            y = click.y + c.tooltip_offset;
        }
        if y + height > area.bottom() {
            y = area.bottom() - height - c.tick_length;
        }
        ScreenPoint::new(x, y)
    }

    fn render_axes(&self, rc: &mut dyn RenderContext, layout: &AxisLayout) {
        let c = &self.config;
        let title_font = FontSpec::bold(c.axis_title_font_size);
        let label_font = FontSpec::regular(c.axis_label_font_size);
        for (d, dim) in self.dimensions.iter().enumerate() {
            let x = layout.axis_x(d);
            rc.draw_line(
                &[ScreenPoint::new(x, layout.top()), ScreenPoint::new(x, layout.bottom())],
                c.axis_color,
                c.axis_thickness,
            );
            if c.show_labels_top {
                rc.draw_text(
                    ScreenPoint::new(x, layout.top() - c.axis_title_offset),
                    &dim.label,
                    &title_font,
                    c.axis_color,
                    Align2::CENTER_BOTTOM,
                );
            }
            if c.show_labels_bottom {
                rc.draw_text(
                    ScreenPoint::new(x, layout.bottom() + c.axis_label_offset),
                    &dim.label,
                    &label_font,
                    Color32::from_rgb(128, 128, 128),
                    Align2::CENTER_TOP,
                );
            }
            let [min, max] = dim.range;
            let ticks = c.tick_count.max(1);
            for t in 0..=ticks {
                let value = min + (max - min) * t as f64 / ticks as f64;
                let y = layout.y_for(dim.normalize(value));
                rc.draw_line(
                    &[ScreenPoint::new(x - c.tick_length, y), ScreenPoint::new(x + c.tick_length, y)],
                    c.axis_color,
                    1.0,
                );
                rc.draw_text(
                    ScreenPoint::new(x + c.tick_label_offset, y),
                    &format!("{value:.1}"),
                    &label_font,
                    c.axis_color,
                    Align2::LEFT_CENTER,
                );
            }
        }
    }

    fn render_line(&self, rc: &mut dyn RenderContext, line: usize, layout: &AxisLayout) {
        let (color, thickness) = self.line_visuals(line);
        let vertices = self.line_vertices(line, layout);
        // non-finite values split the polyline
        for run in vertices.split(|p| !p.is_finite()) {
            if run.len() > 1 {
                rc.draw_line(run, color, thickness);
            }
        }
    }

    fn render_tooltip(&self, rc: &mut dyn RenderContext, area: ScreenRect) {
        let Some(tip) = self.tooltip else {
            return;
        };
        let c = &self.config;
        let style = &self.tooltip_style;
        let font = FontSpec {
            size: c.tooltip_font_size,
            bold: style.bold,
        };
        let text = self.tooltip_text(tip.line);
        let lines: Vec<&str> = text.split('\n').collect();
        let max_w = lines
            .iter()
            .map(|l| rc.measure_text(l, &font).0)
            .fold(0.0, f64::max);
        let width = max_w + 2.0 * c.tooltip_padding;
        let height = lines.len() as f64 * c.tooltip_line_height + 2.0 * c.tooltip_padding;
        let pos = self.tooltip_position(tip.anchor, width, height, area);

        rc.draw_rect(
            ScreenRect::new(pos.x, pos.y, width, height),
            style.background,
            Some((style.border, style.border_thickness)),
        );
        for (i, l) in lines.iter().enumerate() {
            rc.draw_text(
                ScreenPoint::new(
                    pos.x + c.tooltip_padding,
                    pos.y + c.tooltip_padding + i as f64 * c.tooltip_line_height,
                ),
                l,
                &font,
                style.text,
                Align2::LEFT_TOP,
            );
        }
    }

    fn request(&mut self, r: Redraw) {
        self.redraw = Redraw::merge(self.redraw, r);
    }
}

impl InteractiveSeries for ParallelCoordinatesSeries {
    fn render(&self, rc: &mut dyn RenderContext, transform: &dyn CoordinateTransform) {
        if self.dimensions.is_empty() {
            return;
        }
        let area = transform.plot_area();
        let layout = self.layout(area);
        self.render_axes(rc, &layout);

        // emphasized lines go last so they stay on top
        let emphasized = |i: usize| self.highlighted == Some(i) || self.selected == Some(i);
        for i in (0..self.line_count()).filter(|i| !emphasized(*i)) {
            self.render_line(rc, i, &layout);
        }
        let selected = self.selected.filter(|s| self.highlighted != Some(*s));
        for i in [selected, self.highlighted].into_iter().flatten() {
            if i < self.line_count() {
                self.render_line(rc, i, &layout);
            }
        }

        self.render_tooltip(rc, area);
    }

    fn hit_test(&self, pos: ScreenPoint, transform: &dyn CoordinateTransform) -> Option<usize> {
        self.find_nearest_line(pos, transform.plot_area())
    }

    fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::transform::LinearTransform;
    use crate::events::EventFilter;
    use crate::render::RecordingContext;

    fn area() -> ScreenRect {
        ScreenRect::new(0.0, 0.0, 400.0, 300.0)
    }

    // axes at x = 40, 200, 360; y = 270 - norm * 240
    fn series(events: &EventController) -> ParallelCoordinatesSeries {
        let mut s = ParallelCoordinatesSeries::new(ParallelCoordinatesConfig::default(), events.clone());
        s.set_dimensions(
            ["A", "B", "C"]
                .into_iter()
                .map(|l| Dimension::with_range(l, vec![0.0, 10.0, 5.0], [0.0, 10.0]))
                .collect(),
        );
        s.take_redraw();
        s
    }

    #[test]
    fn axes_are_evenly_spaced() {
        let s = series(&EventController::new());
        let layout = s.layout(area());
        assert_eq!(layout.axis_x(0), 40.0);
        assert_eq!(layout.axis_x(1), 200.0);
        assert_eq!(layout.axis_x(2), 360.0);
        assert_eq!(layout.y_for(0.0), 270.0);
        assert_eq!(layout.y_for(1.0), 30.0);

        let single = AxisLayout {
            axis_count: 1,
            ..layout
        };
        assert_eq!(single.axis_x(0), 40.0);
    }

    #[test]
    fn dimension_auto_range() {
        let d = Dimension::new("x", vec![1.0, 3.0]);
        assert!((d.range[0] - 0.8).abs() < 1e-12);
        assert!((d.range[1] - 3.2).abs() < 1e-12);
        assert_eq!(Dimension::new("e", vec![]).range, [0.0, 1.0]);
        let flat = Dimension::new("f", vec![2.0, 2.0]);
        assert_eq!(flat.normalize(2.0), 0.5);
    }

    #[test]
    fn nearest_line_within_sensitivity() {
        let s = series(&EventController::new());
        assert_eq!(s.find_nearest_line(ScreenPoint::new(100.0, 265.0), area()), Some(0));
        assert_eq!(s.find_nearest_line(ScreenPoint::new(100.0, 250.0), area()), Some(0));
        assert_eq!(s.find_nearest_line(ScreenPoint::new(100.0, 100.0), area()), None);
    }

    #[test]
    fn short_lines_stop_at_missing_value() {
        let mut s = series(&EventController::new());
        let mut dims = s.dimensions().to_vec();
        dims[1].values.truncate(1);
        s.set_dimensions(dims);
        let layout = s.layout(area());
        assert_eq!(s.line_vertices(0, &layout).len(), 3);
        assert_eq!(s.line_vertices(2, &layout).len(), 1);
        assert_eq!(s.find_nearest_line(ScreenPoint::new(40.0, 150.0), area()), None);
    }

    #[test]
    fn highlight_follows_pointer() {
        let events = EventController::new();
        let rx = events.subscribe(EventFilter::only(EventKind::LINE_HIGHLIGHTED));
        let mut s = series(&events);
        assert!(s.update_highlight(ScreenPoint::new(120.0, 35.0), area()));
        assert_eq!(s.highlighted_line(), Some(1));
        assert!(!s.update_highlight(ScreenPoint::new(121.0, 36.0), area()));
        assert!(s.update_highlight(ScreenPoint::new(120.0, 100.0), area()));
        assert_eq!(s.highlighted_line(), None);
        assert_eq!(rx.try_recv().unwrap().line, Some(1));
        assert_eq!(rx.try_recv().unwrap().line, None);
    }

    #[test]
    fn click_toggles_selection_and_tooltip() {
        let events = EventController::new();
        let mut s = series(&events);
        let on_line = ScreenPoint::new(100.0, 150.0);
        s.handle_mouse_down(on_line, area());
        assert_eq!(s.selected_line(), Some(2));
        assert_eq!(s.fixed_tooltip(), Some(FixedTooltip { anchor: on_line, line: 2 }));

        s.handle_mouse_down(on_line, area());
        assert_eq!(s.selected_line(), None);
        assert_eq!(s.fixed_tooltip(), None);

        s.handle_mouse_down(on_line, area());
        s.handle_mouse_down(ScreenPoint::new(100.0, 100.0), area());
        assert_eq!(s.selected_line(), None);
        assert_eq!(s.fixed_tooltip(), None);
    }

    #[test]
    fn visuals_follow_highlight_then_selection() {
        let mut s = series(&EventController::new());
        assert_eq!(s.line_visuals(0).1, 1.0);
        assert_eq!(s.line_visuals(0).0.a(), 178);

        s.handle_mouse_down(ScreenPoint::new(100.0, 150.0), area());
        s.update_highlight(ScreenPoint::new(100.0, 30.0), area());
        let (hc, ht) = s.line_visuals(1);
        assert_eq!((hc.a(), ht), (255, 3.0));
        let (sc, st) = s.line_visuals(2);
        assert_eq!((sc.a(), st), (178, 2.5));
        let (oc, ot) = s.line_visuals(0);
        assert_eq!((oc.a(), ot), (76, 1.0));
    }

    #[test]
    fn reset_reports_changes() {
        let events = EventController::new();
        let mut s = series(&events);
        assert!(!s.reset_highlight_and_selection());
        assert_eq!(s.take_redraw(), None);
        s.handle_mouse_down(ScreenPoint::new(100.0, 150.0), area());
        s.take_redraw();
        assert!(s.reset_highlight_and_selection());
        assert_eq!(s.take_redraw(), Some(Redraw::Visual));
        assert_eq!(s.selected_line(), None);
    }

    #[test]
    fn default_and_custom_tooltip_text() {
        let mut s = series(&EventController::new());
        assert_eq!(s.tooltip_text(2), "Data Point 2\n\nA: 5.00\nB: 5.00\nC: 5.00");
        s.set_color_mapping(Some(vec![0.0, 0.5, 1.0]), None);
        assert!(s.tooltip_text(2).ends_with("\n\nColor Value: 1.00"));
        s.set_tooltip_formatter(Some(Box::new(|line, dims, _| format!("#{line} of {}", dims.len()))));
        assert_eq!(s.tooltip_text(1), "#1 of 3");
    }

    #[test]
    fn tooltip_avoids_axes_and_edges() {
        let s = series(&EventController::new());
        assert_eq!(
            s.tooltip_position(ScreenPoint::new(390.0, 200.0), 50.0, 40.0, area()),
            ScreenPoint::new(345.0, 145.0)
        );
        assert_eq!(
            s.tooltip_position(ScreenPoint::new(170.0, 200.0), 50.0, 40.0, area()),
            ScreenPoint::new(255.0, 145.0)
        );
        assert_eq!(
            s.tooltip_position(ScreenPoint::new(100.0, 20.0), 50.0, 40.0, area()),
            ScreenPoint::new(115.0, 35.0)
        );
    }

    #[test]
    fn render_draws_axes_ticks_lines_and_tooltip() {
        let mut s = series(&EventController::new());
        s.set_color_mapping(
            Some(vec![0.0, 0.5, 1.0]),
            Some(ColorScale::new([
                crate::data::color_scale::ColorStop::new(0.0, Color32::RED),
                crate::data::color_scale::ColorStop::new(1.0, Color32::BLUE),
            ])),
        );
        s.update_highlight(ScreenPoint::new(100.0, 265.0), area());
        let t = LinearTransform::new(area(), [0.0, 1.0], [0.0, 1.0]);

        let mut rc = RecordingContext::new();
        s.render(&mut rc, &t);
        // 3 axes + 3 * 6 ticks + 3 lines
        assert_eq!(rc.lines().count(), 24);
        let (_, last_color, last_width) = rc.lines().last().unwrap();
        assert_eq!(last_width, 3.0);
        assert_eq!(last_color, Color32::RED);
        assert_eq!(rc.rects().count(), 0);

        s.handle_mouse_down(ScreenPoint::new(100.0, 265.0), area());
        let mut rc = RecordingContext::new();
        s.render(&mut rc, &t);
        assert_eq!(rc.rects().count(), 1);
        assert!(rc.texts().any(|t| t == "Data Point 0"));
    }
}
