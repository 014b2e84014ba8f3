//! Screen/data points and rectangles plus the small amount of 2D geometry the
//! interactive series need (distances, nearest search, rectangle tests).
//!
//! Everything here is pure. Non-finite coordinates never produce an error:
//! they simply never match a search or a containment test.


/// Pixel coordinates inside the rendered plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<egui::Pos2> for ScreenPoint {
    fn from(p: egui::Pos2) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

impl From<ScreenPoint> for egui::Pos2 {
    fn from(p: ScreenPoint) -> Self {
        egui::pos2(p.x as f32, p.y as f32)
    }
}

/// Domain coordinates (the values the chart represents).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for DataPoint {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

/// Axis-aligned screen rectangle, always stored normalized (non-negative size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_corners(
            ScreenPoint::new(left, top),
            ScreenPoint::new(left + width, top + height),
        )
    }

    /// Rectangle spanned by two arbitrary corners; order does not matter.
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self {
            left,
            top,
            width: a.x.max(b.x) - left,
            height: a.y.max(b.y) - top,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Inclusive containment.
    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Clamp a point into the rectangle.
    pub fn clamp(&self, p: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            p.x.min(self.right()).max(self.left),
            p.y.min(self.bottom()).max(self.top),
        )
    }

    /// True when any of left/top/width/height moved by more than `deadband` pixels.
    pub fn differs_from(&self, other: &ScreenRect, deadband: f64) -> bool {
        (self.left - other.left).abs() > deadband
            || (self.top - other.top).abs() > deadband
            || (self.width - other.width).abs() > deadband
            || (self.height - other.height).abs() > deadband
    }
}

impl From<egui::Rect> for ScreenRect {
    fn from(r: egui::Rect) -> Self {
        Self::from_corners(r.min.into(), r.max.into())
    }
}

impl From<ScreenRect> for egui::Rect {
    fn from(r: ScreenRect) -> Self {
        egui::Rect::from_min_max(
            egui::pos2(r.left as f32, r.top as f32),
            egui::pos2(r.right() as f32, r.bottom() as f32),
        )
    }
}

/// Axis-aligned rectangle in data space, normalized like [`ScreenRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DataRect {
    pub fn from_corners(a: DataPoint, b: DataPoint) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self {
            left,
            top,
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Inclusive containment; NaN coordinates are never contained.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Distance from `p` to the segment `a`–`b` (projection clamped to the segment).
pub fn distance_to_segment(p: ScreenPoint, a: ScreenPoint, b: ScreenPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 < 1e-20 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    p.distance_to(ScreenPoint::new(a.x + t * dx, a.y + t * dy))
}

/// Minimum distance from `p` to any segment of the polyline.
///
/// Returns `None` when the polyline has fewer than two vertices or no segment
/// yields a finite distance.
pub fn polyline_distance(p: ScreenPoint, vertices: &[ScreenPoint]) -> Option<f64> {
    vertices
        .windows(2)
        .filter(|w| w[0].is_finite() && w[1].is_finite())
        .map(|w| distance_to_segment(p, w[0], w[1]))
        .filter(|d| d.is_finite())
        .fold(None, |best, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
}

/// Pick the candidate with the smallest distance not exceeding `tolerance`.
///
/// Strictly smaller distances win, so on exact ties the first candidate in
/// iteration order is kept. Non-finite distances are skipped.
pub fn nearest_within<I>(candidates: I, tolerance: f64) -> Option<usize>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, distance) in candidates {
        if !distance.is_finite() || distance > tolerance {
            continue;
        }
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(i, _)| i)
}
