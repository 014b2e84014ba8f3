//! Piecewise-linear color lookup keyed by a scalar.

use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub value: f64,
    pub color: Color32,
}

impl ColorStop {
    pub fn new(value: f64, color: Color32) -> Self {
        Self { value, color }
    }
}

/// Ordered `(value, color)` breakpoints. Values outside the covered domain
/// clamp to the first/last color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Builds a scale; stops are sorted by value and non-finite values dropped.
    pub fn new(stops: impl IntoIterator<Item = ColorStop>) -> Self {
        let mut stops: Vec<ColorStop> = stops.into_iter().filter(|s| s.value.is_finite()).collect();
        stops.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self { stops }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color for `value`, or `None` for an empty scale or a NaN input.
    pub fn color_at(&self, value: f64) -> Option<Color32> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        if value.is_nan() {
            return None;
        }
        if value <= first.value {
            return Some(first.color);
        }
        if value >= last.value {
            return Some(last.color);
        }
        for w in self.stops.windows(2) {
            let (a, b) = (w[0], w[1]);
            if value == a.value {
                return Some(a.color);
            }
            if value < b.value {
                let t = (value - a.value) / (b.value - a.value);
                return Some(lerp_color(a.color, b.color, t));
            }
        }
        Some(last.color)
    }
}

/// Channel-wise linear blend of r/g/b; the result is opaque.
pub fn lerp_color(a: Color32, b: Color32, t: f64) -> Color32 {
    let ch = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t) as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

/// Same hue with alpha `opacity * 255` (opacity clamped to [0, 1]).
pub fn with_opacity(color: Color32, opacity: f64) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    let a = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_scale() -> ColorScale {
        ColorScale::new([
            ColorStop::new(1.0, Color32::from_rgb(0, 0, 255)),
            ColorStop::new(0.0, Color32::from_rgb(255, 0, 0)),
            ColorStop::new(0.5, Color32::from_rgb(0, 128, 0)),
        ])
    }

    #[test]
    fn breakpoints_are_exact() {
        let s = rgb_scale();
        assert_eq!(s.color_at(0.0), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(s.color_at(0.5), Some(Color32::from_rgb(0, 128, 0)));
        assert_eq!(s.color_at(1.0), Some(Color32::from_rgb(0, 0, 255)));
    }

    #[test]
    fn outside_domain_clamps() {
        let s = rgb_scale();
        assert_eq!(s.color_at(-3.0), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(s.color_at(7.5), Some(Color32::from_rgb(0, 0, 255)));
    }

    #[test]
    fn midpoint_truncates_channels() {
        let s = rgb_scale();
        // halfway between red (255,0,0) and green (0,128,0)
        assert_eq!(s.color_at(0.25), Some(Color32::from_rgb(127, 64, 0)));
    }

    #[test]
    fn empty_scale_has_no_color() {
        assert_eq!(ColorScale::default().color_at(0.3), None);
        assert_eq!(rgb_scale().color_at(f64::NAN), None);
    }

    #[test]
    fn opacity_sets_alpha() {
        let c = with_opacity(Color32::from_rgb(10, 20, 30), 0.3);
        assert_eq!(c.a(), 76);
    }
}
