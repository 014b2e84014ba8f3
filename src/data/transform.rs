//! Data-space ↔ screen-space mapping.
//!
//! Series only see the [`CoordinateTransform`] trait. In the UI it is backed
//! by the `egui_plot::PlotTransform` of the current frame; tests and headless
//! callers use [`LinearTransform`].

use egui_plot::{PlotPoint, PlotTransform};

use super::geometry::{DataPoint, ScreenPoint, ScreenRect};

pub trait CoordinateTransform {
    fn to_screen(&self, p: DataPoint) -> ScreenPoint;

    /// Inverse mapping. May yield non-finite coordinates when the view is
    /// degenerate; callers treat those as "not interactable".
    fn to_data(&self, p: ScreenPoint) -> DataPoint;

    /// Bounds of the drawable plot area in screen pixels.
    fn plot_area(&self) -> ScreenRect;
}

impl CoordinateTransform for PlotTransform {
    fn to_screen(&self, p: DataPoint) -> ScreenPoint {
        self.position_from_point(&PlotPoint::new(p.x, p.y)).into()
    }

    fn to_data(&self, p: ScreenPoint) -> DataPoint {
        let v = self.value_from_position(p.into());
        DataPoint::new(v.x, v.y)
    }

    fn plot_area(&self) -> ScreenRect {
        (*self.frame()).into()
    }
}

/// Affine mapping of a data window onto a screen rectangle, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform {
    pub area: ScreenRect,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
}

impl LinearTransform {
    pub fn new(area: ScreenRect, x_range: [f64; 2], y_range: [f64; 2]) -> Self {
        Self {
            area,
            x_range,
            y_range,
        }
    }
}

impl CoordinateTransform for LinearTransform {
    fn to_screen(&self, p: DataPoint) -> ScreenPoint {
        let [x0, x1] = self.x_range;
        let [y0, y1] = self.y_range;
        ScreenPoint::new(
            self.area.left + (p.x - x0) / (x1 - x0) * self.area.width,
            self.area.bottom() - (p.y - y0) / (y1 - y0) * self.area.height,
        )
    }

    fn to_data(&self, p: ScreenPoint) -> DataPoint {
        let [x0, x1] = self.x_range;
        let [y0, y1] = self.y_range;
        DataPoint::new(
            x0 + (p.x - self.area.left) / self.area.width * (x1 - x0),
            y0 + (self.area.bottom() - p.y) / self.area.height * (y1 - y0),
        )
    }

    fn plot_area(&self) -> ScreenRect {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_transform_inverts() {
        let t = LinearTransform::new(
            ScreenRect::new(50.0, 20.0, 400.0, 300.0),
            [0.0, 4.0],
            [-1.0, 2.0],
        );
        let p = DataPoint::new(1.5, 0.25);
        let back = t.to_data(t.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn y_axis_points_down() {
        let t = LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 1.0], [0.0, 1.0]);
        assert_eq!(t.to_screen(DataPoint::new(0.0, 0.0)), ScreenPoint::new(0.0, 100.0));
        assert_eq!(t.to_screen(DataPoint::new(1.0, 1.0)), ScreenPoint::new(100.0, 0.0));
    }

    #[test]
    fn zero_sized_area_gives_non_finite_inverse() {
        let t = LinearTransform::new(ScreenRect::new(0.0, 0.0, 0.0, 0.0), [0.0, 1.0], [0.0, 1.0]);
        assert!(!t.to_data(ScreenPoint::new(0.0, 0.0)).is_finite());
    }
}
