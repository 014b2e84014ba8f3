//! Geometry, coordinate transforms, color scales and CSV export.

pub mod color_scale;
pub mod export;
pub mod geometry;
pub mod transform;
