// File: crates/dataplot-core/src/geometry.rs
// Summary: Pixel-space rectangles and the resolved geometry of one layout pass.

use crate::types::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rectangle whose width and height are never negative.
    pub fn from_ltwh_clamped(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width: width.max(0.0), height: height.max(0.0) }
    }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

/// Everything a render pass decided, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotLayout {
    /// Where data is drawn; its top-left is the origin for both axes' offsets.
    pub plot: Rect,
    /// The L-shaped axis frame: top of the y-axis, the corner, end of the x-axis.
    pub frame: [Point; 3],
    /// Vertices of the data polygon in drawing order.
    pub polygon: Vec<Point>,
}
