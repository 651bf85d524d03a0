// File: crates/plot-core/src/geometry.rs
// Summary: Pixel-space rectangles and the geometry emitted by chart layouts.

use crate::types::{PLOT_BOTTOM, PLOT_LEFT, PLOT_RIGHT, PLOT_TOP};

/// Axis-aligned rectangle in canvas pixels. `top < bottom` (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn center_x(&self) -> i32 { (self.left + self.right) / 2 }
    pub const fn center_y(&self) -> i32 { (self.top + self.bottom) / 2 }
}

impl Default for PixelRect {
    /// The reference plot box used by both chart kinds.
    fn default() -> Self {
        Self::from_ltrb(PLOT_LEFT, PLOT_TOP, PLOT_RIGHT, PLOT_BOTTOM)
    }
}

/// One histogram bar, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub bin: usize,
    pub rect: PixelRect,
    /// Horizontal centre of the bar; the X tick is drawn here.
    pub center_x: i32,
    pub count: usize,
    /// Data-space lower bound of the bin.
    pub start: f64,
    /// Data-space upper bound of the bin; the last bin ends at the true max.
    pub end: f64,
}

/// One polyline segment between consecutive points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentGeometry {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Raw data value of the starting point.
    pub start: (f64, f64),
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
