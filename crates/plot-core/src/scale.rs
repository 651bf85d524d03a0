// File: crates/plot-core/src/scale.rs
// Summary: Linear data-to-pixel transform with axis orientation.

use crate::range::{DataRange, Sample};

/// Direction of pixel growth relative to data growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Larger values map to larger pixel coordinates (X axis).
    Increasing,
    /// Larger values map to smaller pixel coordinates (Y axis, screen y grows downward).
    Inverted,
}

/// Closed pixel interval along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRange {
    pub min: i32,
    pub max: i32,
}

impl PixelRange {
    pub const fn new(min: i32, max: i32) -> Self { Self { min, max } }
    #[inline]
    pub const fn extent(&self) -> i32 { self.max - self.min }
}

/// Maps data values into a pixel range.
///
/// Values outside the data range extrapolate linearly; nothing is clamped.
#[derive(Clone, Copy, Debug)]
pub struct ScaleMapper {
    pub range: DataRange,
    pub pixels: PixelRange,
    pub orientation: Orientation,
}

impl ScaleMapper {
    pub fn new(range: DataRange, pixels: PixelRange, orientation: Orientation) -> Self {
        Self { range, pixels, orientation }
    }

    /// Horizontal mapper over `[left, right]`.
    pub fn horizontal(range: DataRange, left: i32, right: i32) -> Self {
        Self::new(range, PixelRange::new(left, right), Orientation::Increasing)
    }

    /// Vertical mapper over `[top, bottom]`; `range.min` lands on `bottom`.
    pub fn vertical(range: DataRange, top: i32, bottom: i32) -> Self {
        Self::new(range, PixelRange::new(top, bottom), Orientation::Inverted)
    }

    #[inline]
    pub fn map(&self, v: f64) -> i32 {
        self.map_fraction(self.range.fraction(v))
    }

    #[inline]
    pub fn map_sample<T: Sample>(&self, v: T) -> i32 {
        self.map(v.as_f64())
    }

    /// Pixel position at fraction `t` of the data range; the offset from the
    /// anchoring edge is truncated toward zero.
    #[inline]
    pub fn map_fraction(&self, t: f64) -> i32 {
        let offset = (t * self.pixels.extent() as f64) as i32;
        match self.orientation {
            Orientation::Increasing => self.pixels.min.saturating_add(offset),
            Orientation::Inverted => self.pixels.max.saturating_sub(offset),
        }
    }
}
