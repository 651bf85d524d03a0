// File: crates/plot-core/src/axis.rs
// Summary: Axis ticks (pixel position + label value) and uniform tick layout.

use crate::scale::ScaleMapper;

/// A graduation mark along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Pixel coordinate along the axis (x for horizontal axes, y for vertical ones).
    pub pixel: i32,
    pub value: f64,
}

/// `divisions + 1` evenly spaced fractions from 0 to 1 inclusive.
pub fn fractions(divisions: u32) -> Vec<f64> {
    let d = divisions.max(1);
    (0..=d).map(|i| i as f64 / d as f64).collect()
}

/// Ticks at uniform fractions of the mapper's data range, labelled with the
/// interpolated data value rather than the nearest sample.
pub fn uniform_ticks(mapper: &ScaleMapper, divisions: u32) -> Vec<Tick> {
    fractions(divisions)
        .into_iter()
        .map(|t| Tick { pixel: mapper.map_fraction(t), value: mapper.range.lerp(t) })
        .collect()
}
