// File: crates/plot-core/src/range.rs
// Summary: Sample trait and min/max range analysis with degenerate-range widening.

use num_traits::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// A plottable value: any primitive integer or float.
pub trait Sample: Copy + PartialOrd + ToPrimitive {
    /// Value as `f64`; `NaN` when the conversion is not representable.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Copy + PartialOrd + ToPrimitive> Sample for T {}

/// Extent of a data series.
/// Contract: `min < max` for every range produced by [`analyze`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    /// Build a range from raw extrema, widening a zero-width range by one unit.
    pub fn new(min: f64, max: f64) -> Self {
        if max > min {
            return Self { min, max };
        }
        let widened = min + 1.0;
        if widened > min {
            Self { min, max: widened }
        } else {
            // `min + 1` rounds back to `min` at large magnitudes
            Self { min, max: min + min.abs() * f64::EPSILON * 2.0 }
        }
    }

    /// `max - min`; infinite when the extrema are more than `f64::MAX` apart.
    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Half of the span, finite for every finite range.
    #[inline]
    pub fn half_span(&self) -> f64 { self.max / 2.0 - self.min / 2.0 }

    /// Position of `v` inside the range as a fraction (0 at min, 1 at max).
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 { self.scaled(v, 1.0) }

    /// Position of `v` measured in `1/n`ths of the range, i.e. `fraction(v) * n`.
    pub fn scaled(&self, v: f64, n: f64) -> f64 {
        let span = self.span();
        let offset = (v - self.min) * n;
        if span.is_finite() && offset.is_finite() {
            offset / span
        } else {
            (v / 2.0 - self.min / 2.0) / self.half_span() * n
        }
    }

    /// Data value at fraction `t` of the range.
    pub fn lerp(&self, t: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            self.min + span * t
        } else {
            (self.min / 2.0 + self.half_span() * t) * 2.0
        }
    }

    /// Boundary `k` of the range cut into `n` equal steps (`min` at 0, about `max` at `n`).
    pub fn split_point(&self, k: usize, n: usize) -> f64 {
        let n = n.max(1) as f64;
        let span = self.span();
        if span.is_finite() {
            self.min + k as f64 * (span / n)
        } else {
            (self.min / 2.0 + k as f64 * (self.half_span() / n)) * 2.0
        }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Single linear scan for min/max.
///
/// Fails on an empty slice and on samples that are not finite once converted to `f64`.
pub fn analyze<T: Sample>(samples: &[T]) -> ChartResult<DataRange> {
    let (first, rest) = samples.split_first().ok_or(ChartError::EmptyInput)?;
    let first = first.as_f64();
    if !first.is_finite() {
        return Err(ChartError::NonFiniteSample { index: 0 });
    }

    let mut min = first;
    let mut max = first;
    for (i, s) in rest.iter().enumerate() {
        let v = s.as_f64();
        if !v.is_finite() {
            return Err(ChartError::NonFiniteSample { index: i + 1 });
        }
        if v < min { min = v; }
        if v > max { max = v; }
    }

    let range = DataRange::new(min, max);
    tracing::trace!(min = range.min, max = range.max, n = samples.len(), "analyzed range");
    Ok(range)
}
