// File: crates/plot-core/src/types.rs
// Summary: Shared constants (surface size, plot box, layout spacing, binning tolerances).

/// Default surface width in pixels.
pub const WIDTH: i32 = 900;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Reference plot box, in surface pixels.
pub const PLOT_LEFT: i32 = 90;
pub const PLOT_TOP: i32 = 70;
pub const PLOT_RIGHT: i32 = 850;
pub const PLOT_BOTTOM: i32 = 520;

/// Number of divisions used for proportional axis ticks (yields `TICK_DIVISIONS + 1` ticks).
pub const TICK_DIVISIONS: u32 = 5;
/// Frequency axes with a max count at or below this get one tick per integer.
pub const UNIT_TICK_LIMIT: u32 = 15;
/// Length of an axis tick mark, in pixels.
pub const TICK_LEN: i32 = 6;
/// Horizontal gap removed from each side of a histogram bar.
pub const BAR_INSET: i32 = 2;
/// Added to the scaled bin position before flooring so values sitting on a
/// bin boundary (e.g. 8.99999 for 9.0) land in the upper bin.
pub const BIN_EPSILON: f64 = 1e-5;

/// Font scale for chart titles.
pub const TITLE_TEXT_SIZE: u32 = 2;
/// Font scale for axis labels and tick labels.
pub const LABEL_TEXT_SIZE: u32 = 1;
