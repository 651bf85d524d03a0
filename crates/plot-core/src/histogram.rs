// File: crates/plot-core/src/histogram.rs
// Summary: Histogram binning, frequency-axis tick policy, bar layout and rendering.

use tracing::{debug, trace, warn};

use crate::axis::Tick;
use crate::canvas::Canvas;
use crate::chart::{draw_frame, draw_x_tick, draw_y_tick, ChartConfig, FrameLabels};
use crate::error::ChartResult;
use crate::geometry::{clamp, BarGeometry, PixelRect};
use crate::range::{analyze, DataRange, Sample};
use crate::scale::ScaleMapper;
use crate::types::{BAR_INSET, BIN_EPSILON, TICK_DIVISIONS, UNIT_TICK_LIMIT};

/// Display options for [`render_histogram`].
#[derive(Clone, Debug)]
pub struct HistogramOptions {
    /// Number of bins; 0 is treated as 1.
    pub bins: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Label each bar with its value range and, when non-zero, its count.
    pub show_bin_ranges: bool,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            title: "Histogram".to_string(),
            x_label: "Value".to_string(),
            y_label: "Frequency".to_string(),
            show_bin_ranges: true,
        }
    }
}

impl HistogramOptions {
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_labels(mut self, title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.title = title.into();
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_bin_ranges(mut self, show: bool) -> Self {
        self.show_bin_ranges = show;
        self
    }
}

/// Bin for value `v` over `range` split into `bins` equal intervals.
///
/// Intervals are half-open except the last, which also takes `range.max`.
/// Values below the range (and NaN) fall into bin 0, values at or above the
/// max into the last bin. The scaled position gets [`BIN_EPSILON`] added
/// before flooring so boundary values that round just under an integer are
/// not pushed into the lower bin.
pub fn bin_index(v: f64, range: &DataRange, bins: usize) -> usize {
    let bins = bins.max(1);
    if v >= range.max {
        return bins - 1;
    }
    if v < range.min {
        return 0;
    }
    let pos = range.scaled(v, bins as f64);
    let idx = (pos + BIN_EPSILON).floor();
    // NaN survives the clamp and casts to 0
    clamp(idx, 0.0, (bins - 1) as f64) as usize
}

/// Per-bin sample counts. The counts always sum to `samples.len()`.
pub fn tally<T: Sample>(samples: &[T], range: &DataRange, bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins.max(1)];
    for s in samples {
        counts[bin_index(s.as_f64(), range, bins)] += 1;
    }
    counts
}

/// Frequency-axis tick values for a tallest bin of `max_count`.
///
/// Small counts get one tick per integer from 0; larger ones get
/// `TICK_DIVISIONS` proportional steps rounded to the nearest integer.
/// The last tick is always `max_count` (at least 1).
pub fn frequency_ticks(max_count: usize) -> Vec<usize> {
    let max = max_count.max(1);
    if max <= UNIT_TICK_LIMIT as usize {
        return (0..=max).collect();
    }
    let d = TICK_DIVISIONS as f64;
    (0..=TICK_DIVISIONS)
        .map(|i| (max as f64 * i as f64 / d).round() as usize)
        .collect()
}

/// Everything needed to draw a histogram, computed from the data alone.
#[derive(Clone, Debug)]
pub struct HistogramLayout {
    pub range: DataRange,
    /// Infinite only for a single bin over a range wider than `f64::MAX`.
    pub bin_width: f64,
    pub counts: Vec<usize>,
    /// Top of the frequency scale; bar heights are relative to it.
    pub max_count: usize,
    pub y_ticks: Vec<Tick>,
    pub bars: Vec<BarGeometry>,
}

impl HistogramLayout {
    /// Returns `Ok(None)` for an empty series.
    pub fn compute<T: Sample>(samples: &[T], bins: usize, plot: &PixelRect) -> ChartResult<Option<Self>> {
        if samples.is_empty() {
            return Ok(None);
        }
        if bins == 0 {
            warn!("histogram requested with 0 bins; using 1");
        }
        let bins = bins.max(1);

        let range = analyze(samples)?;
        let counts = tally(samples, &range, bins);
        let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
        let bin_width = range.span() / bins as f64;

        let count_scale = ScaleMapper::vertical(DataRange::new(0.0, max_count as f64), plot.top, plot.bottom);
        let y_ticks = frequency_ticks(max_count)
            .into_iter()
            .map(|c| Tick { pixel: count_scale.map(c as f64), value: c as f64 })
            .collect();

        let bin_scale = ScaleMapper::horizontal(DataRange::new(0.0, bins as f64), plot.left, plot.right);
        let bars = counts
            .iter()
            .enumerate()
            .map(|(b, &count)| {
                let left = bin_scale.map(b as f64) + BAR_INSET;
                let right = (bin_scale.map((b + 1) as f64) - BAR_INSET).max(left);
                let top = count_scale.map(count as f64);
                let start = range.split_point(b, bins);
                let end = if b + 1 == bins { range.max } else { range.split_point(b + 1, bins) };
                BarGeometry {
                    bin: b,
                    rect: PixelRect::from_ltrb(left, top, right, plot.bottom),
                    center_x: (left + right) / 2,
                    count,
                    start,
                    end,
                }
            })
            .collect();

        debug!(
            n = samples.len(),
            bins,
            min = range.min,
            max = range.max,
            max_count,
            "histogram layout computed"
        );
        Ok(Some(Self { range, bin_width, counts, max_count, y_ticks, bars }))
    }

    pub fn bins(&self) -> usize { self.counts.len() }

    pub fn total(&self) -> usize { self.counts.iter().sum() }
}

/// Draw a histogram of `samples` onto `canvas`.
///
/// An empty series draws nothing and returns `Ok(())`.
pub fn render_histogram<T: Sample>(
    canvas: &mut dyn Canvas,
    samples: &[T],
    opts: &HistogramOptions,
    cfg: &ChartConfig,
) -> ChartResult<()> {
    cfg.validate()?;
    let Some(layout) = HistogramLayout::compute(samples, opts.bins, &cfg.plot)? else {
        warn!("histogram input is empty; nothing drawn");
        return Ok(());
    };

    let plot = cfg.plot;
    let theme = &cfg.theme;

    draw_frame(
        canvas,
        cfg,
        &FrameLabels { title: &opts.title, x_label: &opts.x_label, y_label: &opts.y_label, title_shift: 60 },
    );

    for tick in &layout.y_ticks {
        draw_y_tick(canvas, cfg, tick.pixel, &format!("{}", tick.value as usize), 40);
    }

    for bar in &layout.bars {
        let r = bar.rect;
        trace!(bin = bar.bin, count = bar.count, left = r.left, right = r.right, top = r.top, "bar");

        canvas.set_color(theme.bar_fill);
        canvas.set_fill_style(theme.bar_fill);
        canvas.draw_filled_bar(r.left, r.top, r.right, r.bottom);

        canvas.set_color(theme.bar_outline);
        canvas.draw_rectangle(r.left, r.top, r.right, r.bottom);

        canvas.set_color(theme.axis_line);
        draw_x_tick(canvas, &plot, bar.center_x);

        if opts.show_bin_ranges {
            canvas.set_color(theme.axis_label);
            canvas.draw_text(bar.center_x - 35, plot.bottom + 10, &format!("{:.1}-{:.1}", bar.start, bar.end));
            if bar.count > 0 {
                canvas.draw_text(bar.center_x - 5, r.top - 20, &bar.count.to_string());
            }
        }
    }
    Ok(())
}
