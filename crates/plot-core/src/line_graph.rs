// File: crates/plot-core/src/line_graph.rs
// Summary: Line graph layout (axis ticks, polyline segments) and rendering.

use tracing::{debug, trace};

use crate::axis::{uniform_ticks, Tick};
use crate::canvas::Canvas;
use crate::chart::{draw_axis_label, draw_frame, draw_x_tick, draw_y_tick, ChartConfig, FrameLabels};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{PixelRect, SegmentGeometry};
use crate::range::{analyze, DataRange, Sample};
use crate::scale::ScaleMapper;
use crate::types::TICK_DIVISIONS;

#[derive(Clone, Debug)]
pub struct LineGraphOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Annotate each segment's start point with its raw `(x, y)`.
    pub show_point_values: bool,
}

impl Default for LineGraphOptions {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            show_point_values: false,
        }
    }
}

impl LineGraphOptions {
    pub fn with_labels(mut self, title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.title = title.into();
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_point_values(mut self, show: bool) -> Self {
        self.show_point_values = show;
        self
    }
}

#[derive(Clone, Debug)]
pub struct LineGraphLayout {
    pub x_range: DataRange,
    pub y_range: DataRange,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// One segment per consecutive pair of points (`n - 1` in total).
    pub segments: Vec<SegmentGeometry>,
}

impl LineGraphLayout {
    pub fn compute<X: Sample, Y: Sample>(xs: &[X], ys: &[Y], plot: &PixelRect) -> ChartResult<Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch { x_len: xs.len(), y_len: ys.len() });
        }
        let x_range = analyze(xs)?;
        let y_range = analyze(ys)?;

        let sx = ScaleMapper::horizontal(x_range, plot.left, plot.right);
        let sy = ScaleMapper::vertical(y_range, plot.top, plot.bottom);

        let points: Vec<(f64, f64)> = xs.iter().zip(ys).map(|(x, y)| (x.as_f64(), y.as_f64())).collect();
        let segments = points
            .windows(2)
            .map(|w| {
                let (a, b) = (w[0], w[1]);
                SegmentGeometry {
                    x1: sx.map(a.0),
                    y1: sy.map(a.1),
                    x2: sx.map(b.0),
                    y2: sy.map(b.1),
                    start: a,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            n = points.len(),
            x_min = x_range.min,
            x_max = x_range.max,
            y_min = y_range.min,
            y_max = y_range.max,
            segments = segments.len(),
            "line graph layout computed"
        );

        Ok(Self {
            x_range,
            y_range,
            x_ticks: uniform_ticks(&sx, TICK_DIVISIONS),
            y_ticks: uniform_ticks(&sy, TICK_DIVISIONS),
            segments,
        })
    }
}

/// Draw `ys` against `xs` as a connected polyline.
///
/// Fails when the series differ in length, are empty or hold non-finite values.
/// A single point draws the axes and no segments.
pub fn render_line_graph<X: Sample, Y: Sample>(
    canvas: &mut dyn Canvas,
    xs: &[X],
    ys: &[Y],
    opts: &LineGraphOptions,
    cfg: &ChartConfig,
) -> ChartResult<()> {
    cfg.validate()?;
    let layout = LineGraphLayout::compute(xs, ys, &cfg.plot)?;
    let plot = cfg.plot;
    let theme = &cfg.theme;

    draw_frame(
        canvas,
        cfg,
        &FrameLabels { title: &opts.title, x_label: &opts.x_label, y_label: &opts.y_label, title_shift: 40 },
    );

    for tick in &layout.x_ticks {
        draw_x_tick(canvas, &plot, tick.pixel);
        draw_axis_label(canvas, cfg, tick.pixel - 12, plot.bottom + 10, &format!("{:.1}", tick.value));
    }
    for tick in &layout.y_ticks {
        draw_y_tick(canvas, cfg, tick.pixel, &format!("{:.0}", tick.value), 55);
    }

    canvas.set_color(theme.line_stroke);
    for seg in &layout.segments {
        trace!(x1 = seg.x1, y1 = seg.y1, x2 = seg.x2, y2 = seg.y2, "segment");
        canvas.draw_line(seg.x1, seg.y1, seg.x2, seg.y2);

        if opts.show_point_values {
            canvas.set_color(theme.axis_label);
            canvas.draw_text(seg.x1 + 6, seg.y1 - 12, &format!("({:.2}, {:.2})", seg.start.0, seg.start.1));
            canvas.set_color(theme.line_stroke);
        }
    }
    Ok(())
}
