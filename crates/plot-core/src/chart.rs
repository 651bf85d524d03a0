// File: crates/plot-core/src/chart.rs
// Summary: Chart configuration and the frame (background, plot box, titles, ticks) shared by all chart kinds.

use crate::canvas::{Canvas, FontKind, TextDirection};
use crate::error::{ChartError, ChartResult};
use crate::geometry::PixelRect;
use crate::theme::Theme;
use crate::types::{LABEL_TEXT_SIZE, TICK_LEN, TITLE_TEXT_SIZE};

/// Rendering configuration threaded into every render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub plot: PixelRect,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { plot: PixelRect::default(), theme: Theme::classic() }
    }
}

impl ChartConfig {
    pub fn with_plot(mut self, plot: PixelRect) -> Self {
        self.plot = plot;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The plot box must have positive width and height.
    pub fn validate(&self) -> ChartResult<()> {
        let p = self.plot;
        if p.width() <= 0 || p.height() <= 0 {
            return Err(ChartError::InvalidPlotRect {
                left: p.left,
                top: p.top,
                right: p.right,
                bottom: p.bottom,
            });
        }
        Ok(())
    }
}

/// Titles drawn around the plot box.
pub(crate) struct FrameLabels<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Distance the title starts left of the plot centre.
    pub title_shift: i32,
}

// ---- helpers ----------------------------------------------------------------

/// Clear the surface, outline the plot box and write the titles.
/// Leaves the stroke colour set to the axis colour and the text style at label size.
pub(crate) fn draw_frame(canvas: &mut dyn Canvas, cfg: &ChartConfig, labels: &FrameLabels<'_>) {
    let p = cfg.plot;
    let theme = &cfg.theme;

    canvas.clear(theme.background);
    canvas.set_color(theme.axis_line);
    canvas.draw_rectangle(p.left, p.top, p.right, p.bottom);

    canvas.set_color(theme.axis_label);
    canvas.set_text_style(FontKind::Default, TextDirection::Horizontal, TITLE_TEXT_SIZE);
    canvas.draw_text(p.center_x() - labels.title_shift, p.top - 50, labels.title);

    canvas.set_text_style(FontKind::Default, TextDirection::Horizontal, LABEL_TEXT_SIZE);
    canvas.draw_text(p.center_x() - 25, p.bottom + 35, labels.x_label);

    canvas.set_text_style(FontKind::Default, TextDirection::Vertical, LABEL_TEXT_SIZE);
    canvas.draw_text(p.left - 70, p.center_y(), labels.y_label);
    canvas.set_text_style(FontKind::Default, TextDirection::Horizontal, LABEL_TEXT_SIZE);

    canvas.set_color(theme.axis_line);
}

/// Tick mark left of the plot box at `y`, with its label `label_dx` pixels further left.
/// The mark uses the axis colour and the label the label colour; the axis colour is left set.
pub(crate) fn draw_y_tick(canvas: &mut dyn Canvas, cfg: &ChartConfig, y: i32, label: &str, label_dx: i32) {
    let plot = &cfg.plot;
    canvas.set_color(cfg.theme.axis_line);
    canvas.draw_line(plot.left - TICK_LEN, y, plot.left, y);
    draw_axis_label(canvas, cfg, plot.left - label_dx, y - 6, label);
}

/// Axis text in the label colour, restoring the axis colour afterwards.
pub(crate) fn draw_axis_label(canvas: &mut dyn Canvas, cfg: &ChartConfig, x: i32, y: i32, text: &str) {
    canvas.set_color(cfg.theme.axis_label);
    canvas.draw_text(x, y, text);
    canvas.set_color(cfg.theme.axis_line);
}

/// Tick mark below the plot box at `x`.
pub(crate) fn draw_x_tick(canvas: &mut dyn Canvas, plot: &PixelRect, x: i32) {
    canvas.draw_line(x, plot.bottom, x, plot.bottom + TICK_LEN);
}
