// File: crates/plot-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the core Canvas trait, plus PNG helpers.

mod text;

use anyhow::Result;
use plot_core::{
    render_histogram, render_line_graph, Canvas, ChartConfig, Color, FontKind, HistogramOptions, LineGraphOptions,
    Sample, TextDirection,
};
use skia_safe as skia;

pub use text::TextShaper;

/// Pixel height of label text at scale 1.
pub const BASE_TEXT_PX: f32 = 11.0;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Raster surface that draws chart primitives with Skia.
///
/// Strokes are 1px and aligned to pixel centres so integer coordinates
/// produce crisp axis lines. Text takes the current stroke colour.
pub struct SkiaCanvas {
    surface: skia::Surface,
    stroke: skia::Paint,
    fill: skia::Paint,
    shaper: TextShaper,
    text_size: f32,
    text_direction: TextDirection,
    mono: bool,
}

impl SkiaCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(false);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(skia::Color::BLACK);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(false);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(skia::Color::BLACK);

        Ok(Self {
            surface,
            stroke,
            fill,
            shaper: TextShaper::new(),
            text_size: BASE_TEXT_PX,
            text_direction: TextDirection::Horizontal,
            mono: false,
        })
    }

    /// Surface using the default chart size.
    pub fn with_default_size() -> Result<Self> {
        Self::new(plot_core::types::WIDTH, plot_core::types::HEIGHT)
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    /// Encode the current surface contents as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current surface contents to `path` as PNG, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "wrote png");
        Ok(())
    }
}

#[inline]
fn px(v: i32) -> f32 { v as f32 + 0.5 }

impl Canvas for SkiaCanvas {
    fn clear(&mut self, background: Color) {
        self.surface.canvas().clear(to_skia(background));
    }

    fn set_color(&mut self, color: Color) {
        self.stroke.set_color(to_skia(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill.set_color(to_skia(color));
    }

    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let rect = skia::Rect::from_ltrb(px(x1.min(x2)), px(y1.min(y2)), px(x1.max(x2)), px(y1.max(y2)));
        self.surface.canvas().draw_rect(rect, &self.stroke);
    }

    fn draw_filled_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        // inclusive of both corner pixels
        let rect = skia::Rect::from_ltrb(
            x1.min(x2) as f32,
            y1.min(y2) as f32,
            (x1.max(x2) + 1) as f32,
            (y1.max(y2) + 1) as f32,
        );
        self.surface.canvas().draw_rect(rect, &self.fill);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.surface.canvas().draw_line((px(x1), px(y1)), (px(x2), px(y2)), &self.stroke);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let color = self.stroke.color();
        let canvas = self.surface.canvas();
        match self.text_direction {
            TextDirection::Horizontal => {
                self.shaper.draw_top_left(canvas, text, x as f32, y as f32, self.text_size, color, self.mono)
            }
            TextDirection::Vertical => {
                self.shaper.draw_vertical(canvas, text, x as f32, y as f32, self.text_size, color, self.mono)
            }
        }
    }

    fn set_text_style(&mut self, font: FontKind, direction: TextDirection, size: u32) {
        self.mono = matches!(font, FontKind::Monospace);
        self.text_direction = direction;
        self.text_size = BASE_TEXT_PX * size.max(1) as f32;
    }
}

/// Render a histogram on a default-size surface and return PNG bytes.
pub fn histogram_png<T: Sample>(samples: &[T], opts: &HistogramOptions, cfg: &ChartConfig) -> Result<Vec<u8>> {
    let mut canvas = SkiaCanvas::with_default_size()?;
    render_histogram(&mut canvas, samples, opts, cfg)?;
    canvas.png_bytes()
}

/// Render a line graph on a default-size surface and return PNG bytes.
pub fn line_graph_png<X: Sample, Y: Sample>(
    xs: &[X],
    ys: &[Y],
    opts: &LineGraphOptions,
    cfg: &ChartConfig,
) -> Result<Vec<u8>> {
    let mut canvas = SkiaCanvas::with_default_size()?;
    render_line_graph(&mut canvas, xs, ys, opts, cfg)?;
    canvas.png_bytes()
}
