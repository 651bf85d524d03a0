// File: crates/plot-examples/src/bin/histogram.rs
// Summary: Minimal example that renders a five-bin histogram to PNG.

use anyhow::Result;
use plot_core::{render_histogram, telemetry, ChartConfig, HistogramOptions};
use plot_render_skia::SkiaCanvas;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    let data = [1.0, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 20.0, 41.0];
    let opts = HistogramOptions::default()
        .with_bins(5)
        .with_labels("My Histogram", "Value", "Frequency");

    let mut canvas = SkiaCanvas::with_default_size()?;
    render_histogram(&mut canvas, &data, &opts, &ChartConfig::default())?;

    let out = std::path::PathBuf::from("target/out/example_histogram.png");
    canvas.save_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
