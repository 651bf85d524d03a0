// File: crates/plot-examples/src/bin/lines.rs
// Summary: Minimal example that renders a simple line graph to PNG.

use anyhow::Result;
use plot_core::{render_line_graph, telemetry, ChartConfig, LineGraphOptions};
use plot_render_skia::SkiaCanvas;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [0.0, 1.2, 0.8, 1.8, 1.4, 2.0];
    let opts = LineGraphOptions::default().with_point_values(true);

    let mut canvas = SkiaCanvas::with_default_size()?;
    render_line_graph(&mut canvas, &xs, &ys, &opts, &ChartConfig::default())?;

    let out = std::path::PathBuf::from("target/out/example_lines.png");
    canvas.save_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
