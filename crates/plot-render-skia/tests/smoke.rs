// File: crates/plot-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs through the Skia canvas.

use plot_core::{render_histogram, ChartConfig, HistogramOptions, LineGraphOptions};
use plot_render_skia::{histogram_png, line_graph_png, SkiaCanvas};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

#[test]
fn histogram_renders_png_file() {
    let data = [1.0, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 20.0, 41.0];
    let out = std::path::PathBuf::from("target/test_out/smoke_histogram.png");

    let mut canvas = SkiaCanvas::with_default_size().expect("surface");
    assert_eq!((canvas.width(), canvas.height()), (900, 600));
    render_histogram(&mut canvas, &data, &HistogramOptions::default().with_bins(5), &ChartConfig::default())
        .expect("render");
    canvas.save_png(&out).expect("save png");

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn line_graph_renders_png_bytes() {
    let xs = [0, 1, 2, 3, 4, 5];
    let ys = [0.0, 1.2, 0.8, 1.8, 1.4, 2.0];
    let bytes = line_graph_png(&xs, &ys, &LineGraphOptions::default().with_point_values(true), &ChartConfig::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");
}

#[test]
fn bar_fill_reaches_the_surface() {
    let bytes = histogram_png(&[3u8, 3, 3], &HistogramOptions::default().with_bins(1), &ChartConfig::default())
        .expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // single full-height bar spans the plot; sample a pixel well inside it
    let px = img.get_pixel(470, 300);
    assert_eq!(px.0, [0, 0, 168, 255]);
    // background outside the plot box
    assert_eq!(img.get_pixel(5, 590).0, [255, 255, 255, 255]);
}

#[test]
fn invalid_input_surfaces_as_error() {
    let err = line_graph_png(&[1.0, 2.0], &[1.0], &LineGraphOptions::default(), &ChartConfig::default()).unwrap_err();
    assert!(err.to_string().contains("differ in length"), "{err}");
}
