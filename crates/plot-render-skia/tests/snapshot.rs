// File: crates/plot-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts to PNG bytes with titles blank and bar labels off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the comparison.
// - In every mode, checks pixels against the core layout so geometry is always verified.

use image::RgbaImage;
use plot_core::{ChartConfig, HistogramLayout, HistogramOptions, LineGraphLayout, LineGraphOptions, PixelRect};
use plot_render_skia::{histogram_png, line_graph_png};

const BLUE: [u8; 4] = [0, 0, 168, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn decode(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

fn pixel(img: &RgbaImage, x: i32, y: i32) -> [u8; 4] {
    img.get_pixel(x as u32, y as u32).0
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_histogram() {
    let data = [1.0, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 20.0, 41.0];
    let opts = HistogramOptions::default().with_bins(5).with_bin_ranges(false).with_labels("", "", "");
    let bytes = histogram_png(&data, &opts, &ChartConfig::default()).expect("render bytes");

    let plot = PixelRect::default();
    let layout = HistogramLayout::compute(&data, 5, &plot).expect("layout").expect("non-empty");
    let img = decode(&bytes);
    assert_eq!(pixel(&img, plot.left, plot.center_y()), BLACK, "plot box outline");
    for bar in &layout.bars {
        let want = if bar.count > 0 { BLUE } else { WHITE };
        assert_eq!(pixel(&img, bar.center_x, plot.bottom - 10), want, "bin {} interior", bar.bin);
        // inset gap left of every bar
        assert_eq!(pixel(&img, bar.rect.left - 1, plot.bottom - 10), WHITE, "bin {} gap", bar.bin);
    }
    assert_eq!(pixel(&img, layout.bars[1].center_x, layout.bars[1].rect.top - 5), WHITE, "above bin 1");

    write_or_compare(&snapshot_path("histogram.png"), &bytes);
}

#[test]
fn golden_line_graph() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [0.0, 1.2, 0.8, 1.8, 1.4, 2.0];
    let opts = LineGraphOptions::default().with_labels("", "", "");
    let bytes = line_graph_png(&xs, &ys, &opts, &ChartConfig::default()).expect("render bytes");

    let layout = LineGraphLayout::compute(&xs, &ys, &PixelRect::default()).expect("layout");
    let img = decode(&bytes);
    for seg in &layout.segments {
        let (mx, my) = ((seg.x1 + seg.x2) / 2, (seg.y1 + seg.y2) / 2);
        let hit = (-1..=1).any(|dy| (-1..=1).any(|dx| pixel(&img, mx + dx, my + dy) == BLUE));
        assert!(hit, "no line pixel near midpoint ({mx}, {my})");
    }
    assert_eq!(pixel(&img, 800, 500), WHITE, "plot interior away from the line");

    write_or_compare(&snapshot_path("line_graph.png"), &bytes);
}
