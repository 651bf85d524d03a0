// File: crates/plot-demo/src/main.rs
// Summary: Demo loads one numeric CSV column and renders it as a histogram and a line graph to PNGs.
//
// Usage: plot-demo <csv> [column] [bins]
// The theme is taken from BINPLOT_THEME (classic, light, dark, high_contrast).

use anyhow::{Context, Result};
use plot_core::{render_histogram, render_line_graph, telemetry, theme, ChartConfig, HistogramOptions, LineGraphOptions};
use plot_render_skia::SkiaCanvas;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_BINS: usize = 10;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "samples.csv".to_string());
    let column = args.next();
    let bins = match args.next() {
        Some(s) => s.parse::<usize>().with_context(|| format!("bins must be a non-negative integer, got '{s}'"))?,
        None => DEFAULT_BINS,
    };

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let (name, values) = load_column(&path, column.as_deref())
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if values.is_empty() {
        anyhow::bail!("no numeric values in column '{name}'");
    }
    info!(column = %name, rows = values.len(), "loaded column");

    let theme_name = std::env::var("BINPLOT_THEME").unwrap_or_else(|_| "classic".to_string());
    let cfg = ChartConfig::default().with_theme(theme::find(&theme_name));

    // 1) Histogram of the column
    let hist_opts = HistogramOptions::default()
        .with_bins(bins)
        .with_labels(format!("Distribution of {name}"), name.clone(), "Frequency");
    let mut canvas = SkiaCanvas::with_default_size()?;
    render_histogram(&mut canvas, &values, &hist_opts, &cfg)?;
    let out_hist = out_name_with(&path, "hist");
    canvas.save_png(&out_hist)?;
    println!("Wrote {}", out_hist.display());

    // 2) Column against row index
    let index: Vec<usize> = (0..values.len()).collect();
    let line_opts = LineGraphOptions::default()
        .with_labels(name.clone(), "Row", name.clone())
        .with_point_values(values.len() <= 20);
    let mut canvas = SkiaCanvas::with_default_size()?;
    render_line_graph(&mut canvas, &index, &values, &line_opts, &cfg)?;
    let out_line = out_name_with(&path, "line");
    canvas.save_png(&out_line)?;
    println!("Wrote {}", out_line.display());

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Produce output file name like target/out/plot_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("plot");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("plot_{}.png", suffix));
    } else {
        out.push(format!("plot_{}_{}.png", stem, suffix));
    }
    out
}

/// Load one numeric column. With no `want`, the first column whose first
/// row parses as a number is used. Rows that fail to parse are skipped.
fn load_column(path: &Path, want: Option<&str>) -> Result<(String, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

    let idx = match want {
        Some(name) => headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .with_context(|| format!("column '{name}' not found; headers: {headers:?}"))?,
        None => {
            let first = records.first().context("CSV has no data rows")?;
            (0..headers.len())
                .find(|&i| first.get(i).is_some_and(|s| s.trim().parse::<f64>().is_ok()))
                .context("no numeric column found")?
        }
    };

    let mut skipped = 0usize;
    let values = records
        .iter()
        .filter_map(|rec| {
            let v = rec.get(idx).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
            if v.is_none() {
                skipped += 1;
            }
            v
        })
        .collect::<Vec<_>>();
    if skipped > 0 {
        warn!(skipped, "rows without a finite number were skipped");
    }
    Ok((headers[idx].clone(), values))
}
