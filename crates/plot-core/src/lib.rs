// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; range analysis, scale mapping and chart layout/rendering over a Canvas.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod line_graph;
pub mod range;
pub mod recording;
pub mod scale;
pub mod telemetry;
pub mod theme;
pub mod types;

pub use axis::Tick;
pub use canvas::{Canvas, Color, FontKind, TextDirection};
pub use chart::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use geometry::{BarGeometry, PixelRect, SegmentGeometry};
pub use histogram::{bin_index, frequency_ticks, render_histogram, tally, HistogramLayout, HistogramOptions};
pub use line_graph::{render_line_graph, LineGraphLayout, LineGraphOptions};
pub use range::{analyze, DataRange, Sample};
pub use recording::{DrawCommand, RecordingCanvas};
pub use scale::{Orientation, PixelRange, ScaleMapper};
pub use theme::Theme;
