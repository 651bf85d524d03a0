// File: crates/plot-core/tests/line_graph.rs
// Purpose: Line graph layout and draw calls against a recording canvas.

use plot_core::{
    render_line_graph, ChartConfig, ChartError, Color, LineGraphLayout, LineGraphOptions, PixelRect, RecordingCanvas,
    Theme,
};

const XS: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
const YS: [f64; 6] = [0.0, 1.2, 0.8, 1.8, 1.4, 2.0];

#[test]
fn segments_connect_consecutive_points() {
    let layout = LineGraphLayout::compute(&XS, &YS, &PixelRect::default()).expect("layout");
    assert_eq!(layout.segments.len(), XS.len() - 1);

    let ends: Vec<(i32, i32, i32, i32)> = layout.segments.iter().map(|s| (s.x1, s.y1, s.x2, s.y2)).collect();
    assert_eq!(
        ends,
        vec![
            (90, 520, 242, 250),
            (242, 250, 394, 340),
            (394, 340, 546, 115),
            (546, 115, 698, 205),
            (698, 205, 850, 70),
        ]
    );
    assert_eq!(layout.segments[3].start, (3.0, 1.8));
}

#[test]
fn ticks_are_a_uniform_grid_over_each_range() {
    let layout = LineGraphLayout::compute(&XS, &YS, &PixelRect::default()).expect("layout");

    let xs: Vec<i32> = layout.x_ticks.iter().map(|t| t.pixel).collect();
    assert_eq!(xs, vec![90, 242, 394, 546, 698, 850]);
    let ys: Vec<i32> = layout.y_ticks.iter().map(|t| t.pixel).collect();
    assert_eq!(ys, vec![520, 430, 340, 250, 160, 70]);

    let y_values: Vec<f64> = layout.y_ticks.iter().map(|t| t.value).collect();
    approx::assert_relative_eq!(y_values[5], 2.0);
    approx::assert_relative_eq!(y_values[2], 0.8);
}

#[test]
fn flat_series_still_maps_inside_the_plot() {
    let layout = LineGraphLayout::compute(&[1, 2, 3], &[5, 5, 5], &PixelRect::default()).expect("layout");
    assert_eq!(layout.y_range.max, 6.0);
    assert!(layout.segments.iter().all(|s| s.y1 == 520 && s.y2 == 520));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = LineGraphLayout::compute(&[1.0, 2.0], &[1.0], &PixelRect::default()).unwrap_err();
    assert_eq!(err, ChartError::LengthMismatch { x_len: 2, y_len: 1 });
}

#[test]
fn empty_series_are_rejected() {
    let empty: [f32; 0] = [];
    let mut canvas = RecordingCanvas::new();
    let err = render_line_graph(&mut canvas, &empty, &empty, &LineGraphOptions::default(), &ChartConfig::default())
        .unwrap_err();
    assert_eq!(err, ChartError::EmptyInput);
    assert!(canvas.is_empty());
}

#[test]
fn single_point_draws_axes_without_segments() {
    let mut canvas = RecordingCanvas::new();
    render_line_graph(&mut canvas, &[3.0], &[4.0], &LineGraphOptions::default(), &ChartConfig::default())
        .expect("render");
    assert!(canvas.lines_in(Color::BLUE).is_empty());
    assert_eq!(canvas.lines_in(Color::BLACK).len(), 12);
}

#[test]
fn renders_n_minus_one_segments_in_line_colour() {
    let mut canvas = RecordingCanvas::new();
    render_line_graph(&mut canvas, &XS, &YS, &LineGraphOptions::default(), &ChartConfig::default())
        .expect("render");

    assert_eq!(canvas.lines_in(Color::BLUE).len(), 5);
    // six ticks on each axis
    assert_eq!(canvas.lines_in(Color::BLACK).len(), 12);

    let texts = canvas.texts();
    for want in ["Graph", "X", "Y", "0.0", "1.0", "5.0"] {
        assert!(texts.contains(&want), "missing {want:?} in {texts:?}");
    }
}

#[test]
fn point_values_annotate_segment_starts() {
    let mut canvas = RecordingCanvas::new();
    let opts = LineGraphOptions::default()
        .with_labels("Speed", "Time", "Distance")
        .with_point_values(true);
    render_line_graph(&mut canvas, &XS, &YS, &opts, &ChartConfig::default()).expect("render");

    let texts = canvas.texts();
    assert!(texts.contains(&"(0.00, 0.00)"));
    assert!(texts.contains(&"(4.00, 1.40)"));
    assert!(!texts.contains(&"(5.00, 2.00)"));
    assert!(texts.contains(&"Speed"));
    // annotation colour is restored before the next segment
    assert_eq!(canvas.lines_in(Color::BLUE).len(), 5);
    assert_eq!(canvas.current_color(), Some(Color::BLUE));
}

#[test]
fn mixed_numeric_types_are_accepted() {
    let xs: [u32; 4] = [10, 20, 30, 40];
    let ys: [f32; 4] = [0.5, -0.5, 0.25, 1.0];
    let layout = LineGraphLayout::compute(&xs, &ys, &PixelRect::default()).expect("layout");
    assert_eq!(layout.segments.len(), 3);
    assert_eq!(layout.segments[0].x1, 90);
    assert_eq!(layout.segments[2].x2, 850);
    assert_eq!(layout.segments[2].y2, 70);
}

#[test]
fn y_range_wider_than_f64_max_spans_the_plot() {
    let layout = LineGraphLayout::compute(&[0.0, 1.0, 2.0], &[-1e308, 0.0, 1e308], &PixelRect::default())
        .expect("layout");
    let ends: Vec<(i32, i32, i32, i32)> = layout.segments.iter().map(|s| (s.x1, s.y1, s.x2, s.y2)).collect();
    assert_eq!(ends, vec![(90, 520, 470, 295), (470, 295, 850, 70)]);
    assert!(layout.y_ticks.iter().all(|t| t.value.is_finite()));
}

#[test]
fn axis_text_uses_label_colour() {
    let theme = Theme::dark();
    let mut canvas = RecordingCanvas::new();
    let cfg = ChartConfig::default().with_theme(theme);
    render_line_graph(&mut canvas, &XS, &YS, &LineGraphOptions::default(), &cfg).expect("render");

    assert!(canvas.texts_in(theme.axis_line).is_empty());
    let labels = canvas.texts_in(theme.axis_label);
    for want in ["Graph", "0.0", "5.0", "2"] {
        assert!(labels.contains(&want), "missing {want:?} in {labels:?}");
    }
    assert_eq!(canvas.lines_in(theme.axis_line).len(), 12);
}
