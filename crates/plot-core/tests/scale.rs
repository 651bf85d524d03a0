// File: crates/plot-core/tests/scale.rs
// Purpose: Data-to-pixel mapping in both orientations.

use plot_core::{DataRange, Orientation, PixelRange, ScaleMapper};

#[test]
fn increasing_axis_maps_ends_to_pixel_ends() {
    let s = ScaleMapper::horizontal(DataRange::new(0.0, 5.0), 90, 850);
    assert_eq!(s.map(0.0), 90);
    assert_eq!(s.map(5.0), 850);
    assert_eq!(s.map(1.0), 242);
    assert_eq!(s.map(2.5), 470);
}

#[test]
fn inverted_axis_puts_min_at_bottom() {
    let s = ScaleMapper::vertical(DataRange::new(0.0, 2.0), 70, 520);
    assert_eq!(s.map(0.0), 520);
    assert_eq!(s.map(2.0), 70);
    assert_eq!(s.map(1.2), 250);
    assert!(s.map(1.8) < s.map(1.4));
}

#[test]
fn out_of_range_values_extrapolate() {
    let s = ScaleMapper::new(DataRange::new(0.0, 10.0), PixelRange::new(0, 100), Orientation::Increasing);
    assert_eq!(s.map(-5.0), -50);
    assert_eq!(s.map(20.0), 200);
}

#[test]
fn extreme_values_saturate_instead_of_overflowing() {
    let s = ScaleMapper::horizontal(DataRange::new(0.0, 1.0), 10, 20);
    assert_eq!(s.map(1e300), i32::MAX);
    let v = ScaleMapper::vertical(DataRange::new(0.0, 1.0), 10, 20);
    assert_eq!(v.map(-1e300), i32::MAX);
}

#[test]
fn integer_samples_map_through_the_generic_entry() {
    let s = ScaleMapper::horizontal(DataRange::new(0.0, 4.0), 0, 400);
    assert_eq!(s.map_sample(3u16), 300);
    assert_eq!(s.map_sample(1i64), 100);
}

#[test]
fn fractions_map_directly() {
    let s = ScaleMapper::vertical(DataRange::new(-3.0, 7.0), 70, 520);
    let ys: Vec<i32> = (0..=5).map(|i| s.map_fraction(i as f64 / 5.0)).collect();
    assert_eq!(ys, vec![520, 430, 340, 250, 160, 70]);
}
