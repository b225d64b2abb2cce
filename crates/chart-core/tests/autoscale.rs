// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate view limits over several series and fixed axis limits.

use chart_core::{Axis, Figure, RenderOptions, Series, TextShaper, ViewState};

#[test]
fn autoscale_covers_all_series() {
    let mut fig = Figure::default();
    fig.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    fig.add_series(Series::with_data("b", vec![(2.0, 6.0), (10.0, 1.5)]));

    let v = ViewState::from_figure(&fig);
    // X spans 0..10, padded by 5%
    assert!((v.x_min + 0.5).abs() < 1e-9);
    assert!((v.x_max - 10.5).abs() < 1e-9);
    // Y spans 1..6
    assert!((v.y_min - 0.75).abs() < 1e-9);
    assert!((v.y_max - 6.25).abs() < 1e-9);
}

#[test]
fn non_finite_points_are_ignored() {
    let mut fig = Figure::default();
    fig.add_series(Series::with_data("a", vec![(0.0, 1.0), (f64::NAN, 100.0), (1.0, f64::INFINITY), (2.0, 2.0)]));
    let v = ViewState::from_figure(&fig);
    assert!(v.x_max < 3.0);
    assert!(v.y_max < 3.0);
}

#[test]
fn fixed_limits_win() {
    let mut fig = Figure::default();
    fig.x_axis = Axis::with_limits("X", -1.0, 1.0);
    fig.add_series(Series::with_data("a", vec![(0.0, 0.0), (50.0, 5.0)]));
    let v = ViewState::from_figure(&fig);
    assert_eq!((v.x_min, v.x_max), (-1.0, 1.0));
    assert!(v.y_max > 5.0);
}

#[test]
fn extreme_finite_values_keep_a_bounded_layout() {
    let mut fig = Figure::default();
    fig.add_series(Series::with_data("huge", vec![(-1.1e308, 1.0), (1.1e308, 2.0)]));

    let v = ViewState::from_figure(&fig);
    assert_eq!((v.x_min, v.x_max), (-1.1e308, 1.1e308));

    let layout = fig.compute_layout(&TextShaper::new(), &RenderOptions { draw_text: false });
    assert!(!layout.x_ticks.values.is_empty());
    assert!(layout.x_ticks.values.len() <= 10, "{} x ticks", layout.x_ticks.values.len());
    assert_eq!(layout.x_tick_labels.len(), layout.x_ticks.values.len());
    assert!(layout.plot.width() > 0.0);
}
