// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Figure, FigureSize, RenderOptions, Series, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut fig = Figure::new(FigureSize::new(4.0, 3.0, 100.0));
    fig.add_series(Series::with_data("diag", vec![(0.0, 0.0), (4.0, 4.0)]));

    let opts = RenderOptions { draw_text: false }; // avoid font variance
    let (px, w, h, stride) = fig.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (400, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left pixel is opaque figure background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn series_color_reaches_the_canvas() {
    let mut fig = Figure::new(FigureSize::new(4.0, 3.0, 100.0));
    fig.add_series(Series::with_data("flat", vec![(0.0, 1.0), (10.0, 1.0)]).with_line_width(6.0));
    let img = fig.render_to_image(&RenderOptions { draw_text: false }).expect("render");

    let want = Theme::light().series_color(0);
    let hit = img
        .pixels()
        .any(|p| p.0 == [want.r(), want.g(), want.b(), 255]);
    assert!(hit, "first cycle color should be drawn somewhere");
}

#[test]
fn dark_theme_paints_dark_background() {
    let mut fig = Figure::new(FigureSize::new(2.0, 2.0, 50.0));
    fig.theme = Theme::dark();
    let img = fig.render_to_image(&RenderOptions { draw_text: false }).expect("render");
    let bg = Theme::dark().background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r(), bg.g(), bg.b(), 255]);
}
