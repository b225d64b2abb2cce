// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing image files.

use chart_core::{Axis, Figure, Legend, LegendLoc, Marker, RenderOptions, Series};

fn sample_figure() -> Figure {
    let mut fig = Figure::default();
    fig.tight_layout = true;
    fig.set_title("Smoke");
    fig.x_axis = Axis::new("X");
    fig.y_axis = Axis::new("Y");
    fig.add_series(
        Series::with_data("up", vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .with_marker(Marker::Circle),
    );
    fig.add_series(
        Series::with_data("down", vec![(0.0, 3.0), (2.0, 1.5), (4.0, 0.5)]).with_marker(Marker::Square),
    );
    fig.set_legend(Legend::new().with_title("Series").anchored((1.05, 1.0), LegendLoc::UpperLeft));
    fig.set_grid(true);
    fig
}

fn out_path(name: &str) -> std::path::PathBuf {
    let out = std::path::PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    out
}

#[test]
fn render_smoke_png() {
    let fig = sample_figure();
    let out = out_path("smoke.png");
    let _ = std::fs::remove_file(&out);

    fig.render_to_file(&RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = fig.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1200, 1000));
}

#[test]
fn extension_picks_the_codec() {
    let fig = sample_figure();
    let opts = RenderOptions { draw_text: false };

    let jpg = out_path("smoke.jpg");
    fig.render_to_file(&opts, &jpg).expect("jpeg render");
    let bytes = std::fs::read(&jpg).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);

    let bmp = out_path("smoke.bmp");
    fig.render_to_file(&opts, &bmp).expect("bmp render");
    let bytes = std::fs::read(&bmp).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Bmp);
}

#[test]
fn unsupported_extension_writes_nothing() {
    let fig = sample_figure();
    let out = out_path("smoke.notanimage");
    let _ = std::fs::remove_file(&out);

    let err = fig.render_to_file(&RenderOptions::default(), &out).unwrap_err();
    assert!(matches!(err, chart_core::ChartError::UnsupportedFormat { .. }), "got {err:?}");
    assert!(!out.exists());
}

#[test]
fn missing_directory_is_an_io_error() {
    let fig = sample_figure();
    let out = std::path::PathBuf::from("target/test_out/does/not/exist/smoke.png");
    let _ = std::fs::remove_dir_all("target/test_out/does");

    let err = fig.render_to_file(&RenderOptions { draw_text: false }, &out).unwrap_err();
    assert!(matches!(err, chart_core::ChartError::Io { .. }), "got {err:?}");
}
