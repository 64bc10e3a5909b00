// File: crates/skycast-render-skia/tests/smoke.rs
// Purpose: End-to-end render through Skia, writing a PNG and checking physical dimensions.

use skycast_chart::{HourlyChart, Sample, Theme};
use skycast_render_skia::{render_chart_png, write_chart_png, ExportOptions, SkiaSurface, LABEL_STRIP_HEIGHT};

fn chart() -> HourlyChart {
    HourlyChart::new(vec![
        Sample::new("12 AM", 10),
        Sample::new("3 AM", 12),
        Sample::new("6 AM", 9),
        Sample::new("9 AM", 15),
        Sample::new("12 PM", 18),
        Sample::new("3 PM", 20),
        Sample::new("6 PM", 16),
        Sample::new("9 PM", 11),
    ])
}

#[test]
fn render_smoke_png() {
    let opts = ExportOptions::default();
    let out = std::path::PathBuf::from("target/test_out/hourly.png");

    let labels = write_chart_png(&chart(), &opts, &out).expect("render should succeed");
    assert_eq!(labels.len(), 8);
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let rendered = render_chart_png(&chart(), &opts).expect("render bytes");
    assert!(rendered.png.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_is_sized_in_physical_pixels() {
    let mut opts = ExportOptions::default();
    opts.width = 320.0;
    opts.device_pixel_ratio = 2.0;
    opts.theme = Theme::dark();

    let rendered = render_chart_png(&chart(), &opts).expect("render");
    let img = image::load_from_memory(&rendered.png).expect("decode").to_rgba8();
    assert_eq!(img.width(), 640);
    assert_eq!(img.height(), ((200.0 + LABEL_STRIP_HEIGHT) * 2.0) as u32);
    assert_eq!((rendered.width, rendered.height), (img.width(), img.height()));
}

#[test]
fn chart_surface_is_resized_by_render() {
    let mut surface = SkiaSurface::new(320.0, 10.0, 3.0).expect("surface");
    chart().render(&mut surface, &Theme::light()).expect("render");
    assert_eq!(surface.physical_size(), (960, 600));
}

#[test]
fn single_sample_is_an_error() {
    let one = HourlyChart::new(vec![Sample::new("1 AM", 4)]);
    assert!(render_chart_png(&one, &ExportOptions::default()).is_err());
}
