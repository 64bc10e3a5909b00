// File: crates/skycast-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster DrawingSurface, label text, PNG/RGBA export.

pub mod export;
pub mod surface;
pub mod text;

pub use export::{render_chart_png, render_chart_rgba8, write_chart_png, ExportOptions, RenderedChart, LABEL_STRIP_HEIGHT};
pub use surface::SkiaSurface;
pub use text::TextShaper;
