// File: crates/skycast-render-skia/src/export.rs
// Summary: Headless export: renders the hourly chart, places the label strip under it, encodes PNG/RGBA.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use skycast_chart::types::CHART_HEIGHT;
use skycast_chart::{effective_dpr, HourLabel, HourlyChart, Theme};
use tracing::debug;

use crate::surface::{to_skia, SkiaSurface};
use crate::text::TextShaper;

/// Height of the hour/temperature strip under the chart, in logical units.
pub const LABEL_STRIP_HEIGHT: f32 = 44.0;

pub struct ExportOptions {
    /// Logical width of the chart, as the host layout would report it.
    pub width: f32,
    pub device_pixel_ratio: f32,
    pub theme: Theme,
    /// When false only the chart itself is exported (no text, deterministic pixels).
    pub draw_labels: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 640.0,
            device_pixel_ratio: 2.0,
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct RenderedChart {
    pub png: Vec<u8>,
    pub labels: Vec<HourLabel>,
    pub width: u32,
    pub height: u32,
}

/// Render the chart (and optionally its label strip) to PNG bytes.
pub fn render_chart_png(chart: &HourlyChart, opts: &ExportOptions) -> Result<RenderedChart> {
    let (mut page, labels) = compose(chart, opts)?;
    let (w, h) = page.physical_size();
    let png = page.encode_png()?;
    Ok(RenderedChart { png, labels, width: w as u32, height: h as u32 })
}

/// Render to PNG at `output_png_path`, creating parent directories.
pub fn write_chart_png(chart: &HourlyChart, opts: &ExportOptions, output_png_path: impl AsRef<Path>) -> Result<Vec<HourLabel>> {
    let path = output_png_path.as_ref();
    let rendered = render_chart_png(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &rendered.png).with_context(|| format!("writing {}", path.display()))?;
    Ok(rendered.labels)
}

/// Render and read back unpremultiplied RGBA8; returns (pixels, width, height, stride).
pub fn render_chart_rgba8(chart: &HourlyChart, opts: &ExportOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (mut page, _) = compose(chart, opts)?;
    page.read_rgba8()
}

// ---- helpers ----------------------------------------------------------------

fn compose(chart: &HourlyChart, opts: &ExportOptions) -> Result<(SkiaSurface, Vec<HourLabel>)> {
    let mut chart_surface = SkiaSurface::new(opts.width, CHART_HEIGHT, opts.device_pixel_ratio)?;
    let labels = chart
        .render(&mut chart_surface, &opts.theme)
        .context("rendering hourly chart")?;
    let chart_image = chart_surface.snapshot();

    let strip = if opts.draw_labels { LABEL_STRIP_HEIGHT } else { 0.0 };
    let mut page = SkiaSurface::new(opts.width, CHART_HEIGHT + strip, opts.device_pixel_ratio)?;
    let dpr = effective_dpr(opts.device_pixel_ratio);

    let canvas = page.canvas();
    canvas.clear(to_skia(opts.theme.background));
    canvas.draw_image(&chart_image, (0.0, 0.0), None);

    if opts.draw_labels {
        // Labels sit under their points, so reuse the layout the render just used.
        let layout = chart.layout(opts.width)?;
        let shaper = TextShaper::new();
        canvas.save();
        canvas.scale((dpr, dpr));
        for (label, point) in labels.iter().zip(&layout.points) {
            draw_label(canvas, &shaper, label, point.x, &opts.theme);
        }
        canvas.restore();
    }

    debug!(width = opts.width, dpr, labels = labels.len(), "composed chart export");
    Ok((page, labels))
}

fn draw_label(canvas: &skia::Canvas, shaper: &TextShaper, label: &HourLabel, x: f32, theme: &Theme) {
    let top = CHART_HEIGHT + 4.0;
    shaper.draw_centered(canvas, &label.hour, x, top, 12.0, to_skia(theme.label_muted), false);
    shaper.draw_centered(canvas, &label.temperature, x, top + 18.0, 13.0, to_skia(theme.label), true);
}
