// File: crates/skycast-render-skia/src/surface.rs
// Summary: DrawingSurface implementation over a Skia CPU raster surface.

use anyhow::{anyhow, Result};
use skia_safe as skia;
use skycast_chart::{DrawingSurface, Fill, LinearGradient, Rgba};
use tracing::warn;

pub(crate) fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

fn raster(width: u32, height: u32) -> Option<skia::Surface> {
    // Skia refuses empty surfaces; a zero-width host still gets one pixel.
    let w = width.max(1) as i32;
    let h = height.max(1) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))?;
    surface.canvas().clear(skia::Color::TRANSPARENT);
    Some(surface)
}

fn gradient_shader(g: &LinearGradient) -> Option<skia::Shader> {
    let colors: Vec<skia::Color> = g.stops.iter().map(|s| to_skia(s.color)).collect();
    let positions: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
    skia::Shader::linear_gradient(
        (skia::Point::new(g.start.0, g.start.1), skia::Point::new(g.end.0, g.end.1)),
        &colors[..],
        &positions[..],
        skia::TileMode::Clamp,
        None,
        None,
    )
}

/// Raster target sized in physical pixels, drawn in logical units after `set_scale`.
pub struct SkiaSurface {
    logical_width: f32,
    dpr: f32,
    surface: skia::Surface,
    path: skia::Path,
}

impl SkiaSurface {
    /// Allocate an initial buffer matching `logical_width × height` at `device_pixel_ratio`.
    pub fn new(logical_width: f32, logical_height: f32, device_pixel_ratio: f32) -> Result<Self> {
        let dpr = skycast_chart::effective_dpr(device_pixel_ratio);
        let w = (logical_width.max(0.0) * dpr) as u32;
        let h = (logical_height.max(0.0) * dpr) as u32;
        let surface = raster(w, h).ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        Ok(Self { logical_width, dpr: device_pixel_ratio, surface, path: skia::Path::new() })
    }

    pub fn physical_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    /// Raw canvas, for drawing that sits outside the DrawingSurface primitives (text, images).
    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    pub fn snapshot(&mut self) -> skia::Image {
        self.surface.image_snapshot()
    }

    /// Encode the current buffer as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read back unpremultiplied RGBA8 pixels; returns (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.physical_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed for {w}x{h} surface");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint
    }
}

impl DrawingSurface for SkiaSurface {
    fn logical_width(&self) -> f32 { self.logical_width }
    fn device_pixel_ratio(&self) -> f32 { self.dpr }

    fn resize(&mut self, physical_width: u32, physical_height: u32) {
        match raster(physical_width, physical_height) {
            Some(s) => self.surface = s,
            None => warn!(physical_width, physical_height, "raster allocation failed; keeping previous buffer"),
        }
        self.path = skia::Path::new();
    }

    fn set_scale(&mut self, sx: f32, sy: f32) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((sx, sy));
    }

    fn begin_path(&mut self) { self.path = skia::Path::new(); }
    fn move_to(&mut self, x: f32, y: f32) { self.path.move_to((x, y)); }
    fn line_to(&mut self, x: f32, y: f32) { self.path.line_to((x, y)); }
    fn close_path(&mut self) { self.path.close(); }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        let sweep = end_angle - start_angle;
        if sweep.abs() >= std::f32::consts::TAU {
            self.path.add_circle((cx, cy), radius, None);
        } else {
            let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
            self.path.arc_to(oval, start_angle.to_degrees(), sweep.to_degrees(), false);
        }
    }

    fn fill(&mut self, fill: &Fill) {
        let mut paint = self.paint();
        paint.set_style(skia::paint::Style::Fill);
        match fill {
            Fill::Solid(c) => {
                paint.set_color(to_skia(*c));
            }
            Fill::Linear(g) => match gradient_shader(g) {
                Some(shader) => {
                    paint.set_shader(shader);
                }
                None => {
                    warn!(stops = g.stops.len(), "gradient shader unavailable; using first stop");
                    if let Some(stop) = g.stops.first() {
                        paint.set_color(to_skia(stop.color));
                    }
                }
            },
        }
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn stroke(&mut self, color: Rgba, width: f32) {
        let mut paint = self.paint();
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(to_skia(color));
        self.surface.canvas().draw_path(&self.path, &paint);
    }
}
