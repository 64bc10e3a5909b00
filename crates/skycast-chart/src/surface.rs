// File: crates/skycast-chart/src/surface.rs
// Summary: Drawing-surface capability trait (the primitives the renderer needs) and a recording implementation.

use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Linear gradient between two logical-space points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: (f32, f32), end: (f32, f32)) -> Self {
        Self { start, end, stops: Vec::new() }
    }

    pub fn with_stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Linear(LinearGradient),
}

/// A 2D target with canvas-like path semantics.
///
/// Coordinates passed to path operations are in logical units once
/// [`DrawingSurface::set_scale`] has been applied with the device pixel ratio.
/// `fill` and `stroke` paint the current path; `begin_path` starts a new one.
pub trait DrawingSurface {
    /// Width reported by the host layout, in logical units.
    fn logical_width(&self) -> f32;
    fn device_pixel_ratio(&self) -> f32;

    /// Reallocate the backing buffer; discards prior content and resets the transform.
    fn resize(&mut self, physical_width: u32, physical_height: u32);
    fn set_scale(&mut self, sx: f32, sy: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    /// Add a circular arc; angles in radians, clockwise in screen space.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32);

    fn fill(&mut self, fill: &Fill);
    fn stroke(&mut self, color: Rgba, width: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    SetScale { sx: f32, sy: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    ClosePath,
    Arc { cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32 },
    Fill(Fill),
    Stroke { color: Rgba, width: f32 },
}

/// Surface that records every call; used for tests and for tracing a render.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    dpr: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(logical_width: f32, device_pixel_ratio: f32) -> Self {
        Self { width: logical_width, dpr: device_pixel_ratio, commands: Vec::new() }
    }

    /// Fills in issue order.
    pub fn fills(&self) -> impl Iterator<Item = &Fill> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(f) => Some(f),
            _ => None,
        })
    }

    pub fn stroke_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Stroke { .. })).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn logical_width(&self) -> f32 { self.width }
    fn device_pixel_ratio(&self) -> f32 { self.dpr }

    fn resize(&mut self, physical_width: u32, physical_height: u32) {
        // A resize discards the buffer, so earlier commands no longer show.
        self.commands.clear();
        self.commands.push(DrawCommand::Resize { width: physical_width, height: physical_height });
    }

    fn set_scale(&mut self, sx: f32, sy: f32) { self.commands.push(DrawCommand::SetScale { sx, sy }); }
    fn begin_path(&mut self) { self.commands.push(DrawCommand::BeginPath); }
    fn move_to(&mut self, x: f32, y: f32) { self.commands.push(DrawCommand::MoveTo { x, y }); }
    fn line_to(&mut self, x: f32, y: f32) { self.commands.push(DrawCommand::LineTo { x, y }); }
    fn close_path(&mut self) { self.commands.push(DrawCommand::ClosePath); }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc { cx, cy, radius, start_angle, end_angle });
    }

    fn fill(&mut self, fill: &Fill) { self.commands.push(DrawCommand::Fill(fill.clone())); }

    fn stroke(&mut self, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Stroke { color, width });
    }
}
