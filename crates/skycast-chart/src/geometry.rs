// File: crates/skycast-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for the chart's pixel math.

use crate::types::{CHART_HEIGHT, PADDING};

/// Logical-space layout of one render pass. Recomputed every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub chart_width: f32,
    pub chart_height: f32,
}

impl ChartGeometry {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            height: CHART_HEIGHT,
            padding: PADDING,
            chart_width: width - 2.0 * PADDING,
            chart_height: CHART_HEIGHT - 2.0 * PADDING,
        }
    }

    pub const fn left(&self) -> f32 { self.padding }
    pub fn right(&self) -> f32 { self.width - self.padding }
    pub const fn top(&self) -> f32 { self.padding }
    /// Baseline of the area fill.
    pub fn bottom(&self) -> f32 { self.height - self.padding }
}

/// A sample positioned in logical pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub temperature: i32,
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f32 - 1.0);
    (0..steps).map(|i| start + step * i as f32).collect()
}
