// File: crates/skycast-chart/src/types.rs
// Summary: Shared constants for the hourly chart (logical sizes, paddings, stroke metrics).

/// Fixed logical height of the chart surface.
pub const CHART_HEIGHT: f32 = 200.0;
/// Inset reserved on every chart edge, in logical units.
pub const PADDING: f32 = 40.0;
/// Number of forecast slots the chart shows (3-hour steps, so one day).
pub const MAX_SAMPLES: usize = 8;
/// Degrees added below the coldest and above the warmest sample.
pub const DOMAIN_MARGIN: i32 = 2;

pub const LINE_WIDTH: f32 = 3.0;
pub const MARKER_RADIUS: f32 = 4.0;
/// Opacity of the area gradient at the top padding line; it fades to 0 at the bottom.
pub const AREA_TOP_ALPHA: f32 = 0.3;
