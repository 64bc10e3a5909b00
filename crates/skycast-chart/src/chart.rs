// File: crates/skycast-chart/src/chart.rs
// Summary: Hourly temperature chart: layout (samples -> pixel points) and scene composition on a DrawingSurface.

use std::f32::consts::TAU;

use tracing::debug;

use crate::error::ChartError;
use crate::geometry::{linspace, ChartGeometry, Point};
use crate::scale::{TemperatureDomain, TemperatureScale};
use crate::series::{HourLabel, Sample};
use crate::surface::{DrawingSurface, Fill, LinearGradient};
use crate::theme::Theme;
use crate::types::{AREA_TOP_ALPHA, CHART_HEIGHT, LINE_WIDTH, MARKER_RADIUS, MAX_SAMPLES, PADDING};

/// Result of mapping samples into logical pixel space for one surface width.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub geometry: ChartGeometry,
    pub domain: TemperatureDomain,
    pub points: Vec<Point>,
}

pub struct HourlyChart {
    samples: Vec<Sample>,
}

impl HourlyChart {
    /// Keeps the first [`MAX_SAMPLES`] samples, in order.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.truncate(MAX_SAMPLES);
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// One label per sample, chronological.
    pub fn labels(&self) -> Vec<HourLabel> {
        self.samples.iter().map(Sample::label).collect()
    }

    /// Compute geometry, domain and points for a surface `logical_width` wide.
    pub fn layout(&self, logical_width: f32) -> Result<ChartLayout, ChartError> {
        let n = self.samples.len();
        if n < 2 {
            return Err(ChartError::TooFewSamples { got: n });
        }
        // Narrower than both paddings would run x right-to-left.
        if !logical_width.is_finite() || logical_width < 2.0 * PADDING {
            return Err(ChartError::InvalidSurface { width: logical_width });
        }

        let geometry = ChartGeometry::new(logical_width);
        let domain = TemperatureDomain::from_temperatures(self.samples.iter().map(|s| s.temperature))
            .ok_or(ChartError::TooFewSamples { got: n })?;
        let scale = TemperatureScale::new(&geometry, domain);

        let xs = linspace(geometry.left(), geometry.right(), n);
        let points = self
            .samples
            .iter()
            .zip(xs)
            .map(|(s, x)| Point { x, y: scale.to_px(s.temperature), temperature: s.temperature })
            .collect();

        Ok(ChartLayout { geometry, domain, points })
    }

    /// Repaint `surface` with the chart and return the labels for the strip below it.
    ///
    /// Input is validated before the surface is touched, so a rejected render
    /// leaves previous content in place.
    pub fn render<S>(&self, surface: &mut S, theme: &Theme) -> Result<Vec<HourLabel>, ChartError>
    where
        S: DrawingSurface + ?Sized,
    {
        let layout = self.layout(surface.logical_width())?;
        let dpr = effective_dpr(surface.device_pixel_ratio());
        let g = &layout.geometry;

        // Resizing also clears the previous frame.
        surface.resize((g.width * dpr) as u32, (CHART_HEIGHT * dpr) as u32);
        surface.set_scale(dpr, dpr);

        draw_area(surface, &layout, theme);
        draw_line(surface, &layout.points, theme);
        draw_markers(surface, &layout.points, theme);

        debug!(
            points = layout.points.len(),
            width = g.width,
            dpr,
            domain_min = layout.domain.min,
            domain_range = layout.domain.range,
            theme = theme.name,
            "rendered hourly chart"
        );
        Ok(self.labels())
    }
}

/// Convenience wrapper over [`HourlyChart::render`].
pub fn render_hourly_chart<S>(samples: &[Sample], surface: &mut S, theme: &Theme) -> Result<Vec<HourLabel>, ChartError>
where
    S: DrawingSurface + ?Sized,
{
    HourlyChart::new(samples.to_vec()).render(surface, theme)
}

/// Hosts that report no usable ratio render at 1x.
pub fn effective_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

// ---- helpers ----------------------------------------------------------------

fn area_gradient(g: &ChartGeometry, theme: &Theme) -> LinearGradient {
    LinearGradient::new((0.0, g.top()), (0.0, g.bottom()))
        .with_stop(0.0, theme.accent.with_alpha(AREA_TOP_ALPHA))
        .with_stop(1.0, theme.accent.with_alpha(0.0))
}

fn draw_area<S: DrawingSurface + ?Sized>(surface: &mut S, layout: &ChartLayout, theme: &Theme) {
    let g = &layout.geometry;
    let (Some(first), Some(last)) = (layout.points.first(), layout.points.last()) else { return };

    surface.begin_path();
    surface.move_to(first.x, g.bottom());
    for p in &layout.points {
        surface.line_to(p.x, p.y);
    }
    surface.line_to(last.x, g.bottom());
    surface.close_path();
    surface.fill(&Fill::Linear(area_gradient(g, theme)));
}

fn draw_line<S: DrawingSurface + ?Sized>(surface: &mut S, points: &[Point], theme: &Theme) {
    let Some(first) = points.first() else { return };

    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in points.iter().skip(1) {
        surface.line_to(p.x, p.y);
    }
    surface.stroke(theme.accent, LINE_WIDTH);
}

fn draw_markers<S: DrawingSurface + ?Sized>(surface: &mut S, points: &[Point], theme: &Theme) {
    let marker = Fill::Solid(theme.accent);
    for p in points {
        surface.begin_path();
        surface.arc(p.x, p.y, MARKER_RADIUS, 0.0, TAU);
        surface.fill(&marker);
    }
}
