// File: crates/skycast-chart/src/scale.rs
// Summary: Temperature domain and the value-to-pixel transform for the vertical axis.

use crate::geometry::ChartGeometry;
use crate::types::DOMAIN_MARGIN;

/// Temperature range mapped onto the chart's vertical extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemperatureDomain {
    pub min: i32,
    pub max: i32,
    pub range: i32,
}

impl TemperatureDomain {
    /// Padded min/max over `temps`; `None` when empty.
    pub fn from_temperatures(temps: impl IntoIterator<Item = i32>) -> Option<Self> {
        let mut iter = temps.into_iter();
        let first = iter.next()?;
        let (lo, hi) = iter.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        // Saturating so absurd inputs clamp instead of overflowing.
        let min = lo.saturating_sub(DOMAIN_MARGIN);
        let max = hi.saturating_add(DOMAIN_MARGIN);
        // The margins keep range >= 4; the fallback only guards a zero span.
        let range = match max.saturating_sub(min) {
            0 => 1,
            r => r,
        };
        Some(Self { min, max, range })
    }
}

/// Vertical scale mapping a temperature domain to [top, bottom] pixels.
/// Higher temperatures land closer to `top_px`.
#[derive(Clone, Copy, Debug)]
pub struct TemperatureScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub domain: TemperatureDomain,
}

impl TemperatureScale {
    pub fn new(geometry: &ChartGeometry, domain: TemperatureDomain) -> Self {
        Self {
            top_px: geometry.padding,
            bottom_px: geometry.padding + geometry.chart_height,
            domain,
        }
    }

    #[inline]
    pub fn to_px(&self, t: i32) -> f32 {
        let frac = (i64::from(t) - i64::from(self.domain.min)) as f32 / self.domain.range as f32;
        self.bottom_px - frac * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f32 {
        let frac = (self.bottom_px - py) / (self.bottom_px - self.top_px);
        self.domain.min as f32 + frac * self.domain.range as f32
    }
}
