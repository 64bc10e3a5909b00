// File: crates/skycast-chart/src/lib.rs
// Summary: Core library entry point; exports the hourly chart renderer and its drawing-surface capability.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{effective_dpr, render_hourly_chart, ChartLayout, HourlyChart};
pub use error::ChartError;
pub use geometry::{ChartGeometry, Point};
pub use scale::{TemperatureDomain, TemperatureScale};
pub use series::{round_temperature, samples_from_readings, HourLabel, Sample};
pub use surface::{DrawCommand, DrawingSurface, Fill, GradientStop, LinearGradient, RecordingSurface};
pub use theme::{Rgba, Theme};
