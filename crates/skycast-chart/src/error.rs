// File: crates/skycast-chart/src/error.rs
// Summary: Error type for chart input validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The x mapping divides by `count - 1`, so a chart needs two samples.
    #[error("hourly chart needs at least 2 samples, got {got}")]
    TooFewSamples { got: usize },
    /// Width must be finite and at least the left plus right padding.
    #[error("surface logical width must be finite and at least 80, got {width}")]
    InvalidSurface { width: f32 },
}
