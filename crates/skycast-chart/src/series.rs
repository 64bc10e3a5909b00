// File: crates/skycast-chart/src/series.rs
// Summary: Hourly sample model feeding the chart, and the label pairs handed back to the page.

use chrono::FixedOffset;

use crate::text::{hour_label_at, temperature_label};
use crate::types::MAX_SAMPLES;

/// One (time, temperature) observation. `time` is already a display label ("3 PM").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub time: String,
    pub temperature: i32,
}

impl Sample {
    pub fn new(time: impl Into<String>, temperature: i32) -> Self {
        Self { time: time.into(), temperature }
    }

    /// Build from a Unix timestamp and a raw temperature, labelling the hour in `offset`.
    pub fn from_reading(timestamp: i64, temperature: f64, offset: FixedOffset) -> Self {
        Self { time: hour_label_at(timestamp, offset), temperature: round_temperature(temperature) }
    }

    pub fn label(&self) -> HourLabel {
        HourLabel { hour: self.time.clone(), temperature: temperature_label(self.temperature) }
    }
}

/// Text pair placed under the chart for one sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourLabel {
    pub hour: String,
    pub temperature: String,
}

/// Round half up (`floor(x + 0.5)`), so -2.5 becomes -2 rather than -3.
pub fn round_temperature(t: f64) -> i32 {
    (t + 0.5).floor() as i32
}

/// Map the first [`MAX_SAMPLES`] `(timestamp, temperature)` readings to samples.
pub fn samples_from_readings<I>(readings: I, offset: FixedOffset) -> Vec<Sample>
where
    I: IntoIterator<Item = (i64, f64)>,
{
    readings
        .into_iter()
        .take(MAX_SAMPLES)
        .map(|(ts, t)| Sample::from_reading(ts, t, offset))
        .collect()
}
