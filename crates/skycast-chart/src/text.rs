// File: crates/skycast-chart/src/text.rs
// Summary: Label formatting for the hour strip (12-hour clock, degree suffix).

use chrono::{DateTime, FixedOffset, Timelike};
use tracing::warn;

/// 12-hour clock label for an hour of day: 0 -> "12 AM", 12 -> "12 PM", 13 -> "1 PM".
pub fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {period}")
}

/// Hour label for a Unix timestamp as seen at `offset`.
pub fn hour_label_at(timestamp: i64, offset: FixedOffset) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => hour_label(utc.with_timezone(&offset).hour()),
        None => {
            warn!(timestamp, "timestamp out of range; labelling as midnight");
            hour_label(0)
        }
    }
}

pub fn temperature_label(t: i32) -> String {
    format!("{t}°")
}
