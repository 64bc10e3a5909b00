// File: crates/skycast-data/src/panels.rs
// Summary: Text panels derived from the records: headline, 7-day outlook, metric cards, icons, hourly samples.

use chrono::{DateTime, FixedOffset, NaiveDate};
use skycast_chart::{round_temperature, samples_from_readings, Sample};

use crate::records::{CurrentWeather, Forecast};

/// Days shown in the outlook row.
pub const OUTLOOK_DAYS: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Clear,
    Clouds,
    Rain,
    Snow,
    /// Fallback for anything unrecognised (mist, haze, thunderstorm, ...).
    Cloudy,
}

impl IconKind {
    pub fn from_condition(condition: &str) -> Self {
        let c = condition.to_lowercase();
        if c == "clear" {
            IconKind::Clear
        } else if c.contains("cloud") {
            IconKind::Clouds
        } else if c.contains("rain") || c.contains("drizzle") {
            IconKind::Rain
        } else if c.contains("snow") {
            IconKind::Snow
        } else {
            IconKind::Cloudy
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Clear => "☀",
            IconKind::Clouds | IconKind::Cloudy => "☁",
            IconKind::Rain => "☂",
            IconKind::Snow => "❄",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Headline {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    /// "H 21° L 14°"
    pub range: String,
    pub icon: IconKind,
}

impl Headline {
    pub fn from_current(c: &CurrentWeather) -> Self {
        let location = if c.country.is_empty() { c.city.clone() } else { format!("{}, {}", c.city, c.country) };
        Self {
            location,
            temperature: round_temperature(c.temperature),
            condition: c.condition.clone(),
            range: format!("H {}° L {}°", round_temperature(c.temp_max), round_temperature(c.temp_min)),
            icon: IconKind::from_condition(&c.condition),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailySummary {
    /// "Today" for the first day, short weekday ("Tue") after that.
    pub name: String,
    pub date: NaiveDate,
    pub max: i32,
    pub min: i32,
    /// Condition of the day's first slot.
    pub condition: String,
    pub icon: IconKind,
}

struct DayBucket {
    date: NaiveDate,
    temps: Vec<f64>,
    condition: String,
}

fn local_time(ts: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(&offset))
}

/// Group forecast slots by calendar day (city-local), first [`OUTLOOK_DAYS`] days.
pub fn daily_outlook(forecast: &Forecast) -> Vec<DailySummary> {
    let mut days: Vec<DayBucket> = Vec::new();
    for e in &forecast.entries {
        let Some(local) = local_time(e.timestamp, forecast.utc_offset) else { continue };
        let date = local.date_naive();
        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => day.temps.push(e.temperature),
            None => days.push(DayBucket { date, temps: vec![e.temperature], condition: e.condition.clone() }),
        }
    }

    days.into_iter()
        .take(OUTLOOK_DAYS)
        .enumerate()
        .map(|(i, d)| {
            let max = d.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = d.temps.iter().copied().fold(f64::INFINITY, f64::min);
            DailySummary {
                name: if i == 0 { "Today".to_string() } else { d.date.format("%a").to_string() },
                date: d.date,
                max: round_temperature(max),
                min: round_temperature(min),
                icon: IconKind::from_condition(&d.condition),
                condition: d.condition,
            }
        })
        .collect()
}

/// The first chart-worth of forecast slots, labelled in the city's local hour.
pub fn hourly_samples(forecast: &Forecast) -> Vec<Sample> {
    samples_from_readings(
        forecast.entries.iter().map(|e| (e.timestamp, e.temperature)),
        forecast.utc_offset,
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
}

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// 8-point compass name for a bearing in degrees.
pub fn wind_direction(deg: f64) -> &'static str {
    let index = ((deg / 45.0 + 0.5).floor() as i64).rem_euclid(8);
    COMPASS[index as usize]
}

pub fn humidity_descriptor(humidity: u8) -> &'static str {
    if humidity > 70 {
        "High"
    } else if humidity > 40 {
        "Comfortable"
    } else {
        "Dry"
    }
}

/// "06:42 AM" in the given offset.
pub fn clock_time(ts: i64, offset: FixedOffset) -> String {
    local_time(ts, offset)
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Visibility, wind, pressure, humidity, sunrise and sunset cards.
pub fn metrics(c: &CurrentWeather) -> Vec<Metric> {
    let visibility = match c.visibility_m {
        Some(m) => format!("{:.1} km", m as f64 / 1000.0),
        None => "n/a".to_string(),
    };
    vec![
        Metric { title: "Visibility", value: visibility, subtitle: "Distance you can see".to_string() },
        Metric {
            title: "Wind",
            value: format!("{} km/h", (c.wind_speed_ms * 3.6 + 0.5).floor() as i64),
            subtitle: wind_direction(c.wind_deg).to_string(),
        },
        Metric { title: "Pressure", value: format!("{} mb", c.pressure), subtitle: "Atmospheric pressure".to_string() },
        Metric {
            title: "Humidity",
            value: format!("{}%", c.humidity),
            subtitle: humidity_descriptor(c.humidity).to_string(),
        },
        Metric { title: "Sunrise", value: clock_time(c.sunrise, c.utc_offset), subtitle: String::new() },
        Metric { title: "Sunset", value: clock_time(c.sunset, c.utc_offset), subtitle: String::new() },
    ]
}
