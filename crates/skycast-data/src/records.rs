// File: crates/skycast-data/src/records.rs
// Summary: Typed weather records, decoded from OpenWeatherMap JSON and validated at the boundary.
// Notes:
// - `raw` mirrors the wire shape; everything outside this file only sees the
//   validated records, so downstream code can index and divide freely.

use chrono::{DateTime, FixedOffset};

use crate::error::{DataError, Resource};

/// Observed conditions for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub utc_offset: FixedOffset,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Dominant condition label ("Clear", "Clouds", "Rain", ...).
    pub condition: String,
    pub humidity: u8,
    /// hPa (mb).
    pub pressure: u32,
    /// Metres; some stations omit it.
    pub visibility_m: Option<u32>,
    pub wind_speed_ms: f64,
    pub wind_deg: f64,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: i64,
    pub temperature: f64,
    pub condition: String,
}

/// 3-hourly forecast; `entries` is non-empty and in upstream (chronological) order.
#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    pub city: String,
    pub utc_offset: FixedOffset,
    pub entries: Vec<ForecastEntry>,
}

mod raw {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Condition {
        pub main: String,
    }

    #[derive(Deserialize)]
    pub struct CurrentMain {
        pub temp: f64,
        pub temp_min: f64,
        pub temp_max: f64,
        pub pressure: u32,
        pub humidity: u8,
    }

    #[derive(Deserialize)]
    pub struct Wind {
        pub speed: f64,
        #[serde(default)]
        pub deg: f64,
    }

    #[derive(Deserialize)]
    pub struct Sys {
        #[serde(default)]
        pub country: String,
        pub sunrise: i64,
        pub sunset: i64,
    }

    #[derive(Deserialize)]
    pub struct Current {
        pub name: String,
        pub weather: Vec<Condition>,
        pub main: CurrentMain,
        pub visibility: Option<u32>,
        pub wind: Wind,
        pub sys: Sys,
        #[serde(default)]
        pub timezone: i32,
    }

    #[derive(Deserialize)]
    pub struct EntryMain {
        pub temp: f64,
    }

    #[derive(Deserialize)]
    pub struct Entry {
        pub dt: i64,
        pub main: EntryMain,
        pub weather: Vec<Condition>,
    }

    #[derive(Deserialize)]
    pub struct City {
        pub name: String,
        #[serde(default)]
        pub timezone: i32,
    }

    #[derive(Deserialize)]
    pub struct Forecast {
        pub list: Vec<Entry>,
        pub city: City,
    }
}

fn offset(resource: Resource, seconds: i32) -> Result<FixedOffset, DataError> {
    FixedOffset::east_opt(seconds)
        .ok_or_else(|| DataError::malformed(resource, format!("timezone offset {seconds}s out of range")))
}

fn first_condition(resource: Resource, weather: Vec<raw::Condition>) -> Result<String, DataError> {
    weather
        .into_iter()
        .next()
        .map(|c| c.main)
        .ok_or_else(|| DataError::malformed(resource, "weather condition list is empty"))
}

/// Bound on any reported temperature, in either metric or imperial units.
pub const MAX_ABS_TEMPERATURE: f64 = 200.0;

fn finite(resource: Resource, field: &str, v: f64) -> Result<f64, DataError> {
    if v.is_finite() { Ok(v) } else { Err(DataError::malformed(resource, format!("{field} is not finite"))) }
}

fn temperature(resource: Resource, field: &str, v: f64) -> Result<f64, DataError> {
    let v = finite(resource, field, v)?;
    if v.abs() > MAX_ABS_TEMPERATURE {
        return Err(DataError::malformed(resource, format!("{field} {v} is outside ±{MAX_ABS_TEMPERATURE}")));
    }
    Ok(v)
}

fn timestamp(resource: Resource, field: &str, ts: i64) -> Result<i64, DataError> {
    DateTime::from_timestamp(ts, 0)
        .map(|_| ts)
        .ok_or_else(|| DataError::malformed(resource, format!("{field} {ts} is not a representable time")))
}

impl CurrentWeather {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let r = Resource::Current;
        let raw: raw::Current = serde_json::from_str(json).map_err(|e| DataError::malformed(r, e.to_string()))?;
        if raw.name.trim().is_empty() {
            return Err(DataError::malformed(r, "location name is empty"));
        }
        Ok(Self {
            city: raw.name,
            country: raw.sys.country,
            utc_offset: offset(r, raw.timezone)?,
            temperature: temperature(r, "main.temp", raw.main.temp)?,
            temp_min: temperature(r, "main.temp_min", raw.main.temp_min)?,
            temp_max: temperature(r, "main.temp_max", raw.main.temp_max)?,
            condition: first_condition(r, raw.weather)?,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            visibility_m: raw.visibility,
            wind_speed_ms: finite(r, "wind.speed", raw.wind.speed)?,
            wind_deg: finite(r, "wind.deg", raw.wind.deg)?,
            sunrise: timestamp(r, "sys.sunrise", raw.sys.sunrise)?,
            sunset: timestamp(r, "sys.sunset", raw.sys.sunset)?,
        })
    }
}

impl Forecast {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let r = Resource::Forecast;
        let raw: raw::Forecast = serde_json::from_str(json).map_err(|e| DataError::malformed(r, e.to_string()))?;
        if raw.list.is_empty() {
            return Err(DataError::malformed(r, "forecast list is empty"));
        }
        let entries = raw
            .list
            .into_iter()
            .map(|e| {
                Ok(ForecastEntry {
                    timestamp: timestamp(r, "list[].dt", e.dt)?,
                    temperature: temperature(r, "list[].main.temp", e.main.temp)?,
                    condition: first_condition(r, e.weather)?,
                })
            })
            .collect::<Result<Vec<_>, DataError>>()?;
        Ok(Self { city: raw.city.name, utc_offset: offset(r, raw.city.timezone)?, entries })
    }
}

