// File: crates/skycast-data/src/provider.rs
// Summary: WeatherDataProvider contract with the OpenWeatherMap HTTP client and a file-backed fixture provider.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{DataError, Resource};
use crate::records::{CurrentWeather, Forecast};

pub const DEFAULT_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Source of current + forecast records for a city name.
pub trait WeatherDataProvider {
    fn current(&self, city: &str) -> Result<CurrentWeather, DataError>;
    fn forecast(&self, city: &str) -> Result<Forecast, DataError>;
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_base: String,
    pub api_key: String,
    /// Upstream unit system; the chart and panels assume "metric".
    pub units: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            units: "metric".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Blocking client for the OpenWeatherMap 2.5 `weather` and `forecast` endpoints.
pub struct OpenWeatherMap {
    client: reqwest::blocking::Client,
    config: ProviderConfig,
}

impl OpenWeatherMap {
    pub fn new(config: ProviderConfig) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base.trim_end_matches('/'), path)
    }

    fn fetch(&self, resource: Resource, path: &str, city: &str) -> Result<String, DataError> {
        let url = self.endpoint(path);
        // The key travels in the query string; only the bare endpoint is logged.
        debug!(%url, city, %resource, "requesting");
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.config.api_key.as_str()), ("units", self.config.units.as_str())])
            .send()
            .map_err(|e| DataError::unavailable(resource, e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::unavailable(resource, format!("upstream returned {status}")));
        }
        response
            .text()
            .map_err(|e| DataError::unavailable(resource, e.without_url().to_string()))
    }
}

impl WeatherDataProvider for OpenWeatherMap {
    fn current(&self, city: &str) -> Result<CurrentWeather, DataError> {
        let body = self.fetch(Resource::Current, "weather", city)?;
        CurrentWeather::from_json(&body)
    }

    fn forecast(&self, city: &str) -> Result<Forecast, DataError> {
        let body = self.fetch(Resource::Forecast, "forecast", city)?;
        Forecast::from_json(&body)
    }
}

/// Replays saved `weather` / `forecast` responses from disk, whatever city is asked for.
#[derive(Clone, Debug)]
pub struct FixtureProvider {
    pub current_path: PathBuf,
    pub forecast_path: PathBuf,
}

impl FixtureProvider {
    pub fn new(current_path: impl Into<PathBuf>, forecast_path: impl Into<PathBuf>) -> Self {
        Self { current_path: current_path.into(), forecast_path: forecast_path.into() }
    }

    fn read(resource: Resource, path: &Path) -> Result<String, DataError> {
        std::fs::read_to_string(path)
            .map_err(|e| DataError::unavailable(resource, format!("{}: {e}", path.display())))
    }
}

impl WeatherDataProvider for FixtureProvider {
    fn current(&self, city: &str) -> Result<CurrentWeather, DataError> {
        debug!(city, path = %self.current_path.display(), "replaying current weather fixture");
        CurrentWeather::from_json(&Self::read(Resource::Current, &self.current_path)?)
    }

    fn forecast(&self, city: &str) -> Result<Forecast, DataError> {
        debug!(city, path = %self.forecast_path.display(), "replaying forecast fixture");
        Forecast::from_json(&Self::read(Resource::Forecast, &self.forecast_path)?)
    }
}
