// File: crates/skycast-data/src/lib.rs
// Summary: Weather data entry point; provider contract, validated records, derived panels, page shell.

pub mod error;
pub mod panels;
pub mod provider;
pub mod records;
pub mod shell;

pub use error::{DataError, Resource};
pub use panels::{daily_outlook, hourly_samples, metrics, DailySummary, Headline, IconKind, Metric};
pub use provider::{FixtureProvider, OpenWeatherMap, ProviderConfig, WeatherDataProvider};
pub use records::{CurrentWeather, Forecast, ForecastEntry};
pub use shell::{run_search, Dashboard, SearchOutcome, SearchTicket, View, WeatherReport};
