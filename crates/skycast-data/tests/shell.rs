// File: crates/skycast-data/tests/shell.rs
// Purpose: Search sequencing, view transitions and theme toggling on the dashboard shell.

use std::cell::Cell;

use skycast_chart::theme;
use skycast_data::{
    run_search, CurrentWeather, Dashboard, DataError, FixtureProvider, Forecast, Resource, SearchOutcome, View,
    WeatherDataProvider,
};

fn fixtures() -> FixtureProvider {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    FixtureProvider::new(dir.join("london_current.json"), dir.join("london_forecast.json"))
}

/// Wraps the fixtures, optionally failing one call, and counts calls.
struct Scripted {
    inner: FixtureProvider,
    fail_current: bool,
    fail_forecast: bool,
    current_calls: Cell<u32>,
    forecast_calls: Cell<u32>,
}

impl Scripted {
    fn new(fail_current: bool, fail_forecast: bool) -> Self {
        Self { inner: fixtures(), fail_current, fail_forecast, current_calls: Cell::new(0), forecast_calls: Cell::new(0) }
    }
}

impl WeatherDataProvider for Scripted {
    fn current(&self, city: &str) -> Result<CurrentWeather, DataError> {
        self.current_calls.set(self.current_calls.get() + 1);
        if self.fail_current {
            return Err(DataError::unavailable(Resource::Current, "upstream returned 404 Not Found"));
        }
        self.inner.current(city)
    }

    fn forecast(&self, city: &str) -> Result<Forecast, DataError> {
        self.forecast_calls.set(self.forecast_calls.get() + 1);
        if self.fail_forecast {
            return Err(DataError::unavailable(Resource::Forecast, "upstream returned 500 Internal Server Error"));
        }
        self.inner.forecast(city)
    }
}

#[test]
fn forecast_is_not_requested_when_current_fails() {
    let p = Scripted::new(true, false);
    let err = run_search(&p, "Atlantis").unwrap_err();
    assert_eq!(err.user_message(), "City not found");
    assert_eq!(p.current_calls.get(), 1);
    assert_eq!(p.forecast_calls.get(), 0);
}

#[test]
fn successful_search_shows_results() {
    let mut d = Dashboard::default();
    assert_eq!(d.view(), View::Landing);
    assert_eq!(d.search(&fixtures(), "  London "), Some(SearchOutcome::Displayed));
    match d.view() {
        View::Results(report) => {
            assert_eq!(report.current.city, "London");
            assert_eq!(report.forecast.entries.len(), 40);
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn blank_input_is_ignored() {
    let mut d = Dashboard::default();
    assert!(d.submit("   ").is_none());
    assert_eq!(d.search(&fixtures(), ""), None);
    assert_eq!(d.view(), View::Landing);
}

#[test]
fn loading_view_names_the_city() {
    let mut d = Dashboard::default();
    let ticket = d.submit(" Paris").unwrap();
    assert_eq!(ticket.city, "Paris");
    assert_eq!(d.view(), View::Loading { city: "Paris" });
}

#[test]
fn failure_from_landing_returns_to_landing() {
    let mut d = Dashboard::default();
    let outcome = d.search(&Scripted::new(true, false), "Atlantis");
    assert_eq!(outcome, Some(SearchOutcome::Failed { message: "City not found".into() }));
    assert_eq!(d.view(), View::Landing);
}

#[test]
fn failure_keeps_previous_results() {
    let mut d = Dashboard::default();
    d.search(&fixtures(), "London");
    let outcome = d.search(&Scripted::new(false, true), "Paris");
    assert_eq!(outcome, Some(SearchOutcome::Failed { message: "Could not fetch forecast".into() }));
    match d.view() {
        View::Results(report) => assert_eq!(report.current.city, "London"),
        other => panic!("expected previous results, got {other:?}"),
    }
}

#[test]
fn latest_search_wins() {
    let mut d = Dashboard::default();
    let first = d.submit("Paris").unwrap();
    let second = d.submit("London").unwrap();
    assert!(second.seq > first.seq);

    let p = fixtures();
    // The newer search lands first; the older one must not overwrite it.
    assert_eq!(d.complete(&second, run_search(&p, &second.city)), SearchOutcome::Displayed);
    assert_eq!(d.complete(&first, run_search(&p, &first.city)), SearchOutcome::Stale);
    assert!(matches!(d.view(), View::Results(_)));
}

#[test]
fn stale_failure_does_not_disturb_loading() {
    let mut d = Dashboard::default();
    let first = d.submit("Paris").unwrap();
    let _second = d.submit("London").unwrap();
    let err = DataError::unavailable(Resource::Current, "timeout");
    assert_eq!(d.complete(&first, Err(err)), SearchOutcome::Stale);
    assert_eq!(d.view(), View::Loading { city: "London" });
}

#[test]
fn theme_toggles_between_presets() {
    let mut d = Dashboard::new(theme::find("dark"));
    assert!(d.theme().dark);
    let light = d.toggle_theme();
    assert!(!light.dark);
    assert_eq!(d.theme(), &light);
    assert!(d.toggle_theme().dark);
}
