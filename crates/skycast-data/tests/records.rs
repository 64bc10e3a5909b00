// File: crates/skycast-data/tests/records.rs
// Purpose: Decode and validate provider JSON at the boundary.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use skycast_data::{
    CurrentWeather, DataError, FixtureProvider, Forecast, OpenWeatherMap, ProviderConfig, Resource, WeatherDataProvider,
};

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn read(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("read fixture")
}

#[test]
fn current_weather_fixture_decodes() {
    let c = CurrentWeather::from_json(&read("london_current.json")).expect("decode");
    assert_eq!(c.city, "London");
    assert_eq!(c.country, "GB");
    assert_eq!(c.condition, "Rain");
    assert_eq!(c.humidity, 82);
    assert_eq!(c.pressure, 1008);
    assert_eq!(c.visibility_m, Some(9000));
    assert_eq!(c.utc_offset.local_minus_utc(), 0);
    assert!((c.temperature - 12.5).abs() < 1e-9);
}

#[test]
fn forecast_fixture_decodes_in_order() {
    let f = Forecast::from_json(&read("london_forecast.json")).expect("decode");
    assert_eq!(f.city, "London");
    assert_eq!(f.entries.len(), 40);
    assert!(f.entries.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(f.entries[2].condition, "Rain");
}

#[test]
fn missing_visibility_is_accepted() {
    let json = r#"{
        "name": "Reykjavik",
        "weather": [{"main": "Snow"}],
        "main": {"temp": -3.2, "temp_min": -5.0, "temp_max": -1.0, "pressure": 990, "humidity": 88},
        "wind": {"speed": 9.0, "deg": 10},
        "sys": {"country": "IS", "sunrise": 1704110000, "sunset": 1704125000},
        "timezone": 0
    }"#;
    let c = CurrentWeather::from_json(json).expect("decode");
    assert_eq!(c.visibility_m, None);
    assert_eq!(c.condition, "Snow");
}

#[test]
fn empty_condition_list_is_malformed() {
    let json = r#"{
        "name": "Nowhere",
        "weather": [],
        "main": {"temp": 1.0, "temp_min": 0.0, "temp_max": 2.0, "pressure": 1000, "humidity": 50},
        "wind": {"speed": 1.0, "deg": 0},
        "sys": {"country": "", "sunrise": 0, "sunset": 0}
    }"#;
    let err = CurrentWeather::from_json(json).unwrap_err();
    assert!(matches!(err, DataError::Malformed { resource: Resource::Current, .. }), "{err}");
}

#[test]
fn empty_forecast_is_malformed() {
    let json = r#"{"list": [], "city": {"name": "London", "timezone": 0}}"#;
    let err = Forecast::from_json(json).unwrap_err();
    assert!(matches!(err, DataError::Malformed { resource: Resource::Forecast, .. }));
}

#[test]
fn not_json_is_malformed() {
    assert!(matches!(Forecast::from_json("<html>"), Err(DataError::Malformed { .. })));
}

#[test]
fn implausible_temperature_is_malformed() {
    let json = read("london_forecast.json").replacen("\"temp\": 10.0", "\"temp\": 3000000000.0", 1);
    assert!(json.contains("3000000000.0"), "fixture layout changed");
    let err = Forecast::from_json(&json).unwrap_err();
    assert!(matches!(err, DataError::Malformed { resource: Resource::Forecast, .. }), "{err}");
}

#[test]
fn unrepresentable_timestamp_is_malformed() {
    let json = format!(
        r#"{{"list": [{{"dt": {}, "main": {{"temp": 5.0}}, "weather": [{{"main": "Clear"}}]}}],
            "city": {{"name": "London", "timezone": 0}}}}"#,
        i64::MAX
    );
    assert!(matches!(Forecast::from_json(&json), Err(DataError::Malformed { .. })));
}

#[test]
fn fixture_provider_replays_files() {
    let p = FixtureProvider::new(fixture("london_current.json"), fixture("london_forecast.json"));
    assert_eq!(p.current("anything").unwrap().city, "London");
    assert_eq!(p.forecast("anything").unwrap().entries.len(), 40);
}

#[test]
fn missing_fixture_is_unavailable() {
    let p = FixtureProvider::new(fixture("nope.json"), fixture("london_forecast.json"));
    let err = p.current("London").unwrap_err();
    assert!(matches!(err, DataError::Unavailable { resource: Resource::Current, .. }));
    assert_eq!(err.user_message(), "City not found");
}

#[test]
fn unreachable_upstream_is_unavailable() {
    let config = ProviderConfig {
        api_base: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(2),
        ..ProviderConfig::default()
    };
    let owm = OpenWeatherMap::new(config).expect("client");
    let err = owm.forecast("London").unwrap_err();
    assert!(matches!(err, DataError::Unavailable { resource: Resource::Forecast, .. }), "{err}");
    assert!(!err.to_string().contains("test-key"), "api key leaked: {err}");
}

/// Serve one canned HTTP response on a local port; the handle yields the request line.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).expect("header") == 0 || header == "\r\n" {
                break;
            }
        }
        stream.write_all(response.as_bytes()).expect("write response");
        request_line
    });
    (base, handle)
}

fn local_client(api_base: String) -> OpenWeatherMap {
    let config = ProviderConfig {
        api_base,
        api_key: "local-key".to_string(),
        timeout: Duration::from_secs(5),
        ..ProviderConfig::default()
    };
    OpenWeatherMap::new(config).expect("client")
}

#[test]
fn error_status_is_unavailable() {
    let (base, server) = serve_once("404 Not Found", r#"{"cod":"404","message":"city not found"}"#);
    let err = local_client(base).current("Atlantis").unwrap_err();
    let request_line = server.join().expect("server thread");

    assert!(matches!(err, DataError::Unavailable { resource: Resource::Current, .. }), "{err}");
    assert_eq!(err.user_message(), "City not found");
    assert!(err.to_string().contains("404"), "{err}");

    assert!(request_line.starts_with("GET /weather?"), "{request_line}");
    assert!(request_line.contains("q=Atlantis"), "{request_line}");
    assert!(request_line.contains("appid=local-key"), "{request_line}");
    assert!(request_line.contains("units=metric"), "{request_line}");
}

#[test]
fn forecast_error_status_has_forecast_message() {
    let (base, server) = serve_once("500 Internal Server Error", "");
    let err = local_client(base).forecast("London").unwrap_err();
    let request_line = server.join().expect("server thread");

    assert_eq!(err.user_message(), "Could not fetch forecast");
    assert!(request_line.starts_with("GET /forecast?"), "{request_line}");
}

#[test]
fn garbage_body_with_ok_status_is_malformed() {
    let (base, server) = serve_once("200 OK", "not json at all");
    let err = local_client(base).current("London").unwrap_err();
    server.join().expect("server thread");

    assert!(matches!(err, DataError::Malformed { resource: Resource::Current, .. }), "{err}");
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
}

#[test]
fn ok_status_decodes_fixture_body() {
    let (base, server) = serve_once("200 OK", &read("london_current.json"));
    let current = local_client(base).current("London").expect("current");
    server.join().expect("server thread");
    assert_eq!(current.city, "London");
}
