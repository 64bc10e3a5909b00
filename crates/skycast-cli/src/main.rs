// File: crates/skycast-cli/src/main.rs
// Summary: Skycast CLI; searches one city, prints headline/outlook/metrics and writes the hourly chart to PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use skycast_chart::{theme, HourlyChart};
use skycast_data::provider::DEFAULT_API_BASE;
use skycast_data::{
    daily_outlook, hourly_samples, metrics, Dashboard, FixtureProvider, Headline, OpenWeatherMap, ProviderConfig,
    SearchOutcome, View, WeatherDataProvider, WeatherReport,
};
use skycast_render_skia::{write_chart_png, ExportOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skycast", about = "Weather dashboard: current conditions, outlook and hourly chart", version)]
struct Args {
    /// City to search for
    city: String,

    /// Colour theme (light or dark)
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Logical chart width
    #[arg(short, long, default_value_t = 640.0)]
    width: f32,

    /// Device pixel ratio used for the raster backing store
    #[arg(long, default_value_t = 2.0)]
    dpr: f32,

    /// Output PNG (defaults to target/out/skycast_<city>.png)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Replay a saved `weather` response instead of calling the API
    #[arg(long, requires = "forecast_fixture")]
    current_fixture: Option<PathBuf>,

    /// Replay a saved `forecast` response instead of calling the API
    #[arg(long, requires = "current_fixture")]
    forecast_fixture: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let args = Args::parse();
    let provider = build_provider(&args)?;

    let mut dashboard = Dashboard::new(theme::find(&args.theme));
    match dashboard.search(provider.as_ref(), &args.city) {
        None => bail!("city name is empty"),
        Some(SearchOutcome::Failed { message }) => bail!("{message}"),
        Some(SearchOutcome::Stale) => bail!("search was superseded"),
        Some(SearchOutcome::Displayed) => {}
    }

    let View::Results(report) = dashboard.view() else {
        bail!("no results to show");
    };
    print_panels(report);

    let chart = HourlyChart::new(hourly_samples(&report.forecast));
    let out = args.out.clone().unwrap_or_else(|| default_out(&report.current.city));
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let opts = ExportOptions {
        width: args.width,
        device_pixel_ratio: args.dpr,
        theme: *dashboard.theme(),
        ..ExportOptions::default()
    };
    let labels = write_chart_png(&chart, &opts, &out)
        .with_context(|| format!("rendering hourly chart to {}", out.display()))?;

    let strip: Vec<String> = labels.iter().map(|l| format!("{} {}", l.hour, l.temperature)).collect();
    println!("Hourly: {}", strip.join(" | "));
    println!("Wrote {}", out.display());
    Ok(())
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn build_provider(args: &Args) -> Result<Box<dyn WeatherDataProvider>> {
    if let (Some(current), Some(forecast)) = (&args.current_fixture, &args.forecast_fixture) {
        info!(current = %current.display(), forecast = %forecast.display(), "using fixture provider");
        return Ok(Box::new(FixtureProvider::new(current, forecast)));
    }
    let Some(api_key) = args.api_key.clone().filter(|k| !k.trim().is_empty()) else {
        bail!("no API key: pass --api-key or set OPENWEATHER_API_KEY (or use --current-fixture/--forecast-fixture)");
    };
    let config = ProviderConfig {
        api_base: args.api_base.clone(),
        api_key,
        timeout: Duration::from_secs(args.timeout_secs),
        ..ProviderConfig::default()
    };
    Ok(Box::new(OpenWeatherMap::new(config).context("building HTTP client")?))
}

fn print_panels(report: &WeatherReport) {
    let h = Headline::from_current(&report.current);
    println!("{}", h.location);
    println!("{} {}°  {}  {}", h.icon.glyph(), h.temperature, h.condition, h.range);
    println!();

    for day in daily_outlook(&report.forecast) {
        println!("{:<6} {} {:>4}° {:>4}°  {}", day.name, day.icon.glyph(), day.max, day.min, day.condition);
    }
    println!();

    for m in metrics(&report.current) {
        if m.subtitle.is_empty() {
            println!("{:<11} {}", m.title, m.value);
        } else {
            println!("{:<11} {:<10} {}", m.title, m.value, m.subtitle);
        }
    }
    println!();
}

/// target/out/skycast_<city>.png, city lowercased with non-alphanumerics folded to '_'.
fn default_out(city: &str) -> PathBuf {
    let slug: String = city
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    Path::new("target/out").join(format!("skycast_{slug}.png"))
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn log_filter_honours_rust_log() {
        // Only test touching RUST_LOG, so nothing races on it.
        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::DEBUG));
        std::env::set_var("RUST_LOG", "skycast_data=trace,warn");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::TRACE));
        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn default_out_slugs_city() {
        assert_eq!(default_out("New York"), Path::new("target/out/skycast_new_york.png"));
    }
}
