// File: crates/skycast-data/src/shell.rs
// Summary: Page shell state: landing/loading/results views, theme, and latest-wins search sequencing.

use skycast_chart::Theme;
use tracing::{debug, error, info};

use crate::error::DataError;
use crate::provider::WeatherDataProvider;
use crate::records::{CurrentWeather, Forecast};

/// Both records for one search.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

/// Fetch current weather, then (only if that succeeded) the forecast.
pub fn run_search<P>(provider: &P, city: &str) -> Result<WeatherReport, DataError>
where
    P: WeatherDataProvider + ?Sized,
{
    let current = provider.current(city)?;
    let forecast = provider.forecast(city)?;
    debug!(city, slots = forecast.entries.len(), "search data complete");
    Ok(WeatherReport { current, forecast })
}

/// Handle for one submitted search. Only the most recently issued ticket may update the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub city: String,
}

#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Landing,
    Loading { city: &'a str },
    Results(&'a WeatherReport),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Displayed,
    /// A newer search was submitted; this result was dropped.
    Stale,
    /// The previous view is back in place; `message` is for the user.
    Failed { message: String },
}

enum Settled {
    Landing,
    Results(Box<WeatherReport>),
}

pub struct Dashboard {
    settled: Settled,
    pending: Option<SearchTicket>,
    theme: Theme,
    next_seq: u64,
}

impl Dashboard {
    pub fn new(theme: Theme) -> Self {
        Self { settled: Settled::Landing, pending: None, theme, next_seq: 1 }
    }

    pub fn view(&self) -> View<'_> {
        if let Some(t) = &self.pending {
            return View::Loading { city: &t.city };
        }
        match &self.settled {
            Settled::Landing => View::Landing,
            Settled::Results(r) => View::Results(r),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.name, "theme toggled");
        self.theme
    }

    /// Start a search; blank input is ignored.
    pub fn submit(&mut self, city: &str) -> Option<SearchTicket> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }
        let ticket = SearchTicket { seq: self.next_seq, city: city.to_string() };
        self.next_seq += 1;
        if let Some(prev) = self.pending.replace(ticket.clone()) {
            debug!(superseded = prev.seq, by = ticket.seq, "search superseded");
        }
        info!(city, seq = ticket.seq, "search submitted");
        Some(ticket)
    }

    /// Apply a finished search. Results for anything but the latest ticket are discarded.
    pub fn complete(&mut self, ticket: &SearchTicket, result: Result<WeatherReport, DataError>) -> SearchOutcome {
        match &self.pending {
            Some(p) if p.seq == ticket.seq => {}
            _ => {
                debug!(seq = ticket.seq, city = %ticket.city, "dropping stale search result");
                return SearchOutcome::Stale;
            }
        }
        self.pending = None;

        match result {
            Ok(report) => {
                info!(city = %ticket.city, seq = ticket.seq, "showing results");
                self.settled = Settled::Results(Box::new(report));
                SearchOutcome::Displayed
            }
            Err(e) => {
                error!(city = %ticket.city, error = %e, "search failed");
                SearchOutcome::Failed { message: e.user_message() }
            }
        }
    }

    /// Submit and run a search to completion against `provider`.
    pub fn search<P>(&mut self, provider: &P, city: &str) -> Option<SearchOutcome>
    where
        P: WeatherDataProvider + ?Sized,
    {
        let ticket = self.submit(city)?;
        let result = run_search(provider, &ticket.city);
        Some(self.complete(&ticket, result))
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
