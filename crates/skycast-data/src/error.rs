// File: crates/skycast-data/src/error.rs
// Summary: Provider error taxonomy.

use std::fmt;

use thiserror::Error;

/// Which of the two provider calls an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Current,
    Forecast,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Current => f.write_str("current weather"),
            Resource::Forecast => f.write_str("forecast"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    /// Upstream error status, transport failure or timeout.
    #[error("{resource} unavailable: {reason}")]
    Unavailable { resource: Resource, reason: String },
    /// The response arrived but does not decode into a valid record.
    #[error("malformed {resource} response: {reason}")]
    Malformed { resource: Resource, reason: String },
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}

impl DataError {
    pub fn unavailable(resource: Resource, reason: impl Into<String>) -> Self {
        Self::Unavailable { resource, reason: reason.into() }
    }

    pub fn malformed(resource: Resource, reason: impl Into<String>) -> Self {
        Self::Malformed { resource, reason: reason.into() }
    }

    /// Short message suitable for showing to the person who searched.
    pub fn user_message(&self) -> String {
        match self {
            DataError::Unavailable { resource: Resource::Current, .. } => "City not found".to_string(),
            DataError::Unavailable { resource: Resource::Forecast, .. } => "Could not fetch forecast".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
