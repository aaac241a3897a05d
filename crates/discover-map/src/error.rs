//! Error types for Discover views.

use discover_geocode::GeocodeError;
use serde::Serialize;
use thiserror::Error;

/// Result type for Discover operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Discover operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Blank search input, rejected before any lookup
    #[error("Empty search query")]
    EmptyQuery,

    /// Lookup succeeded with zero results
    #[error("No location found for {0:?}")]
    NotFound(String),

    /// Lookup failed in transport or parsing
    #[error("Location lookup failed: {0}")]
    Lookup(#[from] GeocodeError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// User-facing notice for search errors.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Error::EmptyQuery => Some(Notice::EmptyQuery),
            Error::NotFound(_) => Some(Notice::NotFound),
            Error::Lookup(_) => Some(Notice::SearchFailed),
            _ => None,
        }
    }
}

/// Blocking message shown to the user after a search.
///
/// Not-found and failed lookups recover the same way (search again) and only
/// differ in wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    EmptyQuery,
    NotFound,
    SearchFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyQuery => "Please enter a search term.",
            Notice::NotFound => "Location not found. Try another search.",
            Notice::SearchFailed => "Search failed. Please try again.",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
