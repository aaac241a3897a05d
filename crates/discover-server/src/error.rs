//! Error types for the Discover node.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use discover_map::Notice;
use serde::Serialize;
use thiserror::Error;

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in node operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// View or content store error
    #[error(transparent)]
    Map(#[from] discover_map::Error),

    /// Geocoding client setup error
    #[error("Geocoder error: {0}")]
    Geocode(#[from] discover_geocode::GeocodeError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Map(e) => match e.notice() {
                Some(Notice::EmptyQuery) => StatusCode::BAD_REQUEST,
                Some(Notice::NotFound) => StatusCode::NOT_FOUND,
                Some(Notice::SearchFailed) => StatusCode::BAD_GATEWAY,
                None => match e {
                    discover_map::Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                },
            },
            Error::Geocode(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn notice(&self) -> Option<Notice> {
        match self {
            Error::Map(e) => e.notice(),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    notice: Option<Notice>,
    message: Option<&'static str>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(%status, "Request failed: {}", self);
        }
        let notice = self.notice();
        let body = ErrorBody {
            error: self.to_string(),
            notice,
            message: notice.map(|n| n.message()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_map_to_statuses() {
        let empty = Error::from(discover_map::Error::EmptyQuery);
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

        let missing = Error::from(discover_map::Error::NotFound("Atlantis".into()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let failed = Error::from(discover_map::Error::Lookup(
            discover_geocode::GeocodeError::Config("down".into()),
        ));
        assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn other_errors_are_internal() {
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let invalid = Error::from(discover_map::Error::InvalidInput("index".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
