//! Error types for geocoding.

use thiserror::Error;

/// Result type for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodeError>;

/// Errors that can occur while looking up a location.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Request could not be sent or the body could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Geocoding service returned {0}")]
    Status(reqwest::StatusCode),

    /// Body was not the expected JSON array
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A coordinate string did not parse as a float
    #[error("Invalid {field} coordinate: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    /// Client could not be configured
    #[error("Invalid configuration: {0}")]
    Config(String),
}
