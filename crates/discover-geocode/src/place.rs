//! Geocoding results.

use crate::error::{GeocodeError, Result};
use serde::{Deserialize, Serialize};

/// A place as the service sends it. Coordinates arrive as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// A parsed lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl GeocodeResult {
    /// Create a result from parsed values.
    pub fn new(latitude: f64, longitude: f64, display_name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_name: display_name.into(),
        }
    }

    /// First comma-separated segment of the display name.
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .unwrap_or(&self.display_name)
    }
}

impl TryFrom<RawPlace> for GeocodeResult {
    type Error = GeocodeError;

    fn try_from(raw: RawPlace) -> Result<Self> {
        Ok(Self {
            latitude: parse_coordinate("lat", &raw.lat)?,
            longitude: parse_coordinate("lon", &raw.lon)?,
            display_name: raw.display_name,
        })
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}
