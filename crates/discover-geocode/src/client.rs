//! Geocoding client.

use crate::bias::GeocodeQuery;
use crate::error::{GeocodeError, Result};
use crate::place::{GeocodeResult, RawPlace};
use std::future::Future;
use std::sync::Arc;

/// Anything that can turn a query into ranked places.
///
/// Zero results is a normal outcome, not an error.
pub trait Geocoder {
    /// Look up a query. Results are ordered by the service's ranking.
    fn geocode(
        &self,
        query: &GeocodeQuery,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>>> + Send;
}

impl<G: Geocoder + Send + Sync> Geocoder for Arc<G> {
    fn geocode(
        &self,
        query: &GeocodeQuery,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>>> + Send {
        (**self).geocode(query)
    }
}

impl<G: Geocoder + Send + Sync> Geocoder for &G {
    fn geocode(
        &self,
        query: &GeocodeQuery,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>>> + Send {
        (**self).geocode(query)
    }
}

/// Client for the Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    endpoint: String,
    client: reqwest::Client,
}

impl NominatimClient {
    /// Public OpenStreetMap search endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "https://nominatim.openstreetmap.org/search";

    /// Nominatim's usage policy requires an identifying agent.
    pub const DEFAULT_USER_AGENT: &'static str = concat!("discover/", env!("CARGO_PKG_VERSION"));

    /// Create a client for the given search endpoint.
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self> {
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint)
            .map_err(|e| GeocodeError::Config(format!("endpoint {:?}: {}", endpoint, e)))?;

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| GeocodeError::Config(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    /// Search endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<Vec<GeocodeResult>> {
        tracing::debug!(q = query.text(), limit = query.limit(), "Geocoding");

        let limit = query.limit().to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", query.text()), ("limit", &limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let body = response.bytes().await?;
        let places: Vec<RawPlace> = serde_json::from_slice(&body)?;
        let results = places
            .into_iter()
            .map(GeocodeResult::try_from)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = results.len(), "Geocoding complete");
        Ok(results)
    }
}
