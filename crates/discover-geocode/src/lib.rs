//! Discover Geocode
//!
//! Free-text location lookup for the Discover map browser.
//!
//! # Architecture
//!
//! - **Bias**: [`RegionBias`] appends a locality to queries that do not already
//!   mention it, so a search for "Castelo de S. Jorge" ranks the Lisbon castle
//!   first.
//! - **Query**: [`GeocodeQuery`] pairs the augmented text with a result limit.
//! - **Client**: [`Geocoder`] is the seam used by the map views;
//!   [`NominatimClient`] speaks the Nominatim JSON API over `reqwest`.
//!
//! # Example
//!
//! ```no_run
//! use discover_geocode::{GeocodeQuery, Geocoder, NominatimClient, RegionBias};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NominatimClient::new(
//!         NominatimClient::DEFAULT_ENDPOINT,
//!         NominatimClient::DEFAULT_USER_AGENT,
//!     )?;
//!     let query = GeocodeQuery::new("Castelo de S. Jorge", &RegionBias::lisboa(), 1);
//!     for place in client.geocode(&query).await? {
//!         println!("{} ({}, {})", place.display_name, place.latitude, place.longitude);
//!     }
//!     Ok(())
//! }
//! ```

mod bias;
mod client;
mod error;
mod place;

pub use bias::{GeocodeQuery, RegionBias};
pub use client::{Geocoder, NominatimClient};
pub use error::{GeocodeError, Result};
pub use place::{GeocodeResult, RawPlace};

/// URL type used for endpoints and navigation targets.
pub use reqwest::Url;
