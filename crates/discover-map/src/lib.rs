//! Discover Map - Content Browser Core
//!
//! Presents user-contributed points of interest on a map, lets visitors
//! narrow them by category or text, and jumps the map to places found by a
//! geocoding search.
//!
//! # Architecture
//!
//! - **Models**: Content items, categories and media attachments
//! - **Store**: Read-only snapshot of the published content
//! - **Filter**: Category and free-text predicates
//! - **Markers**: Full-replace synchronization of content pins onto a map
//! - **Widget**: The [`MapWidget`] seam, with [`SceneMap`] as a headless
//!   implementation that serializes for a browser frontend
//! - **Views**: Per-page controllers for the public map, the dashboard and
//!   the content form's address picker
//!
//! # Example
//!
//! ```no_run
//! use discover_map::{ContentStore, MapView, SceneMap, ViewConfig};
//! use discover_geocode::{NominatimClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ContentStore::load("contents.json")?);
//!     let geocoder = NominatimClient::new(
//!         NominatimClient::DEFAULT_ENDPOINT,
//!         NominatimClient::DEFAULT_USER_AGENT,
//!     )?;
//!
//!     let mut view = MapView::new(SceneMap::new(), store, &ViewConfig::default());
//!     view.filter_contents("museum", "filter-museum");
//!     view.search_on_map(&geocoder, "Castelo de S. Jorge").await?;
//!     println!("{}", serde_json::to_string(view.map())?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod geo;
pub mod markers;
pub mod models;
pub mod popup;
pub mod scene;
pub mod sequence;
pub mod store;
pub mod views;
pub mod widget;

#[cfg(test)]
mod testing;

pub use error::{Error, Notice, Result};
pub use filter::{filter_by_category, filter_by_text, CategoryFilter, TextQuery, ALL_CATEGORIES};
pub use geo::{Bounds, LatLng};
pub use markers::{Marker, MarkerSynchronizer, FIT_PADDING};
pub use models::{Category, CategoryPalette, ContentItem, Media, MediaKind};
pub use scene::{SceneMap, SceneMarker, Viewport};
pub use sequence::{CompletedLookup, PendingLookup, SearchSequence, SearchTicket};
pub use store::ContentStore;
pub use views::{AddressPicker, DashboardView, LocationFields, MapView, Navigation, ViewConfig};
pub use widget::{MapOptions, MapWidget, MarkerHandle, MarkerIcon, Popup, TileLayer};
