//! Public map: category filter buttons and "jump to location" search.

use super::{first_result, prepare, resolve, ViewConfig, SINGLE_RESULT};
use crate::error::Result;
use crate::filter;
use crate::geo::LatLng;
use crate::markers::{Marker, MarkerSynchronizer};
use crate::popup;
use crate::sequence::{CompletedLookup, PendingLookup, SearchSequence};
use crate::store::ContentStore;
use crate::widget::{MapWidget, MarkerHandle, MarkerIcon};
use discover_geocode::{GeocodeResult, Geocoder, RegionBias};
use std::sync::Arc;

/// Zoom level after jumping to a search result.
pub const SEARCH_ZOOM: u8 = 16;

/// Controller for the public map page.
pub struct MapView<W> {
    map: W,
    store: Arc<ContentStore>,
    markers: MarkerSynchronizer,
    search_marker: Option<MarkerHandle>,
    active_filter: Option<String>,
    bias: RegionBias,
    searches: SearchSequence,
}

impl<W: MapWidget> MapView<W> {
    /// Set up the map and show every geolocated item.
    pub fn new(mut map: W, store: Arc<ContentStore>, config: &ViewConfig) -> Self {
        map.set_view(config.map.center, config.map.zoom);
        map.add_tile_layer(&config.map.tiles);

        let mut markers = MarkerSynchronizer::new(config.palette.clone());
        markers.sync(&mut map, store.items());

        Self {
            map,
            store,
            markers,
            search_marker: None,
            active_filter: None,
            // The map search only appends the city, not the country.
            bias: config.bias.city_only(),
            searches: SearchSequence::new(),
        }
    }

    /// Show only items in `category` (`"all"` for everything). `trigger` is
    /// the filter button that was pressed; it becomes the single active one.
    pub fn filter_contents(&mut self, category: &str, trigger: &str) -> usize {
        self.active_filter = Some(trigger.to_string());
        let items = filter::filter_by_category(self.store.items(), category);
        let placed = self.markers.sync(&mut self.map, items);
        tracing::debug!(category, placed, "Filtered map contents");
        placed
    }

    /// Validate input and issue a lookup for the map search box.
    pub fn prepare_search(&mut self, raw: &str) -> Result<PendingLookup> {
        prepare(&mut self.searches, raw, &self.bias, SINGLE_RESULT)
    }

    /// Apply a lookup response: recenter on the first result and replace the
    /// search marker. Returns `Ok(None)` if a newer search superseded this one.
    pub fn apply_search(&mut self, completed: CompletedLookup) -> Result<Option<GeocodeResult>> {
        let query = completed.query.clone();
        let Some(results) = resolve(&self.searches, completed)? else {
            return Ok(None);
        };
        let result = first_result(&query, results)?;
        let position = LatLng::new(result.latitude, result.longitude);

        self.map.set_view(position, SEARCH_ZOOM);

        if let Some(previous) = self.search_marker.take() {
            self.map.remove_marker(previous);
        }
        let handle = self.map.add_marker(position, MarkerIcon::Search);
        self.map.bind_popup(handle, popup::search_popup(&result.display_name));
        self.map.open_popup(handle);
        self.search_marker = Some(handle);

        tracing::info!(place = %result.display_name, "Jumped to search result");
        Ok(Some(result))
    }

    /// Search for a place and jump to it.
    pub async fn search_on_map<G: Geocoder>(
        &mut self,
        geocoder: &G,
        raw: &str,
    ) -> Result<Option<GeocodeResult>> {
        let pending = self.prepare_search(raw)?;
        let completed = pending.run(geocoder).await;
        self.apply_search(completed)
    }

    /// Content markers currently on the map.
    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    /// The location search marker, if any.
    pub fn search_marker(&self) -> Option<MarkerHandle> {
        self.search_marker
    }

    /// Button most recently used to filter.
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn map(&self) -> &W {
        &self.map
    }

    /// Tear down the view and return its map.
    pub fn into_map(self) -> W {
        self.map
    }
}
