//! Address picker on the content form.
//!
//! Lists up to five matches for a typed address; picking one fills the
//! form's coordinate and name fields and pins it on an optional mini map.

use super::{prepare, resolve, ViewConfig};
use crate::error::{Error, Result};
use crate::geo::LatLng;
use crate::sequence::{CompletedLookup, PendingLookup, SearchSequence};
use crate::widget::{MapWidget, MarkerHandle, MarkerIcon};
use discover_geocode::{GeocodeResult, Geocoder, RegionBias};
use serde::Serialize;

/// Number of candidates offered.
pub const PICKER_LIMIT: u8 = 5;

/// Zoom level of the mini map after a selection.
pub const PICKER_ZOOM: u8 = 15;

/// Location fields of the content form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationFields {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: String,
}

/// Controller for the form's location search.
pub struct AddressPicker<W> {
    mini_map: Option<W>,
    marker: Option<MarkerHandle>,
    results: Vec<GeocodeResult>,
    no_results: bool,
    fields: LocationFields,
    input: String,
    placeholder: Option<String>,
    bias: RegionBias,
    searches: SearchSequence,
}

impl<W: MapWidget> AddressPicker<W> {
    /// Create a picker. Forms without a mini map pass `None`.
    pub fn new(mini_map: Option<W>, config: &ViewConfig) -> Self {
        Self {
            mini_map,
            marker: None,
            results: Vec::new(),
            no_results: false,
            fields: LocationFields::default(),
            input: String::new(),
            placeholder: None,
            bias: config.bias.clone(),
            searches: SearchSequence::new(),
        }
    }

    /// Start from existing values (editing content that already has a
    /// location). The mini map is centered and pinned when both coordinates
    /// are present.
    pub fn with_fields(mut self, fields: LocationFields) -> Self {
        if let (Some(lat), Some(lng)) = (fields.latitude, fields.longitude) {
            self.pin(LatLng::new(lat, lng));
        }
        self.fields = fields;
        self
    }

    /// Set the search box text.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Validate the search box and issue a lookup.
    pub fn prepare_search(&mut self) -> Result<PendingLookup> {
        prepare(&mut self.searches, &self.input, &self.bias, PICKER_LIMIT)
    }

    /// Replace the candidate list with a lookup's results. An empty list
    /// sets [`no_results`](Self::no_results) instead of failing. Returns
    /// `Ok(false)` if a newer search superseded this one.
    pub fn apply_search(&mut self, completed: CompletedLookup) -> Result<bool> {
        let Some(results) = resolve(&self.searches, completed)? else {
            return Ok(false);
        };
        self.no_results = results.is_empty();
        self.results = results;
        Ok(true)
    }

    /// Search for the text in the search box.
    pub async fn search<G: Geocoder>(&mut self, geocoder: &G) -> Result<&[GeocodeResult]> {
        let pending = self.prepare_search()?;
        let completed = pending.run(geocoder).await;
        self.apply_search(completed)?;
        Ok(&self.results)
    }

    /// Pick a candidate: fill the form, pin it on the mini map, clear the
    /// list and the search box.
    pub fn select(&mut self, index: usize) -> Result<&LocationFields> {
        if index >= self.results.len() {
            return Err(Error::InvalidInput(format!(
                "no search result at index {} ({} listed)",
                index,
                self.results.len()
            )));
        }
        let result = self.results.swap_remove(index);

        self.fields = LocationFields {
            latitude: Some(result.latitude),
            longitude: Some(result.longitude),
            location_name: result.display_name.clone(),
        };
        self.pin(LatLng::new(result.latitude, result.longitude));

        self.results.clear();
        self.no_results = false;
        self.input.clear();
        self.placeholder = Some(format!("Selected location: {}", result.short_name()));

        tracing::debug!(place = %result.display_name, "Selected location");
        Ok(&self.fields)
    }

    fn pin(&mut self, position: LatLng) {
        let Some(map) = self.mini_map.as_mut() else {
            return;
        };
        map.set_view(position, PICKER_ZOOM);
        match self.marker {
            Some(marker) => map.move_marker(marker, position),
            None => self.marker = Some(map.add_marker(position, MarkerIcon::Default)),
        }
    }

    /// Candidates from the last search.
    pub fn results(&self) -> &[GeocodeResult] {
        &self.results
    }

    /// Whether the last search came back empty.
    pub fn no_results(&self) -> bool {
        self.no_results
    }

    pub fn fields(&self) -> &LocationFields {
        &self.fields
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Hint shown in the empty search box after a selection.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn mini_map(&self) -> Option<&W> {
        self.mini_map.as_ref()
    }

    /// Marker on the mini map, if one was placed.
    pub fn marker(&self) -> Option<MarkerHandle> {
        self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Notice;
    use crate::scene::{SceneMap, Viewport};
    use crate::testing::{castle, FakeGeocoder};

    fn candidates() -> Vec<GeocodeResult> {
        vec![
            castle(),
            GeocodeResult::new(38.7106, -9.1364, "Rua do Castelo, Lisboa"),
            GeocodeResult::new(38.7120, -9.1330, "Largo do Castelo, Lisboa"),
            GeocodeResult::new(38.7130, -9.1340, "Castelo Café, Lisboa"),
            GeocodeResult::new(38.7140, -9.1350, "Castelo Hostel, Lisboa"),
            GeocodeResult::new(38.7150, -9.1360, "Sixth, Lisboa"),
        ]
    }

    fn picker() -> AddressPicker<SceneMap> {
        AddressPicker::new(Some(SceneMap::new()), &ViewConfig::default())
    }

    #[tokio::test]
    async fn lists_at_most_five_results() {
        let mut picker = picker();
        let geocoder = FakeGeocoder::returning(candidates());
        picker.set_input("Castelo");

        let results = picker.search(&geocoder).await.unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(
            geocoder.queries(),
            vec!["Castelo, Lisboa, Portugal".to_string()]
        );
    }

    #[tokio::test]
    async fn selecting_fills_fields_and_clears_list() {
        let mut picker = picker();
        let geocoder = FakeGeocoder::returning(candidates());
        picker.set_input("Castelo");
        picker.search(&geocoder).await.unwrap();

        let fields = picker.select(1).unwrap().clone();
        assert_eq!(fields.latitude, Some(38.7106));
        assert_eq!(fields.longitude, Some(-9.1364));
        assert_eq!(fields.location_name, "Rua do Castelo, Lisboa");

        assert!(picker.results().is_empty());
        assert_eq!(picker.input(), "");
        assert_eq!(picker.placeholder(), Some("Selected location: Rua do Castelo"));

        let map = picker.mini_map().unwrap();
        let marker = map.marker(picker.marker().unwrap()).unwrap();
        assert_eq!(marker.position, LatLng::new(38.7106, -9.1364));
        assert_eq!(
            map.viewport,
            Some(Viewport::Center {
                center: LatLng::new(38.7106, -9.1364),
                zoom: PICKER_ZOOM
            })
        );
    }

    #[tokio::test]
    async fn second_selection_moves_existing_marker() {
        let mut picker = picker();
        let geocoder = FakeGeocoder::returning(candidates());

        picker.set_input("Castelo");
        picker.search(&geocoder).await.unwrap();
        picker.select(0).unwrap();
        let first = picker.marker().unwrap();

        picker.set_input("Castelo");
        picker.search(&geocoder).await.unwrap();
        picker.select(2).unwrap();

        assert_eq!(picker.marker(), Some(first));
        let map = picker.mini_map().unwrap();
        assert_eq!(map.marker_count(), 1);
        assert_eq!(map.marker(first).unwrap().position, LatLng::new(38.7120, -9.1330));
    }

    #[tokio::test]
    async fn empty_results_show_inline_message() {
        let mut picker = picker();
        picker.set_input("Atlantis");
        let results = picker
            .search(&FakeGeocoder::returning(vec![]))
            .await
            .unwrap();
        assert!(results.is_empty());
        assert!(picker.no_results());
        assert_eq!(picker.fields(), &LocationFields::default());
    }

    #[tokio::test]
    async fn failure_and_blank_input_are_notices() {
        let mut picker = picker();
        let err = picker.search(&FakeGeocoder::failing()).await.unwrap_err();
        assert_eq!(err.notice(), Some(Notice::EmptyQuery));

        picker.set_input("Castelo");
        let err = picker.search(&FakeGeocoder::failing()).await.unwrap_err();
        assert_eq!(err.notice(), Some(Notice::SearchFailed));
    }

    #[test]
    fn select_out_of_range_is_invalid() {
        let mut picker = picker();
        assert!(matches!(picker.select(0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn works_without_mini_map() {
        let mut picker: AddressPicker<SceneMap> = AddressPicker::new(None, &ViewConfig::default());
        picker.results = candidates();
        let fields = picker.select(0).unwrap();
        assert_eq!(fields.location_name, "Castelo de São Jorge, Lisboa");
        assert!(picker.marker().is_none());
    }

    #[test]
    fn existing_fields_pin_mini_map() {
        let picker = picker().with_fields(LocationFields {
            latitude: Some(38.7139),
            longitude: Some(-9.1335),
            location_name: "Castelo".to_string(),
        });
        assert!(picker.marker().is_some());
        assert_eq!(picker.mini_map().unwrap().marker_count(), 1);
    }
}
