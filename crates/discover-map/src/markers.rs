//! Marker synchronization.
//!
//! Keeps the content pins on a [`MapWidget`] in 1:1 correspondence with a
//! list of content items. Every sync tears down all pins and rebuilds them,
//! so a sync costs O(n) widget calls.

use crate::geo::{Bounds, LatLng};
use crate::models::{CategoryPalette, ContentItem};
use crate::popup;
use crate::widget::{MapWidget, MarkerHandle, MarkerIcon};

/// Padding applied around the marker bounds when fitting the viewport.
pub const FIT_PADDING: f64 = 0.1;

/// A content pin on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub handle: MarkerHandle,
    /// Id of the content item this pin shows
    pub content_id: u64,
    pub position: LatLng,
    pub color: String,
}

/// Owns the item → marker mapping for one map.
#[derive(Debug, Clone, Default)]
pub struct MarkerSynchronizer {
    palette: CategoryPalette,
    markers: Vec<Marker>,
}

impl MarkerSynchronizer {
    pub fn new(palette: CategoryPalette) -> Self {
        Self {
            palette,
            markers: Vec::new(),
        }
    }

    /// Replace all markers with one per geolocated item, then fit the viewport
    /// to them. Items without coordinates are skipped; with no markers the
    /// viewport is left alone. Returns the number of markers placed.
    pub fn sync<'a, W, I>(&mut self, map: &mut W, items: I) -> usize
    where
        W: MapWidget + ?Sized,
        I: IntoIterator<Item = &'a ContentItem>,
    {
        self.clear(map);

        for item in items {
            let Some(position) = item.position() else {
                continue;
            };
            let color = self.palette.color_for(&item.category).to_string();
            let handle = map.add_marker(
                position,
                MarkerIcon::Pin {
                    color: color.clone(),
                },
            );
            map.bind_popup(handle, popup::content_popup(item, &color));
            self.markers.push(Marker {
                handle,
                content_id: item.id,
                position,
                color,
            });
        }

        if let Some(bounds) = self.bounds() {
            map.fit_bounds(bounds.pad(FIT_PADDING));
        }

        tracing::debug!(markers = self.markers.len(), "Synchronized map markers");
        self.markers.len()
    }

    /// Remove every marker from the map.
    pub fn clear<W: MapWidget + ?Sized>(&mut self, map: &mut W) {
        for marker in self.markers.drain(..) {
            map.remove_marker(marker.handle);
        }
    }

    /// Current markers, in item order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Bounding box of the current markers.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.markers.iter().map(|m| m.position))
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneMap, Viewport};
    use crate::testing::sample_items;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn one_marker_per_geolocated_item() {
        let items = sample_items();
        let mut map = SceneMap::new();
        let mut sync = MarkerSynchronizer::default();

        let placed = sync.sync(&mut map, &items);

        let geolocated = items.iter().filter(|i| i.is_geolocated()).count();
        assert_eq!(placed, geolocated);
        assert_eq!(map.marker_count(), geolocated);
        for marker in sync.markers() {
            let scene_marker = map.marker(marker.handle).unwrap();
            assert_eq!(scene_marker.position, marker.position);
            assert!(scene_marker.popup.is_some());
        }
    }

    #[test]
    fn markers_use_category_colors() {
        let items = vec![
            ContentItem::new(1, "MUDE", "museum").with_position(38.71, -9.13),
            ContentItem::new(2, "Tasca", "tasca").with_position(38.72, -9.14),
        ];
        let mut map = SceneMap::new();
        let mut sync = MarkerSynchronizer::default();
        sync.sync(&mut map, &items);

        assert_eq!(sync.markers()[0].color, "#3498db");
        assert_eq!(sync.markers()[1].color, "#2ecc71");
        assert_eq!(
            map.marker(sync.markers()[0].handle).unwrap().icon,
            MarkerIcon::Pin {
                color: "#3498db".to_string()
            }
        );
    }

    #[test]
    fn viewport_fits_padded_bounds() {
        let items = vec![
            ContentItem::new(1, "A", "beach").with_position(38.60, -9.30),
            ContentItem::new(2, "B", "beach").with_position(38.80, -9.10),
        ];
        let mut map = SceneMap::new();
        let mut sync = MarkerSynchronizer::default();
        sync.sync(&mut map, &items);

        let Some(Viewport::Fit { bounds }) = map.viewport else {
            panic!("viewport not fitted: {:?}", map.viewport);
        };
        assert!((bounds.south_west.lat - 38.58).abs() < 1e-9);
        assert!((bounds.north_east.lat - 38.82).abs() < 1e-9);
        assert!((bounds.south_west.lng - -9.32).abs() < 1e-9);
        assert!((bounds.north_east.lng - -9.08).abs() < 1e-9);
    }

    #[test]
    fn no_markers_leaves_viewport() {
        let items = vec![ContentItem::new(1, "Nowhere", "other")];
        let mut map = SceneMap::new();
        map.set_view(LatLng::new(38.7223, -9.1393), 13);
        let before = map.viewport.clone();

        let mut sync = MarkerSynchronizer::default();
        assert_eq!(sync.sync(&mut map, &items), 0);
        assert_eq!(map.viewport, before);
    }

    #[test]
    fn resync_removes_stale_markers() {
        let items = sample_items();
        let mut map = SceneMap::new();
        let mut sync = MarkerSynchronizer::default();
        sync.sync(&mut map, &items);

        let museums: Vec<_> = items.iter().filter(|i| i.category == "museum").collect();
        sync.sync(&mut map, museums.iter().copied());

        let expected = museums.iter().filter(|i| i.is_geolocated()).count();
        assert_eq!(map.marker_count(), expected);
        assert!(sync
            .markers()
            .iter()
            .all(|m| museums.iter().any(|i| i.id == m.content_id)));
    }

    #[test]
    fn clear_empties_map() {
        let items = sample_items();
        let mut map = SceneMap::new();
        let mut sync = MarkerSynchronizer::default();
        sync.sync(&mut map, &items);
        sync.clear(&mut map);
        assert_eq!(map.marker_count(), 0);
        assert!(sync.markers().is_empty());
        assert!(sync.bounds().is_none());
    }

    fn arb_items() -> impl Strategy<Value = Vec<ContentItem>> {
        let category = prop::sample::select(vec!["museum", "beach", "garden", "unknown"]);
        let coord = prop::option::of((-85.0f64..85.0, -180.0f64..180.0));
        prop::collection::vec((category, coord), 0..40).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (category, coord))| {
                    let item = ContentItem::new(i as u64, "item", category);
                    match coord {
                        Some((lat, lng)) => item.with_position(lat, lng),
                        None => item,
                    }
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn markers_match_geolocated_items(items in arb_items()) {
            let mut map = SceneMap::new();
            let mut sync = MarkerSynchronizer::default();
            sync.sync(&mut map, &items);

            let geolocated: HashSet<u64> =
                items.iter().filter(|i| i.is_geolocated()).map(|i| i.id).collect();
            let bound: Vec<u64> = sync.markers().iter().map(|m| m.content_id).collect();
            let unique: HashSet<u64> = bound.iter().copied().collect();

            prop_assert_eq!(map.marker_count(), geolocated.len());
            prop_assert_eq!(bound.len(), unique.len());
            prop_assert_eq!(unique, geolocated);
        }

        #[test]
        fn sync_is_idempotent(items in arb_items()) {
            let mut map = SceneMap::new();
            let mut sync = MarkerSynchronizer::default();

            sync.sync(&mut map, &items);
            let first: Vec<(u64, LatLng)> =
                sync.markers().iter().map(|m| (m.content_id, m.position)).collect();
            let first_viewport = map.viewport.clone();

            sync.sync(&mut map, &items);
            let second: Vec<(u64, LatLng)> =
                sync.markers().iter().map(|m| (m.content_id, m.position)).collect();

            prop_assert_eq!(first, second);
            prop_assert_eq!(map.marker_count(), sync.markers().len());
            prop_assert_eq!(map.viewport.clone(), first_viewport);
        }

        #[test]
        fn every_marker_inside_fitted_bounds(items in arb_items()) {
            let mut map = SceneMap::new();
            let mut sync = MarkerSynchronizer::default();
            sync.sync(&mut map, &items);

            if let Some(Viewport::Fit { bounds }) = map.viewport {
                for marker in sync.markers() {
                    prop_assert!(bounds.contains(marker.position));
                }
            }
        }
    }
}
