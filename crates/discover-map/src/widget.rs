//! Map widget capability.
//!
//! The map engine (tiles, projection, rendering) is external. Views only need
//! the handful of operations below; [`crate::SceneMap`] implements them
//! headlessly and a browser binding would implement them over its map library.

use crate::geo::{Bounds, LatLng};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a marker placed on a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

/// Icon drawn for a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Teardrop pin in a category color
    Pin { color: String },
    /// Round highlight for a location search result
    Search,
    /// The map library's stock marker
    Default,
}

impl MarkerIcon {
    /// Icon size in pixels (width, height).
    pub fn size(&self) -> (u32, u32) {
        match self {
            MarkerIcon::Pin { .. } => (30, 30),
            MarkerIcon::Search => (40, 40),
            MarkerIcon::Default => (25, 41),
        }
    }

    /// Pixel of the icon that sits on the coordinate.
    pub fn anchor(&self) -> (u32, u32) {
        match self {
            MarkerIcon::Pin { .. } => (15, 30),
            MarkerIcon::Search => (20, 20),
            MarkerIcon::Default => (12, 41),
        }
    }
}

/// HTML fragment shown when a marker is clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub html: String,
    pub max_width: u32,
}

impl Popup {
    pub const DEFAULT_MAX_WIDTH: u32 = 300;

    pub fn new(html: String) -> Self {
        Self {
            html,
            max_width: Self::DEFAULT_MAX_WIDTH,
        }
    }
}

/// Raster tile source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    /// Standard OpenStreetMap tiles.
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 19,
        }
    }
}

/// Initial state of a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileLayer,
}

impl MapOptions {
    /// Lisbon city center at street level.
    pub fn lisboa() -> Self {
        Self {
            center: LatLng::new(38.7223, -9.1393),
            zoom: 13,
            tiles: TileLayer::openstreetmap(),
        }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self::lisboa()
    }
}

/// Operations a map view needs from the underlying map engine.
pub trait MapWidget {
    /// Add a tile layer.
    fn add_tile_layer(&mut self, layer: &TileLayer);

    /// Center the viewport on a point at a zoom level.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Fit the viewport to a box.
    fn fit_bounds(&mut self, bounds: Bounds);

    /// Place a marker.
    fn add_marker(&mut self, position: LatLng, icon: MarkerIcon) -> MarkerHandle;

    /// Remove a marker. Unknown handles are ignored.
    fn remove_marker(&mut self, marker: MarkerHandle);

    /// Move an existing marker.
    fn move_marker(&mut self, marker: MarkerHandle, position: LatLng);

    /// Attach a popup to a marker, replacing any previous one.
    fn bind_popup(&mut self, marker: MarkerHandle, popup: Popup);

    /// Show a marker's popup.
    fn open_popup(&mut self, marker: MarkerHandle);
}

impl<W: MapWidget + ?Sized> MapWidget for &mut W {
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        (**self).add_tile_layer(layer)
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        (**self).set_view(center, zoom)
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        (**self).fit_bounds(bounds)
    }

    fn add_marker(&mut self, position: LatLng, icon: MarkerIcon) -> MarkerHandle {
        (**self).add_marker(position, icon)
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        (**self).remove_marker(marker)
    }

    fn move_marker(&mut self, marker: MarkerHandle, position: LatLng) {
        (**self).move_marker(marker, position)
    }

    fn bind_popup(&mut self, marker: MarkerHandle, popup: Popup) {
        (**self).bind_popup(marker, popup)
    }

    fn open_popup(&mut self, marker: MarkerHandle) {
        (**self).open_popup(marker)
    }
}
