//! Headless map widget.
//!
//! Records what a map engine would draw so the scene can be serialized and
//! handed to a browser frontend, or inspected in tests.

use crate::geo::{Bounds, LatLng};
use crate::widget::{MapWidget, MarkerHandle, MarkerIcon, Popup, TileLayer};
use serde::{Deserialize, Serialize};

/// Current viewport of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Viewport {
    Center { center: LatLng, zoom: u8 },
    Fit { bounds: Bounds },
}

/// A marker as placed on the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMarker {
    pub handle: MarkerHandle,
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub popup: Option<Popup>,
    pub popup_open: bool,
}

/// In-memory map widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneMap {
    pub tile_layers: Vec<TileLayer>,
    pub viewport: Option<Viewport>,
    pub markers: Vec<SceneMarker>,
    #[serde(skip)]
    next_handle: u64,
}

impl SceneMap {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a marker.
    pub fn marker(&self, handle: MarkerHandle) -> Option<&SceneMarker> {
        self.markers.iter().find(|m| m.handle == handle)
    }

    /// Number of markers on the scene.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn marker_mut(&mut self, handle: MarkerHandle) -> Option<&mut SceneMarker> {
        self.markers.iter_mut().find(|m| m.handle == handle)
    }
}

impl MapWidget for SceneMap {
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.viewport = Some(Viewport::Center { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.viewport = Some(Viewport::Fit { bounds });
    }

    fn add_marker(&mut self, position: LatLng, icon: MarkerIcon) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.markers.push(SceneMarker {
            handle,
            position,
            icon,
            popup: None,
            popup_open: false,
        });
        handle
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        self.markers.retain(|m| m.handle != marker);
    }

    fn move_marker(&mut self, marker: MarkerHandle, position: LatLng) {
        if let Some(m) = self.marker_mut(marker) {
            m.position = position;
        }
    }

    fn bind_popup(&mut self, marker: MarkerHandle, popup: Popup) {
        if let Some(m) = self.marker_mut(marker) {
            m.popup = Some(popup);
        }
    }

    fn open_popup(&mut self, marker: MarkerHandle) {
        // Only one popup is open at a time.
        for m in &mut self.markers {
            m.popup_open = m.handle == marker && m.popup.is_some();
        }
    }
}
