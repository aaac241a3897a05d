//! ContentItem model - a place card shown on the map and the dashboard.
//!
//! The JSON shape matches the content snapshot the hosting server embeds in
//! each page: flat `media_type` / `media_filename` fields and optional
//! coordinates.

use super::media::{Media, MediaKind};
use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A piece of user-contributed content about a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier
    pub id: u64,

    /// Title shown on cards and popups
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category id (`restaurant`, `museum`, ...)
    pub category: String,

    /// Latitude in degrees
    pub latitude: Option<f64>,

    /// Longitude in degrees
    pub longitude: Option<f64>,

    /// Human-readable place name
    pub location_name: Option<String>,

    /// Username of the author
    #[serde(default)]
    pub author: String,

    /// Kind of the attached media file
    pub media_type: Option<MediaKind>,

    /// Attached media file under the uploads directory
    pub media_filename: Option<String>,

    /// Creation timestamp (ISO 8601)
    pub created_at: Option<String>,
}

impl ContentItem {
    /// Create a new minimal content item.
    pub fn new(id: u64, title: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            latitude: None,
            longitude: None,
            location_name: None,
            author: String::new(),
            media_type: None,
            media_filename: None,
            created_at: None,
        }
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Builder: Set coordinates.
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Builder: Set location name.
    pub fn with_location_name(mut self, name: &str) -> Self {
        self.location_name = Some(name.to_string());
        self
    }

    /// Builder: Set author.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Builder: Attach a media file, inferring its kind from the extension.
    pub fn with_media(mut self, filename: &str) -> Self {
        self.media_type = MediaKind::from_filename(filename);
        self.media_filename = Some(filename.to_string());
        self
    }

    /// Map position, if both coordinates are present.
    pub fn position(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }

    /// Whether the item can be shown as a map pin.
    pub fn is_geolocated(&self) -> bool {
        self.position().is_some()
    }

    /// Attached media, if a file is present.
    pub fn media(&self) -> Option<Media<'_>> {
        let filename = self.media_filename.as_deref().filter(|f| !f.is_empty())?;
        Some(Media {
            filename,
            kind: self.media_type.unwrap_or(MediaKind::Unknown),
        })
    }

    /// Location name, treating an empty string as absent.
    pub fn location_label(&self) -> Option<&str> {
        self.location_name.as_deref().filter(|n| !n.is_empty())
    }
}
