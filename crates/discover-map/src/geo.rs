//! Coordinates and bounding boxes.

use serde::{Deserialize, Serialize};

/// A point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned box spanning a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// A degenerate box around a single point.
    pub fn around(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::around(first), |mut bounds, p| {
            bounds.extend(p);
            bounds
        }))
    }

    /// Grow the box to include a point.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.north_east.lng - self.south_west.lng
    }

    /// Grow every side by `ratio` times the box's span on that axis.
    pub fn pad(&self, ratio: f64) -> Self {
        let dlat = self.height().abs() * ratio;
        let dlng = self.width().abs() * ratio;
        Self {
            south_west: LatLng::new(self.south_west.lat - dlat, self.south_west.lng - dlng),
            north_east: LatLng::new(self.north_east.lat + dlat, self.north_east.lng + dlng),
        }
    }

    /// Center point.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Whether a point lies inside the box (edges included).
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}
