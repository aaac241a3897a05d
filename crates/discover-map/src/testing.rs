//! Shared test fixtures.

use crate::models::ContentItem;
use discover_geocode::{GeocodeError, GeocodeQuery, GeocodeResult, Geocoder};
use std::future::Future;
use std::sync::Mutex;

/// A small Lisbon guide: mixed categories, one item without coordinates.
pub fn sample_items() -> Vec<ContentItem> {
    vec![
        ContentItem::new(1, "Museu do Oriente", "museum")
            .with_description("Asian art in a former cod warehouse in Alcantara")
            .with_position(38.7036, -9.1717)
            .with_author("ana")
            .with_media("oriente.jpg"),
        ContentItem::new(2, "Pastéis de Belém", "restaurant")
            .with_description("Custard tarts since 1837")
            .with_position(38.6975, -9.2032)
            .with_location_name("Rua de Belém 84")
            .with_author("joao"),
        ContentItem::new(3, "LX Factory", "other")
            .with_description("Creative hub under the bridge")
            .with_position(38.7033, -9.1785)
            .with_location_name("Alcântara")
            .with_author("rita"),
        ContentItem::new(4, "Museu Nacional do Azulejo", "museum")
            .with_description("Five centuries of tiles")
            .with_position(38.7247, -9.1136)
            .with_author("ana")
            .with_media("azulejo.mp4"),
        ContentItem::new(5, "Alcantara street art walk", "museum")
            .with_description("Murals along the docks")
            .with_author("rui"),
        ContentItem::new(6, "Miradouro de Santa Luzia", "viewpoint")
            .with_description("Tiled terrace over Alfama")
            .with_position(38.7118, -9.1300)
            .with_author("joao")
            .with_media("fado.mp3"),
        ContentItem::new(7, "Praia de Carcavelos", "beach")
            .with_description("Surf beach on the Cascais line")
            .with_position(38.6780, -9.3360)
            .with_author("rita"),
    ]
}

/// The castle result used across search scenarios.
pub fn castle() -> GeocodeResult {
    GeocodeResult::new(38.7139, -9.1335, "Castelo de São Jorge, Lisboa")
}

/// Geocoder answering every query with a canned response.
pub struct FakeGeocoder {
    results: Option<Vec<GeocodeResult>>,
    queries: Mutex<Vec<String>>,
}

impl FakeGeocoder {
    pub fn returning(results: Vec<GeocodeResult>) -> Self {
        Self {
            results: Some(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            results: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Query texts received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(
        &self,
        query: &GeocodeQuery,
    ) -> impl Future<Output = discover_geocode::Result<Vec<GeocodeResult>>> + Send {
        self.queries.lock().unwrap().push(query.text().to_string());
        let outcome = match &self.results {
            Some(results) => Ok(results
                .iter()
                .take(query.limit() as usize)
                .cloned()
                .collect()),
            None => Err(GeocodeError::Config("service unreachable".to_string())),
        };
        std::future::ready(outcome)
    }
}
