//! Content store: the per-view snapshot of content items.

use crate::error::Result;
use crate::filter;
use crate::models::ContentItem;
use std::path::Path;

/// Immutable snapshot of the content available to a view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    items: Vec<ContentItem>,
}

impl ContentStore {
    /// Wrap a list of items.
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON snapshot from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            items = store.len(),
            geolocated = store.geolocated().count(),
            "Loaded content snapshot from {:?}",
            path
        );
        Ok(store)
    }

    /// All items, in snapshot order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id.
    pub fn get(&self, id: u64) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items that can be shown on the map.
    pub fn geolocated(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|i| i.is_geolocated())
    }

    /// Items in a category (`"all"` for everything).
    pub fn by_category(&self, category: &str) -> Vec<&ContentItem> {
        filter::filter_by_category(&self.items, category)
    }

    /// Items matching a text query.
    pub fn search(&self, query: &str) -> Vec<&ContentItem> {
        filter::filter_by_text(&self.items, query)
    }
}

impl From<Vec<ContentItem>> for ContentStore {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::sample_items;
    use std::io::Write;

    #[test]
    fn geolocated_skips_items_without_coordinates() {
        let store = ContentStore::new(sample_items());
        let geolocated: Vec<_> = store.geolocated().collect();
        assert!(geolocated.len() < store.len());
        assert!(geolocated.iter().all(|i| i.is_geolocated()));
    }

    #[test]
    fn get_by_id() {
        let store = ContentStore::new(sample_items());
        assert_eq!(store.get(2).map(|i| i.title.as_str()), Some("Pastéis de Belém"));
        assert!(store.get(999).is_none());
    }

    #[test]
    fn load_from_file() {
        let items = sample_items();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&items).unwrap().as_bytes())
            .unwrap();

        let store = ContentStore::load(file.path()).unwrap();
        assert_eq!(store.items(), items.as_slice());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentStore::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = ContentStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
