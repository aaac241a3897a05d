//! View controllers.
//!
//! Each controller owns the state of one page view: the map it drives, its
//! markers, its active filter and its in-flight searches. Nothing here is
//! global; a new page view constructs new controllers.
//!
//! - [`MapView`] - public map with category filter and location search
//! - [`DashboardView`] - card list with filter, text search and quick search
//! - [`AddressPicker`] - content form location search with a mini map

mod dashboard;
mod map_view;
mod navigation;
mod picker;

pub use dashboard::DashboardView;
pub use map_view::MapView;
pub use navigation::Navigation;
pub use picker::{AddressPicker, LocationFields};

use crate::error::{Error, Result};
use crate::models::CategoryPalette;
use crate::sequence::{CompletedLookup, PendingLookup, SearchSequence};
use crate::widget::MapOptions;
use discover_geocode::{GeocodeQuery, GeocodeResult, RegionBias};

/// Settings shared by the views of one deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Initial map state
    pub map: MapOptions,

    /// Category colors
    pub palette: CategoryPalette,

    /// Locality appended to searches
    pub bias: RegionBias,

    /// Base URL for navigation targets
    pub app_url: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            map: MapOptions::lisboa(),
            palette: CategoryPalette::default(),
            bias: RegionBias::lisboa(),
            app_url: "http://localhost:5000".to_string(),
        }
    }
}

/// Result limit for single-result searches.
const SINGLE_RESULT: u8 = 1;

/// Trim input, reject blanks, and issue a ticketed lookup.
fn prepare(
    searches: &mut SearchSequence,
    raw: &str,
    bias: &RegionBias,
    limit: u8,
) -> Result<PendingLookup> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::EmptyQuery);
    }
    Ok(PendingLookup {
        ticket: searches.issue(),
        query: GeocodeQuery::new(raw, bias, limit),
    })
}

/// Unpack a completed lookup. `Ok(None)` means a newer lookup superseded it.
fn resolve(
    searches: &SearchSequence,
    completed: CompletedLookup,
) -> Result<Option<Vec<GeocodeResult>>> {
    if !searches.is_current(completed.ticket) {
        tracing::debug!(q = completed.query.text(), "Discarding superseded lookup");
        return Ok(None);
    }
    match completed.outcome {
        Ok(results) => Ok(Some(results)),
        Err(e) => {
            tracing::error!(q = completed.query.text(), "Location search failed: {}", e);
            Err(Error::Lookup(e))
        }
    }
}

/// First result, or `NotFound`.
fn first_result(query: &GeocodeQuery, results: Vec<GeocodeResult>) -> Result<GeocodeResult> {
    results.into_iter().next().ok_or_else(|| {
        tracing::info!(q = query.text(), "No location found");
        Error::NotFound(query.text().to_string())
    })
}
