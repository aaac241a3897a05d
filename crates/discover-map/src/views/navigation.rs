//! Page navigation produced by searches.

use crate::error::{Error, Result};
use discover_geocode::{GeocodeResult, Url};
use serde::Serialize;

/// A full-page redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub url: String,
}

impl Navigation {
    /// Route of the content creation form.
    pub const NEW_CONTENT_PATH: &'static str = "/content/new";

    /// Content creation form pre-filled with a search result.
    pub fn new_content(app_url: &str, result: &GeocodeResult) -> Result<Self> {
        let mut url = Url::parse(app_url)
            .map_err(|e| Error::InvalidInput(format!("app url {:?}: {}", app_url, e)))?;
        url.set_path(Self::NEW_CONTENT_PATH);
        url.query_pairs_mut()
            .clear()
            .append_pair("lat", &result.latitude.to_string())
            .append_pair("lon", &result.longitude.to_string())
            .append_pair("name", &result.display_name)
            .append_pair("quick", "1");
        Ok(Self { url: url.into() })
    }
}
