//! Region bias and query construction.

use serde::{Deserialize, Serialize};

/// A locality appended to free-text queries to improve ranking.
///
/// The check is a plain, case-sensitive substring test on `token`. Queries
/// that legitimately omit the region still get it appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBias {
    /// Text whose presence in the query disables augmentation
    pub token: String,

    /// Text appended after a comma when the token is missing
    pub suffix: String,
}

impl RegionBias {
    /// Create a new bias.
    pub fn new(token: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            suffix: suffix.into(),
        }
    }

    /// Lisbon, with the country appended.
    pub fn lisboa() -> Self {
        Self::new("Lisboa", "Lisboa, Portugal")
    }

    /// Same token, but only the token itself is appended.
    pub fn city_only(&self) -> Self {
        Self::new(self.token.clone(), self.token.clone())
    }

    /// Augment a raw query.
    pub fn apply(&self, query: &str) -> String {
        if query.contains(&self.token) {
            query.to_string()
        } else {
            format!("{}, {}", query, self.suffix)
        }
    }
}

impl Default for RegionBias {
    fn default() -> Self {
        Self::lisboa()
    }
}

/// A lookup request: augmented text plus a maximum result count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeQuery {
    text: String,
    limit: u8,
}

impl GeocodeQuery {
    /// Build a query from raw user input, applying the bias.
    pub fn new(raw: &str, bias: &RegionBias, limit: u8) -> Self {
        Self {
            text: bias.apply(raw),
            limit,
        }
    }

    /// Build a query without augmentation.
    pub fn verbatim(text: impl Into<String>, limit: u8) -> Self {
        Self {
            text: text.into(),
            limit,
        }
    }

    /// Text sent to the service.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maximum number of results requested.
    pub fn limit(&self) -> u8 {
        self.limit
    }
}
