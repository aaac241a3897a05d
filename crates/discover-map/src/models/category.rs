//! Category model and color palette.

use serde::{Deserialize, Serialize};

/// A category for organizing content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Identifier stored on content items
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Pin and badge color (CSS hex)
    pub color: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    /// Default categories for the city guide.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("restaurant", "Restaurant", "#e74c3c"),
            Self::new("museum", "Museum", "#3498db"),
            Self::new("monument", "Monument", "#9b59b6"),
            Self::new("viewpoint", "Viewpoint", "#f39c12"),
            Self::new("beach", "Beach", "#16a085"),
            Self::new("garden", "Garden", "#27ae60"),
            Self::new("other", "Other", CategoryPalette::FALLBACK_COLOR),
        ]
    }
}

/// Category → color lookup. Unknown categories get the fallback color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPalette {
    pub categories: Vec<Category>,
    pub fallback: String,
}

impl CategoryPalette {
    /// Color for categories missing from the palette.
    pub const FALLBACK_COLOR: &'static str = "#2ecc71";

    /// Build a palette from a category list.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            fallback: Self::FALLBACK_COLOR.to_string(),
        }
    }

    /// Look up a category by exact id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Color for a category id. Matching is exact and case-sensitive.
    pub fn color_for(&self, id: &str) -> &str {
        self.get(id).map_or(self.fallback.as_str(), |c| c.color.as_str())
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::new(Category::defaults())
    }
}
