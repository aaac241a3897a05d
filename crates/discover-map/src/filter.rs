//! Category and text filters over content items.
//!
//! Both the map and the dashboard card list use these rules, so the two
//! surfaces always agree on what matches.

use crate::models::ContentItem;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A parsed category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Exact, case-sensitive category id
    Only(String),
}

impl CategoryFilter {
    pub fn parse(category: &str) -> Self {
        if category == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(category.to_string())
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

/// A lower-cased substring search over title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Empty queries match everything.
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.needle.is_empty()
            || item.title.to_lowercase().contains(&self.needle)
            || item.description.to_lowercase().contains(&self.needle)
    }
}

/// Items in `category`, or all items for `"all"`.
pub fn filter_by_category<'a>(items: &'a [ContentItem], category: &str) -> Vec<&'a ContentItem> {
    let filter = CategoryFilter::parse(category);
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Items whose title or description contains `query`, ignoring case.
pub fn filter_by_text<'a>(items: &'a [ContentItem], query: &str) -> Vec<&'a ContentItem> {
    let query = TextQuery::new(query);
    items.iter().filter(|item| query.matches(item)).collect()
}
