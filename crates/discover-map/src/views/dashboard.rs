//! User dashboard: content card list and quick location search.
//!
//! The card list has its own filter surface, independent of the map. The
//! category buttons and the text box each recompute visibility for every card
//! from scratch, so whichever was used last wins.

use super::{first_result, prepare, resolve, Navigation, ViewConfig, SINGLE_RESULT};
use crate::error::Result;
use crate::filter::{CategoryFilter, TextQuery};
use crate::models::ContentItem;
use crate::sequence::{CompletedLookup, PendingLookup, SearchSequence};
use crate::store::ContentStore;
use discover_geocode::{Geocoder, RegionBias};
use std::sync::Arc;

/// Controller for the dashboard page.
pub struct DashboardView {
    store: Arc<ContentStore>,
    visible: Vec<bool>,
    active_filter: Option<String>,
    bias: RegionBias,
    app_url: String,
    searches: SearchSequence,
}

impl DashboardView {
    /// All cards start visible.
    pub fn new(store: Arc<ContentStore>, config: &ViewConfig) -> Self {
        let visible = vec![true; store.len()];
        Self {
            store,
            visible,
            active_filter: None,
            bias: config.bias.clone(),
            app_url: config.app_url.clone(),
            searches: SearchSequence::new(),
        }
    }

    /// Show cards in `category` (`"all"` for every card). `trigger` becomes
    /// the single active filter button. Returns the visible count.
    pub fn filter_cards(&mut self, category: &str, trigger: &str) -> usize {
        self.active_filter = Some(trigger.to_string());
        let filter = CategoryFilter::parse(category);
        self.apply(|item| filter.matches(item))
    }

    /// Show cards whose title or description contains `query`, ignoring case.
    pub fn search_cards(&mut self, query: &str) -> usize {
        let query = TextQuery::new(query);
        self.apply(|item| query.matches(item))
    }

    fn apply<F: Fn(&ContentItem) -> bool>(&mut self, matches: F) -> usize {
        for (visible, item) in self.visible.iter_mut().zip(self.store.items()) {
            *visible = matches(item);
        }
        self.visible.iter().filter(|v| **v).count()
    }

    /// Every card with its visibility, in snapshot order.
    pub fn cards(&self) -> impl Iterator<Item = (&ContentItem, bool)> {
        self.store.items().iter().zip(self.visible.iter().copied())
    }

    /// Cards currently shown.
    pub fn visible_cards(&self) -> Vec<&ContentItem> {
        self.cards()
            .filter_map(|(item, visible)| visible.then_some(item))
            .collect()
    }

    /// Button most recently used to filter.
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// Validate input and issue a quick-search lookup.
    pub fn prepare_quick_search(&mut self, raw: &str) -> Result<PendingLookup> {
        prepare(&mut self.searches, raw, &self.bias, SINGLE_RESULT)
    }

    /// Turn the first result into a redirect to the content form.
    /// Returns `Ok(None)` if a newer search superseded this one.
    pub fn apply_quick_search(&mut self, completed: CompletedLookup) -> Result<Option<Navigation>> {
        let query = completed.query.clone();
        let Some(results) = resolve(&self.searches, completed)? else {
            return Ok(None);
        };
        let result = first_result(&query, results)?;
        let navigation = Navigation::new_content(&self.app_url, &result)?;
        tracing::info!(url = %navigation.url, "Quick search redirect");
        Ok(Some(navigation))
    }

    /// Look up a place and produce the redirect to create content there.
    pub async fn quick_search<G: Geocoder>(
        &mut self,
        geocoder: &G,
        raw: &str,
    ) -> Result<Option<Navigation>> {
        let pending = self.prepare_quick_search(raw)?;
        let completed = pending.run(geocoder).await;
        self.apply_quick_search(completed)
    }
}
