//! Node lifecycle: load content, build the geocoder, serve the API.

use crate::api::build_router;
use crate::config::DiscoverConfig;
use crate::error::Result;
use discover_geocode::NominatimClient;
use discover_map::{CategoryPalette, ContentStore, MapOptions, ViewConfig};
use std::sync::Arc;

/// Shared state for request handlers. Read-only after startup.
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub geocoder: NominatimClient,
    pub views: ViewConfig,
}

impl AppState {
    pub fn new(store: ContentStore, geocoder: NominatimClient, config: &DiscoverConfig) -> Self {
        Self {
            store: Arc::new(store),
            geocoder,
            views: ViewConfig {
                map: MapOptions::lisboa(),
                palette: CategoryPalette::default(),
                bias: config.bias.clone(),
                app_url: config.app_url.clone(),
            },
        }
    }
}

/// A Discover node instance.
pub struct DiscoverNode {
    state: Arc<AppState>,
    config: DiscoverConfig,
}

impl DiscoverNode {
    /// Load the content snapshot and set up the geocoding client.
    pub fn new(config: DiscoverConfig) -> Result<Self> {
        let store = match &config.content_path {
            Some(path) => ContentStore::load(path)?,
            None => {
                tracing::warn!("DISCOVER_CONTENT_PATH not set, serving an empty content store");
                ContentStore::default()
            }
        };
        let geocoder = NominatimClient::new(config.geocode_url.clone(), &config.user_agent)?;

        Ok(Self {
            state: Arc::new(AppState::new(store, geocoder, &config)),
            config,
        })
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Serve the HTTP API until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let app = build_router(self.state);
        let listener = tokio::net::TcpListener::bind(self.config.api_addr).await?;

        tracing::info!(
            addr = %self.config.api_addr,
            geocoder = %self.config.geocode_url,
            "Discover API listening"
        );
        axum::serve(listener, app).await?;
        Ok(())
    }
}
