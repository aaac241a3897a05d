//! HTTP API for the Discover node.
//!
//! Every request builds its own view controller over the shared content
//! snapshot, the way each page load starts from a fresh map.

use crate::error::{Error, Result};
use crate::node::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use discover_geocode::GeocodeResult;
use discover_map::{
    AddressPicker, CategoryPalette, ContentItem, DashboardView, MapView, SceneMap,
    ALL_CATEGORIES,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

type SharedState = Arc<AppState>;

/// Build the API router.
pub fn build_router(state: SharedState) -> Router {
    // CORS layer for browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        // Content snapshot
        .route("/api/contents", get(list_contents))
        .route("/api/categories", get(list_categories))
        // Public map
        .route("/api/map", get(map_scene))
        .route("/api/map/search", get(map_search))
        // Content form address picker
        .route("/api/search-location", get(search_location))
        // Dashboard
        .route("/api/quick-search", get(quick_search))
        .route("/api/cards", get(list_cards))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

// --- Content endpoints ---

async fn list_contents(State(state): State<SharedState>) -> Json<Vec<ContentItem>> {
    Json(state.store.geolocated().cloned().collect())
}

async fn list_categories(State(state): State<SharedState>) -> Json<CategoryPalette> {
    Json(state.views.palette.clone())
}

// --- Map endpoints ---

#[derive(Debug, Deserialize)]
struct MapParams {
    category: Option<String>,
    trigger: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Map scene plus the view state a frontend needs to render the controls.
#[derive(Debug, Serialize)]
struct MapResponse {
    active_filter: Option<String>,
    markers: usize,
    result: Option<GeocodeResult>,
    scene: SceneMap,
}

impl MapResponse {
    fn new(view: MapView<SceneMap>, result: Option<GeocodeResult>) -> Self {
        Self {
            active_filter: view.active_filter().map(str::to_string),
            markers: view.markers().len(),
            result,
            scene: view.into_map(),
        }
    }
}

async fn map_scene(
    State(state): State<SharedState>,
    Query(params): Query<MapParams>,
) -> Json<MapResponse> {
    let mut view = MapView::new(SceneMap::new(), Arc::clone(&state.store), &state.views);
    if let Some(category) = params.category.as_deref() {
        let trigger = params.trigger.as_deref().unwrap_or(category);
        view.filter_contents(category, trigger);
    }
    Json(MapResponse::new(view, None))
}

async fn map_search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<MapResponse>> {
    let mut view = MapView::new(SceneMap::new(), Arc::clone(&state.store), &state.views);
    let result = view.search_on_map(&state.geocoder, &params.q).await?;
    Ok(Json(MapResponse::new(view, result)))
}

// --- Address picker ---

#[derive(Debug, Serialize)]
struct PickerResponse {
    results: Vec<GeocodeResult>,
    no_results: bool,
}

async fn search_location(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PickerResponse>> {
    let mut picker: AddressPicker<SceneMap> = AddressPicker::new(None, &state.views);
    picker.set_input(&params.q);
    let results = picker.search(&state.geocoder).await?.to_vec();
    Ok(Json(PickerResponse {
        results,
        no_results: picker.no_results(),
    }))
}

// --- Dashboard ---

async fn quick_search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    let mut view = DashboardView::new(Arc::clone(&state.store), &state.views);
    match view.quick_search(&state.geocoder, &params.q).await? {
        Some(navigation) => Ok(Redirect::to(&navigation.url).into_response()),
        None => Err(Error::Map(discover_map::Error::NotFound(params.q))),
    }
}

#[derive(Debug, Deserialize)]
struct CardParams {
    category: Option<String>,
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct Card<'a> {
    #[serde(flatten)]
    item: &'a ContentItem,
    visible: bool,
}

async fn list_cards(
    State(state): State<SharedState>,
    Query(params): Query<CardParams>,
) -> Response {
    let mut view = DashboardView::new(Arc::clone(&state.store), &state.views);
    let category = params.category.as_deref().unwrap_or(ALL_CATEGORIES);
    view.filter_cards(category, category);
    // Text search runs after the category filter, so it wins when both are given.
    if let Some(q) = params.q.as_deref() {
        view.search_cards(q);
    }
    let cards: Vec<Card<'_>> = view
        .cards()
        .map(|(item, visible)| Card { item, visible })
        .collect();
    Json(cards).into_response()
}
