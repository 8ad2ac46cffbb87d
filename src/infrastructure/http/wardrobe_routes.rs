//! Wardrobe API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::CatalogItemDto;
use crate::infrastructure::state::AppState;

/// Return the session wardrobe catalog
pub async fn get_wardrobe(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogItemDto>> {
    let items = state.catalog.iter().map(CatalogItemDto::from).collect();
    Json(items)
}
