//! HTTP REST API routes

mod recommendation_routes;
mod wardrobe_routes;
mod weather_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use recommendation_routes::*;
pub use wardrobe_routes::*;
pub use weather_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/wardrobe", get(wardrobe_routes::get_wardrobe))
        .route("/api/location", get(weather_routes::get_location))
        .route("/api/weather/{location}", get(weather_routes::get_weather))
        .route(
            "/api/recommendations",
            post(recommendation_routes::generate_recommendations),
        )
}
