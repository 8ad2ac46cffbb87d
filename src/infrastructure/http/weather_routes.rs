//! Weather and location API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::LocationDto;
use crate::application::ports::outbound::{GeolocationPort, WeatherPort};
use crate::domain::value_objects::WeatherReading;
use crate::infrastructure::state::AppState;

/// Fetch current weather for a location
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Path(location): Path<String>,
) -> Result<Json<WeatherReading>, (StatusCode, String)> {
    state
        .weather_client
        .current(&location)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))
}

/// Resolve the caller's city from their IP, with a configured fallback
pub async fn get_location(State(state): State<Arc<AppState>>) -> Json<LocationDto> {
    Json(LocationDto {
        city: state.geo_client.locate().await,
    })
}
