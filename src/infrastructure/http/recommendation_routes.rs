//! Recommendation API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{GenerateRecommendationDto, RecommendationResponseDto};
use crate::application::ports::outbound::{GeolocationPort, WeatherPort};
use crate::application::services::StylistService;
use crate::domain::value_objects::RecommendationResult;
use crate::infrastructure::state::AppState;

/// Run one generation action: weather lookup, then the stylist model call
///
/// Failures ride inside the tagged result rather than an HTTP error status;
/// a failed action leaves the session untouched and is retryable by a new
/// request.
pub async fn generate_recommendations(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRecommendationDto>,
) -> Json<RecommendationResponseDto> {
    let location = match req.location {
        Some(location) if !location.trim().is_empty() => location,
        _ => state.geo_client.locate().await,
    };

    let weather = match state.weather_client.current(&location).await {
        Ok(reading) => reading,
        Err(e) => {
            tracing::error!(location = %location, error = %e, "weather lookup failed");
            // The model is never called without weather context; report the
            // lookup failure in its own taxonomy bucket.
            return Json(RecommendationResponseDto {
                weather: None,
                result: RecommendationResult::failure(
                    e.kind(),
                    format!("weather lookup for {location} failed: {e}"),
                ),
            });
        }
    };

    let service = StylistService::new(state.llm_client.clone());
    let result = service
        .recommend(
            Some(&weather),
            &req.event_type,
            &state.catalog,
            &state.profile,
        )
        .await;

    Json(RecommendationResponseDto {
        weather: Some(weather),
        result,
    })
}
