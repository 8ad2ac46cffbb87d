//! Recommendation API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RecommendationResult, WeatherReading};

/// Request body for POST /api/recommendations
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRecommendationDto {
    pub event_type: String,
    /// City to fetch weather for; geolocated from the caller's IP when absent
    #[serde(default)]
    pub location: Option<String>,
}

/// Response body for POST /api/recommendations
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponseDto {
    /// The weather context used for the request, when the lookup succeeded
    pub weather: Option<WeatherReading>,
    pub result: RecommendationResult,
}

/// Response body for GET /api/location
#[derive(Debug, Clone, Serialize)]
pub struct LocationDto {
    pub city: String,
}
