//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP/CLI) can
//! serialize/deserialize without pulling serde into the domain entities.

pub mod catalog;
pub mod recommendation;

pub use catalog::CatalogItemDto;
pub use recommendation::{GenerateRecommendationDto, LocationDto, RecommendationResponseDto};
