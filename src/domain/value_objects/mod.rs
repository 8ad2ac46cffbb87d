//! Value objects - Immutable objects defined by their attributes

mod profile;
mod recommendation;
mod weather;

pub use profile::ClientProfile;
pub use recommendation::{
    FailureKind, OutfitItemRef, OutfitRecommendation, RecommendationResult,
};
pub use weather::WeatherReading;
