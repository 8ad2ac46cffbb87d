//! Weather port - Interface for current-conditions providers

use async_trait::async_trait;

use crate::domain::value_objects::{FailureKind, WeatherReading};

/// Normalized failure for a weather lookup
///
/// Every transport fault, provider error body, and unexpected payload is
/// converted into one of these variants at the adapter boundary; no raw
/// client error crosses into the application core.
#[derive(Debug, thiserror::Error)]
pub enum WeatherLookupError {
    #[error("weather request failed: {0}")]
    Transport(String),
    #[error("weather provider error: {0}")]
    Provider(String),
    #[error("unexpected weather payload: {0}")]
    Malformed(String),
}

impl WeatherLookupError {
    /// The failure taxonomy bucket this lookup error belongs to
    pub fn kind(&self) -> FailureKind {
        match self {
            WeatherLookupError::Transport(_) => FailureKind::TransportError,
            WeatherLookupError::Provider(_) | WeatherLookupError::Malformed(_) => {
                FailureKind::ProviderError
            }
        }
    }
}

/// Interface for weather providers
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions for a free-form location string
    async fn current(&self, location: &str) -> Result<WeatherReading, WeatherLookupError>;
}
