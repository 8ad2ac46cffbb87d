//! Geolocation port - Best-effort city resolution

use async_trait::async_trait;

/// Interface for IP-based geolocation
///
/// Resolution is best-effort: implementations fall back to a fixed default
/// city on any failure, so the call is infallible by contract. The core
/// treats the result as an opaque location string.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    async fn locate(&self) -> String;
}
