//! Weather reading value object

use serde::{Deserialize, Serialize};

/// A current-conditions snapshot for a location
///
/// Produced once per recommendation request and discarded afterwards; it has
/// no identity beyond the request that fetched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Human-readable conditions, e.g. "Sunny"
    pub conditions: String,
    /// Precipitation in millimeters
    pub precipitation: f64,
}
