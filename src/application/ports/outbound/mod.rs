//! Outbound ports - Interfaces that the application requires from external systems

mod geolocation_port;
mod llm_port;
mod weather_port;

pub use geolocation_port::GeolocationPort;
pub use llm_port::{ChatMessage, LlmPort, LlmRequest, LlmResponse, MessageRole};
pub use weather_port::{WeatherLookupError, WeatherPort};
