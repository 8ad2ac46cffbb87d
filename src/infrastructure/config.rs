//! Application configuration
//!
//! Provider credentials are externally supplied, never compiled in: a missing
//! API key fails startup with a configuration error instead of surfacing
//! later as a provider fault.

use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "deepseek-r1-distill-llama-70b";
pub const DEFAULT_WEATHERSTACK_BASE_URL: &str = "http://api.weatherstack.com";
pub const DEFAULT_GEOIP_BASE_URL: &str = "http://ip-api.com";
pub const DEFAULT_CITY: &str = "Paris";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API key (required)
    pub groq_api_key: String,
    /// Groq API base URL (OpenAI-compatible)
    pub groq_base_url: String,
    /// Model used for outfit recommendations
    pub groq_model: String,

    /// Weatherstack API key (required)
    pub weatherstack_api_key: String,
    /// Weatherstack API base URL
    pub weatherstack_base_url: String,

    /// GeoIP API base URL
    pub geoip_base_url: String,
    /// City used when IP geolocation fails
    pub default_city: String,

    /// Number of items in the generated session wardrobe
    pub wardrobe_size: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),

            weatherstack_api_key: require_env("WEATHERSTACK_API_KEY")?,
            weatherstack_base_url: env::var("WEATHERSTACK_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHERSTACK_BASE_URL.to_string()),

            geoip_base_url: env::var("GEOIP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEOIP_BASE_URL.to_string()),
            default_city: env::var("DEFAULT_CITY").unwrap_or_else(|_| DEFAULT_CITY.to_string()),

            wardrobe_size: env::var("WARDROBE_SIZE")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .context("WARDROBE_SIZE must be a number")?,
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

/// Read a mandatory environment variable, failing fast when absent
pub fn require_env(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} environment variable is required"))
}
