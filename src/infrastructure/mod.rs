//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Groq: OpenAI-compatible chat-completion client for the stylist model
//! - Weatherstack: current-conditions weather client
//! - GeoIP: best-effort IP city resolution
//! - HTTP: REST API routes
//! - Config: application configuration
//! - State: shared application state

pub mod config;
pub mod geoip;
pub mod groq;
pub mod http;
pub mod state;
pub mod weatherstack;
