//! Ankhara Engine - Backend for AI-powered personal styling
//!
//! The engine generates a synthetic wardrobe catalog, fetches current weather
//! for the user's city, and asks a hosted LLM to assemble two complete outfits
//! from the catalog. The model's JSON reply is validated and mapped back onto
//! catalog entities before it reaches any consumer.

pub mod application;
pub mod domain;
pub mod infrastructure;
