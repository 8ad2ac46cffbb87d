//! Domain layer - Core styling model with no external service dependencies
//!
//! This layer contains:
//! - Entities: ClothingItem and its category taxonomy
//! - Value Objects: WeatherReading, ClientProfile, recommendation results

pub mod entities;
pub mod value_objects;
