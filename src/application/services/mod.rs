//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles: it depends on
//! outbound ports (never on concrete clients) and returns domain values.

pub mod response_mapper;
pub mod stylist_service;
pub mod wardrobe_service;

pub use response_mapper::{map_response, strip_code_fence};
pub use stylist_service::StylistService;
pub use wardrobe_service::{generate_catalog, generate_catalog_with, CATALOG_SIZE};
