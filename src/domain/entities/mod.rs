//! Domain entities - Core business objects with identity

mod clothing_item;

pub use clothing_item::{Category, ClothingItem, UnknownCategory};
