//! Catalog item DTO - the allow-listed wire form of a ClothingItem
//!
//! This is the only shape in which catalog items leave the process: the six
//! fields below and nothing else go into the model prompt and the wardrobe
//! API response.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ClothingItem, UnknownCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemDto {
    pub id: u32,
    pub category: String,
    pub name: String,
    pub color: String,
    pub material: String,
    pub formality: u8,
}

impl From<&ClothingItem> for CatalogItemDto {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id,
            category: item.category.as_str().to_string(),
            name: item.name.clone(),
            color: item.color.clone(),
            material: item.material.clone(),
            formality: item.formality,
        }
    }
}

impl CatalogItemDto {
    /// Convert back into a domain item, validating the category string
    pub fn into_domain(self) -> Result<ClothingItem, UnknownCategory> {
        Ok(ClothingItem {
            id: self.id,
            category: self.category.parse()?,
            name: self.name,
            color: self.color,
            material: self.material,
            formality: self.formality,
        })
    }
}
