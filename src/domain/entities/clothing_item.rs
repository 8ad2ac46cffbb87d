//! ClothingItem entity - A single garment in the generated wardrobe catalog

use std::fmt;
use std::str::FromStr;

/// The fixed four-category clothing taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Accessories,
}

impl Category {
    /// All categories, in a stable order
    pub const ALL: [Category; 4] = [
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Accessories,
    ];

    /// The wire name used in prompts, DTOs, and model replies
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category string is outside the taxonomy
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown clothing category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tops" => Ok(Category::Tops),
            "bottoms" => Ok(Category::Bottoms),
            "shoes" => Ok(Category::Shoes),
            "accessories" => Ok(Category::Accessories),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A garment in the wardrobe catalog
///
/// Items are immutable once generated and owned exclusively by the catalog
/// that produced them. `id` is the generation index, so it is unique within
/// a catalog but carries no meaning across catalogs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothingItem {
    pub id: u32,
    pub category: Category,
    pub name: String,
    /// Hex RGB, '#RRGGBB'
    pub color: String,
    pub material: String,
    /// 1 = very casual, 5 = very formal
    pub formality: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_wire_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "hats".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("hats"));
    }
}
