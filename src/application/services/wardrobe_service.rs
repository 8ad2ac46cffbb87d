//! Wardrobe generation - synthetic clothing catalog
//!
//! Generation is pure sampling over fixed vocabularies: uniform category,
//! uniform name within the category, uniform color from the palette, uniform
//! category-legal material, uniform formality. Duplicate (category, name,
//! color) tuples are permitted and expected. The random source is injected so
//! tests can seed it deterministically.

use rand::Rng;

use crate::domain::entities::{Category, ClothingItem};

/// Reference catalog size for a session
pub const CATALOG_SIZE: usize = 50;

/// The fixed 50-entry color palette items are drawn from
pub const COLOR_PALETTE: [&str; 50] = [
    "#FF5E5B", "#D72638", "#3F88C5", "#FFF1C1", "#F49D37", "#05668D", "#028090", "#00A896",
    "#02C39A", "#F0F3BD", "#FFD6E0", "#F2C6B4", "#E4B3A1", "#C2B9B0", "#8E8D8A", "#2E294E",
    "#541388", "#F1E9DA", "#FFD400", "#D90368", "#ED6A5A", "#F4F1BB", "#9BC1BC", "#5D576B",
    "#E6EBE0", "#011627", "#2EC4B6", "#E71D36", "#FF9F1C", "#FDFFFC", "#0D1B2A", "#1B263B",
    "#415A77", "#778DA9", "#E0E1DD", "#FF2E63", "#08D9D6", "#252A34", "#EAEAEA", "#3A4750",
    "#A68A64", "#D9BF77", "#FFEBC9", "#A9B18F", "#5A524C", "#FFFFFF", "#F5F5F5", "#E0E0E0",
    "#BDBDBD", "#9E9E9E",
];

/// Garment names available per category
pub fn names_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Tops => &[
            "T-shirt", "Shirt", "Top", "Tank top", "Crop top", "Sweatshirt", "Sweater",
            "Cardigan", "Blazer", "Denim jacket", "Leather jacket", "Hoodie", "Blouse", "Vest",
            "Bodysuit", "Bustier", "Suit jacket",
        ],
        Category::Bottoms => &[
            "Jeans", "Dress pants", "Joggers", "Shorts", "Skirt", "Mini skirt", "Maxi skirt",
            "Cargo pants", "Flare pants", "Leggings", "Palazzo pants", "Culottes", "Bike shorts",
        ],
        Category::Shoes => &[
            "Sneakers", "Heels", "Sandals", "Flip-flops", "Boots", "Thigh-high boots", "Derbies",
            "Oxfords", "Loafers", "Espadrilles", "Wedges", "Running shoes", "Clogs", "Boat shoes",
        ],
        Category::Accessories => &[
            "Handbag", "Belt bag", "Backpack", "Sunglasses", "Belt", "Watch", "Hat", "Cap",
            "Beanie", "Jewelry", "Scarf", "Gloves", "Headband", "Brooch", "Hair clip",
        ],
    }
}

/// Materials a category may be made of
pub fn materials_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Tops => &["linen", "cotton", "silk", "wool"],
        Category::Bottoms => &["denim", "wool", "cotton"],
        Category::Shoes => &["leather", "canvas", "synthetic"],
        Category::Accessories => &["leather", "silk", "cotton"],
    }
}

/// Generate a catalog of `count` items from the provided random source
///
/// Item ids are the generation index, so they are unique and dense in
/// `0..count` for any catalog.
pub fn generate_catalog_with<R: Rng>(rng: &mut R, count: usize) -> Vec<ClothingItem> {
    (0..count)
        .map(|index| {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let names = names_for(category);
            let materials = materials_for(category);
            ClothingItem {
                id: index as u32,
                category,
                name: names[rng.gen_range(0..names.len())].to_string(),
                color: COLOR_PALETTE[rng.gen_range(0..COLOR_PALETTE.len())].to_string(),
                material: materials[rng.gen_range(0..materials.len())].to_string(),
                formality: rng.gen_range(1..=5),
            }
        })
        .collect()
}

/// Generate a catalog of `count` items from the thread-local random source
pub fn generate_catalog(count: usize) -> Vec<ClothingItem> {
    generate_catalog_with(&mut rand::thread_rng(), count)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn generates_exactly_the_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_catalog_with(&mut rng, CATALOG_SIZE).len(), 50);
        assert!(generate_catalog_with(&mut rng, 0).is_empty());
    }

    #[test]
    fn ids_are_the_dense_generation_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = generate_catalog_with(&mut rng, 50);

        let ids: HashSet<u32> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(catalog.iter().all(|item| item.id < 50));
        assert!(catalog
            .iter()
            .enumerate()
            .all(|(index, item)| item.id == index as u32));
    }

    #[test]
    fn every_item_respects_the_vocabularies() {
        let mut rng = StdRng::seed_from_u64(99);
        for item in generate_catalog_with(&mut rng, 200) {
            assert!(names_for(item.category).contains(&item.name.as_str()));
            assert!(materials_for(item.category).contains(&item.material.as_str()));
            assert!(COLOR_PALETTE.contains(&item.color.as_str()));
            assert!((1..=5).contains(&item.formality));
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_seed() {
        let first = generate_catalog_with(&mut StdRng::seed_from_u64(42), 50);
        let second = generate_catalog_with(&mut StdRng::seed_from_u64(42), 50);
        assert_eq!(first, second);
    }
}
