//! Combination generator: category-based Cartesian products per band
//!
//! Brute-force enumeration is acceptable at wardrobe scale (a handful
//! of items per category). There is deliberately no combinatorial
//! guard; this is a known scaling limit, not a defect.

use crate::models::{Category, WardrobeItem};
use crate::suggestion::TemperatureBand;

/// An outfit combination: one item per required category, in policy
/// order (outerwear first when present, then top, bottom, shoes).
pub type Combination<'a> = Vec<&'a WardrobeItem>;

/// Wardrobe items grouped by the closed category set, preserving input
/// order inside each bucket. Explicit fields instead of a dynamic map
/// so missing-category handling is type-checked.
#[derive(Debug, Default)]
pub struct CategorizedWardrobe<'a> {
    pub tops: Vec<&'a WardrobeItem>,
    pub bottoms: Vec<&'a WardrobeItem>,
    pub shoes: Vec<&'a WardrobeItem>,
    pub outerwear: Vec<&'a WardrobeItem>,
    pub accessories: Vec<&'a WardrobeItem>,
}

impl<'a> CategorizedWardrobe<'a> {
    pub fn group(items: &[&'a WardrobeItem]) -> Self {
        let mut grouped = CategorizedWardrobe::default();
        for &item in items {
            match item.category {
                Category::Top => grouped.tops.push(item),
                Category::Bottom => grouped.bottoms.push(item),
                Category::Shoes => grouped.shoes.push(item),
                Category::Outerwear => grouped.outerwear.push(item),
                Category::Accessories => grouped.accessories.push(item),
            }
        }
        grouped
    }

    pub fn by_category(&self, category: Category) -> &[&'a WardrobeItem] {
        match category {
            Category::Top => &self.tops,
            Category::Bottom => &self.bottoms,
            Category::Shoes => &self.shoes,
            Category::Outerwear => &self.outerwear,
            Category::Accessories => &self.accessories,
        }
    }
}

/// Produce all eligible combinations for the band. An empty required
/// category yields no combinations for that variant, never an error.
pub fn generate_combinations<'a>(
    wardrobe: &CategorizedWardrobe<'a>,
    band: TemperatureBand,
) -> Vec<Combination<'a>> {
    match band {
        TemperatureBand::Cold => with_outerwear(wardrobe),
        TemperatureBand::Cool => {
            // Both variants, layered first
            let mut combinations = with_outerwear(wardrobe);
            combinations.extend(without_outerwear(
                &wardrobe.tops,
                &wardrobe.bottoms,
                &wardrobe.shoes,
            ));
            combinations
        }
        TemperatureBand::Warm => {
            without_outerwear(&wardrobe.tops, &wardrobe.bottoms, &wardrobe.shoes)
        }
        TemperatureBand::Hot => {
            let tops: Vec<&WardrobeItem> = wardrobe
                .tops
                .iter()
                .copied()
                .filter(|item| is_hot_weather_top(item))
                .collect();
            let bottoms: Vec<&WardrobeItem> = wardrobe
                .bottoms
                .iter()
                .copied()
                .filter(|item| is_hot_weather_bottom(item))
                .collect();
            without_outerwear(&tops, &bottoms, &wardrobe.shoes)
        }
    }
}

/// Light or white tops only: by color label, or by give-away names
fn is_hot_weather_top(item: &WardrobeItem) -> bool {
    let name = item.name.to_lowercase();
    item.color.eq_ignore_ascii_case("white")
        || item.color.eq_ignore_ascii_case("light")
        || name.contains("t-shirt")
        || name.contains("undershirt")
}

fn is_hot_weather_bottom(item: &WardrobeItem) -> bool {
    let name = item.name.to_lowercase();
    name.contains("shorts") || name.contains("skirt")
}

fn with_outerwear<'a>(wardrobe: &CategorizedWardrobe<'a>) -> Vec<Combination<'a>> {
    let mut combinations = Vec::new();
    for &outer in &wardrobe.outerwear {
        for &top in &wardrobe.tops {
            for &bottom in &wardrobe.bottoms {
                for &shoes in &wardrobe.shoes {
                    combinations.push(vec![outer, top, bottom, shoes]);
                }
            }
        }
    }
    combinations
}

fn without_outerwear<'a>(
    tops: &[&'a WardrobeItem],
    bottoms: &[&'a WardrobeItem],
    shoes: &[&'a WardrobeItem],
) -> Vec<Combination<'a>> {
    let mut combinations = Vec::new();
    for &top in tops {
        for &bottom in bottoms {
            for &shoe in shoes {
                combinations.push(vec![top, bottom, shoe]);
            }
        }
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(name: &str, category: Category, color: &str) -> WardrobeItem {
        let now = Utc::now();
        WardrobeItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            color: color.to_string(),
            season: Season::AllSeason,
            brand: None,
            temperature_min: None,
            temperature_max: None,
            wear_count: 0,
            last_worn_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn grouped(items: &[WardrobeItem]) -> Vec<&WardrobeItem> {
        items.iter().collect()
    }

    #[test]
    fn cold_band_requires_outerwear() {
        let items = vec![
            item("Shirt", Category::Top, "blue"),
            item("Jeans", Category::Bottom, "blue"),
            item("Boots", Category::Shoes, "black"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        assert!(generate_combinations(&wardrobe, TemperatureBand::Cold).is_empty());
    }

    #[test]
    fn cold_band_full_product() {
        let items = vec![
            item("Coat", Category::Outerwear, "black"),
            item("Parka", Category::Outerwear, "green"),
            item("Shirt", Category::Top, "blue"),
            item("Jeans", Category::Bottom, "blue"),
            item("Chinos", Category::Bottom, "beige"),
            item("Boots", Category::Shoes, "black"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        let combinations = generate_combinations(&wardrobe, TemperatureBand::Cold);
        // 2 outerwear x 1 top x 2 bottoms x 1 shoes
        assert_eq!(combinations.len(), 4);
        for combination in &combinations {
            assert_eq!(combination.len(), 4);
            assert_eq!(combination[0].category, Category::Outerwear);
        }
    }

    #[test]
    fn cool_band_generates_both_variants() {
        let items = vec![
            item("Jacket", Category::Outerwear, "black"),
            item("Shirt", Category::Top, "blue"),
            item("Jeans", Category::Bottom, "blue"),
            item("Sneakers", Category::Shoes, "white"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        let combinations = generate_combinations(&wardrobe, TemperatureBand::Cool);
        assert_eq!(combinations.len(), 2);
        // Layered variant first, then the three-piece one
        assert_eq!(combinations[0].len(), 4);
        assert_eq!(combinations[1].len(), 3);
    }

    #[test]
    fn cool_band_without_outerwear_still_produces_three_piece() {
        let items = vec![
            item("Shirt", Category::Top, "blue"),
            item("Jeans", Category::Bottom, "blue"),
            item("Sneakers", Category::Shoes, "white"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        let combinations = generate_combinations(&wardrobe, TemperatureBand::Cool);
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].len(), 3);
    }

    #[test]
    fn warm_band_excludes_outerwear() {
        let items = vec![
            item("Jacket", Category::Outerwear, "black"),
            item("Shirt", Category::Top, "blue"),
            item("Jeans", Category::Bottom, "blue"),
            item("Sneakers", Category::Shoes, "white"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        let combinations = generate_combinations(&wardrobe, TemperatureBand::Warm);
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].len(), 3);
    }

    #[test]
    fn hot_band_restricts_tops_and_bottoms() {
        let items = vec![
            item("Wool shirt", Category::Top, "navy"),
            item("Old T-Shirt", Category::Top, "navy"),
            item("Blouse", Category::Top, "White"),
            item("Jeans", Category::Bottom, "blue"),
            item("Denim Shorts", Category::Bottom, "blue"),
            item("Sandals", Category::Shoes, "brown"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        let combinations = generate_combinations(&wardrobe, TemperatureBand::Hot);
        // 2 admissible tops (name match + color match) x 1 bottom x 1 shoes
        assert_eq!(combinations.len(), 2);
        for combination in &combinations {
            assert_eq!(combination[1].name, "Denim Shorts");
        }
    }

    #[test]
    fn accessories_never_join_combinations() {
        let items = vec![
            item("Shirt", Category::Top, "blue"),
            item("Jeans", Category::Bottom, "blue"),
            item("Sneakers", Category::Shoes, "white"),
            item("Scarf", Category::Accessories, "red"),
        ];
        let refs = grouped(&items);
        let wardrobe = CategorizedWardrobe::group(&refs);
        let combinations = generate_combinations(&wardrobe, TemperatureBand::Warm);
        assert_eq!(combinations.len(), 1);
        assert!(combinations[0]
            .iter()
            .all(|i| i.category != Category::Accessories));
    }
}
