//! Wardrobe item models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single clothing item owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: Category,
    /// Free-text color label (e.g. "white", "navy")
    pub color: String,
    pub season: Season,
    pub brand: Option<String>,
    /// Lower bound of the temperature validity range in °C
    pub temperature_min: Option<i32>,
    /// Upper bound of the temperature validity range in °C
    pub temperature_max: Option<i32>,
    pub wear_count: i32,
    pub last_worn_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WardrobeItem {
    /// Whether the item may be worn at the given temperature.
    /// A missing bound is an open bound.
    pub fn fits_temperature(&self, temperature_celsius: i32) -> bool {
        let above_min = self
            .temperature_min
            .map(|min| temperature_celsius >= min)
            .unwrap_or(true);
        let below_max = self
            .temperature_max
            .map(|max| temperature_celsius <= max)
            .unwrap_or(true);
        above_min && below_max
    }
}

/// Clothing categories (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessories,
}

impl Category {
    /// All categories, in wardrobe display order
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Outerwear,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Outerwear => "outerwear",
            Category::Accessories => "accessories",
        }
    }

    pub fn from_str(s: &str) -> Option<Category> {
        match s {
            "top" => Some(Category::Top),
            "bottom" => Some(Category::Bottom),
            "shoes" => Some(Category::Shoes),
            "outerwear" => Some(Category::Outerwear),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season affinity of a wardrobe item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllSeason,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::AllSeason => "all_season",
        }
    }

    pub fn from_str(s: &str) -> Option<Season> {
        match s {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            "all_season" => Some(Season::AllSeason),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
