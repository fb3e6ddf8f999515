//! Outfit suggestion and saved outfit models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::WardrobeItem;

/// An ephemeral, scored grouping of wardrobe items proposed for the
/// current weather.
///
/// The `id` is only stable within one generation batch; suggestions are
/// recreated from scratch on every request and discarded when a new
/// request runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub id: u32,
    pub items: Vec<WardrobeItem>,
    /// Score in [0, 100]
    pub score: i32,
    /// Human-readable justification, templated by temperature band
    pub reason: String,
}

/// A user-persisted outfit with usage tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedOutfit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub item_ids: Vec<Uuid>,
    /// User rating, 1-5
    pub rating: Option<i32>,
    pub times_used: i32,
    pub last_used_at: Option<NaiveDate>,
    /// Weather context captured at save time
    pub weather_temperature: Option<i32>,
    pub weather_condition: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
