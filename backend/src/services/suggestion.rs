//! Suggestion orchestration: wardrobe load, weather resolution, pipeline run
//!
//! The pipeline itself lives in the shared crate; this service feeds it
//! an immutable snapshot of the caller's wardrobe and the current
//! weather. A superseding request simply replaces the previous result
//! in the caller's state.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{OutfitSuggestion, WeatherSnapshot};
use crate::services::{WardrobeService, WeatherService};
use shared::{suggest_outfits, SuggestionParams};

/// Suggestion service running the outfit pipeline for a user
#[derive(Clone)]
pub struct SuggestionService {
    db: PgPool,
}

/// Query parameters for a suggestion request. Callers either pass a
/// ready snapshot (temperature and friends) or coordinates for a
/// provider fetch; with neither, the fallback snapshot is used.
#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub temperature: Option<i32>,
    pub condition: Option<String>,
    pub humidity: Option<i32>,
    pub wind_speed: Option<Decimal>,
}

/// Suggestion response: the snapshot actually used plus at most five
/// scored suggestions, best first
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub weather: WeatherSnapshot,
    pub suggestions: Vec<OutfitSuggestion>,
}

impl SuggestionService {
    /// Create a new SuggestionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Resolve the weather snapshot for a request
    pub async fn resolve_weather(
        query: &SuggestionQuery,
        weather: &WeatherService,
    ) -> WeatherSnapshot {
        if let Some(temperature) = query.temperature {
            let fallback = WeatherSnapshot::fallback();
            return WeatherSnapshot {
                temperature_celsius: temperature,
                condition: query.condition.clone().unwrap_or(fallback.condition),
                humidity_percent: query.humidity.unwrap_or(fallback.humidity_percent),
                wind_speed_mps: query.wind_speed.unwrap_or(fallback.wind_speed_mps),
            };
        }

        match (query.latitude, query.longitude) {
            (Some(latitude), Some(longitude)) => {
                weather.current_snapshot(latitude, longitude).await
            }
            _ => WeatherSnapshot::fallback(),
        }
    }

    /// Run the pipeline over the user's wardrobe. An empty wardrobe or
    /// an impossible band (e.g. cold weather without outerwear) yields
    /// an empty suggestion list, not an error.
    pub async fn get_suggestions(
        &self,
        user_id: Uuid,
        weather: WeatherSnapshot,
    ) -> AppResult<SuggestionResponse> {
        let wardrobe = WardrobeService::new(self.db.clone())
            .list_items(user_id)
            .await?;

        let today = Utc::now().date_naive();
        let suggestions = suggest_outfits(
            &wardrobe,
            &weather,
            today,
            &SuggestionParams::default(),
        );

        tracing::debug!(
            "Generated {} suggestions for {} wardrobe items at {}°C",
            suggestions.len(),
            wardrobe.len(),
            weather.temperature_celsius
        );

        Ok(SuggestionResponse {
            weather,
            suggestions,
        })
    }
}
