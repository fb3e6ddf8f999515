//! Saved outfit service: persistence and usage tracking for outfits the
//! user explicitly keeps

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::SavedOutfit;
use shared::{validate_outfit_items, validate_outfit_name, validate_rating};

/// Outfit service for managing saved outfits
#[derive(Clone)]
pub struct OutfitService {
    db: PgPool,
}

/// Database row for a saved outfit
#[derive(Debug, sqlx::FromRow)]
struct SavedOutfitRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    item_ids: Vec<Uuid>,
    rating: Option<i32>,
    times_used: i32,
    last_used_at: Option<NaiveDate>,
    weather_temperature: Option<i32>,
    weather_condition: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SavedOutfitRow> for SavedOutfit {
    fn from(row: SavedOutfitRow) -> Self {
        SavedOutfit {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            item_ids: row.item_ids,
            rating: row.rating,
            times_used: row.times_used,
            last_used_at: row.last_used_at,
            weather_temperature: row.weather_temperature,
            weather_condition: row.weather_condition,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Input for saving an outfit (promoting a suggestion)
#[derive(Debug, Deserialize)]
pub struct SaveOutfitInput {
    pub name: String,
    pub item_ids: Vec<Uuid>,
    pub weather_temperature: Option<i32>,
    pub weather_condition: Option<String>,
}

/// Input for rating a saved outfit
#[derive(Debug, Deserialize)]
pub struct RateOutfitInput {
    pub rating: i32,
}

const OUTFIT_COLUMNS: &str = "id, user_id, name, item_ids, rating, times_used, last_used_at, \
     weather_temperature, weather_condition, created_at, updated_at";

impl OutfitService {
    /// Create a new OutfitService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Persist an outfit chosen from the suggestion list. Only item ids
    /// are stored; the items themselves stay in the wardrobe.
    pub async fn save_outfit(&self, user_id: Uuid, input: SaveOutfitInput) -> AppResult<SavedOutfit> {
        if let Err(message) = validate_outfit_name(&input.name) {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: message.to_string(),
                message_ru: "Укажите название образа".to_string(),
            });
        }

        if let Err(message) = validate_outfit_items(&input.item_ids) {
            return Err(AppError::Validation {
                field: "item_ids".to_string(),
                message: message.to_string(),
                message_ru: "Образ должен содержать от 1 до 10 вещей".to_string(),
            });
        }

        // All referenced items must belong to the caller
        let owned: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM wardrobe_items WHERE user_id = $1 AND id = ANY($2)",
        )
        .bind(user_id)
        .bind(&input.item_ids)
        .fetch_one(&self.db)
        .await?;

        if owned as usize != input.item_ids.len() {
            return Err(AppError::Validation {
                field: "item_ids".to_string(),
                message: "Outfit references items outside the user's wardrobe".to_string(),
                message_ru: "Образ ссылается на вещи вне вашего гардероба".to_string(),
            });
        }

        let row = sqlx::query_as::<_, SavedOutfitRow>(&format!(
            r#"
            INSERT INTO saved_outfits (
                user_id, name, item_ids, weather_temperature, weather_condition
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {OUTFIT_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(input.name.trim())
        .bind(&input.item_ids)
        .bind(input.weather_temperature)
        .bind(&input.weather_condition)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Get a saved outfit by ID
    pub async fn get_outfit(&self, user_id: Uuid, outfit_id: Uuid) -> AppResult<SavedOutfit> {
        let row = sqlx::query_as::<_, SavedOutfitRow>(&format!(
            "SELECT {OUTFIT_COLUMNS} FROM saved_outfits WHERE id = $1 AND user_id = $2",
        ))
        .bind(outfit_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Saved outfit".to_string()))?;

        Ok(row.into())
    }

    /// List all saved outfits for a user, newest first
    pub async fn list_outfits(&self, user_id: Uuid) -> AppResult<Vec<SavedOutfit>> {
        let rows = sqlx::query_as::<_, SavedOutfitRow>(&format!(
            "SELECT {OUTFIT_COLUMNS} FROM saved_outfits WHERE user_id = $1 \
             ORDER BY created_at DESC",
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Delete a saved outfit
    pub async fn delete_outfit(&self, user_id: Uuid, outfit_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM saved_outfits WHERE id = $1 AND user_id = $2")
            .bind(outfit_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Saved outfit".to_string()));
        }

        Ok(())
    }

    /// Rate a saved outfit (1-5)
    pub async fn rate_outfit(
        &self,
        user_id: Uuid,
        outfit_id: Uuid,
        input: RateOutfitInput,
    ) -> AppResult<SavedOutfit> {
        if let Err(message) = validate_rating(input.rating) {
            return Err(AppError::Validation {
                field: "rating".to_string(),
                message: message.to_string(),
                message_ru: "Оценка должна быть от 1 до 5".to_string(),
            });
        }

        let row = sqlx::query_as::<_, SavedOutfitRow>(&format!(
            r#"
            UPDATE saved_outfits
            SET rating = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {OUTFIT_COLUMNS}
            "#,
        ))
        .bind(outfit_id)
        .bind(user_id)
        .bind(input.rating)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Saved outfit".to_string()))?;

        Ok(row.into())
    }

    /// Mark a saved outfit as used today: bumps its usage counter and the
    /// wear count of every member item.
    pub async fn mark_used(&self, user_id: Uuid, outfit_id: Uuid) -> AppResult<SavedOutfit> {
        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, SavedOutfitRow>(&format!(
            r#"
            UPDATE saved_outfits
            SET times_used = times_used + 1, last_used_at = CURRENT_DATE, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {OUTFIT_COLUMNS}
            "#,
        ))
        .bind(outfit_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Saved outfit".to_string()))?;

        sqlx::query(
            r#"
            UPDATE wardrobe_items
            SET wear_count = wear_count + 1, last_worn_at = CURRENT_DATE, updated_at = NOW()
            WHERE user_id = $1 AND id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(&row.item_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }
}
