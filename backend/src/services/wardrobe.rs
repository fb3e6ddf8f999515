//! Wardrobe item service: CRUD plus wear tracking

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Category, Season, WardrobeItem};
use shared::{
    validate_color, validate_item_name, validate_temperature_range, PaginatedResponse,
    Pagination, PaginationMeta,
};

/// Wardrobe service for managing a user's clothing items
#[derive(Clone)]
pub struct WardrobeService {
    db: PgPool,
}

/// Database row for a wardrobe item
#[derive(Debug, sqlx::FromRow)]
struct WardrobeItemRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    category: String,
    color: String,
    season: String,
    brand: Option<String>,
    temperature_min: Option<i32>,
    temperature_max: Option<i32>,
    wear_count: i32,
    last_worn_at: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WardrobeItemRow> for WardrobeItem {
    fn from(row: WardrobeItemRow) -> Self {
        WardrobeItem {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            category: Category::from_str(&row.category).unwrap_or(Category::Accessories),
            color: row.color,
            season: Season::from_str(&row.season).unwrap_or(Season::AllSeason),
            brand: row.brand,
            temperature_min: row.temperature_min,
            temperature_max: row.temperature_max,
            wear_count: row.wear_count,
            last_worn_at: row.last_worn_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Input for creating a wardrobe item
#[derive(Debug, Deserialize)]
pub struct CreateWardrobeItemInput {
    pub name: String,
    pub category: Category,
    pub color: String,
    pub season: Season,
    pub brand: Option<String>,
    pub temperature_min: Option<i32>,
    pub temperature_max: Option<i32>,
}

/// Input for updating a wardrobe item
#[derive(Debug, Deserialize)]
pub struct UpdateWardrobeItemInput {
    pub name: String,
    pub category: Category,
    pub color: String,
    pub season: Season,
    pub brand: Option<String>,
    pub temperature_min: Option<i32>,
    pub temperature_max: Option<i32>,
}

const ITEM_COLUMNS: &str = "id, user_id, name, category, color, season, brand, \
     temperature_min, temperature_max, wear_count, last_worn_at, created_at, updated_at";

impl WardrobeService {
    /// Create a new WardrobeService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a wardrobe item for a user
    pub async fn create_item(
        &self,
        user_id: Uuid,
        input: CreateWardrobeItemInput,
    ) -> AppResult<WardrobeItem> {
        self.validate_item_input(
            &input.name,
            &input.color,
            input.temperature_min,
            input.temperature_max,
        )?;

        let row = sqlx::query_as::<_, WardrobeItemRow>(&format!(
            r#"
            INSERT INTO wardrobe_items (
                user_id, name, category, color, season, brand,
                temperature_min, temperature_max
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(input.name.trim())
        .bind(input.category.as_str())
        .bind(&input.color)
        .bind(input.season.as_str())
        .bind(&input.brand)
        .bind(input.temperature_min)
        .bind(input.temperature_max)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Get one wardrobe item by ID
    pub async fn get_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<WardrobeItem> {
        let row = sqlx::query_as::<_, WardrobeItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE id = $1 AND user_id = $2",
        ))
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Wardrobe item".to_string()))?;

        Ok(row.into())
    }

    /// List all wardrobe items for a user, newest first
    pub async fn list_items(&self, user_id: Uuid) -> AppResult<Vec<WardrobeItem>> {
        let rows = sqlx::query_as::<_, WardrobeItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE user_id = $1 \
             ORDER BY created_at DESC",
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// One page of the user's wardrobe, newest first
    pub async fn list_items_page(
        &self,
        user_id: Uuid,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<WardrobeItem>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wardrobe_items WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        let rows = sqlx::query_as::<_, WardrobeItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        ))
        .bind(user_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(PaginatedResponse {
            data: rows.into_iter().map(|r| r.into()).collect(),
            pagination: PaginationMeta::new(pagination, total as u64),
        })
    }

    /// Update a wardrobe item
    pub async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        input: UpdateWardrobeItemInput,
    ) -> AppResult<WardrobeItem> {
        self.validate_item_input(
            &input.name,
            &input.color,
            input.temperature_min,
            input.temperature_max,
        )?;

        let row = sqlx::query_as::<_, WardrobeItemRow>(&format!(
            r#"
            UPDATE wardrobe_items
            SET name = $3, category = $4, color = $5, season = $6, brand = $7,
                temperature_min = $8, temperature_max = $9, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(item_id)
        .bind(user_id)
        .bind(input.name.trim())
        .bind(input.category.as_str())
        .bind(&input.color)
        .bind(input.season.as_str())
        .bind(&input.brand)
        .bind(input.temperature_min)
        .bind(input.temperature_max)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Wardrobe item".to_string()))?;

        Ok(row.into())
    }

    /// Delete a wardrobe item
    pub async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM wardrobe_items WHERE id = $1 AND user_id = $2")
            .bind(item_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Wardrobe item".to_string()));
        }

        Ok(())
    }

    /// Mark an item as worn today: bumps the wear count and stamps the
    /// last-worn date
    pub async fn mark_worn(&self, user_id: Uuid, item_id: Uuid) -> AppResult<WardrobeItem> {
        let row = sqlx::query_as::<_, WardrobeItemRow>(&format!(
            r#"
            UPDATE wardrobe_items
            SET wear_count = wear_count + 1, last_worn_at = CURRENT_DATE, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Wardrobe item".to_string()))?;

        Ok(row.into())
    }

    /// Validate item input fields
    fn validate_item_input(
        &self,
        name: &str,
        color: &str,
        temperature_min: Option<i32>,
        temperature_max: Option<i32>,
    ) -> AppResult<()> {
        if let Err(message) = validate_item_name(name) {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: message.to_string(),
                message_ru: "Укажите название вещи".to_string(),
            });
        }

        if let Err(message) = validate_color(color) {
            return Err(AppError::Validation {
                field: "color".to_string(),
                message: message.to_string(),
                message_ru: "Укажите цвет вещи".to_string(),
            });
        }

        if let Err(message) = validate_temperature_range(temperature_min, temperature_max) {
            return Err(AppError::Validation {
                field: "temperature_min".to_string(),
                message: message.to_string(),
                message_ru: "Минимальная температура не может превышать максимальную".to_string(),
            });
        }

        Ok(())
    }
}
