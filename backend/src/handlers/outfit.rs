//! HTTP handlers for saved outfit endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::SavedOutfit;
use crate::services::outfit::{OutfitService, RateOutfitInput, SaveOutfitInput};
use crate::AppState;

/// Save an outfit picked from the suggestion list
pub async fn save_outfit(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<SaveOutfitInput>,
) -> AppResult<Json<SavedOutfit>> {
    let service = OutfitService::new(state.db);
    let outfit = service.save_outfit(current_user.0.user_id, input).await?;
    Ok(Json(outfit))
}

/// Get a saved outfit by ID
pub async fn get_outfit(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(outfit_id): Path<Uuid>,
) -> AppResult<Json<SavedOutfit>> {
    let service = OutfitService::new(state.db);
    let outfit = service.get_outfit(current_user.0.user_id, outfit_id).await?;
    Ok(Json(outfit))
}

/// List the caller's saved outfits, newest first
pub async fn list_outfits(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<SavedOutfit>>> {
    let service = OutfitService::new(state.db);
    let outfits = service.list_outfits(current_user.0.user_id).await?;
    Ok(Json(outfits))
}

/// Delete a saved outfit
pub async fn delete_outfit(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(outfit_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = OutfitService::new(state.db);
    service
        .delete_outfit(current_user.0.user_id, outfit_id)
        .await?;
    Ok(Json(()))
}

/// Rate a saved outfit (1-5)
pub async fn rate_outfit(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(outfit_id): Path<Uuid>,
    Json(input): Json<RateOutfitInput>,
) -> AppResult<Json<SavedOutfit>> {
    let service = OutfitService::new(state.db);
    let outfit = service
        .rate_outfit(current_user.0.user_id, outfit_id, input)
        .await?;
    Ok(Json(outfit))
}

/// Mark a saved outfit as used today
pub async fn mark_used(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(outfit_id): Path<Uuid>,
) -> AppResult<Json<SavedOutfit>> {
    let service = OutfitService::new(state.db);
    let outfit = service.mark_used(current_user.0.user_id, outfit_id).await?;
    Ok(Json(outfit))
}
