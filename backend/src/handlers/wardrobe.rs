//! HTTP handlers for wardrobe management endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::WardrobeItem;
use crate::services::wardrobe::{
    CreateWardrobeItemInput, UpdateWardrobeItemInput, WardrobeService,
};
use crate::AppState;

/// Add an item to the wardrobe
pub async fn create_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateWardrobeItemInput>,
) -> AppResult<Json<WardrobeItem>> {
    let service = WardrobeService::new(state.db);
    let item = service.create_item(current_user.0.user_id, input).await?;
    Ok(Json(item))
}

/// Get a wardrobe item by ID
pub async fn get_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<WardrobeItem>> {
    let service = WardrobeService::new(state.db);
    let item = service.get_item(current_user.0.user_id, item_id).await?;
    Ok(Json(item))
}

/// List the caller's wardrobe, newest first
pub async fn list_items(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<PaginatedResponse<WardrobeItem>>> {
    let service = WardrobeService::new(state.db);
    let page = service
        .list_items_page(current_user.0.user_id, &pagination)
        .await?;
    Ok(Json(page))
}

/// Update a wardrobe item
pub async fn update_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Json(input): Json<UpdateWardrobeItemInput>,
) -> AppResult<Json<WardrobeItem>> {
    let service = WardrobeService::new(state.db);
    let item = service
        .update_item(current_user.0.user_id, item_id, input)
        .await?;
    Ok(Json(item))
}

/// Delete a wardrobe item
pub async fn delete_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = WardrobeService::new(state.db);
    service.delete_item(current_user.0.user_id, item_id).await?;
    Ok(Json(()))
}

/// Mark an item as worn today
pub async fn mark_worn(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<WardrobeItem>> {
    let service = WardrobeService::new(state.db);
    let item = service.mark_worn(current_user.0.user_id, item_id).await?;
    Ok(Json(item))
}
