//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::WeatherSnapshot;
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for a weather lookup
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Fetch the current weather for a location. Provider failures degrade
/// to the fallback snapshot rather than an error.
pub async fn current_weather(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    let service = WeatherService::from_config(&state.config.weather);
    let snapshot = service
        .current_snapshot(query.latitude, query.longitude)
        .await;
    Ok(Json(snapshot))
}
