//! HTTP handlers for outfit suggestion endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::suggestion::{SuggestionQuery, SuggestionResponse, SuggestionService};
use crate::services::WeatherService;
use crate::AppState;

/// Generate outfit suggestions for the caller's wardrobe and the current
/// weather
pub async fn get_suggestions(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<SuggestionQuery>,
) -> AppResult<Json<SuggestionResponse>> {
    let weather_service = WeatherService::from_config(&state.config.weather);
    let weather = SuggestionService::resolve_weather(&query, &weather_service).await;

    let service = SuggestionService::new(state.db);
    let response = service
        .get_suggestions(current_user.0.user_id, weather)
        .await?;
    Ok(Json(response))
}
