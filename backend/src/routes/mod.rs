//! Route definitions for the Wardrobe Stylist Platform

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - wardrobe management
        .nest("/wardrobe", wardrobe_routes())
        // Protected routes - saved outfits
        .nest("/outfits", outfit_routes())
        // Protected routes - outfit suggestions
        .nest("/suggestions", suggestion_routes())
        // Protected routes - weather lookup
        .nest("/weather", weather_routes())
}

/// Wardrobe management routes (protected)
fn wardrobe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/:item_id/worn", post(handlers::mark_worn))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Saved outfit routes (protected)
fn outfit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_outfits).post(handlers::save_outfit),
        )
        .route(
            "/:outfit_id",
            get(handlers::get_outfit).delete(handlers::delete_outfit),
        )
        .route("/:outfit_id/rating", put(handlers::rate_outfit))
        .route("/:outfit_id/used", post(handlers::mark_used))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Outfit suggestion routes (protected)
fn suggestion_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_suggestions))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Weather routes (protected)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::current_weather))
        .route_layer(middleware::from_fn(auth_middleware))
}
