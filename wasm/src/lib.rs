//! WebAssembly module for the Wardrobe Stylist Platform
//!
//! Provides client-side computation for:
//! - Running the outfit suggestion pipeline offline
//! - Temperature band classification and reason text
//! - Offline form validation

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{suggest_outfits, SuggestionParams, TemperatureBand};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"wardrobe stylist module loaded".into());
}

/// Run the suggestion pipeline over a JSON wardrobe and weather snapshot.
/// `today` is an ISO date (YYYY-MM-DD); the result is the suggestion
/// list serialized to JSON, best first.
#[wasm_bindgen]
pub fn generate_suggestions(
    wardrobe_json: &str,
    weather_json: &str,
    today: &str,
) -> Result<String, JsValue> {
    let wardrobe: Vec<WardrobeItem> = serde_json::from_str(wardrobe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid wardrobe JSON: {}", e)))?;
    let weather: WeatherSnapshot = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date: {}", e)))?;

    let suggestions = suggest_outfits(&wardrobe, &weather, today, &SuggestionParams::default());
    serde_json::to_string(&suggestions)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Classify a temperature into its band name
#[wasm_bindgen]
pub fn classify_temperature_band(celsius: i32) -> String {
    TemperatureBand::for_temperature(celsius).to_string()
}

/// Reason text shown alongside suggestions for a given snapshot
#[wasm_bindgen]
pub fn suggestion_reason(weather_json: &str) -> Result<String, JsValue> {
    let weather: WeatherSnapshot = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;
    let band = TemperatureBand::for_temperature(weather.temperature_celsius);
    Ok(band.reason(&weather))
}

/// Validate a wardrobe item name before submission
#[wasm_bindgen]
pub fn check_item_name(name: &str) -> bool {
    validate_item_name(name).is_ok()
}

/// Validate an item temperature range before submission
#[wasm_bindgen]
pub fn check_temperature_range(min: Option<i32>, max: Option<i32>) -> bool {
    validate_temperature_range(min, max).is_ok()
}

/// Validate an outfit rating before submission
#[wasm_bindgen]
pub fn check_rating(rating: i32) -> bool {
    validate_rating(rating).is_ok()
}
