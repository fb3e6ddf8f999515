//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A momentary weather reading driving outfit selection.
///
/// Supplied per invocation and never persisted by the suggestion core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: i32,
    /// Free-text condition label (e.g. "clear", "light-rain", "snow")
    pub condition: String,
    pub humidity_percent: i32,
    pub wind_speed_mps: Decimal,
}

impl WeatherSnapshot {
    /// Degraded-provider value set used when the weather provider
    /// is unavailable.
    pub fn fallback() -> Self {
        Self {
            temperature_celsius: 15,
            condition: "partly cloudy".to_string(),
            humidity_percent: 65,
            wind_speed_mps: Decimal::from(5),
        }
    }
}
