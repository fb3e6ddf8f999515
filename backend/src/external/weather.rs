//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::WeatherSnapshot;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current weather conditions as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub feels_like_celsius: Decimal,
    pub humidity_percent: i32,
    pub wind_speed_mps: Decimal,
    pub weather_condition: String,
    pub weather_description: String,
}

impl CurrentWeather {
    /// Collapse the provider reading into the snapshot the suggestion
    /// pipeline consumes (whole-degree temperature, condition label).
    pub fn to_snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: self.temperature_celsius.round().to_i32().unwrap_or_default(),
            condition: self.weather_description.clone(),
            humidity_percent: self.humidity_percent,
            wind_speed_mps: self.wind_speed_mps,
        }
    }
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    feels_like: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<CurrentWeather> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> CurrentWeather {
    let weather = data.weather.first();

    CurrentWeather {
        timestamp: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
        temperature_celsius: Decimal::from_f64_retain(data.main.temp).unwrap_or_default(),
        feels_like_celsius: Decimal::from_f64_retain(data.main.feels_like).unwrap_or_default(),
        humidity_percent: data.main.humidity,
        wind_speed_mps: Decimal::from_f64_retain(data.wind.speed).unwrap_or_default(),
        weather_condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
        weather_description: weather.map(|w| w.description.clone()).unwrap_or_default(),
    }
}
