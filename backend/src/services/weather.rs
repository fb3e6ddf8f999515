//! Weather service: provider fetch with a documented fallback snapshot

use rust_decimal::Decimal;
use shared::WeatherSnapshot;

use crate::config::WeatherConfig;
use crate::external::weather::WeatherClient;

/// Weather service wrapping the provider client. The client is optional
/// so a missing API key degrades the whole surface to the fallback
/// snapshot instead of failing requests.
#[derive(Clone)]
pub struct WeatherService {
    client: Option<WeatherClient>,
}

impl WeatherService {
    /// Build from configuration; an empty API key leaves the provider
    /// client unconfigured.
    pub fn from_config(config: &WeatherConfig) -> Self {
        let client = if config.api_key.is_empty() {
            None
        } else {
            Some(WeatherClient::with_base_url(
                config.api_key.clone(),
                config.api_endpoint.clone(),
            ))
        };
        Self { client }
    }

    /// Current weather snapshot for the given coordinates. Provider
    /// failures are logged and degrade to the fallback snapshot
    /// (15 °C, partly cloudy, 65 %, wind 5); this never errors.
    pub async fn current_snapshot(&self, latitude: Decimal, longitude: Decimal) -> WeatherSnapshot {
        match &self.client {
            Some(client) => match client.get_current_weather(latitude, longitude).await {
                Ok(current) => current.to_snapshot(),
                Err(error) => {
                    tracing::warn!(
                        "Weather provider unavailable, using fallback snapshot: {}",
                        error
                    );
                    WeatherSnapshot::fallback()
                }
            },
            None => {
                tracing::warn!("Weather client not configured, using fallback snapshot");
                WeatherSnapshot::fallback()
            }
        }
    }
}
