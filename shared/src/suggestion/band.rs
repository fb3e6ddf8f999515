//! Temperature bands governing combination policy and reason templates

use serde::{Deserialize, Serialize};

use crate::models::WeatherSnapshot;

/// One of four named temperature ranges. The band decides which
/// categories are mandatory and which reason template is used; it is an
/// enum rather than cascading comparisons so the boundaries are
/// independently testable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// t <= 5 °C, outerwear required
    Cold,
    /// 5 < t <= 15 °C, outerwear optional (both variants generated)
    Cool,
    /// 15 < t <= 25 °C, outerwear excluded
    Warm,
    /// t > 25 °C, light tops and bottoms only
    Hot,
}

impl TemperatureBand {
    pub fn for_temperature(celsius: i32) -> TemperatureBand {
        if celsius <= 5 {
            TemperatureBand::Cold
        } else if celsius <= 15 {
            TemperatureBand::Cool
        } else if celsius <= 25 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Cool => "cool",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }

    /// Justification string for a suggestion. One fixed template per
    /// band, chosen by weather alone, not by combination content. The
    /// cold template carries an extra clause when snow is mentioned in
    /// the condition text.
    pub fn reason(&self, weather: &WeatherSnapshot) -> String {
        let t = weather.temperature_celsius;
        match self {
            TemperatureBand::Cold => {
                let mut reason = format!(
                    "На улице холодно ({t}°C), поэтому подобран тёплый комплект с верхней одеждой."
                );
                if weather.condition.to_lowercase().contains("snow") {
                    reason.push_str(" Ожидается снег, лучше выбрать непромокаемую обувь.");
                }
                reason
            }
            TemperatureBand::Cool => format!(
                "Прохладная погода ({t}°C): комфортный комплект, верхняя одежда по желанию."
            ),
            TemperatureBand::Warm => {
                format!("Тёплая погода ({t}°C): лёгкий комплект без верхней одежды.")
            }
            TemperatureBand::Hot => {
                format!("Жарко ({t}°C): лёгкие светлые вещи из дышащих тканей.")
            }
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
