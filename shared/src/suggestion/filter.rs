//! Candidate filter: narrows the wardrobe to weather-compatible items

use crate::models::{Season, WardrobeItem, WeatherSnapshot};

/// Seasons admissible at the given temperature. First matching band
/// wins; all-season items pass regardless.
pub fn suitable_seasons(temperature_celsius: i32) -> &'static [Season] {
    if temperature_celsius <= 0 {
        &[Season::Winter]
    } else if temperature_celsius <= 10 {
        &[Season::Winter, Season::Autumn]
    } else if temperature_celsius <= 20 {
        &[Season::Autumn, Season::Spring]
    } else if temperature_celsius <= 25 {
        &[Season::Spring, Season::Summer]
    } else {
        &[Season::Summer]
    }
}

/// Keep items whose optional temperature validity range admits the
/// snapshot temperature and whose season fits the snapshot. Preserves
/// input order; an empty result is valid and propagates to an empty
/// suggestion list.
pub fn filter_candidates<'a>(
    wardrobe: &'a [WardrobeItem],
    weather: &WeatherSnapshot,
) -> Vec<&'a WardrobeItem> {
    let seasons = suitable_seasons(weather.temperature_celsius);
    wardrobe
        .iter()
        .filter(|item| item.fits_temperature(weather.temperature_celsius))
        .filter(|item| item.season == Season::AllSeason || seasons.contains(&item.season))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn item(season: Season, min: Option<i32>, max: Option<i32>) -> WardrobeItem {
        let now = Utc::now();
        WardrobeItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Sweater".to_string(),
            category: Category::Top,
            color: "blue".to_string(),
            season,
            brand: None,
            temperature_min: min,
            temperature_max: max,
            wear_count: 0,
            last_worn_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn snapshot(temperature: i32) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: temperature,
            condition: "clear".to_string(),
            humidity_percent: 50,
            wind_speed_mps: Decimal::from(3),
        }
    }

    #[test]
    fn season_bands() {
        assert_eq!(suitable_seasons(-5), &[Season::Winter]);
        assert_eq!(suitable_seasons(0), &[Season::Winter]);
        assert_eq!(suitable_seasons(1), &[Season::Winter, Season::Autumn]);
        assert_eq!(suitable_seasons(10), &[Season::Winter, Season::Autumn]);
        assert_eq!(suitable_seasons(11), &[Season::Autumn, Season::Spring]);
        assert_eq!(suitable_seasons(20), &[Season::Autumn, Season::Spring]);
        assert_eq!(suitable_seasons(21), &[Season::Spring, Season::Summer]);
        assert_eq!(suitable_seasons(25), &[Season::Spring, Season::Summer]);
        assert_eq!(suitable_seasons(26), &[Season::Summer]);
    }

    #[test]
    fn freezing_weather_admits_only_winter_and_all_season() {
        let wardrobe = vec![
            item(Season::Winter, None, None),
            item(Season::Summer, None, None),
            item(Season::AllSeason, None, None),
            item(Season::Autumn, None, None),
        ];
        let kept = filter_candidates(&wardrobe, &snapshot(-2));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].season, Season::Winter);
        assert_eq!(kept[1].season, Season::AllSeason);
    }

    #[test]
    fn temperature_range_excludes_out_of_range_items() {
        let wardrobe = vec![
            item(Season::AllSeason, Some(20), Some(35)),
            item(Season::AllSeason, Some(-10), Some(10)),
            item(Season::AllSeason, None, None),
        ];
        let kept = filter_candidates(&wardrobe, &snapshot(5));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].temperature_min, Some(-10));
        assert!(kept[1].temperature_min.is_none());
    }

    #[test]
    fn missing_bound_is_open() {
        let wardrobe = vec![
            item(Season::AllSeason, Some(10), None),
            item(Season::AllSeason, None, Some(10)),
        ];
        assert_eq!(filter_candidates(&wardrobe, &snapshot(15)).len(), 1);
        assert_eq!(filter_candidates(&wardrobe, &snapshot(8)).len(), 1);
        assert_eq!(filter_candidates(&wardrobe, &snapshot(10)).len(), 2);
    }

    #[test]
    fn empty_wardrobe_yields_empty_result() {
        assert!(filter_candidates(&[], &snapshot(20)).is_empty());
    }
}
