//! Wardrobe model and validation integration tests
//!
//! Tests for wardrobe items including:
//! - Field validation rules shared with the frontend
//! - Category and season string conversions
//! - Temperature validity ranges and band reasons

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    validate_color, validate_item_name, validate_outfit_items, validate_rating,
    validate_temperature_range, Category, Season, TemperatureBand, WardrobeItem, WeatherSnapshot,
};

fn item_with_range(min: Option<i32>, max: Option<i32>) -> WardrobeItem {
    let now = chrono::Utc::now();
    WardrobeItem {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Shirt".to_string(),
        category: Category::Top,
        color: "white".to_string(),
        season: Season::AllSeason,
        brand: None,
        temperature_min: min,
        temperature_max: max,
        wear_count: 0,
        last_worn_at: None,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test item name validation
    #[test]
    fn test_item_name_validation() {
        assert!(validate_item_name("Blue oxford shirt").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"x".repeat(101)).is_err());
        assert!(validate_item_name(&"x".repeat(100)).is_ok());
    }

    /// Test color validation
    #[test]
    fn test_color_validation() {
        assert!(validate_color("navy").is_ok());
        assert!(validate_color("").is_err());
    }

    /// Test temperature range validation
    #[test]
    fn test_temperature_range_validation() {
        assert!(validate_temperature_range(Some(-5), Some(10)).is_ok());
        assert!(validate_temperature_range(Some(10), Some(10)).is_ok());
        assert!(validate_temperature_range(Some(11), Some(10)).is_err());
        // Missing bounds are open bounds
        assert!(validate_temperature_range(None, Some(10)).is_ok());
        assert!(validate_temperature_range(Some(10), None).is_ok());
        assert!(validate_temperature_range(None, None).is_ok());
    }

    /// Test outfit composition and rating validation
    #[test]
    fn test_outfit_validation() {
        assert!(validate_outfit_items(&[Uuid::new_v4()]).is_ok());
        assert!(validate_outfit_items(&[]).is_err());
        let too_many: Vec<Uuid> = (0..11).map(|_| Uuid::new_v4()).collect();
        assert!(validate_outfit_items(&too_many).is_err());

        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    /// Test category string round trip
    #[test]
    fn test_category_string_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("hat"), None);
    }

    /// Test season string round trip
    #[test]
    fn test_season_string_round_trip() {
        let seasons = [
            Season::Spring,
            Season::Summer,
            Season::Autumn,
            Season::Winter,
            Season::AllSeason,
        ];
        for season in seasons {
            assert_eq!(Season::from_str(season.as_str()), Some(season));
        }
        assert_eq!(Season::from_str("monsoon"), None);
    }

    /// Test temperature validity with open bounds
    #[test]
    fn test_fits_temperature_open_bounds() {
        let unbounded = item_with_range(None, None);
        assert!(unbounded.fits_temperature(-40));
        assert!(unbounded.fits_temperature(45));

        let min_only = item_with_range(Some(10), None);
        assert!(min_only.fits_temperature(35));
        assert!(!min_only.fits_temperature(9));

        let bounded = item_with_range(Some(0), Some(20));
        assert!(bounded.fits_temperature(0));
        assert!(bounded.fits_temperature(20));
        assert!(!bounded.fits_temperature(21));
    }

    /// Test the fallback weather snapshot constants
    #[test]
    fn test_fallback_snapshot() {
        let fallback = WeatherSnapshot::fallback();
        assert_eq!(fallback.temperature_celsius, 15);
        assert_eq!(fallback.condition, "partly cloudy");
        assert_eq!(fallback.humidity_percent, 65);
        assert_eq!(fallback.wind_speed_mps, Decimal::from(5));
    }

    /// Test band boundaries
    #[test]
    fn test_band_boundaries() {
        assert_eq!(TemperatureBand::for_temperature(5), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::for_temperature(6), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::for_temperature(15), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::for_temperature(16), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::for_temperature(25), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::for_temperature(26), TemperatureBand::Hot);
    }

    /// Snow in the cold band extends the reason with a footwear note
    #[test]
    fn test_snow_clause_only_in_cold_band() {
        let snowy = WeatherSnapshot {
            temperature_celsius: -3,
            condition: "light snow".to_string(),
            humidity_percent: 80,
            wind_speed_mps: Decimal::from(4),
        };
        let cold_reason = TemperatureBand::Cold.reason(&snowy);
        assert!(cold_reason.contains("снег"), "{cold_reason}");

        let warm_snow = WeatherSnapshot {
            temperature_celsius: 20,
            ..snowy.clone()
        };
        let warm_reason = TemperatureBand::Warm.reason(&warm_snow);
        assert!(!warm_reason.contains("снег"), "{warm_reason}");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// A valid range always accepts its own midpoint
        #[test]
        fn prop_midpoint_always_fits(min in -30..=30i32, span in 0..=30i32) {
            let max = min + span;
            let item = item_with_range(Some(min), Some(max));
            let midpoint = min + span / 2;
            prop_assert!(item.fits_temperature(midpoint));
        }

        /// validate_temperature_range agrees with the ordering of the bounds
        #[test]
        fn prop_range_validation_matches_ordering(min in -50..=50i32, max in -50..=50i32) {
            let result = validate_temperature_range(Some(min), Some(max));
            prop_assert_eq!(result.is_ok(), min <= max);
        }
    }
}
