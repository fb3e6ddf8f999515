//! Validation utilities for the Wardrobe Stylist Platform

use uuid::Uuid;

use crate::suggestion::NEUTRAL_COLORS;

// ============================================================================
// Wardrobe Item Validations
// ============================================================================

/// Validate the optional temperature validity range: when both bounds
/// are present, min must not exceed max.
pub fn validate_temperature_range(
    min: Option<i32>,
    max: Option<i32>,
) -> Result<(), &'static str> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err("Temperature minimum must not exceed maximum");
        }
    }
    Ok(())
}

/// Validate an item display name (non-empty, at most 100 characters)
pub fn validate_item_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Item name is required");
    }
    if trimmed.chars().count() > 100 {
        return Err("Item name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a color label (non-empty free text)
pub fn validate_color(color: &str) -> Result<(), &'static str> {
    if color.trim().is_empty() {
        return Err("Color is required");
    }
    Ok(())
}

/// Validate a wear count (never negative)
pub fn validate_wear_count(wear_count: i32) -> Result<(), &'static str> {
    if wear_count < 0 {
        return Err("Wear count cannot be negative");
    }
    Ok(())
}

/// Check whether a color counts as neutral for the harmony bonus
pub fn is_neutral_color(color: &str) -> bool {
    let lowered = color.to_lowercase();
    NEUTRAL_COLORS.contains(&lowered.as_str())
}

// ============================================================================
// Saved Outfit Validations
// ============================================================================

/// Validate a saved outfit name
pub fn validate_outfit_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Outfit name is required");
    }
    if trimmed.chars().count() > 100 {
        return Err("Outfit name must be at most 100 characters");
    }
    Ok(())
}

/// Validate the item list of a saved outfit
pub fn validate_outfit_items(item_ids: &[Uuid]) -> Result<(), &'static str> {
    if item_ids.is_empty() {
        return Err("An outfit needs at least one item");
    }
    if item_ids.len() > 10 {
        return Err("An outfit can hold at most 10 items");
    }
    Ok(())
}

/// Validate a user rating (1-5)
pub fn validate_rating(rating: i32) -> Result<(), &'static str> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5");
    }
    Ok(())
}

// ============================================================================
// Weather Validations
// ============================================================================

/// Validate a humidity percentage
pub fn validate_humidity(humidity_percent: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity_percent) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Wardrobe Item Validation Tests
    // ========================================================================

    #[test]
    fn test_temperature_range_valid() {
        assert!(validate_temperature_range(Some(-10), Some(10)).is_ok());
        assert!(validate_temperature_range(Some(5), Some(5)).is_ok());
        assert!(validate_temperature_range(None, Some(10)).is_ok());
        assert!(validate_temperature_range(Some(-10), None).is_ok());
        assert!(validate_temperature_range(None, None).is_ok());
    }

    #[test]
    fn test_temperature_range_inverted() {
        assert!(validate_temperature_range(Some(15), Some(5)).is_err());
    }

    #[test]
    fn test_item_name_valid() {
        assert!(validate_item_name("White T-Shirt").is_ok());
        assert!(validate_item_name("  Jeans  ").is_ok());
    }

    #[test]
    fn test_item_name_invalid() {
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_color_validation() {
        assert!(validate_color("navy").is_ok());
        assert!(validate_color("").is_err());
        assert!(validate_color("  ").is_err());
    }

    #[test]
    fn test_wear_count_validation() {
        assert!(validate_wear_count(0).is_ok());
        assert!(validate_wear_count(42).is_ok());
        assert!(validate_wear_count(-1).is_err());
    }

    #[test]
    fn test_neutral_colors() {
        assert!(is_neutral_color("black"));
        assert!(is_neutral_color("White"));
        assert!(is_neutral_color("BEIGE"));
        assert!(!is_neutral_color("red"));
        assert!(!is_neutral_color("navy"));
    }

    // ========================================================================
    // Saved Outfit Validation Tests
    // ========================================================================

    #[test]
    fn test_outfit_name_validation() {
        assert!(validate_outfit_name("Office look").is_ok());
        assert!(validate_outfit_name("").is_err());
        assert!(validate_outfit_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_outfit_items_validation() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        assert!(validate_outfit_items(&ids).is_ok());

        assert!(validate_outfit_items(&[]).is_err());

        let too_many: Vec<Uuid> = (0..11).map(|_| Uuid::new_v4()).collect();
        assert!(validate_outfit_items(&too_many).is_err());
    }

    #[test]
    fn test_rating_validation() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    // ========================================================================
    // Weather Validation Tests
    // ========================================================================

    #[test]
    fn test_humidity_validation() {
        assert!(validate_humidity(0).is_ok());
        assert!(validate_humidity(65).is_ok());
        assert!(validate_humidity(100).is_ok());
        assert!(validate_humidity(-1).is_err());
        assert!(validate_humidity(101).is_err());
    }
}
