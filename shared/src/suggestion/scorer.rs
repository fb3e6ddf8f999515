//! Outfit combination scorer
//!
//! Additive heuristic starting from a base of 50, clamped to [0, 100].
//! The bonus/penalty magnitudes and windows are observed product
//! behavior with no documented rationale, so they live in
//! `SuggestionParams` instead of being hard-coded.

use chrono::NaiveDate;

use crate::models::{WardrobeItem, WeatherSnapshot};

/// Colors treated as neutral for the harmony bonus
pub const NEUTRAL_COLORS: [&str; 5] = ["black", "white", "gray", "beige", "brown"];

/// Tunable scoring and ranking parameters
#[derive(Debug, Clone)]
pub struct SuggestionParams {
    pub base_score: f64,
    /// Maximum contribution of the per-item temperature-fit term
    pub temperature_weight: f64,
    /// Mean wear count strictly below this earns the novelty bonus
    pub novelty_threshold: f64,
    pub novelty_bonus: f64,
    /// Whole days since last worn counted as "recent" (inclusive)
    pub recency_window_days: i64,
    pub recency_penalty: f64,
    pub harmony_bonus: f64,
    pub max_suggestions: usize,
}

impl Default for SuggestionParams {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            temperature_weight: 20.0,
            novelty_threshold: 5.0,
            novelty_bonus: 10.0,
            recency_window_days: 7,
            recency_penalty: 15.0,
            harmony_bonus: 15.0,
            max_suggestions: 5,
        }
    }
}

/// Score one combination against the weather snapshot.
pub fn score_combination(
    items: &[&WardrobeItem],
    weather: &WeatherSnapshot,
    today: NaiveDate,
    params: &SuggestionParams,
) -> i32 {
    let mut score = params.base_score;

    for item in items {
        score += temperature_fit(item, weather.temperature_celsius, params.temperature_weight);
    }

    if !items.is_empty() {
        let total_wear: i32 = items.iter().map(|item| item.wear_count).sum();
        let average_wear = f64::from(total_wear) / items.len() as f64;
        if average_wear < params.novelty_threshold {
            score += params.novelty_bonus;
        }
    }

    // Applied once, no matter how many items were worn recently
    let recently_worn = items.iter().any(|item| {
        item.last_worn_at
            .map(|worn| {
                let days = (today - worn).num_days();
                (0..=params.recency_window_days).contains(&days)
            })
            .unwrap_or(false)
    });
    if recently_worn {
        score -= params.recency_penalty;
    }

    if has_color_harmony(items) {
        score += params.harmony_bonus;
    }

    score.clamp(0.0, 100.0).round() as i32
}

/// Per-item temperature-fit term: items whose validity range centers
/// near the snapshot temperature contribute up to `weight` points.
/// Items without both bounds contribute nothing, and a degenerate
/// range (min == max) is defined as zero rather than dividing by it.
fn temperature_fit(item: &WardrobeItem, temperature_celsius: i32, weight: f64) -> f64 {
    let (Some(min), Some(max)) = (item.temperature_min, item.temperature_max) else {
        return 0.0;
    };
    // Convert before subtracting: extreme bounds overflow in i32
    let range = f64::from(max) - f64::from(min);
    if range <= 0.0 {
        return 0.0;
    }
    let midpoint = (f64::from(min) + f64::from(max)) / 2.0;
    let diff = (f64::from(temperature_celsius) - midpoint).abs();
    ((range - diff) / range * weight).max(0.0)
}

/// Harmony: a neutral color anywhere in the combination, or a palette
/// of at most two distinct colors overall.
fn has_color_harmony(items: &[&WardrobeItem]) -> bool {
    let colors: Vec<String> = items.iter().map(|item| item.color.to_lowercase()).collect();

    if colors
        .iter()
        .any(|color| NEUTRAL_COLORS.contains(&color.as_str()))
    {
        return true;
    }

    let mut distinct = colors;
    distinct.sort();
    distinct.dedup();
    distinct.len() <= 2
}
