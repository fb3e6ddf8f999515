//! Weather-driven outfit suggestion pipeline
//!
//! A single synchronous computation over in-memory data:
//! filter candidates -> generate combinations -> score -> rank.
//! Deterministic modulo input ordering; no I/O and no failure modes of
//! its own. Empty inputs yield empty outputs.

mod band;
mod filter;
mod generator;
mod ranker;
mod scorer;

pub use band::TemperatureBand;
pub use filter::{filter_candidates, suitable_seasons};
pub use generator::{generate_combinations, CategorizedWardrobe, Combination};
pub use ranker::rank_suggestions;
pub use scorer::{score_combination, SuggestionParams, NEUTRAL_COLORS};

use chrono::NaiveDate;

use crate::models::{OutfitSuggestion, WardrobeItem, WeatherSnapshot};

/// Run the full pipeline over a user's wardrobe and return at most
/// `params.max_suggestions` suggestions, best first.
///
/// `today` anchors the recently-worn window so that callers (and tests)
/// control the clock.
pub fn suggest_outfits(
    wardrobe: &[WardrobeItem],
    weather: &WeatherSnapshot,
    today: NaiveDate,
    params: &SuggestionParams,
) -> Vec<OutfitSuggestion> {
    let candidates = filter_candidates(wardrobe, weather);
    let grouped = CategorizedWardrobe::group(&candidates);
    let band = TemperatureBand::for_temperature(weather.temperature_celsius);
    let combinations = generate_combinations(&grouped, band);

    let mut suggestions: Vec<OutfitSuggestion> = combinations
        .into_iter()
        .enumerate()
        .map(|(index, combination)| {
            let score = score_combination(&combination, weather, today, params);
            OutfitSuggestion {
                id: index as u32 + 1,
                items: combination.into_iter().cloned().collect(),
                score,
                reason: band.reason(weather),
            }
        })
        .collect();

    rank_suggestions(&mut suggestions, params.max_suggestions);
    suggestions
}
