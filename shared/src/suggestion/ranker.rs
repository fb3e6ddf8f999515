//! Suggestion ranking: stable descending sort, top N

use crate::models::OutfitSuggestion;

/// Sort suggestions by score, best first, and keep at most `max`.
/// The sort is stable, so equal scores preserve generation order.
pub fn rank_suggestions(suggestions: &mut Vec<OutfitSuggestion>, max: usize) {
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(max);
}
