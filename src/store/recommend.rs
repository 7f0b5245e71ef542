//! Recommendation generation

use std::cmp::Ordering;

use crate::config::ConfigFile;
use crate::infra::JitterSource;
use crate::model::{Recipe, RecipeId, UserPreferences};
use crate::scoring::calculate_recommendation_score;

/// Recipes to suggest given the current favorites and learned preferences.
///
/// Before any favorite exists the first `cold_start_count` recipes are
/// returned as-is. Afterwards favorited recipes are excluded, the rest are
/// scored and the best `max_results` are returned, highest score first.
pub fn generate_recommendations<J: JitterSource + ?Sized>(
    recipes: &[Recipe],
    favorites: &[RecipeId],
    prefs: &UserPreferences,
    config: &ConfigFile,
    jitter: &mut J,
) -> Vec<Recipe> {
    let settings = &config.recommendations;

    if favorites.is_empty() || recipes.is_empty() {
        return recipes
            .iter()
            .take(settings.cold_start_count)
            .cloned()
            .collect();
    }

    let mut scored: Vec<(f64, &Recipe)> = recipes
        .iter()
        .filter(|recipe| !favorites.contains(&recipe.id))
        .map(|recipe| {
            let score = calculate_recommendation_score(
                recipe,
                prefs,
                &config.weights,
                settings.jitter_max,
                jitter,
            );
            (score, recipe)
        })
        .collect();

    // Stable sort: equal scores keep collection order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(settings.max_results)
        .map(|(_, recipe)| recipe.clone())
        .collect()
}
