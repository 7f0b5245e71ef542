//! Recommendation scoring from learned preferences
//!
//! A recipe's score is a weighted sum of how often its category, difficulty,
//! time bucket and tags appear among the user's favorites, plus a small
//! random jitter so equally scored recipes do not always surface in the same
//! order.

use serde::{Deserialize, Serialize};

use crate::infra::JitterSource;
use crate::model::{Recipe, UserPreferences};

/// Per-facet weights applied to preference counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScoreWeights {
    /// Weight of the category count
    pub category: f64,
    /// Weight of the difficulty count
    pub difficulty: f64,
    /// Weight of the time bucket count
    pub time_bucket: f64,
    /// Weight of each tag count
    pub tag: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            category: 3.0,
            difficulty: 2.0,
            time_bucket: 1.5,
            tag: 1.0,
        }
    }
}

impl ScoreWeights {
    /// Name and value of every weight, for validation and display
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("category", self.category),
            ("difficulty", self.difficulty),
            ("time-bucket", self.time_bucket),
            ("tag", self.tag),
        ]
    }
}

/// Deterministic part of the score: weighted preference counts only.
///
/// # Examples
///
/// ```
/// use recipe_store::model::{Difficulty, Recipe, UserPreferences};
/// use recipe_store::scoring::{preference_score, ScoreWeights};
///
/// let favorite = Recipe::new(1, "Brownies", "Fudgy chocolate brownies")
///     .with_category("dessert")
///     .with_difficulty(Difficulty::Easy);
/// let mut prefs = UserPreferences::default();
/// prefs.record(&favorite);
///
/// let candidate = Recipe::new(2, "Cookies", "Chocolate chip cookies")
///     .with_category("dessert")
///     .with_difficulty(Difficulty::Easy);
///
/// assert_eq!(preference_score(&candidate, &prefs, &ScoreWeights::default()), 5.0);
/// ```
pub fn preference_score(recipe: &Recipe, prefs: &UserPreferences, weights: &ScoreWeights) -> f64 {
    let mut score = 0.0;

    if let Some(category) = &recipe.category {
        score += weights.category * f64::from(prefs.categories.get(category));
    }
    if let Some(difficulty) = recipe.difficulty {
        score += weights.difficulty * f64::from(prefs.difficulties.get(difficulty.as_str()));
    }
    if let Some(bucket) = recipe.time_bucket() {
        score += weights.time_bucket * f64::from(prefs.time_buckets.get(bucket.as_str()));
    }

    let tag_total: u32 = recipe.tags.iter().map(|tag| prefs.tags.get(tag)).sum();
    score += weights.tag * f64::from(tag_total);

    score
}

/// Full recommendation score: preference score plus jitter in `[0, jitter_max)`
pub fn calculate_recommendation_score<J: JitterSource + ?Sized>(
    recipe: &Recipe,
    prefs: &UserPreferences,
    weights: &ScoreWeights,
    jitter_max: f64,
    jitter: &mut J,
) -> f64 {
    preference_score(recipe, prefs, weights) + jitter.next_jitter(jitter_max)
}
