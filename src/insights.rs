//! Human-readable explanations derived from learned preferences
//!
//! [`match_reasons`] says why a recommended recipe fits the user and
//! [`preference_insights`] summarizes what the favorites have taught the
//! store so far. Both read the same counters the scorer uses.

use std::fmt;

use crate::fmt::capitalize;
use crate::model::{Difficulty, Recipe, UserPreferences};

/// Most reasons reported for a single recipe
pub const MAX_MATCH_REASONS: usize = 2;

/// Most tags named in one reason or insight
pub const MAX_NAMED_TAGS: usize = 2;

/// Why a recipe was recommended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    /// The recipe's category appears among the favorites
    Category(String),
    /// The recipe's difficulty appears among the favorites
    Difficulty(Difficulty),
    /// Some of the recipe's tags appear among the favorites, as written on the recipe
    Tags(Vec<String>),
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Category(category) => write!(f, "You like {} recipes", category),
            MatchReason::Difficulty(difficulty) => write!(
                f,
                "{} difficulty matches your preference",
                capitalize(difficulty.as_str())
            ),
            MatchReason::Tags(tags) => {
                write!(f, "Contains {} elements you enjoy", tags.join(", "))
            }
        }
    }
}

/// Up to [`MAX_MATCH_REASONS`] reasons, checked in category, difficulty, tags order
///
/// # Examples
///
/// ```
/// use recipe_store::insights::{match_reasons, MatchReason};
/// use recipe_store::model::{Recipe, UserPreferences};
///
/// let mut prefs = UserPreferences::default();
/// prefs.record(&Recipe::new(1, "Brownies", "Fudgy squares").with_category("dessert"));
///
/// let tart = Recipe::new(2, "Lemon Tart", "Sharp and sweet").with_category("Dessert");
/// assert_eq!(
///     match_reasons(&tart, &prefs),
///     vec![MatchReason::Category("Dessert".to_string())]
/// );
/// ```
pub fn match_reasons(recipe: &Recipe, prefs: &UserPreferences) -> Vec<MatchReason> {
    let mut reasons = Vec::new();

    if let Some(category) = &recipe.category {
        if prefs.categories.get(category) > 0 {
            reasons.push(MatchReason::Category(category.clone()));
        }
    }
    if let Some(difficulty) = recipe.difficulty {
        if prefs.difficulties.get(difficulty.as_str()) > 0 {
            reasons.push(MatchReason::Difficulty(difficulty));
        }
    }

    let liked: Vec<String> = recipe
        .tags
        .iter()
        .filter(|tag| prefs.tags.get(tag) > 0)
        .take(MAX_NAMED_TAGS)
        .cloned()
        .collect();
    if !liked.is_empty() {
        reasons.push(MatchReason::Tags(liked));
    }

    reasons.truncate(MAX_MATCH_REASONS);
    reasons
}

/// One fact learned from the favorites
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceInsight {
    /// Most favorited category
    FavoriteCategory(String),
    /// Most favorited difficulty
    FavoriteDifficulty(String),
    /// Most favorited tags, highest count first
    FavoriteTags(Vec<String>),
}

impl fmt::Display for PreferenceInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceInsight::FavoriteCategory(category) => {
                write!(f, "You love {} recipes", category)
            }
            PreferenceInsight::FavoriteDifficulty(difficulty) => {
                write!(f, "{} difficulty suits you", capitalize(difficulty))
            }
            PreferenceInsight::FavoriteTags(tags) => {
                write!(f, "You enjoy {} recipes", tags.join(", "))
            }
        }
    }
}

/// Top category, top difficulty and top tags; empty until something is favorited
pub fn preference_insights(prefs: &UserPreferences) -> Vec<PreferenceInsight> {
    let mut insights = Vec::new();

    if let Some((category, _)) = prefs.categories.top() {
        insights.push(PreferenceInsight::FavoriteCategory(category.to_string()));
    }
    if let Some((difficulty, _)) = prefs.difficulties.top() {
        insights.push(PreferenceInsight::FavoriteDifficulty(difficulty.to_string()));
    }

    let tags: Vec<String> = prefs
        .tags
        .top_n(MAX_NAMED_TAGS)
        .into_iter()
        .map(|(tag, _)| tag.to_string())
        .collect();
    if !tags.is_empty() {
        insights.push(PreferenceInsight::FavoriteTags(tags));
    }

    insights
}
