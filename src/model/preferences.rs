//! Preference counters learned from favorites

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::recipe::Recipe;

/// String key to count mapping; missing keys read as zero.
///
/// Keys are stored lower-cased and entries that drop to zero are removed, so
/// two counters with the same observable counts compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceCounter(BTreeMap<String, u32>);

impl PreferenceCounter {
    /// Count for a key, zero if never seen
    pub fn get(&self, key: &str) -> u32 {
        self.0.get(&key.to_lowercase()).copied().unwrap_or(0)
    }

    /// Add one to a key
    pub fn increment(&mut self, key: &str) {
        *self.0.entry(key.to_lowercase()).or_insert(0) += 1;
    }

    /// Subtract one from a key, clamping at zero
    pub fn decrement(&mut self, key: &str) {
        let key = key.to_lowercase();
        if let Some(count) = self.0.get_mut(&key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.0.remove(&key);
            }
        }
    }

    /// Highest count; ties go to the alphabetically first key
    pub fn top(&self) -> Option<(&str, u32)> {
        self.top_n(1).into_iter().next()
    }

    /// Up to `n` entries, highest count first; ties keep key order
    pub fn top_n(&self, n: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// Whether every count is zero
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over non-zero entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Aggregated preferences across all favorited recipes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Category counts
    pub categories: PreferenceCounter,
    /// Difficulty counts
    pub difficulties: PreferenceCounter,
    /// Time bucket counts
    pub time_buckets: PreferenceCounter,
    /// Tag counts
    pub tags: PreferenceCounter,
}

impl UserPreferences {
    /// Count a newly favorited recipe
    pub fn record(&mut self, recipe: &Recipe) {
        self.for_each_key(recipe, |counter, key| counter.increment(key));
    }

    /// Un-count a recipe that is no longer a favorite
    pub fn forget(&mut self, recipe: &Recipe) {
        self.for_each_key(recipe, |counter, key| counter.decrement(key));
    }

    /// Whether nothing has been learned yet
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.difficulties.is_empty()
            && self.time_buckets.is_empty()
            && self.tags.is_empty()
    }

    fn for_each_key(&mut self, recipe: &Recipe, mut apply: impl FnMut(&mut PreferenceCounter, &str)) {
        if let Some(category) = &recipe.category {
            apply(&mut self.categories, category);
        }
        if let Some(difficulty) = recipe.difficulty {
            apply(&mut self.difficulties, difficulty.as_str());
        }
        if let Some(bucket) = recipe.time_bucket() {
            apply(&mut self.time_buckets, bucket.as_str());
        }
        for tag in &recipe.tags {
            apply(&mut self.tags, tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn cookies() -> Recipe {
        Recipe::new(1, "Cookies", "Chocolate chip cookies")
            .with_category("Dessert")
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(25)
            .with_tags(["Baking", "sweet"])
    }

    #[test]
    fn test_counter_missing_key_reads_zero() {
        let counter = PreferenceCounter::default();
        assert_eq!(counter.get("anything"), 0);
        assert!(counter.top().is_none());
    }

    #[test]
    fn test_counter_is_case_insensitive() {
        let mut counter = PreferenceCounter::default();
        counter.increment("Dessert");
        counter.increment("dessert");
        assert_eq!(counter.get("DESSERT"), 2);
    }

    #[test]
    fn test_counter_decrement_clamps_at_zero() {
        let mut counter = PreferenceCounter::default();
        counter.decrement("main");
        assert_eq!(counter.get("main"), 0);

        counter.increment("main");
        counter.decrement("main");
        counter.decrement("main");
        assert_eq!(counter.get("main"), 0);
        assert!(counter.is_empty());
    }

    #[test]
    fn test_counter_top_prefers_highest_then_alphabetical() {
        let mut counter = PreferenceCounter::default();
        counter.increment("main");
        counter.increment("dessert");
        assert_eq!(counter.top(), Some(("dessert", 1)));

        counter.increment("main");
        assert_eq!(counter.top(), Some(("main", 2)));
    }

    #[test]
    fn test_counter_top_n_orders_by_count_then_key() {
        let mut counter = PreferenceCounter::default();
        for tag in ["vegan", "baking", "french", "baking", "vegan", "spicy"] {
            counter.increment(tag);
        }

        assert_eq!(counter.top_n(2), vec![("baking", 2), ("vegan", 2)]);
        assert_eq!(counter.top_n(3)[2], ("french", 1));
        assert_eq!(counter.top_n(10).len(), 4);
        assert!(PreferenceCounter::default().top_n(2).is_empty());
    }

    #[test]
    fn test_record_counts_every_facet_lower_cased() {
        let mut prefs = UserPreferences::default();
        prefs.record(&cookies());

        assert_eq!(prefs.categories.get("dessert"), 1);
        assert_eq!(prefs.difficulties.get("easy"), 1);
        assert_eq!(prefs.time_buckets.get("quick"), 1);
        assert_eq!(prefs.tags.get("baking"), 1);
        assert_eq!(prefs.tags.get("sweet"), 1);
        assert_eq!(prefs.tags.iter().next(), Some(("baking", 1)));
    }

    #[test]
    fn test_record_then_forget_restores_previous_state() {
        let mut prefs = UserPreferences::default();
        prefs.record(&Recipe::new(9, "Salad", "Green salad").with_category("dessert"));
        let before = prefs.clone();

        prefs.record(&cookies());
        prefs.forget(&cookies());

        assert_eq!(prefs, before);
    }

    #[test]
    fn test_recipe_without_metadata_changes_nothing() {
        let mut prefs = UserPreferences::default();
        prefs.record(&Recipe::new(2, "Water", "Just water"));
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_preferences_serialize_as_plain_maps() {
        let mut prefs = UserPreferences::default();
        prefs.record(&cookies());

        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["categories"]["dessert"], 1);
        assert_eq!(json["timeBuckets"]["quick"], 1);
    }
}
