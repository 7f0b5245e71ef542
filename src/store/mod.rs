//! The recipe store: recipes plus every view derived from them
//!
//! [`RecipeStore`] is the single source of truth. Every mutating action
//! recomputes the affected derived views (filtered list, recommendations)
//! before returning, so readers never observe stale state.
//!
//! # Examples
//!
//! ```
//! use recipe_store::infra::ZeroJitter;
//! use recipe_store::model::{Difficulty, Recipe};
//! use recipe_store::store::RecipeStore;
//!
//! let mut store = RecipeStore::with_jitter(ZeroJitter);
//! store.add_recipe(Recipe::new(1, "Brownies", "Fudgy chocolate squares").with_category("dessert"));
//! store.add_recipe(Recipe::new(2, "Lemon Tart", "Sharp and sweet").with_category("dessert"));
//! store.add_recipe(Recipe::new(3, "Chili", "Smoky bean chili").with_category("main"));
//!
//! store.add_favorite(1);
//! let ids: Vec<u64> = store.recommendations().iter().map(|r| r.id).collect();
//! assert_eq!(ids, vec![2, 3]);
//!
//! store.set_search_term("tart");
//! assert_eq!(store.filtered_recipes().len(), 1);
//! ```

mod filter;
mod recommend;
mod stats;

pub use filter::apply_filters;
pub use recommend::generate_recommendations;
pub use stats::{StoreStats, TopPreference};

use log::debug;

use crate::config::ConfigFile;
use crate::infra::{JitterSource, ThreadJitter};
use crate::insights::MAX_NAMED_TAGS;
use crate::model::{FilterCriteria, FilterPatch, Recipe, RecipeId, UserPreferences};

/// In-memory recipe collection with search, favorites and recommendations
#[derive(Debug, Clone)]
pub struct RecipeStore<J: JitterSource = ThreadJitter> {
    recipes: Vec<Recipe>,
    selected: Option<Recipe>,
    search_term: String,
    criteria: FilterCriteria,
    filtered: Vec<Recipe>,
    favorites: Vec<RecipeId>,
    preferences: UserPreferences,
    recommendations: Vec<Recipe>,
    config: ConfigFile,
    jitter: J,
}

impl RecipeStore<ThreadJitter> {
    /// An empty store with default settings and random tie-breaks
    pub fn new() -> Self {
        Self::with_jitter(ThreadJitter)
    }
}

impl Default for RecipeStore<ThreadJitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: JitterSource> RecipeStore<J> {
    /// An empty store with default settings and the given jitter source
    pub fn with_jitter(jitter: J) -> Self {
        Self::with_config(ConfigFile::default(), jitter)
    }

    /// An empty store with explicit settings
    pub fn with_config(config: ConfigFile, jitter: J) -> Self {
        Self {
            recipes: Vec::new(),
            selected: None,
            search_term: String::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            favorites: Vec::new(),
            preferences: UserPreferences::default(),
            recommendations: Vec::new(),
            config,
            jitter,
        }
    }

    // ---- collection actions ----

    /// Append a recipe. The caller guarantees the id is unique.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        debug!("Adding recipe {} ({})", recipe.id, recipe.title);
        self.recipes.push(recipe);
        self.recompute_all();
    }

    /// Replace the whole collection
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        debug!("Replacing collection with {} recipes", recipes.len());
        self.recipes = recipes;
        let recipes = &self.recipes;
        self.favorites
            .retain(|id| recipes.iter().any(|recipe| recipe.id == *id));
        if let Some(id) = self.selected.as_ref().map(|r| r.id) {
            self.selected = self.get_recipe_by_id(id).cloned();
        }
        self.recompute_all();
    }

    /// Remove a recipe, dropping it from favorites and the selection
    pub fn delete_recipe(&mut self, id: RecipeId) {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != id);
        if self.recipes.len() == before {
            debug!("Delete of unknown recipe {} ignored", id);
        }

        self.favorites.retain(|&fav| fav != id);
        if self.selected.as_ref().is_some_and(|r| r.id == id) {
            self.selected = None;
        }
        self.recompute_all();
    }

    /// Replace the recipe with the same id, refreshing the selection if needed
    pub fn update_recipe(&mut self, recipe: Recipe) {
        if self.selected.as_ref().is_some_and(|r| r.id == recipe.id) {
            self.selected = Some(recipe.clone());
        }

        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => *slot = recipe,
            None => debug!("Update of unknown recipe {} ignored", recipe.id),
        }
        self.recompute_all();
    }

    // ---- favorites ----

    /// Mark a recipe as favorite and learn from it.
    ///
    /// No-op when already a favorite or when no recipe has this id.
    pub fn add_favorite(&mut self, id: RecipeId) {
        if self.is_favorite(id) {
            return;
        }
        let Some(recipe) = self.recipes.iter().find(|r| r.id == id) else {
            debug!("Favorite of unknown recipe {} ignored", id);
            return;
        };

        self.preferences.record(recipe);
        self.favorites.push(id);
        self.recompute_recommendations();
    }

    /// Unmark a favorite and un-learn it. No-op when not a favorite.
    pub fn remove_favorite(&mut self, id: RecipeId) {
        let Some(pos) = self.favorites.iter().position(|&fav| fav == id) else {
            return;
        };
        self.favorites.remove(pos);

        if let Some(recipe) = self.recipes.iter().find(|r| r.id == id) {
            self.preferences.forget(recipe);
        }
        self.recompute_recommendations();
    }

    /// Whether a recipe is a favorite
    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorited recipes, in the order they were favorited
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.favorites
            .iter()
            .filter_map(|&id| self.get_recipe_by_id(id))
            .collect()
    }

    // ---- search and filters ----

    /// Set the free-text search term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute_filtered();
    }

    /// Merge a partial filter update
    pub fn set_filter_criteria(&mut self, patch: FilterPatch) {
        self.criteria.merge(patch);
        self.recompute_filtered();
    }

    /// Clear the search term and every filter
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.criteria = FilterCriteria::default();
        self.recompute_filtered();
    }

    /// Search with `term` and the current filters without changing state
    pub fn search_recipes(&self, term: &str) -> Vec<Recipe> {
        apply_filters(&self.recipes, term, &self.criteria)
    }

    // ---- lookups and selection ----

    /// Recipe with the given id
    pub fn get_recipe_by_id(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Recipe whose id is given as text, e.g. from a route parameter.
    /// Malformed ids are simply not found.
    pub fn get_recipe_by_id_str(&self, raw: &str) -> Option<&Recipe> {
        raw.trim()
            .parse::<RecipeId>()
            .ok()
            .and_then(|id| self.get_recipe_by_id(id))
    }

    /// Open a recipe in the details view
    pub fn set_selected_recipe(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
    }

    /// Close the details view
    pub fn clear_selected_recipe(&mut self) {
        self.selected = None;
    }

    /// Recipe open in the details view
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    // ---- recommendations ----

    /// Recompute recommendations, re-drawing the random tie-break
    pub fn refresh_recommendations(&mut self) {
        self.recompute_recommendations();
    }

    /// Dashboard summary
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_recipes: self.recipes.len(),
            favorites: self.favorites.len(),
            recommendations: self.recommendations.len(),
            top_category: TopPreference::from_entry(self.preferences.categories.top()),
            top_difficulty: TopPreference::from_entry(self.preferences.difficulties.top()),
            top_tags: self
                .preferences
                .tags
                .top_n(MAX_NAMED_TAGS)
                .into_iter()
                .map(TopPreference::from_pair)
                .collect(),
        }
    }

    // ---- read accessors ----

    /// All recipes in insertion order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes passing the current search term and filters
    pub fn filtered_recipes(&self) -> &[Recipe] {
        &self.filtered
    }

    /// Current recommendations, best first
    pub fn recommendations(&self) -> &[Recipe] {
        &self.recommendations
    }

    /// Favorite ids in the order they were favorited
    pub fn favorites(&self) -> &[RecipeId] {
        &self.favorites
    }

    /// Preferences learned from favorites
    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Current search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current filters
    pub fn filter_criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Settings in use
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    fn recompute_all(&mut self) {
        self.recompute_filtered();
        self.recompute_recommendations();
    }

    fn recompute_filtered(&mut self) {
        self.filtered = apply_filters(&self.recipes, &self.search_term, &self.criteria);
        debug!(
            "Filtered {} of {} recipes",
            self.filtered.len(),
            self.recipes.len()
        );
    }

    fn recompute_recommendations(&mut self) {
        self.recommendations = generate_recommendations(
            &self.recipes,
            &self.favorites,
            &self.preferences,
            &self.config,
            &mut self.jitter,
        );
        debug!(
            "Recommending {} recipes from {} favorites",
            self.recommendations.len(),
            self.favorites.len()
        );
    }
}
