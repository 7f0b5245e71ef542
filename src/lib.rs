#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! recipe-store library
//!
//! An in-memory recipe collection that keeps a filtered view and a
//! recommendation list up to date as recipes are added, edited, deleted and
//! favorited. It can be used programmatically in addition to the CLI.
//!
//! # Basic Example
//!
//! ```
//! use recipe_store::infra::ZeroJitter;
//! use recipe_store::model::{Difficulty, FilterPatch, Recipe, TimeBucket};
//! use recipe_store::store::RecipeStore;
//!
//! let mut store = RecipeStore::with_jitter(ZeroJitter);
//! store.add_recipe(
//!     Recipe::new(1, "Classic Chocolate Chip Cookies", "Crispy edges, chewy centers")
//!         .with_preparation_time(25)
//!         .with_difficulty(Difficulty::Easy),
//! );
//! store.add_recipe(
//!     Recipe::new(2, "Spaghetti Carbonara", "Roman pasta with eggs and pecorino")
//!         .with_preparation_time(45),
//! );
//!
//! store.set_search_term("cookie");
//! assert_eq!(store.filtered_recipes()[0].id, 1);
//!
//! store.clear_filters();
//! store.set_filter_criteria(FilterPatch::new().preparation_time(Some(TimeBucket::Quick)));
//! assert_eq!(store.filtered_recipes().len(), 1);
//! ```
//!
//! # Advanced Example: Learning From Favorites
//!
//! ```
//! use recipe_store::infra::ZeroJitter;
//! use recipe_store::model::Recipe;
//! use recipe_store::store::RecipeStore;
//!
//! let mut store = RecipeStore::with_jitter(ZeroJitter);
//! store.set_recipes(vec![
//!     Recipe::new(1, "Miso Soup", "Quick dashi soup").with_tags(["japanese"]),
//!     Recipe::new(2, "Tacos", "Street tacos").with_tags(["mexican"]),
//!     Recipe::new(3, "Ramen", "Pork broth noodles").with_tags(["japanese"]),
//! ]);
//!
//! store.add_favorite(1);
//! assert_eq!(store.preferences().tags.get("japanese"), 1);
//! assert_eq!(store.recommendations()[0].id, 3);
//!
//! store.remove_favorite(1);
//! assert!(store.preferences().is_empty());
//! ```

/// Recipe catalog loading and saving
pub mod catalog;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access and randomness
pub mod infra;
/// Match reasons and preference insights
pub mod insights;
/// Recipe data model
pub mod model;
/// Recommendation scoring
pub mod scoring;
/// The recipe store and its derived views
pub mod store;
