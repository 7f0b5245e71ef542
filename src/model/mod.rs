//! Recipe data model
//!
//! This module provides:
//! - [`Recipe`] records with their difficulty and time bucket
//! - [`FilterCriteria`] and partial updates via [`FilterPatch`]
//! - [`UserPreferences`] counters learned from favorites
//! - [`RecipeDraft`] form input with presence checks

pub mod draft;
pub mod filter;
pub mod preferences;
pub mod recipe;

pub use draft::{DraftErrors, DraftField, RecipeDraft};
pub use filter::{FilterCriteria, FilterPatch, TimeBucket};
pub use preferences::{PreferenceCounter, UserPreferences};
pub use recipe::{Difficulty, Recipe, RecipeId};
