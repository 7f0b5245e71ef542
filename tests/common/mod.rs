//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - A sample recipe collection
//! - Catalog files in temporary directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let (_dir, catalog) = fixtures::create_sample_catalog().unwrap();
//! ```

pub mod fixtures;

use recipe_store::model::{Recipe, RecipeId};

/// Ids of a recipe slice, in order
#[allow(dead_code)]
pub fn ids(recipes: &[Recipe]) -> Vec<RecipeId> {
    recipes.iter().map(|r| r.id).collect()
}
