//! Test fixture helpers for recipe catalogs
//!
//! Provides a small, realistic recipe collection and helpers that write it
//! to a temporary directory for CLI tests.

#![allow(dead_code)]

use recipe_store::catalog::Catalog;
use recipe_store::model::{Difficulty, Recipe};
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Id of "Classic Chocolate Chip Cookies"
pub const COOKIES: u64 = 1_700_000_000_001;
/// Id of "Spaghetti Carbonara"
pub const CARBONARA: u64 = 1_700_000_000_002;
/// Id of "Fudgy Brownies"
pub const BROWNIES: u64 = 1_700_000_000_003;
/// Id of "Beef Bourguignon"
pub const BOURGUIGNON: u64 = 1_700_000_000_004;
/// Id of "Green Salad"
pub const SALAD: u64 = 1_700_000_000_005;
/// Id of "Lemon Tart"
pub const LEMON_TART: u64 = 1_700_000_000_006;

/// Six recipes spanning every difficulty and time bucket
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            COOKIES,
            "Classic Chocolate Chip Cookies",
            "Crispy edges and chewy centers",
        )
        .with_preparation_time(25)
        .with_difficulty(Difficulty::Easy)
        .with_category("dessert")
        .with_ingredients(["flour", "butter", "brown sugar", "chocolate chips"])
        .with_tags(["baking", "sweet"])
        .with_created_at("11/14/2023"),
        Recipe::new(
            CARBONARA,
            "Spaghetti Carbonara",
            "Roman pasta with eggs, pecorino and guanciale",
        )
        .with_preparation_time(45)
        .with_difficulty(Difficulty::Medium)
        .with_category("main")
        .with_ingredients(["spaghetti", "eggs", "pecorino", "guanciale"])
        .with_tags(["italian", "pasta"])
        .with_created_at("11/14/2023"),
        Recipe::new(BROWNIES, "Fudgy Brownies", "Dense chocolate squares")
            .with_preparation_time(40)
            .with_difficulty(Difficulty::Easy)
            .with_category("dessert")
            .with_ingredients(["dark chocolate", "butter", "eggs"])
            .with_tags(["baking", "chocolate"])
            .with_created_at("11/15/2023"),
        Recipe::new(BOURGUIGNON, "Beef Bourguignon", "Slow braised beef in red wine")
            .with_preparation_time(180)
            .with_difficulty(Difficulty::Hard)
            .with_category("main")
            .with_ingredients(["beef", "red wine", "mushrooms"])
            .with_tags(["french"])
            .with_created_at("11/16/2023"),
        Recipe::new(SALAD, "Green Salad", "Crunchy leaves with a mustard dressing")
            .with_category("side")
            .with_ingredients(["lettuce", "mustard", "olive oil"])
            .with_created_at("11/16/2023"),
        Recipe::new(LEMON_TART, "Lemon Tart", "Sharp lemon curd in a buttery crust")
            .with_preparation_time(90)
            .with_difficulty(Difficulty::Hard)
            .with_category("dessert")
            .with_ingredients(["lemons", "butter", "flour"])
            .with_tags(["baking", "french"])
            .with_created_at("11/17/2023"),
    ]
}

/// Writes [`sample_recipes`] to `recipes.json` in a fresh temp dir
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the catalog) - the TempDir must be kept alive
pub fn create_sample_catalog() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("recipes.json");
    Catalog::save(&sample_recipes(), &path)?;
    Ok((temp_dir, path))
}
