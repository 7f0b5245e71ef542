//! Favorites command implementation
//!
//! Handles `recipe-store favorites`, which prints the favorited recipes and
//! the preference counts learned from them.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::Path;

use super::session::{open_store, print_json};
use crate::fmt::{icon, recipe_line, HEART};
use crate::model::{PreferenceCounter, Recipe, RecipeId, UserPreferences};

#[derive(Serialize)]
struct FavoritesOutput<'a> {
    favorites: Vec<&'a Recipe>,
    preferences: &'a UserPreferences,
}

/// Print favorites and the preferences they imply
pub fn cmd_favorites(file: &Path, favorites: &[RecipeId], json: bool) -> Result<()> {
    let store = open_store(file, favorites, None)?;

    if json {
        return print_json(&FavoritesOutput {
            favorites: store.favorite_recipes(),
            preferences: store.preferences(),
        });
    }

    println!(
        "{} {} favorite recipes",
        icon(HEART),
        style(store.favorites().len()).bold()
    );
    println!();
    for recipe in store.favorite_recipes() {
        println!("  {}", recipe_line(recipe));
    }

    let prefs = store.preferences();
    if !prefs.is_empty() {
        println!();
        println!("{}", style("Learned preferences").bold());
        print_counter("categories", &prefs.categories);
        print_counter("difficulties", &prefs.difficulties);
        print_counter("time", &prefs.time_buckets);
        print_counter("tags", &prefs.tags);
    }

    Ok(())
}

fn print_counter(label: &str, counter: &PreferenceCounter) {
    if counter.is_empty() {
        return;
    }
    let entries: Vec<String> = counter
        .iter()
        .map(|(key, count)| format!("{} ×{}", key, count))
        .collect();
    println!("  {:<13}{}", style(label).dim(), entries.join(", "));
}
