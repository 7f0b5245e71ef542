//! Show command implementation
//!
//! Handles `recipe-store show`, which prints a single recipe in full.

use anyhow::Result;
use console::style;
use std::path::Path;

use super::session::{open_store, print_json};
use crate::error::RecipeStoreError;
use crate::fmt::format_minutes;

/// Print one recipe; the id is taken as typed and must parse as a number
pub fn cmd_show(file: &Path, id: &str, json: bool) -> Result<()> {
    let store = open_store(file, &[], None)?;

    let recipe = store
        .get_recipe_by_id_str(id)
        .ok_or_else(|| RecipeStoreError::RecipeNotFound { id: id.to_string() })?;

    if json {
        return print_json(recipe);
    }

    println!("{}", style(&recipe.title).bold().underlined());
    println!("{}", recipe.description);
    println!();

    if let Some(minutes) = recipe.preparation_time {
        println!("  {:<12}{}", style("Time").dim(), format_minutes(minutes));
    }
    if let Some(difficulty) = recipe.difficulty {
        println!("  {:<12}{}", style("Difficulty").dim(), difficulty);
    }
    if let Some(category) = &recipe.category {
        println!("  {:<12}{}", style("Category").dim(), category);
    }
    if !recipe.created_at.is_empty() {
        println!("  {:<12}{}", style("Added").dim(), recipe.created_at);
    }
    if let Some(updated) = &recipe.updated_at {
        println!("  {:<12}{}", style("Updated").dim(), updated);
    }

    if !recipe.ingredients.is_empty() {
        println!();
        println!("{}", style("Ingredients").bold());
        for ingredient in &recipe.ingredients {
            println!("  • {}", ingredient);
        }
    }
    if !recipe.tags.is_empty() {
        println!();
        println!("{} {}", style("Tags").bold(), recipe.tags.join(", "));
    }

    Ok(())
}
