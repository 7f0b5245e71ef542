//! List command implementation
//!
//! Handles `recipe-store list`, which prints the recipes matching a search
//! term and optional preparation time, difficulty and category filters.

use anyhow::Result;
use console::style;
use std::path::Path;

use super::session::{open_store, print_json};
use crate::fmt::{icon, recipe_line, BOOK};
use crate::model::{Difficulty, FilterPatch, TimeBucket};

/// Raw filter flags as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Free-text search term
    pub search: Option<String>,
    /// quick, medium or long
    pub time: Option<String>,
    /// easy, medium or hard
    pub difficulty: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl ListOptions {
    /// Parse the flags into a filter update
    pub fn to_patch(&self) -> Result<FilterPatch> {
        let time = self
            .time
            .as_deref()
            .map(str::parse::<TimeBucket>)
            .transpose()?;
        let difficulty = self
            .difficulty
            .as_deref()
            .map(str::parse::<Difficulty>)
            .transpose()?;

        Ok(FilterPatch::new()
            .preparation_time(time)
            .difficulty(difficulty)
            .category(self.category.clone()))
    }
}

/// Print recipes matching the given search and filters
///
/// # Examples
///
/// ```no_run
/// use recipe_store::cmd::list::{cmd_list, ListOptions};
/// use std::path::Path;
///
/// let options = ListOptions {
///     search: Some("cookie".to_string()),
///     ..Default::default()
/// };
/// cmd_list(Path::new("recipes.json"), &options, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_list(file: &Path, options: &ListOptions, json: bool) -> Result<()> {
    let patch = options.to_patch()?;

    let mut store = open_store(file, &[], None)?;
    if let Some(term) = &options.search {
        store.set_search_term(term.as_str());
    }
    store.set_filter_criteria(patch);

    if json {
        return print_json(store.filtered_recipes());
    }

    println!(
        "{} {} of {} recipes",
        icon(BOOK),
        style(store.filtered_recipes().len()).bold(),
        store.recipes().len()
    );
    println!();
    for recipe in store.filtered_recipes() {
        println!("  {}", recipe_line(recipe));
    }

    Ok(())
}
