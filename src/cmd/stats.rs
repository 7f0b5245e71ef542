//! Stats command implementation

use anyhow::Result;
use console::style;
use std::path::Path;

use super::session::{open_store, print_json};
use crate::fmt::{capitalize, icon, CHART};
use crate::model::RecipeId;
use crate::store::TopPreference;

/// Print the dashboard summary for a set of favorites
pub fn cmd_stats(file: &Path, favorites: &[RecipeId], json: bool) -> Result<()> {
    let store = open_store(file, favorites, None)?;
    let stats = store.stats();

    if json {
        return print_json(&stats);
    }

    println!("{} {}", icon(CHART), style("Your recipe journey").bold());
    println!();
    println!("  Total recipes    {}", style(stats.total_recipes).bold());
    println!("  Favorites        {}", style(stats.favorites).bold());
    println!("  Recommendations  {}", style(stats.recommendations).bold());
    print_top("Top category", stats.top_category.as_ref());
    print_top("Top difficulty", stats.top_difficulty.as_ref());
    if !stats.top_tags.is_empty() {
        let tags: Vec<String> = stats
            .top_tags
            .iter()
            .map(|tag| format!("{} {}", tag.key, style(format!("({})", tag.count)).dim()))
            .collect();
        println!("  {:<17}{}", "Top tags", tags.join(", "));
    }

    Ok(())
}

fn print_top(label: &str, top: Option<&TopPreference>) {
    if let Some(top) = top {
        println!(
            "  {:<17}{} {}",
            label,
            style(capitalize(&top.key)).cyan(),
            style(format!("({})", top.count)).dim()
        );
    }
}
