//! Recommend command implementation
//!
//! Handles `recipe-store recommend`, which marks the given recipes as
//! favorites and prints what the store suggests next, with the reasons each
//! suggestion fits and what the favorites say about the user.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::Path;

use super::session::{open_store, print_json, CliStore};
use crate::fmt::{icon, recipe_line, INFO, SPARKLES};
use crate::insights::{match_reasons, preference_insights};
use crate::model::{Recipe, RecipeId};
use crate::scoring::preference_score;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Suggestion<'a> {
    #[serde(flatten)]
    recipe: &'a Recipe,
    score: f64,
    match_reasons: Vec<String>,
}

#[derive(Serialize)]
struct RecommendOutput<'a> {
    recommendations: Vec<Suggestion<'a>>,
    insights: Vec<String>,
}

fn build_output(store: &CliStore) -> RecommendOutput<'_> {
    let prefs = store.preferences();
    let weights = &store.config().weights;

    RecommendOutput {
        recommendations: store
            .recommendations()
            .iter()
            .map(|recipe| Suggestion {
                recipe,
                score: preference_score(recipe, prefs, weights),
                match_reasons: match_reasons(recipe, prefs)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect(),
        insights: preference_insights(prefs)
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

/// Print recommendations for a set of favorites
///
/// `seed` pins the random tie-break so repeated runs print the same order.
pub fn cmd_recommend(
    file: &Path,
    favorites: &[RecipeId],
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let store = open_store(file, favorites, seed)?;
    let output = build_output(&store);

    if json {
        return print_json(&output);
    }

    println!("{} {}", icon(SPARKLES), style("Recommended for you").bold());
    if favorites.is_empty() {
        println!(
            "{}  No favorites yet, showing the first recipes in the collection",
            icon(INFO)
        );
    }
    for insight in &output.insights {
        println!("{}  {}", icon(INFO), insight);
    }
    println!();

    for suggestion in &output.recommendations {
        if favorites.is_empty() {
            println!("  {}", recipe_line(suggestion.recipe));
            continue;
        }

        println!(
            "  {} {}",
            recipe_line(suggestion.recipe),
            style(format!("score {:.1}", suggestion.score)).green()
        );
        for reason in &suggestion.match_reasons {
            println!("      {}", style(reason).dim());
        }
    }

    Ok(())
}
