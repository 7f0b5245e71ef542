//! Store setup shared by the read-only commands
//!
//! Each command builds a fresh store: settings from `.recipe-store.toml` in
//! the working directory, recipes from the catalog file, then the favorites
//! given on the command line replayed in order.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::env;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::ConfigLoader;
use crate::error::RecipeStoreError;
use crate::infra::{JitterSource, SeededJitter, ThreadJitter};
use crate::model::RecipeId;
use crate::store::RecipeStore;

/// Store type used by the CLI; the jitter source depends on `--seed`
pub type CliStore = RecipeStore<Box<dyn JitterSource>>;

/// Build a store from the working directory's config and a catalog file
pub fn open_store(file: &Path, favorites: &[RecipeId], seed: Option<u64>) -> Result<CliStore> {
    open_store_in(&env::current_dir()?, file, favorites, seed)
}

/// Build a store reading config from `config_dir`
pub fn open_store_in(
    config_dir: &Path,
    file: &Path,
    favorites: &[RecipeId],
    seed: Option<u64>,
) -> Result<CliStore> {
    let config = ConfigLoader::load(config_dir)?;
    let recipes = Catalog::load(file)
        .with_context(|| format!("Failed to load recipes from {}", file.display()))?;

    let jitter: Box<dyn JitterSource> = match seed {
        Some(seed) => {
            debug!("Using seeded jitter ({})", seed);
            Box::new(SeededJitter::new(seed))
        }
        None => Box::new(ThreadJitter),
    };

    let mut store = RecipeStore::with_config(config, jitter);
    store.set_recipes(recipes);

    for &id in favorites {
        if store.get_recipe_by_id(id).is_none() {
            return Err(RecipeStoreError::RecipeNotFound { id: id.to_string() })
                .context("Unknown --favorite id");
        }
        store.add_favorite(id);
    }

    Ok(store)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}
