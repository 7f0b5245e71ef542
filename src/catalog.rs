//! Recipe catalog files
//!
//! A catalog is a JSON array of recipes in the same camelCase shape the
//! store serializes, e.g.
//!
//! ```json
//! [{"id": 1, "title": "Pancakes", "description": "Fluffy", "preparationTime": 20}]
//! ```

use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::error::RecipeStoreError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::model::Recipe;

/// Reads and writes recipe catalogs
pub struct Catalog;

impl Catalog {
    /// Load a catalog from disk
    pub fn load(path: &Path) -> Result<Vec<Recipe>, RecipeStoreError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a catalog with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        path: &Path,
        fs: &FS,
    ) -> Result<Vec<Recipe>, RecipeStoreError> {
        let contents = fs.read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RecipeStoreError::CatalogNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                RecipeStoreError::Io {
                    context: format!("reading {}", path.display()),
                    source,
                }
            }
        })?;

        let recipes: Vec<Recipe> =
            serde_json::from_str(&contents).map_err(|source| RecipeStoreError::InvalidCatalog {
                path: path.to_path_buf(),
                source,
            })?;

        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                warn!(
                    "Duplicate recipe id {} in {}; lookups will return the first",
                    recipe.id,
                    path.display()
                );
            }
        }

        info!("Loaded {} recipes from {}", recipes.len(), path.display());
        Ok(recipes)
    }

    /// Save a catalog to disk as pretty-printed JSON
    pub fn save(recipes: &[Recipe], path: &Path) -> Result<(), RecipeStoreError> {
        Self::save_with_fs(recipes, path, &RealFileSystem)
    }

    /// Save a catalog with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        recipes: &[Recipe],
        path: &Path,
        fs: &FS,
    ) -> Result<(), RecipeStoreError> {
        let contents =
            serde_json::to_string_pretty(recipes).map_err(|source| RecipeStoreError::Io {
                context: format!("serializing {}", path.display()),
                source: source.into(),
            })?;

        fs.write(path, contents)
            .map_err(|source| RecipeStoreError::Io {
                context: format!("writing {}", path.display()),
                source,
            })?;

        info!("Saved {} recipes to {}", recipes.len(), path.display());
        Ok(())
    }
}
