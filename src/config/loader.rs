//! Reading and writing `.recipe-store.toml`
//!
//! Every failure is reported as a [`RecipeStoreError`] so the CLI can map it
//! to an exit code: unreadable files are `Io`, while syntax errors, wrong
//! value types and out-of-range values are all `InvalidConfig`.

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::RecipeStoreError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Entry point for the recommendation settings stored next to a catalog
pub struct ConfigLoader;

impl ConfigLoader {
    /// Settings from the working directory's config, or defaults when absent
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use recipe_store::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Up to {} recommendations", config.recommendations.max_results);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(dir: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(dir, &RealFileSystem)
    }

    /// [`ConfigLoader::load`] over an arbitrary [`FileSystem`]
    pub fn load_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> Result<ConfigFile> {
        let path = dir.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(RecipeStoreError::Io {
                    context: format!("Failed to read {}", path.display()),
                    source,
                }
                .into());
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| RecipeStoreError::InvalidConfig {
                reason: format!("{} is not valid: {}", CONFIG_FILE_NAME, e.message()),
            })?;
        config
            .validate()
            .with_context(|| format!("Rejected settings in {}", path.display()))?;

        debug!(
            "Loaded {} (max-results {}, jitter-max {})",
            path.display(),
            config.recommendations.max_results,
            config.recommendations.jitter_max
        );
        Ok(config)
    }

    /// Write `config` as pretty TOML into `dir`, replacing any existing file
    pub fn save(config: &ConfigFile, dir: &Path) -> Result<()> {
        Self::save_with_fs(config, dir, &RealFileSystem)
    }

    /// [`ConfigLoader::save`] over an arbitrary [`FileSystem`]
    pub fn save_with_fs<FS: FileSystem>(config: &ConfigFile, dir: &Path, fs: &FS) -> Result<()> {
        let path = dir.join(CONFIG_FILE_NAME);
        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize settings")?;

        fs.write(&path, contents)
            .map_err(|source| RecipeStoreError::Io {
                context: format!("Failed to write {}", path.display()),
                source,
            })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Whether `dir` already has a config file
    pub fn exists(dir: &Path) -> bool {
        RealFileSystem.exists(&dir.join(CONFIG_FILE_NAME))
    }
}
