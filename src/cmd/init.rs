//! Init command implementation
//!
//! Handles `recipe-store init`, which writes a `.recipe-store.toml` with the
//! default recommendation settings so they can be tuned by hand.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::fmt::{icon, CHECKMARK, INFO};

/// Write the default configuration into the working directory
pub fn cmd_init(force: bool) -> Result<()> {
    cmd_init_in(&env::current_dir()?, force)
}

/// Write the default configuration into `dir`
pub fn cmd_init_in(dir: &Path, force: bool) -> Result<()> {
    if ConfigLoader::exists(dir) && !force {
        println!(
            "{} Config file already exists: {}",
            style("⚠️").yellow(),
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Use --force to overwrite it with defaults.");
        return Ok(());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, dir)?;

    println!(
        "{} Created {}",
        icon(CHECKMARK),
        style(config::CONFIG_FILE_NAME).cyan()
    );
    println!();
    println!("{}  Recommendation settings:", icon(INFO));
    println!(
        "      max-results = {}",
        style(config.recommendations.max_results).green()
    );
    println!(
        "      cold-start-count = {}",
        style(config.recommendations.cold_start_count).green()
    );
    println!(
        "      jitter-max = {}",
        style(config.recommendations.jitter_max).green()
    );
    for (name, value) in config.weights.entries() {
        println!("      weight {} = {}", name, style(value).green());
    }

    Ok(())
}
