//! Configuration for recommendation behavior
//!
//! This module provides:
//! - `.recipe-store.toml` data structures and validation
//! - Loading with defaults when the file is absent, and saving

pub mod file;
pub mod loader;

pub use file::{ConfigFile, RecommendationSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
