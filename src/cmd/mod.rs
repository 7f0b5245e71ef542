//! Command handlers for the recipe-store CLI
//!
//! Each submodule handles one CLI command. Commands never persist store
//! state: they load a catalog, replay the requested favorites and queries,
//! and print the derived views.

pub mod completions;
pub mod favorites;
pub mod init;
pub mod list;
pub mod recommend;
pub mod session;
pub mod show;
pub mod stats;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use favorites::cmd_favorites;
pub use init::cmd_init;
pub use list::{cmd_list, ListOptions};
pub use recommend::cmd_recommend;
pub use show::cmd_show;
pub use stats::cmd_stats;
