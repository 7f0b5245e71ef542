//! Completions command implementation
//!
//! Handles `recipe-store completions`, which generates shell completion
//! scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write a completion script for `shell` and the given command tree
///
/// # Examples
///
/// ```bash
/// recipe-store completions bash > /etc/bash_completion.d/recipe-store
/// recipe-store completions zsh > ~/.zfunc/_recipe-store
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
