//! Shared formatting utilities for console output

use console::{style, Emoji};

use crate::model::Recipe;

/// Book emoji for recipe listings
pub const BOOK: Emoji = Emoji("📚", "*");

/// Heart emoji for favorites
pub const HEART: Emoji = Emoji("❤️", "<3");

/// Sparkles emoji for recommendations
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Chart emoji for statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Environment variable that switches emoji to their plain fallbacks
pub const NO_EMOJI_VAR: &str = "NO_EMOJI";

/// Render an emoji, or its fallback when `NO_EMOJI` is set
pub fn icon(emoji: Emoji<'_, '_>) -> String {
    if std::env::var_os(NO_EMOJI_VAR).is_some() {
        emoji.1.to_string()
    } else {
        emoji.to_string()
    }
}

/// Format a preparation time for display
///
/// # Examples
///
/// ```
/// use recipe_store::fmt::format_minutes;
///
/// assert_eq!(format_minutes(45), "45 min");
/// assert_eq!(format_minutes(60), "1 h");
/// assert_eq!(format_minutes(95), "1 h 35 min");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}

/// Upper-case the first character, for keys that start a sentence
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line summary: id, title and whatever metadata is present
pub fn recipe_line(recipe: &Recipe) -> String {
    let mut details = Vec::new();
    if let Some(minutes) = recipe.preparation_time {
        details.push(format_minutes(minutes));
    }
    if let Some(difficulty) = recipe.difficulty {
        details.push(difficulty.to_string());
    }
    if let Some(category) = &recipe.category {
        details.push(category.clone());
    }

    let mut line = format!(
        "{} {}",
        style(format!("[{}]", recipe.id)).dim(),
        style(&recipe.title).bold()
    );
    if !details.is_empty() {
        line.push_str(&format!(" {}", style(format!("({})", details.join(", "))).dim()));
    }
    line
}
