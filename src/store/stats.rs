//! Dashboard summary of the store

use serde::{Deserialize, Serialize};

/// A preference key and how many favorites carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPreference {
    /// Lower-cased key, e.g. "dessert"
    pub key: String,
    /// Number of favorites with that key
    pub count: u32,
}

/// Counts shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    /// Recipes in the collection
    pub total_recipes: usize,
    /// Favorited recipes
    pub favorites: usize,
    /// Current recommendations
    pub recommendations: usize,
    /// Most favorited category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_category: Option<TopPreference>,
    /// Most favorited difficulty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_difficulty: Option<TopPreference>,
    /// Most favorited tags, highest count first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_tags: Vec<TopPreference>,
}

impl TopPreference {
    pub(super) fn from_entry(entry: Option<(&str, u32)>) -> Option<Self> {
        entry.map(Self::from_pair)
    }

    pub(super) fn from_pair((key, count): (&str, u32)) -> Self {
        Self {
            key: key.to_string(),
            count,
        }
    }
}
