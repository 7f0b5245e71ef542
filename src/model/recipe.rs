//! Recipe records and their categorical fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use super::filter::TimeBucket;
use crate::error::RecipeStoreError;

/// Recipe identifier, assigned from the creation timestamp in milliseconds
pub type RecipeId = u64;

/// How hard a recipe is to prepare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Beginner friendly
    Easy,
    /// Some experience required
    Medium,
    /// Demanding technique or timing
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lower-case name used in filters, preference keys and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RecipeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeStoreError::InvalidFilterValue {
                field: "difficulty".to_string(),
                value: s.to_string(),
                expected: Difficulty::ALL.iter().map(|d| d.to_string()).collect(),
            })
    }
}

/// A user-submitted dish record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique id
    pub id: RecipeId,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
    /// Difficulty level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Category such as "dessert" or "main"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Ingredients in listing order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Tags in listing order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: String,
    /// Date of the last edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Recipe {
    /// Create a recipe with only the required fields set
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_store::model::{Difficulty, Recipe, TimeBucket};
    ///
    /// let recipe = Recipe::new(1, "Pancakes", "Fluffy breakfast pancakes")
    ///     .with_preparation_time(20)
    ///     .with_difficulty(Difficulty::Easy);
    ///
    /// assert_eq!(recipe.time_bucket(), Some(TimeBucket::Quick));
    /// ```
    pub fn new(id: RecipeId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            preparation_time: None,
            difficulty: None,
            category: None,
            ingredients: Vec::new(),
            tags: Vec::new(),
            created_at: String::new(),
            updated_at: None,
        }
    }

    /// Set the preparation time in minutes
    pub fn with_preparation_time(mut self, minutes: u32) -> Self {
        self.preparation_time = Some(minutes);
        self
    }

    /// Set the difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the ingredient list
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the creation date
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Coarse preparation time class; `None` when no time is recorded.
    ///
    /// Zero minutes counts as unset.
    pub fn time_bucket(&self) -> Option<TimeBucket> {
        self.preparation_time
            .filter(|&minutes| minutes > 0)
            .map(TimeBucket::from_minutes)
    }

    /// Whether the already lower-cased `term` occurs in the title,
    /// description, any ingredient or any tag.
    pub fn matches_term(&self, term: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(term);

        contains(&self.title)
            || contains(&self.description)
            || self.ingredients.iter().any(|i| contains(i.as_str()))
            || self.tags.iter().any(|t| contains(t.as_str()))
    }

    /// A fresh id from the current time in milliseconds
    pub fn next_id() -> RecipeId {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as RecipeId)
            .unwrap_or_default()
    }
}
