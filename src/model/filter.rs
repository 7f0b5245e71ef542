//! Filter criteria and preparation time buckets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::recipe::{Difficulty, Recipe};
use crate::error::RecipeStoreError;

/// Upper bound (inclusive) of the quick bucket, in minutes
pub const QUICK_MAX_MINUTES: u32 = 30;

/// Upper bound (inclusive) of the medium bucket, in minutes
pub const MEDIUM_MAX_MINUTES: u32 = 60;

/// Coarse classification of preparation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// 30 minutes or less
    Quick,
    /// 31 to 60 minutes
    Medium,
    /// More than an hour
    Long,
}

impl TimeBucket {
    /// All buckets, shortest first
    pub const ALL: [TimeBucket; 3] = [TimeBucket::Quick, TimeBucket::Medium, TimeBucket::Long];

    /// Classify a preparation time
    pub fn from_minutes(minutes: u32) -> Self {
        if minutes <= QUICK_MAX_MINUTES {
            TimeBucket::Quick
        } else if minutes <= MEDIUM_MAX_MINUTES {
            TimeBucket::Medium
        } else {
            TimeBucket::Long
        }
    }

    /// Lower-case name used in filters and preference keys
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::Quick => "quick",
            TimeBucket::Medium => "medium",
            TimeBucket::Long => "long",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBucket {
    type Err = RecipeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeBucket::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeStoreError::InvalidFilterValue {
                field: "preparation time".to_string(),
                value: s.to_string(),
                expected: TimeBucket::ALL.iter().map(|b| b.to_string()).collect(),
            })
    }
}

/// Active filters; `None` means the filter is off
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Preparation time bucket
    pub preparation_time: Option<TimeBucket>,
    /// Exact difficulty
    pub difficulty: Option<Difficulty>,
    /// Exact category
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.preparation_time.is_none() && self.difficulty.is_none() && self.category.is_none()
    }

    /// Whether a recipe passes every active filter
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(bucket) = self.preparation_time {
            if recipe.time_bucket() != Some(bucket) {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != Some(difficulty) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if recipe.category.as_ref() != Some(category) {
                return false;
            }
        }

        true
    }

    /// Merge a partial update into these criteria
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_store::model::{Difficulty, FilterCriteria, FilterPatch, TimeBucket};
    ///
    /// let mut criteria = FilterCriteria::default();
    /// criteria.merge(FilterPatch::new().preparation_time(Some(TimeBucket::Quick)));
    /// criteria.merge(FilterPatch::new().difficulty(Some(Difficulty::Easy)));
    ///
    /// assert_eq!(criteria.preparation_time, Some(TimeBucket::Quick));
    /// assert_eq!(criteria.difficulty, Some(Difficulty::Easy));
    ///
    /// criteria.merge(FilterPatch::new().preparation_time(None));
    /// assert_eq!(criteria.preparation_time, None);
    /// ```
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(bucket) = patch.preparation_time {
            self.preparation_time = bucket;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(category) = patch.category {
            // An empty category switches the filter off
            self.category = category.filter(|c| !c.is_empty());
        }
    }
}

/// Partial update of [`FilterCriteria`].
///
/// Each field is `None` to keep the current value, `Some(None)` to clear it,
/// or `Some(Some(v))` to set it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    /// New preparation time filter
    pub preparation_time: Option<Option<TimeBucket>>,
    /// New difficulty filter
    pub difficulty: Option<Option<Difficulty>>,
    /// New category filter
    pub category: Option<Option<String>>,
}

impl FilterPatch {
    /// An empty patch that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the preparation time filter
    pub fn preparation_time(mut self, bucket: Option<TimeBucket>) -> Self {
        self.preparation_time = Some(bucket);
        self
    }

    /// Set or clear the difficulty filter
    pub fn difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set or clear the category filter
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }
}

impl From<FilterCriteria> for FilterPatch {
    fn from(criteria: FilterCriteria) -> Self {
        Self {
            preparation_time: Some(criteria.preparation_time),
            difficulty: Some(criteria.difficulty),
            category: Some(criteria.category),
        }
    }
}
