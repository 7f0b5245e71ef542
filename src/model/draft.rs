//! Raw recipe form input and its presence checks

use std::fmt;
use thiserror::Error;

use super::recipe::{Difficulty, Recipe, RecipeId};

const MIN_TITLE_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 10;

/// Form field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Recipe title
    Title,
    /// Recipe description
    Description,
    /// Preparation time
    PreparationTime,
    /// Ingredient list
    Ingredients,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::PreparationTime => "preparationTime",
            DraftField::Ingredients => "ingredients",
        })
    }
}

/// Every problem found in a draft, in field order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("recipe draft has {} invalid field(s): {}", .issues.len(), summary(.issues))]
pub struct DraftErrors {
    /// Field and message pairs
    pub issues: Vec<(DraftField, String)>,
}

fn summary(issues: &[(DraftField, String)]) -> String {
    issues
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl DraftErrors {
    /// Message for a field, if that field failed
    pub fn message_for(&self, field: DraftField) -> Option<&str> {
        self.issues
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }
}

/// Recipe as typed into a form, before any checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Title text
    pub title: String,
    /// Description text
    pub description: String,
    /// Preparation time as typed; blank means not given
    pub preparation_time: String,
    /// Selected difficulty
    pub difficulty: Option<Difficulty>,
    /// Category text; blank means none
    pub category: String,
    /// Ingredient rows, possibly blank
    pub ingredients: Vec<String>,
    /// Tag rows, possibly blank
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Check the draft, collecting one message per failing field
    pub fn validate(&self) -> Result<(), DraftErrors> {
        let mut issues = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            issues.push((DraftField::Title, "Recipe title is required".to_string()));
        } else if title.chars().count() < MIN_TITLE_LEN {
            issues.push((
                DraftField::Title,
                format!("Title must be at least {} characters long", MIN_TITLE_LEN),
            ));
        }

        let description = self.description.trim();
        if description.is_empty() {
            issues.push((
                DraftField::Description,
                "Recipe description is required".to_string(),
            ));
        } else if description.chars().count() < MIN_DESCRIPTION_LEN {
            issues.push((
                DraftField::Description,
                format!(
                    "Description must be at least {} characters long",
                    MIN_DESCRIPTION_LEN
                ),
            ));
        }

        if self.parsed_preparation_time().is_err() {
            issues.push((
                DraftField::PreparationTime,
                "Please enter a valid preparation time in minutes".to_string(),
            ));
        }

        if non_blank(&self.ingredients).is_empty() {
            issues.push((
                DraftField::Ingredients,
                "Please add at least one ingredient".to_string(),
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(DraftErrors { issues })
        }
    }

    /// Validate and build the recipe, trimming text and dropping blank rows
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_store::model::RecipeDraft;
    ///
    /// let draft = RecipeDraft {
    ///     title: "  Pancakes ".to_string(),
    ///     description: "Fluffy weekend pancakes".to_string(),
    ///     preparation_time: "20".to_string(),
    ///     ingredients: vec!["flour".to_string(), "  ".to_string()],
    ///     ..Default::default()
    /// };
    ///
    /// let recipe = draft.into_recipe(1, "3/2/2024").unwrap();
    /// assert_eq!(recipe.title, "Pancakes");
    /// assert_eq!(recipe.preparation_time, Some(20));
    /// assert_eq!(recipe.ingredients, vec!["flour"]);
    /// ```
    pub fn into_recipe(
        self,
        id: RecipeId,
        created_at: impl Into<String>,
    ) -> Result<Recipe, DraftErrors> {
        self.validate()?;

        let category = self.category.trim();
        Ok(Recipe {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            preparation_time: self.parsed_preparation_time().unwrap_or_default(),
            difficulty: self.difficulty,
            category: (!category.is_empty()).then(|| category.to_string()),
            ingredients: non_blank(&self.ingredients),
            tags: non_blank(&self.tags),
            created_at: created_at.into(),
            updated_at: None,
        })
    }

    // Blank is fine; anything else must be a positive whole number.
    fn parsed_preparation_time(&self) -> Result<Option<u32>, ()> {
        let raw = self.preparation_time.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<u32>() {
            Ok(minutes) if minutes > 0 => Ok(Some(minutes)),
            _ => Err(()),
        }
    }
}

fn non_blank(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .map(str::to_string)
        .collect()
}
