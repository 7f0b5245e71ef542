//! Search and filter pass over the recipe collection

use crate::model::{FilterCriteria, Recipe};

/// Recipes matching the search term and every active filter, in collection order.
///
/// The term is matched case-insensitively as a substring of the title,
/// description, any ingredient or any tag; a blank term matches everything.
/// Surrounding whitespace only decides blankness: a non-blank term is matched
/// exactly as typed, spaces included.
///
/// # Examples
///
/// ```
/// use recipe_store::model::{FilterCriteria, Recipe};
/// use recipe_store::store::apply_filters;
///
/// let recipes = vec![
///     Recipe::new(1, "Classic Chocolate Chip Cookies", "Chewy and sweet"),
///     Recipe::new(2, "Spaghetti Carbonara", "Roman pasta"),
/// ];
///
/// let found = apply_filters(&recipes, "cookie", &FilterCriteria::default());
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, 1);
/// ```
pub fn apply_filters(recipes: &[Recipe], search_term: &str, criteria: &FilterCriteria) -> Vec<Recipe> {
    let term = (!search_term.trim().is_empty()).then(|| search_term.to_lowercase());

    recipes
        .iter()
        .filter(|recipe| term.as_deref().map_or(true, |term| recipe.matches_term(term)))
        .filter(|recipe| criteria.matches(recipe))
        .cloned()
        .collect()
}
