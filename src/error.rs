//! Error types with contextual suggestions
//!
//! Store operations themselves never fail: a missing recipe is reported as
//! `None`. The errors here cover everything around the store:
//! - Loading and saving recipe catalogs
//! - Reading `.recipe-store.toml`
//! - Parsing filter values supplied on the command line
//!
//! # Examples
//!
//! ```
//! use recipe_store::error::RecipeStoreError;
//!
//! let err = RecipeStoreError::RecipeNotFound { id: "42".to_string() };
//! assert_eq!(err.exit_code(), 65);
//! assert!(err.suggestion().is_some());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the store's own (total) operations
#[derive(Error, Debug)]
pub enum RecipeStoreError {
    /// Recipe catalog file does not exist or cannot be opened
    #[error("Recipe catalog not found: {path}")]
    CatalogNotFound {
        /// Path to the catalog
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Recipe catalog is not a valid JSON array of recipes
    #[error("Invalid recipe catalog: {path}")]
    InvalidCatalog {
        /// Path to the catalog
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Configuration values are out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },

    /// A filter value could not be parsed
    #[error("Invalid {field} value: '{value}'")]
    InvalidFilterValue {
        /// Filter field name
        field: String,
        /// Rejected value
        value: String,
        /// Accepted values
        expected: Vec<String>,
    },

    /// No recipe with the requested id
    #[error("Recipe not found: {id}")]
    RecipeNotFound {
        /// Requested id, as supplied
        id: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl RecipeStoreError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_store::error::RecipeStoreError;
    ///
    /// let error = RecipeStoreError::InvalidFilterValue {
    ///     field: "difficulty".to_string(),
    ///     value: "tricky".to_string(),
    ///     expected: vec!["easy".to_string(), "medium".to_string(), "hard".to_string()],
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("easy, medium, hard"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::CatalogNotFound { path, .. } => Some(format!(
                "Check that {} exists and is readable",
                path.display()
            )),
            Self::InvalidCatalog { .. } => Some(
                "The catalog must be a JSON array of recipes with at least id, title and description"
                    .to_string(),
            ),
            Self::InvalidConfig { .. } => Some(
                "Fix .recipe-store.toml or run 'recipe-store init --force' to regenerate it"
                    .to_string(),
            ),
            Self::InvalidFilterValue { expected, .. } => {
                Some(format!("Valid values: {}", expected.join(", ")))
            }
            Self::RecipeNotFound { .. } => {
                Some("Run 'recipe-store list <FILE>' to see available recipe ids".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CatalogNotFound { .. } => 66,    // EX_NOINPUT
            Self::InvalidCatalog { .. } => 65,     // EX_DATAERR
            Self::InvalidConfig { .. } => 78,      // EX_CONFIG
            Self::InvalidFilterValue { .. } => 64, // EX_USAGE
            Self::RecipeNotFound { .. } => 65,     // EX_DATAERR
            Self::Io { .. } => 74,                 // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion when one exists
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::store_error(error).and_then(RecipeStoreError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::store_error(error).map_or(1, RecipeStoreError::exit_code)
    }

    // Commands wrap store errors in context, so search the whole chain.
    fn store_error(error: &anyhow::Error) -> Option<&RecipeStoreError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<RecipeStoreError>())
    }
}
