//! Configuration file data structures

use serde::{Deserialize, Serialize};

use crate::error::RecipeStoreError;
use crate::scoring::ScoreWeights;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".recipe-store.toml";

/// recipe-store configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// How many recommendations to produce and how to break ties
    pub recommendations: RecommendationSettings,

    /// Scoring weights per preference facet
    pub weights: ScoreWeights,
}

/// Recommendation list settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RecommendationSettings {
    /// Maximum recommendations once favorites exist
    pub max_results: usize,

    /// Recipes shown before any favorite has been picked
    pub cold_start_count: usize,

    /// Exclusive upper bound of the random tie-break added to scores
    pub jitter_max: f64,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            max_results: 6,
            cold_start_count: 4,
            jitter_max: 0.5,
        }
    }
}

impl ConfigFile {
    /// Validate that every setting is usable
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_store::config::ConfigFile;
    ///
    /// let mut config = ConfigFile::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.recommendations.max_results = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), RecipeStoreError> {
        let invalid = |reason: String| Err(RecipeStoreError::InvalidConfig { reason });

        if self.recommendations.max_results == 0 {
            return invalid("max-results must be at least 1".to_string());
        }

        let jitter = self.recommendations.jitter_max;
        if !jitter.is_finite() || jitter < 0.0 {
            return invalid(format!(
                "jitter-max must be a non-negative number, got {}",
                jitter
            ));
        }

        for (name, value) in self.weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!(
                    "weight '{}' must be a non-negative number, got {}",
                    name, value
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_documented_values() {
        let config = ConfigFile::default();
        assert_eq!(config.recommendations.max_results, 6);
        assert_eq!(config.recommendations.cold_start_count, 4);
        assert_eq!(config.recommendations.jitter_max, 0.5);
        assert_eq!(config.weights, ScoreWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cold_start_count_of_zero_is_allowed() {
        let mut config = ConfigFile::default();
        config.recommendations.cold_start_count = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_jitter_is_rejected() {
        let mut config = ConfigFile::default();
        config.recommendations.jitter_max = -0.1;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jitter-max"));
    }

    #[test]
    fn test_non_finite_weight_is_rejected() {
        let mut config = ConfigFile::default();
        config.weights.time_bucket = f64::NAN;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("time-bucket"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConfigFile = toml_edit::de::from_str(
            r#"
[recommendations]
max-results = 3
"#,
        )
        .unwrap();

        assert_eq!(config.recommendations.max_results, 3);
        assert_eq!(config.recommendations.cold_start_count, 4);
        assert_eq!(config.weights.category, 3.0);
    }
}
