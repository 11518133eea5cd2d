//! Per-run analysis configuration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::{CategoryThresholds, RiskWeights, WeightPreset};
use crate::domain::text::KeywordCategories;

/// Everything the quantitative pipeline needs besides the text itself.
///
/// Passed explicitly into each analyzer so analyses with different settings
/// never share state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub keywords: KeywordCategories,
    #[serde(default)]
    pub thresholds: CategoryThresholds,
    #[serde(default)]
    pub weights: RiskWeights,
}

impl AnalysisConfig {
    /// Default keywords and thresholds with a named weight preset.
    pub fn with_preset(preset: WeightPreset) -> Self {
        Self {
            weights: RiskWeights::from_preset(preset),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: KeywordCategories) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_thresholds(mut self, thresholds: CategoryThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_weights(mut self, weights: RiskWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Rejects non-finite weights and NaN thresholds.
    ///
    /// Zero or negative thresholds are allowed; they score 0.5.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        for (category, threshold) in self.thresholds.iter() {
            let field = format!("thresholds.{}", category);
            if threshold.is_nan() {
                return Err(ValidationError::not_finite(field, threshold));
            }
        }
        Ok(())
    }
}
