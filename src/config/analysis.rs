//! Scoring configuration: weight preset and overrides

use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::ValidationError;
use crate::domain::analysis::AnalysisConfig;
use crate::domain::scoring::{CategoryThresholds, RiskWeights, WeightPreset};
use crate::domain::text::KeywordCategories;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnalysisSettings {
    /// Named weight set used unless `weights` is given
    #[serde(default)]
    pub weight_preset: WeightPreset,

    /// Full weight override
    #[serde(default)]
    pub weights: Option<RiskWeights>,

    /// Per-category threshold overrides, merged over the defaults
    #[serde(default)]
    pub thresholds: BTreeMap<String, f64>,

    /// Replacement keyword categories
    #[serde(default)]
    pub keywords: Option<BTreeMap<String, Vec<String>>>,
}

impl AnalysisSettings {
    /// Builds the domain configuration for one analyzer.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        let weights = self
            .weights
            .clone()
            .unwrap_or_else(|| RiskWeights::from_preset(self.weight_preset));
        let keywords = self
            .keywords
            .clone()
            .map(KeywordCategories::from)
            .unwrap_or_default();

        AnalysisConfig::default()
            .with_keywords(keywords)
            .with_thresholds(CategoryThresholds::default().merged(&self.thresholds))
            .with_weights(weights)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_analysis_config().validate()?;
        Ok(())
    }
}
