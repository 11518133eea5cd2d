//! Risk weights and the two shipped presets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{GROWTH, MOMENTUM, SAFETY, VOLATILITY};
use crate::domain::foundation::ValidationError;

/// Named weight sets.
///
/// `Balanced` is tuned toward moderate outputs; `Boosted` adds a growth term
/// and a baseline that push scores toward the aggressive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPreset {
    #[default]
    Balanced,
    Boosted,
}

impl WeightPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightPreset::Balanced => "balanced",
            WeightPreset::Boosted => "boosted",
        }
    }
}

impl fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Ok(WeightPreset::Balanced),
            "boosted" => Ok(WeightPreset::Boosted),
            other => Err(ValidationError::invalid_format(
                "weight_preset",
                format!("unknown preset '{}', expected 'balanced' or 'boosted'", other),
            )),
        }
    }
}

/// Coefficients of the linear risk model.
///
/// `risk = clamp(baseline + Σ category_weight · score + sentiment · s, 0, 1)`.
/// Categories without a weight contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    #[serde(default)]
    pub category_weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub sentiment: f64,
    #[serde(default)]
    pub baseline: f64,
}

impl RiskWeights {
    /// momentum 0.5, sentiment 0.3, volatility 0.2, safety -0.1.
    pub fn balanced() -> Self {
        Self {
            category_weights: BTreeMap::from([
                (MOMENTUM.to_string(), 0.5),
                (VOLATILITY.to_string(), 0.2),
                (SAFETY.to_string(), -0.1),
            ]),
            sentiment: 0.3,
            baseline: 0.0,
        }
    }

    /// growth 0.45, momentum 0.40, sentiment 0.30, safety -0.18, baseline 0.30.
    pub fn boosted() -> Self {
        Self {
            category_weights: BTreeMap::from([
                (GROWTH.to_string(), 0.45),
                (MOMENTUM.to_string(), 0.40),
                (SAFETY.to_string(), -0.18),
            ]),
            sentiment: 0.30,
            baseline: 0.30,
        }
    }

    pub fn from_preset(preset: WeightPreset) -> Self {
        match preset {
            WeightPreset::Balanced => Self::balanced(),
            WeightPreset::Boosted => Self::boosted(),
        }
    }

    pub fn with_category_weight(mut self, category: impl Into<String>, weight: f64) -> Self {
        self.category_weights.insert(category.into(), weight);
        self
    }

    pub fn weight(&self, category: &str) -> f64 {
        self.category_weights.get(category).copied().unwrap_or(0.0)
    }

    /// Every coefficient must be finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.sentiment.is_finite() {
            return Err(ValidationError::not_finite("weights.sentiment", self.sentiment));
        }
        if !self.baseline.is_finite() {
            return Err(ValidationError::not_finite("weights.baseline", self.baseline));
        }
        for (category, weight) in &self.category_weights {
            if !weight.is_finite() {
                return Err(ValidationError::not_finite(
                    format!("weights.category_weights.{}", category),
                    *weight,
                ));
            }
        }
        Ok(())
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self::balanced()
    }
}
