//! Behavioral profile record - the serialized output contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::RiskProfile;

/// One analysis run's output. Built once, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralProfile {
    pub metadata: ProfileMetadata,
    pub quantitative: QuantitativeMetrics,
    pub qualitative: QualitativeProfile,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub created_at: Timestamp,
    pub source_files: Vec<String>,
    /// True only when an external qualitative payload was merged.
    pub llm_used: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitativeMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    /// Raw keyword counts per category.
    pub mentions: BTreeMap<String, u64>,
    pub sentiment: f64,
    pub keyword_rates_per_1000: BTreeMap<String, f64>,
    pub scores: RiskProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeProfile {
    pub risk_tolerance_label: String,
    pub traits: Vec<String>,
    pub biases: Vec<String>,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub portfolio_modifier: String,
    pub sector_pref: Vec<String>,
    pub notes: String,
}
