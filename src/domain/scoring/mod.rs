//! Scoring module - keyword rates to bounded scores, risk tolerance and label.

mod label;
mod normalizer;
mod scorer;
mod weights;

pub use label::RiskLabel;
pub use normalizer::{
    normalize, CategoryThresholds, KeywordRates, NormalizedScores, RateNormalizer,
    DEFAULT_THRESHOLDS, DEGENERATE_SCORE, FALLBACK_THRESHOLD,
};
pub use scorer::{RiskProfile, RiskScorer};
pub use weights::{RiskWeights, WeightPreset};

pub const GROWTH: &str = "growth";
pub const SAFETY: &str = "safety";
pub const MOMENTUM: &str = "momentum";
pub const VOLATILITY: &str = "volatility";
pub const EMOTIONAL: &str = "emotional";
