//! Label Mapper - five ordered risk-tolerance labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk-tolerance label, ordered from least to most risk-seeking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "Conservative")]
    Conservative,
    #[serde(rename = "Moderately Conservative")]
    ModeratelyConservative,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Moderately Aggressive")]
    ModeratelyAggressive,
    #[serde(rename = "Aggressive")]
    Aggressive,
}

impl RiskLabel {
    pub const ALL: [RiskLabel; 5] = [
        RiskLabel::Conservative,
        RiskLabel::ModeratelyConservative,
        RiskLabel::Moderate,
        RiskLabel::ModeratelyAggressive,
        RiskLabel::Aggressive,
    ];

    /// Maps a risk score via half-open buckets of width 0.2.
    ///
    /// - `[0.0, 0.2)` Conservative
    /// - `[0.2, 0.4)` Moderately Conservative
    /// - `[0.4, 0.6)` Moderate
    /// - `[0.6, 0.8)` Moderately Aggressive
    /// - `[0.8, 1.0]` Aggressive
    ///
    /// Out-of-range inputs land in the nearest end bucket; NaN is Conservative.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() || score < 0.2 {
            Self::Conservative
        } else if score < 0.4 {
            Self::ModeratelyConservative
        } else if score < 0.6 {
            Self::Moderate
        } else if score < 0.8 {
            Self::ModeratelyAggressive
        } else {
            Self::Aggressive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::ModeratelyConservative => "Moderately Conservative",
            Self::Moderate => "Moderate",
            Self::ModeratelyAggressive => "Moderately Aggressive",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Parses a display label, ignoring case and surrounding whitespace.
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
