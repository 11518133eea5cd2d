//! VADER-backed sentiment, enabled with the `vader` cargo feature.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::provider::{polarity_to_unit, SentimentProvider};

/// Maps VADER's compound score from `[-1, 1]` onto `[0, 1]`.
pub struct VaderSentiment {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSentiment {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderSentiment").finish_non_exhaustive()
    }
}

impl SentimentProvider for VaderSentiment {
    fn name(&self) -> &'static str {
        "vader"
    }

    fn score(&self, text: &str) -> Option<f64> {
        if text.trim().is_empty() {
            return None;
        }
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied()?;
        if !compound.is_finite() {
            return None;
        }
        Some(polarity_to_unit(compound))
    }
}
