//! Quantitative Analyzer - text to counts, scores, risk and label.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::config::AnalysisConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::{
    KeywordRates, NormalizedScores, RateNormalizer, RiskLabel, RiskProfile, RiskScorer,
};
use crate::domain::sentiment::SentimentEstimator;
use crate::domain::text::{
    extract_named_entities, LexiconMatcher, RawCounts, SentenceEstimator, TextStats,
};

/// Full-precision quantitative result for one corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantitativeAnalysis {
    pub stats: TextStats,
    pub counts: RawCounts,
    pub rates: KeywordRates,
    pub scores: NormalizedScores,
    pub sentiment: f64,
    pub risk_profile: RiskProfile,
    pub label: RiskLabel,
    /// Capitalized phrases, at most 20. Informational only.
    pub entities: Vec<String>,
}

/// Runs the quantitative pipeline with one fixed configuration.
///
/// Holds no mutable state; one analyzer can serve any number of texts.
#[derive(Debug, Clone)]
pub struct QuantitativeAnalyzer {
    matcher: Arc<LexiconMatcher>,
    normalizer: RateNormalizer,
    scorer: RiskScorer,
    sentiment: SentimentEstimator,
}

impl QuantitativeAnalyzer {
    /// Validates `config` and compiles the keyword patterns.
    ///
    /// Uses every sentiment provider compiled into this build.
    pub fn new(config: &AnalysisConfig) -> Result<Self, DomainError> {
        Self::with_sentiment(config, SentimentEstimator::default())
    }

    pub fn with_sentiment(
        config: &AnalysisConfig,
        sentiment: SentimentEstimator,
    ) -> Result<Self, DomainError> {
        config.validate().map_err(|e| {
            DomainError::new(ErrorCode::InvalidConfiguration, e.to_string())
        })?;

        Ok(Self {
            matcher: Arc::new(LexiconMatcher::new(&config.keywords)?),
            normalizer: RateNormalizer::new(config.thresholds.clone()),
            scorer: RiskScorer::new(config.weights.clone()),
            sentiment,
        })
    }

    /// Analyzes the concatenated corpus.
    ///
    /// # Errors
    ///
    /// `ErrorCode::NoData` when the text contains no words.
    pub fn analyze(&self, text: &str) -> Result<QuantitativeAnalysis, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::no_data("No text content to analyze"));
        }

        let stats = SentenceEstimator::estimate(text);
        if stats.word_count == 0 {
            return Err(DomainError::no_data("Text contains no words")
                .with_detail("chars", text.chars().count().to_string()));
        }

        let counts = self.matcher.count(text);
        let (rates, scores) = self.normalizer.normalize(&counts, stats.word_count);
        let sentiment = self.sentiment.estimate(text);
        let risk_profile = self.scorer.profile(&scores, sentiment);
        let label = RiskLabel::from_score(risk_profile.risk_tolerance);
        let entities = extract_named_entities(text);

        debug!(?counts, ?rates, "Keyword statistics");
        info!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            sentiment,
            risk = risk_profile.risk_tolerance,
            label = %label,
            "Quantitative analysis complete"
        );

        Ok(QuantitativeAnalysis {
            stats,
            counts,
            rates,
            scores,
            sentiment,
            risk_profile,
            label,
            entities,
        })
    }
}
