//! Risk Scorer - weighted linear model over normalized scores and sentiment.

use serde::{Deserialize, Serialize};

use super::normalizer::NormalizedScores;
use super::weights::RiskWeights;
use super::{EMOTIONAL, GROWTH, MOMENTUM, SAFETY, VOLATILITY};

/// Six behavioral dimensions, each in `[0, 1]`.
///
/// `risk_tolerance` is derived by [`RiskScorer`]; the other five mirror the
/// default keyword categories.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskProfile {
    pub growth_focus: f64,
    pub safety_focus: f64,
    pub momentum_bias: f64,
    pub volatility_tolerance: f64,
    pub emotional_intensity: f64,
    pub risk_tolerance: f64,
}

impl RiskProfile {
    pub fn from_scores(scores: &NormalizedScores, risk_tolerance: f64) -> Self {
        Self {
            growth_focus: scores.get(GROWTH),
            safety_focus: scores.get(SAFETY),
            momentum_bias: scores.get(MOMENTUM),
            volatility_tolerance: scores.get(VOLATILITY),
            emotional_intensity: scores.get(EMOTIONAL),
            risk_tolerance,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    weights: RiskWeights,
}

impl RiskScorer {
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    /// Weighted sum before clamping. May fall outside `[0, 1]`.
    pub fn raw_score(&self, scores: &NormalizedScores, sentiment: f64) -> f64 {
        let categories: f64 = self
            .weights
            .category_weights
            .iter()
            .map(|(category, weight)| weight * scores.get(category))
            .sum();
        self.weights.baseline + categories + self.weights.sentiment * sentiment
    }

    /// Risk tolerance in `[0, 1]`. A NaN sum scores 0.
    pub fn score(&self, scores: &NormalizedScores, sentiment: f64) -> f64 {
        let raw = self.raw_score(scores, sentiment);
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    pub fn profile(&self, scores: &NormalizedScores, sentiment: f64) -> RiskProfile {
        RiskProfile::from_scores(scores, self.score(scores, sentiment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::RiskLabel;
    use proptest::prelude::*;

    fn scores(momentum: f64, volatility: f64, safety: f64) -> NormalizedScores {
        NormalizedScores::new()
            .with(MOMENTUM, momentum)
            .with(VOLATILITY, volatility)
            .with(SAFETY, safety)
    }

    #[test]
    fn balanced_weights_worked_example() {
        let scorer = RiskScorer::default();
        let risk = scorer.score(&scores(0.6, 0.5, 0.2), 0.7);
        assert!((risk - 0.59).abs() < 1e-9);
        assert_eq!(RiskLabel::from_score(risk), RiskLabel::Moderate);
    }

    #[test]
    fn negative_sum_clamps_to_zero() {
        let scorer = RiskScorer::default();
        let raw = scorer.raw_score(&scores(0.0, 0.0, 1.0), 0.0);
        assert!(raw < 0.0);
        assert_eq!(scorer.score(&scores(0.0, 0.0, 1.0), 0.0), 0.0);
    }

    #[test]
    fn excessive_sum_clamps_to_one() {
        let scorer = RiskScorer::new(RiskWeights::boosted());
        let all_in = scores(1.0, 1.0, 0.0).with(GROWTH, 1.0);
        assert!(scorer.raw_score(&all_in, 1.0) > 1.0);
        assert_eq!(scorer.score(&all_in, 1.0), 1.0);
    }

    #[test]
    fn absent_categories_contribute_zero() {
        let scorer = RiskScorer::default();
        let risk = scorer.score(&NormalizedScores::new(), 0.5);
        assert!((risk - 0.15).abs() < 1e-12);
    }

    #[test]
    fn unweighted_categories_are_ignored() {
        let scorer = RiskScorer::default();
        let base = scorer.score(&scores(0.4, 0.4, 0.4), 0.5);
        let with_emotion = scorer.score(&scores(0.4, 0.4, 0.4).with(EMOTIONAL, 1.0), 0.5);
        assert_eq!(base, with_emotion);
    }

    #[test]
    fn profile_copies_category_scores() {
        let normalized = scores(0.3, 0.2, 0.1).with(GROWTH, 0.9).with(EMOTIONAL, 0.4);
        let profile = RiskScorer::default().profile(&normalized, 0.5);
        assert_eq!(profile.growth_focus, 0.9);
        assert_eq!(profile.safety_focus, 0.1);
        assert_eq!(profile.momentum_bias, 0.3);
        assert_eq!(profile.volatility_tolerance, 0.2);
        assert_eq!(profile.emotional_intensity, 0.4);
        assert!((0.0..=1.0).contains(&profile.risk_tolerance));
    }

    #[test]
    fn nan_sentiment_scores_zero() {
        assert_eq!(RiskScorer::default().score(&scores(1.0, 1.0, 0.0), f64::NAN), 0.0);
    }

    proptest! {
        #[test]
        fn risk_is_always_bounded(
            momentum in 0.0f64..=1.0,
            volatility in 0.0f64..=1.0,
            safety in 0.0f64..=1.0,
            growth in 0.0f64..=1.0,
            sentiment in 0.0f64..=1.0,
            boosted in any::<bool>(),
        ) {
            let weights = if boosted { RiskWeights::boosted() } else { RiskWeights::balanced() };
            let scorer = RiskScorer::new(weights);
            let normalized = scores(momentum, volatility, safety).with(GROWTH, growth);
            let risk = scorer.score(&normalized, sentiment);
            prop_assert!((0.0..=1.0).contains(&risk));
        }

        #[test]
        fn arbitrary_weights_stay_bounded(
            weight in -10.0f64..10.0,
            baseline in -10.0f64..10.0,
            score in 0.0f64..=1.0,
        ) {
            let scorer = RiskScorer::new(RiskWeights {
                baseline,
                ..RiskWeights::balanced().with_category_weight(MOMENTUM, weight)
            });
            let risk = scorer.score(&scores(score, score, score), score);
            prop_assert!((0.0..=1.0).contains(&risk));
        }
    }
}
