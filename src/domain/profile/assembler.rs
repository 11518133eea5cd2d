//! Profile Assembler - merges quantitative results with optional
//! qualitative data into a [`BehavioralProfile`].

use super::payload::QualitativePayload;
use super::record::{
    BehavioralProfile, ProfileMetadata, QualitativeProfile, QuantitativeMetrics, Recommendations,
};
use crate::domain::analysis::QuantitativeAnalysis;
use crate::domain::foundation::Timestamp;
use crate::domain::scoring::RiskProfile;

/// Narrative used when no qualitative payload was supplied.
pub const PLACEHOLDER_NARRATIVE: &str = "Qualitative analysis not available. \
Provide a qualitative payload (for example by analyzing the corpus with a text-generation \
service and saving the JSON response as output/llm_qualitative.json) and re-run.";

/// Rounds to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileAssembler;

impl ProfileAssembler {
    /// Builds the profile stamped with the current time.
    pub fn assemble(
        analysis: &QuantitativeAnalysis,
        source_files: Vec<String>,
        payload: Option<QualitativePayload>,
    ) -> BehavioralProfile {
        Self::assemble_at(analysis, source_files, payload, Timestamp::now())
    }

    pub fn assemble_at(
        analysis: &QuantitativeAnalysis,
        source_files: Vec<String>,
        payload: Option<QualitativePayload>,
        created_at: Timestamp,
    ) -> BehavioralProfile {
        let computed_label = analysis.label.as_str().to_string();
        let llm_used = payload.is_some();

        let (qualitative, recommendations) = match payload {
            Some(payload) => (
                QualitativeProfile {
                    risk_tolerance_label: payload.risk_tolerance_label.unwrap_or(computed_label),
                    traits: payload.traits,
                    biases: payload.biases,
                    narrative: payload.narrative,
                },
                payload.recommendations,
            ),
            None => (
                QualitativeProfile {
                    risk_tolerance_label: computed_label,
                    traits: Vec::new(),
                    biases: Vec::new(),
                    narrative: PLACEHOLDER_NARRATIVE.to_string(),
                },
                Recommendations::default(),
            ),
        };

        BehavioralProfile {
            metadata: ProfileMetadata {
                created_at,
                source_files,
                llm_used,
            },
            quantitative: Self::quantitative(analysis),
            qualitative,
            recommendations,
        }
    }

    fn quantitative(analysis: &QuantitativeAnalysis) -> QuantitativeMetrics {
        let scores = &analysis.risk_profile;
        QuantitativeMetrics {
            word_count: analysis.stats.word_count,
            sentence_count: analysis.stats.sentence_count,
            avg_sentence_length: round_to(analysis.stats.avg_sentence_length, 2),
            mentions: analysis.counts.as_map().clone(),
            sentiment: round_to(analysis.sentiment, 3),
            keyword_rates_per_1000: analysis
                .rates
                .iter()
                .map(|(category, rate)| (category.to_string(), round_to(rate, 2)))
                .collect(),
            scores: RiskProfile {
                growth_focus: round_to(scores.growth_focus, 3),
                safety_focus: round_to(scores.safety_focus, 3),
                momentum_bias: round_to(scores.momentum_bias, 3),
                volatility_tolerance: round_to(scores.volatility_tolerance, 3),
                emotional_intensity: round_to(scores.emotional_intensity, 3),
                risk_tolerance: round_to(scores.risk_tolerance, 3),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisConfig, QuantitativeAnalyzer};
    use crate::domain::scoring::RiskLabel;
    use crate::domain::sentiment::SentimentEstimator;
    use serde_json::json;

    fn analysis() -> QuantitativeAnalysis {
        QuantitativeAnalyzer::with_sentiment(
            &AnalysisConfig::default(),
            SentimentEstimator::lexicon_only(),
        )
        .unwrap()
        .analyze(
            "I am bullish and confident. Buy the dip, hold through volatility. \
             Dividend income is nice but growth is better.",
        )
        .unwrap()
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(2.346, 2), 2.35);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn without_payload_uses_placeholder() {
        let analysis = analysis();
        let profile = ProfileAssembler::assemble(&analysis, vec!["a.txt".into()], None);

        assert!(!profile.metadata.llm_used);
        assert_eq!(profile.metadata.source_files, vec!["a.txt"]);
        assert_eq!(profile.qualitative.narrative, PLACEHOLDER_NARRATIVE);
        assert_eq!(profile.qualitative.risk_tolerance_label, analysis.label.as_str());
        assert!(profile.qualitative.traits.is_empty());
        assert!(profile.qualitative.biases.is_empty());
        assert_eq!(profile.recommendations, Recommendations::default());
    }

    #[test]
    fn payload_is_merged() {
        let payload = QualitativePayload::from_value(&json!({
            "risk_tolerance_label": "Aggressive",
            "traits": ["bold"],
            "narrative": "Likes risk.",
            "recommendations": {"portfolio_modifier": "increase_equity"}
        }));
        let profile = ProfileAssembler::assemble(&analysis(), vec![], Some(payload));

        assert!(profile.metadata.llm_used);
        assert_eq!(profile.qualitative.risk_tolerance_label, "Aggressive");
        assert_eq!(profile.qualitative.traits, vec!["bold"]);
        assert_eq!(profile.qualitative.narrative, "Likes risk.");
        assert_eq!(profile.recommendations.portfolio_modifier, "increase_equity");
    }

    #[test]
    fn payload_without_label_keeps_computed_label() {
        let analysis = analysis();
        let payload = QualitativePayload::from_value(&json!({"traits": ["patient"]}));
        let profile = ProfileAssembler::assemble(&analysis, vec![], Some(payload));
        assert_eq!(profile.qualitative.risk_tolerance_label, analysis.label.as_str());
        assert!(RiskLabel::parse_label(&profile.qualitative.risk_tolerance_label).is_some());
    }

    #[test]
    fn quantitative_block_is_rounded() {
        let analysis = analysis();
        let profile = ProfileAssembler::assemble(&analysis, vec![], None);
        let q = &profile.quantitative;

        assert_eq!(q.word_count, analysis.stats.word_count);
        assert_eq!(q.sentiment, round_to(analysis.sentiment, 3));
        for (category, rate) in &q.keyword_rates_per_1000 {
            assert_eq!(*rate, round_to(analysis.rates.get(category), 2));
        }
        assert_eq!(q.scores.risk_tolerance, round_to(analysis.risk_profile.risk_tolerance, 3));
        assert_eq!(q.mentions.get("momentum").copied(), Some(analysis.counts.get("momentum")));
    }

    #[test]
    fn serialized_field_names_are_stable() {
        let created_at = Timestamp::from_unix_secs(1705276800);
        let profile = ProfileAssembler::assemble_at(&analysis(), vec!["x.txt".into()], None, created_at);
        let value = serde_json::to_value(&profile).unwrap();

        let created = value["metadata"]["created_at"].as_str().unwrap();
        assert!(created.starts_with("2024-01-15T00:00:00"));
        assert_eq!(value["metadata"]["llm_used"], false);
        for key in [
            "word_count",
            "sentence_count",
            "avg_sentence_length",
            "mentions",
            "sentiment",
            "keyword_rates_per_1000",
            "scores",
        ] {
            assert!(value["quantitative"].get(key).is_some(), "missing {}", key);
        }
        for key in [
            "growth_focus",
            "safety_focus",
            "momentum_bias",
            "volatility_tolerance",
            "emotional_intensity",
            "risk_tolerance",
        ] {
            assert!(value["quantitative"]["scores"].get(key).is_some(), "missing {}", key);
        }
        assert!(value["qualitative"]["traits"].is_array());
        assert!(value["recommendations"]["sector_pref"].is_array());
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = ProfileAssembler::assemble(&analysis(), vec!["a.txt".into()], None);
        let json = serde_json::to_string(&profile).unwrap();
        let back: BehavioralProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
