//! End-to-end checks of the quantitative pipeline through the public API.

use behavioral_risk::domain::analysis::{AnalysisConfig, QuantitativeAnalyzer};
use behavioral_risk::domain::foundation::{ErrorCode, Timestamp};
use behavioral_risk::domain::profile::{ProfileAssembler, QualitativePayload, PLACEHOLDER_NARRATIVE};
use behavioral_risk::domain::scoring::{
    NormalizedScores, RiskLabel, RiskScorer, RiskWeights, WeightPreset, MOMENTUM, SAFETY,
    VOLATILITY,
};
use behavioral_risk::domain::sentiment::SentimentEstimator;
use behavioral_risk::domain::text::{count_keywords, KeywordCategories};
use serde_json::json;

const AGGRESSIVE_TEXT: &str = "I love this rally and I am bullish. \
    Great momentum, I will ride out every volatile swing.";

const CONSERVATIVE_TEXT: &str = "Dividend income and a stable yield keep me steady. \
    Capital preservation is everything.";

fn analyzer(config: &AnalysisConfig) -> QuantitativeAnalyzer {
    QuantitativeAnalyzer::with_sentiment(config, SentimentEstimator::lexicon_only()).unwrap()
}

#[test]
fn counts_growth_and_safety_mentions() {
    let categories = KeywordCategories::empty()
        .with_category("growth", ["growth", "expansion"])
        .with_category("safety", ["safety"]);
    let counts = count_keywords(
        "Growth and expansion are key. We want rapid growth. Safety is important too.",
        &categories,
    )
    .unwrap();

    assert_eq!(counts.get("growth"), 3);
    assert_eq!(counts.get("safety"), 1);
}

#[test]
fn weighted_example_lands_in_moderate() {
    let scores = NormalizedScores::new()
        .with(MOMENTUM, 0.6)
        .with(VOLATILITY, 0.5)
        .with(SAFETY, 0.2);
    let risk = RiskScorer::new(RiskWeights::balanced()).score(&scores, 0.7);

    assert!((risk - 0.59).abs() < 1e-9);
    assert_eq!(RiskLabel::from_score(risk), RiskLabel::Moderate);
}

#[test]
fn empty_input_signals_no_data() {
    let analyzer = analyzer(&AnalysisConfig::default());
    for text in ["", "   \n\n\t", "--- ... !!!"] {
        let err = analyzer.analyze(text).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoData, "input {:?}", text);
    }
}

#[test]
fn bullish_text_is_aggressive() {
    let analysis = analyzer(&AnalysisConfig::default())
        .analyze(AGGRESSIVE_TEXT)
        .unwrap();

    assert_eq!(analysis.stats.word_count, 17);
    assert_eq!(analysis.sentiment, 1.0);
    assert_eq!(analysis.scores.get(MOMENTUM), 1.0);
    assert!(analysis.risk_profile.risk_tolerance > 0.99);
    assert_eq!(analysis.label, RiskLabel::Aggressive);
}

#[test]
fn defensive_text_is_conservative() {
    let analysis = analyzer(&AnalysisConfig::default())
        .analyze(CONSERVATIVE_TEXT)
        .unwrap();

    assert_eq!(analysis.counts.get(SAFETY), 6);
    assert_eq!(analysis.counts.get(MOMENTUM), 0);
    assert_eq!(analysis.sentiment, 0.5);
    assert!((analysis.risk_profile.risk_tolerance - 0.05).abs() < 1e-9);
    assert_eq!(analysis.label, RiskLabel::Conservative);
}

#[test]
fn boosted_preset_scores_higher_than_balanced() {
    let balanced = analyzer(&AnalysisConfig::with_preset(WeightPreset::Balanced))
        .analyze(CONSERVATIVE_TEXT)
        .unwrap();
    let boosted = analyzer(&AnalysisConfig::with_preset(WeightPreset::Boosted))
        .analyze(CONSERVATIVE_TEXT)
        .unwrap();

    assert!(boosted.risk_profile.risk_tolerance > balanced.risk_profile.risk_tolerance);
    assert_eq!(boosted.counts, balanced.counts);
}

#[test]
fn repeated_analysis_is_identical() {
    let analyzer = analyzer(&AnalysisConfig::default());
    let first = analyzer.analyze(AGGRESSIVE_TEXT).unwrap();
    let second = analyzer.analyze(AGGRESSIVE_TEXT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn profile_serializes_with_stable_field_names() {
    let analysis = analyzer(&AnalysisConfig::default())
        .analyze(AGGRESSIVE_TEXT)
        .unwrap();
    let profile = ProfileAssembler::assemble_at(
        &analysis,
        vec!["journal.txt".to_string()],
        None,
        Timestamp::from_unix_secs(1705276800),
    );
    let value = serde_json::to_value(&profile).unwrap();

    for key in ["created_at", "source_files", "llm_used"] {
        assert!(value["metadata"].get(key).is_some(), "metadata.{}", key);
    }
    for key in [
        "word_count",
        "sentence_count",
        "avg_sentence_length",
        "mentions",
        "sentiment",
        "keyword_rates_per_1000",
        "scores",
    ] {
        assert!(value["quantitative"].get(key).is_some(), "quantitative.{}", key);
    }
    for key in [
        "growth_focus",
        "safety_focus",
        "momentum_bias",
        "volatility_tolerance",
        "emotional_intensity",
        "risk_tolerance",
    ] {
        assert!(value["quantitative"]["scores"].get(key).is_some(), "scores.{}", key);
    }
    assert_eq!(value["qualitative"]["risk_tolerance_label"], "Aggressive");
    assert_eq!(value["qualitative"]["narrative"], PLACEHOLDER_NARRATIVE);
    assert_eq!(value["qualitative"]["traits"], json!([]));
    assert_eq!(value["recommendations"]["sector_pref"], json!([]));
    assert_eq!(value["metadata"]["llm_used"], false);
}

#[test]
fn malformed_payload_is_tolerated() {
    let analysis = analyzer(&AnalysisConfig::default())
        .analyze(CONSERVATIVE_TEXT)
        .unwrap();
    let payload = QualitativePayload::from_value(&json!({
        "traits": "patient",
        "biases": 42,
        "recommendations": "not an object",
        "unexpected": true
    }));

    let profile = ProfileAssembler::assemble(&analysis, Vec::new(), Some(payload));

    assert!(profile.metadata.llm_used);
    assert_eq!(profile.qualitative.risk_tolerance_label, "Conservative");
    assert_eq!(profile.qualitative.traits, vec!["patient"]);
    assert_eq!(profile.recommendations.portfolio_modifier, "");
}
