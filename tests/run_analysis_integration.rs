//! Handler runs against the filesystem adapters and a mock text-generation service.

use std::path::Path;
use std::sync::Arc;

use behavioral_risk::adapters::{
    FsCorpusSource, FsProfileStore, LlmEnrichment, LlmPromptSettings, ManualFileEnrichment,
    MockAIProvider,
};
use behavioral_risk::application::{RunAnalysisCommand, RunAnalysisHandler};
use behavioral_risk::domain::analysis::{AnalysisConfig, QuantitativeAnalyzer};
use behavioral_risk::domain::foundation::ErrorCode;
use behavioral_risk::domain::profile::PLACEHOLDER_NARRATIVE;
use behavioral_risk::domain::sentiment::SentimentEstimator;
use behavioral_risk::ports::{AIError, ProfileStore};
use tempfile::TempDir;

const LLM_REPLY: &str = r#"Here is the analysis:
```json
{
  "risk_tolerance_label": "Moderately Aggressive",
  "traits": ["decisive", "curious"],
  "biases": ["overconfidence"],
  "narrative": "Leans into momentum while keeping an eye on income.",
  "recommendations": {
    "portfolio_modifier": "tilt_growth",
    "sector_pref": ["Technology"],
    "notes": "Cap single positions."
  },
  "evidence": ["went all-in"]
}
```"#;

struct Workspace {
    _dir: TempDir,
    input: std::path::PathBuf,
    output: std::path::PathBuf,
    manual: std::path::PathBuf,
}

fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("behavioral_data");
    std::fs::create_dir(&input).unwrap();
    std::fs::write(
        input.join("01_journal.txt"),
        "I went all-in on a hypergrowth name. Feeling bullish and excited about the rally.",
    )
    .unwrap();
    std::fs::write(
        input.join("02_call.txt"),
        "Still, dividend income keeps me steady when the market gets volatile.",
    )
    .unwrap();
    std::fs::write(input.join("readme.md"), "not part of the corpus").unwrap();

    Workspace {
        output: dir.path().join("output").join("behavioral_profile.json"),
        manual: dir.path().join("output").join("llm_qualitative.json"),
        input,
        _dir: dir,
    }
}

fn handler(ws: &Workspace, input: &Path) -> RunAnalysisHandler {
    let analyzer = QuantitativeAnalyzer::with_sentiment(
        &AnalysisConfig::default(),
        SentimentEstimator::lexicon_only(),
    )
    .unwrap();
    RunAnalysisHandler::new(
        Arc::new(FsCorpusSource::new(input)),
        Arc::new(analyzer),
        Arc::new(FsProfileStore::new(&ws.output)),
    )
    .with_enrichment(Arc::new(ManualFileEnrichment::new(ws.manual.clone())))
}

fn llm(mock: &MockAIProvider) -> Arc<LlmEnrichment> {
    Arc::new(LlmEnrichment::new(
        Arc::new(mock.clone()),
        LlmPromptSettings::default(),
    ))
}

#[tokio::test]
async fn run_without_enrichment_writes_placeholder_profile() {
    let ws = workspace();

    let result = handler(&ws, &ws.input)
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert_eq!(result.output_path, ws.output);
    assert_eq!(
        result.profile.metadata.source_files,
        vec!["01_journal.txt", "02_call.txt"]
    );
    assert!(!result.profile.metadata.llm_used);
    assert_eq!(result.profile.qualitative.narrative, PLACEHOLDER_NARRATIVE);

    let saved = FsProfileStore::new(&ws.output).load().await.unwrap();
    assert_eq!(saved, result.profile);
}

#[tokio::test]
async fn llm_payload_is_merged() {
    let ws = workspace();
    let mock = MockAIProvider::new().with_response(LLM_REPLY);

    let result = handler(&ws, &ws.input)
        .with_enrichment(llm(&mock))
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert_eq!(mock.call_count(), 1);
    assert_eq!(result.enrichment_source, Some("llm"));
    let profile = &result.profile;
    assert!(profile.metadata.llm_used);
    assert_eq!(profile.qualitative.risk_tolerance_label, "Moderately Aggressive");
    assert_eq!(profile.qualitative.traits, vec!["decisive", "curious"]);
    assert_eq!(profile.recommendations.sector_pref, vec!["Technology"]);

    let prompt = &mock.get_calls()[0].messages[0].content;
    assert!(prompt.contains("hypergrowth"));
    assert!(prompt.contains("dividend income"));
}

#[tokio::test]
async fn manual_file_takes_precedence_over_llm() {
    let ws = workspace();
    std::fs::create_dir_all(ws.manual.parent().unwrap()).unwrap();
    std::fs::write(
        &ws.manual,
        r#"{"risk_tolerance_label": "Moderate", "narrative": "Written by hand."}"#,
    )
    .unwrap();
    let mock = MockAIProvider::new().with_response(LLM_REPLY);

    let result = handler(&ws, &ws.input)
        .with_enrichment(llm(&mock))
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert_eq!(mock.call_count(), 0);
    assert_eq!(result.enrichment_source, Some("manual_file"));
    assert_eq!(result.profile.qualitative.narrative, "Written by hand.");
    assert_eq!(result.profile.qualitative.risk_tolerance_label, "Moderate");
}

#[tokio::test]
async fn non_object_manual_file_is_ignored() {
    let ws = workspace();
    std::fs::create_dir_all(ws.manual.parent().unwrap()).unwrap();
    std::fs::write(&ws.manual, r#"["not", "an", "object"]"#).unwrap();

    let result = handler(&ws, &ws.input)
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert_eq!(result.enrichment_source, None);
    assert!(!result.profile.metadata.llm_used);
    assert_eq!(result.profile.qualitative.narrative, PLACEHOLDER_NARRATIVE);
}

#[tokio::test]
async fn non_object_manual_file_falls_through_to_llm() {
    let ws = workspace();
    std::fs::create_dir_all(ws.manual.parent().unwrap()).unwrap();
    std::fs::write(&ws.manual, "null").unwrap();
    let mock = MockAIProvider::new().with_response(LLM_REPLY);

    let result = handler(&ws, &ws.input)
        .with_enrichment(llm(&mock))
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert_eq!(mock.call_count(), 1);
    assert_eq!(result.enrichment_source, Some("llm"));
    assert!(result.profile.metadata.llm_used);
}

#[tokio::test]
async fn llm_failure_falls_back_to_quantitative_profile() {
    let ws = workspace();
    let mock = MockAIProvider::new().with_error(AIError::AuthenticationFailed);

    let result = handler(&ws, &ws.input)
        .with_enrichment(llm(&mock))
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert_eq!(mock.call_count(), 1);
    assert!(!result.profile.metadata.llm_used);
    assert_eq!(result.profile.qualitative.narrative, PLACEHOLDER_NARRATIVE);
    assert!(ws.output.exists());
}

#[tokio::test]
async fn unparseable_llm_reply_is_not_fatal() {
    let ws = workspace();
    let mock = MockAIProvider::new().with_response("I cannot help with that.");

    let result = handler(&ws, &ws.input)
        .with_enrichment(llm(&mock))
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap();

    assert!(!result.profile.metadata.llm_used);
}

#[tokio::test]
async fn missing_input_directory_is_no_data() {
    let ws = workspace();

    let err = handler(&ws, &ws.input.join("absent"))
        .handle(RunAnalysisCommand::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NoData);
    assert!(!ws.output.exists());
}
