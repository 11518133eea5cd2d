use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use behavioral_risk::adapters::{
    FsCorpusSource, FsProfileStore, LlmEnrichment, LlmPromptSettings, ManualFileEnrichment,
    OpenAIConfig, OpenAIProvider,
};
use behavioral_risk::application::{RunAnalysisCommand, RunAnalysisHandler};
use behavioral_risk::config::{AppConfig, EnrichmentConfig, LoggingConfig};
use behavioral_risk::domain::analysis::QuantitativeAnalyzer;
use behavioral_risk::domain::scoring::WeightPreset;
use behavioral_risk::domain::sentiment::SentimentEstimator;

#[derive(Parser)]
#[command(
    name = "behavioral-risk",
    version,
    about = "Build a behavioral risk profile from a directory of text files"
)]
struct Cli {
    /// Configuration file (TOML, JSON or YAML).
    #[arg(long, env = "BEHAVIORAL_RISK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory of *.txt files to analyze.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the profile JSON.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable LLM enrichment (needs an OpenAI API key).
    #[arg(long)]
    llm_on: bool,

    /// Weight preset (balanced, boosted).
    #[arg(long)]
    preset: Option<WeightPreset>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    apply_overrides(&mut config, &cli);
    init_tracing(&config.logging);
    config.validate().context("validating configuration")?;

    let sentiment = SentimentEstimator::with_available_providers();
    info!(providers = ?sentiment.provider_names(), "Sentiment providers");
    let analyzer = QuantitativeAnalyzer::with_sentiment(
        &config.analysis.to_analysis_config(),
        sentiment,
    )?;

    let mut handler = RunAnalysisHandler::new(
        Arc::new(FsCorpusSource::new(&config.input.input_dir)),
        Arc::new(analyzer),
        Arc::new(FsProfileStore::new(&config.input.output_file)),
    )
    .with_enrichment(Arc::new(ManualFileEnrichment::new(
        config.enrichment.manual_payload_path.clone(),
    )))
    .with_enrichment_timeout(config.enrichment.attempt_budget());

    if let Some(llm) = build_llm_enrichment(&config.enrichment)? {
        handler = handler.with_enrichment(llm);
    }
    info!(
        input = %config.input.input_dir.display(),
        enrichment = ?handler.enrichment_provider_names(),
        preset = %config.analysis.weight_preset,
        "Starting analysis"
    );

    let result = handler
        .handle(RunAnalysisCommand::default())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Analysis failed");
            e
        })?;

    let profile = &result.profile;
    println!("Profile written to {}", result.output_path.display());
    println!("  risk_tolerance_label: {}", profile.qualitative.risk_tolerance_label);
    println!("  llm_used:             {}", profile.metadata.llm_used);
    println!("  word_count:           {}", profile.quantitative.word_count);
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.input.input_dir = input.clone();
    }
    if let Some(output) = &cli.output {
        config.input.output_file = output.clone();
    }
    if cli.llm_on {
        config.enrichment.llm_enabled = true;
    }
    if let Some(preset) = cli.preset {
        config.analysis.weight_preset = preset;
        config.analysis.weights = None;
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// LLM enrichment, registered only when enabled and a key is configured.
fn build_llm_enrichment(
    config: &EnrichmentConfig,
) -> anyhow::Result<Option<Arc<LlmEnrichment>>> {
    if !config.llm_enabled {
        return Ok(None);
    }
    let Some(api_key) = config.openai_api_key.clone().filter(|_| config.has_api_key()) else {
        warn!("LLM enrichment enabled but no OpenAI API key configured; skipping it");
        return Ok(None);
    };

    let provider = OpenAIProvider::new(
        OpenAIConfig::from_secret(api_key)
            .with_model(&config.model)
            .with_base_url(&config.base_url)
            .with_timeout(config.timeout())
            .with_max_retries(config.max_retries),
    )
    .context("building OpenAI client")?;

    let settings = LlmPromptSettings {
        max_prompt_tokens: config.max_prompt_tokens,
        max_completion_tokens: config.max_completion_tokens,
        temperature: config.temperature,
    };
    Ok(Some(Arc::new(LlmEnrichment::new(Arc::new(provider), settings))))
}
