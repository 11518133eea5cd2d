//! RunAnalysisHandler - Command handler for one end-to-end analysis run.
//!
//! Steps: load corpus, quantitative analysis, optional enrichment, assemble,
//! persist. Only the corpus, the analysis and the save can fail the run.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::domain::analysis::QuantitativeAnalyzer;
use crate::domain::foundation::DomainError;
use crate::domain::profile::{BehavioralProfile, ProfileAssembler, QualitativePayload};
use crate::ports::{CorpusSource, EnrichmentError, ProfileStore, QualitativeEnrichmentProvider};

/// Default upper bound on a single enrichment attempt.
pub const DEFAULT_ENRICHMENT_TIMEOUT: Duration = Duration::from_secs(180);

/// Command to run the analysis.
#[derive(Debug, Clone, Default)]
pub struct RunAnalysisCommand {
    /// Skip every enrichment provider for this run.
    pub skip_enrichment: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub profile: BehavioralProfile,
    pub output_path: PathBuf,
    /// Provider whose payload was merged, if any.
    pub enrichment_source: Option<&'static str>,
}

/// Handler for analysis runs.
pub struct RunAnalysisHandler {
    corpus_source: Arc<dyn CorpusSource>,
    analyzer: Arc<QuantitativeAnalyzer>,
    enrichment_providers: Vec<Arc<dyn QualitativeEnrichmentProvider>>,
    profile_store: Arc<dyn ProfileStore>,
    enrichment_timeout: Duration,
}

impl RunAnalysisHandler {
    pub fn new(
        corpus_source: Arc<dyn CorpusSource>,
        analyzer: Arc<QuantitativeAnalyzer>,
        profile_store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            corpus_source,
            analyzer,
            enrichment_providers: Vec::new(),
            profile_store,
            enrichment_timeout: DEFAULT_ENRICHMENT_TIMEOUT,
        }
    }

    /// Appends an enrichment provider. Providers are tried in insertion order.
    pub fn with_enrichment(mut self, provider: Arc<dyn QualitativeEnrichmentProvider>) -> Self {
        self.enrichment_providers.push(provider);
        self
    }

    pub fn with_enrichment_timeout(mut self, timeout: Duration) -> Self {
        self.enrichment_timeout = timeout;
        self
    }

    pub fn enrichment_provider_names(&self) -> Vec<&'static str> {
        self.enrichment_providers.iter().map(|p| p.name()).collect()
    }

    pub async fn handle(&self, cmd: RunAnalysisCommand) -> Result<RunAnalysisResult, DomainError> {
        // 1. Load corpus
        let corpus = self.corpus_source.load().await?;
        info!(files = corpus.source_files.len(), "Corpus loaded");

        // 2. Quantitative analysis
        let analysis = self.analyzer.analyze(&corpus.text).map_err(|e| {
            error!(error = %e, "Quantitative analysis failed");
            e
        })?;

        // 3. Optional enrichment
        let enrichment = if cmd.skip_enrichment {
            debug!("Enrichment skipped for this run");
            None
        } else {
            self.enrich(&corpus.text).await
        };
        let enrichment_source = enrichment.as_ref().map(|(name, _)| *name);

        // 4. Assemble
        let profile = ProfileAssembler::assemble(
            &analysis,
            corpus.source_files,
            enrichment.map(|(_, payload)| payload),
        );

        // 5. Persist
        let output_path = self.profile_store.save(&profile).await?;
        info!(
            path = %output_path.display(),
            label = %profile.qualitative.risk_tolerance_label,
            llm_used = profile.metadata.llm_used,
            "Behavioral profile written"
        );

        Ok(RunAnalysisResult {
            profile,
            output_path,
            enrichment_source,
        })
    }

    /// First successful payload from the provider chain.
    async fn enrich(&self, corpus: &str) -> Option<(&'static str, QualitativePayload)> {
        for provider in &self.enrichment_providers {
            let name = provider.name();
            if !provider.is_available().await {
                debug!(provider = name, "Enrichment provider not available");
                continue;
            }

            match self.attempt(provider.as_ref(), corpus).await {
                Ok(payload) => {
                    info!(provider = name, "Qualitative payload merged");
                    return Some((name, payload));
                }
                Err(e) => {
                    let err = DomainError::from(e).with_detail("provider", name);
                    warn!(provider = name, code = %err.code, error = %err, "Enrichment failed, continuing without it");
                }
            }
        }
        None
    }

    async fn attempt(
        &self,
        provider: &dyn QualitativeEnrichmentProvider,
        corpus: &str,
    ) -> Result<QualitativePayload, EnrichmentError> {
        tokio::time::timeout(self.enrichment_timeout, provider.enrich(corpus))
            .await
            .map_err(|_| EnrichmentError::Timeout {
                timeout_secs: self.enrichment_timeout.as_secs(),
            })?
    }
}
