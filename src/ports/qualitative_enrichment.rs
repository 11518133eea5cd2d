//! Qualitative Enrichment Port - optional narrative/trait/bias data.
//!
//! Two kinds of implementation exist: a drop-in file written by a person,
//! and a live call to a text-generation service. The handler tries them in
//! order; any failure is logged and the profile is produced without them.

use async_trait::async_trait;

use super::ai_provider::AIError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::QualitativePayload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    /// The provider has nothing to offer for this run.
    #[error("enrichment unavailable: {0}")]
    Unavailable(String),

    #[error("enrichment I/O error: {0}")]
    Io(String),

    /// The payload could not be read as JSON.
    #[error("enrichment payload is not valid JSON: {0}")]
    Parse(String),

    #[error("text-generation provider failed: {0}")]
    Provider(#[from] AIError),

    #[error("enrichment timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl From<EnrichmentError> for DomainError {
    fn from(err: EnrichmentError) -> Self {
        DomainError::new(ErrorCode::EnrichmentFailed, err.to_string())
    }
}

/// Source of externally produced qualitative data.
#[async_trait]
pub trait QualitativeEnrichmentProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Whether the provider can be attempted at all (cheap check).
    async fn is_available(&self) -> bool;

    /// Produce a payload for `corpus`.
    async fn enrich(&self, corpus: &str) -> Result<QualitativePayload, EnrichmentError>;
}
