//! Drop-in file enrichment.
//!
//! A person analyzes the corpus with any text-generation service and saves
//! the JSON answer to a known path. If the file exists it is used as-is.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::profile::QualitativePayload;
use crate::ports::{EnrichmentError, QualitativeEnrichmentProvider};

/// Default location of the drop-in payload.
pub const DEFAULT_MANUAL_PAYLOAD_PATH: &str = "output/llm_qualitative.json";

pub struct ManualFileEnrichment {
    path: PathBuf,
}

impl ManualFileEnrichment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QualitativeEnrichmentProvider for ManualFileEnrichment {
    fn name(&self) -> &'static str {
        "manual_file"
    }

    async fn is_available(&self) -> bool {
        let exists = tokio::fs::try_exists(&self.path).await.unwrap_or(false);
        debug!(path = %self.path.display(), exists, "Checked for manual qualitative payload");
        exists
    }

    async fn enrich(&self, _corpus: &str) -> Result<QualitativePayload, EnrichmentError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnrichmentError::Unavailable(format!("{} does not exist", self.path.display()))
            } else {
                EnrichmentError::Io(format!("{}: {}", self.path.display(), e))
            }
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| EnrichmentError::Parse(e.to_string()))?;
        if !value.is_object() {
            return Err(EnrichmentError::Parse(
                "manual payload JSON is not an object".to_string(),
            ));
        }

        info!(path = %self.path.display(), "Loaded manual qualitative payload");
        Ok(QualitativePayload::from_value(&value))
    }
}
