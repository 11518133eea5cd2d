//! CorpusSource port - supplies the text to analyze.

use async_trait::async_trait;

use super::profile_store::StorageError;

/// Concatenated text of every source document, plus their identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    pub text: String,
    pub source_files: Vec<String>,
}

impl Corpus {
    pub fn new(text: impl Into<String>, source_files: Vec<String>) -> Self {
        Self {
            text: text.into(),
            source_files,
        }
    }

    /// True when there is nothing but whitespace to analyze.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Loads the corpus for one run.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    async fn load(&self) -> Result<Corpus, StorageError>;
}
