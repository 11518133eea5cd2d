//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CorpusSource` - Where the text comes from
//! - `ProfileStore` - Where the resulting profile goes
//! - `QualitativeEnrichmentProvider` - Optional qualitative payload
//! - `AIProvider` - Text-generation service used by LLM enrichment

mod ai_provider;
mod corpus_source;
mod profile_store;
mod qualitative_enrichment;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use corpus_source::{Corpus, CorpusSource};
pub use profile_store::{ProfileStore, StorageError};
pub use qualitative_enrichment::{EnrichmentError, QualitativeEnrichmentProvider};
