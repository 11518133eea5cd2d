//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text-generation providers (OpenAI, mock)
//! - `enrichment` - Qualitative payload sources (drop-in file, LLM)
//! - `storage` - Filesystem corpus source and profile store

pub mod ai;
pub mod enrichment;
pub mod storage;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use enrichment::{LlmEnrichment, LlmPromptSettings, ManualFileEnrichment};
pub use storage::{FsCorpusSource, FsProfileStore};
