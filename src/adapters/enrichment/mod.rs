//! Qualitative enrichment adapters.
//!
//! - `ManualFileEnrichment` - JSON file dropped in by a person
//! - `LlmEnrichment` - Live call through an `AIProvider`

mod llm_enrichment;
mod manual_file;

pub use llm_enrichment::{
    build_user_prompt, extract_json, LlmEnrichment, LlmPromptSettings, SYSTEM_PROMPT,
};
pub use manual_file::{ManualFileEnrichment, DEFAULT_MANUAL_PAYLOAD_PATH};
