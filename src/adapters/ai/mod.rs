//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI chat-completions models

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockResponse, DEFAULT_MOCK_CONTENT};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
