//! Qualitative enrichment configuration (drop-in file and LLM)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `timeout_secs`.
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Upper bound for `max_retries`.
pub const MAX_RETRIES: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    /// Register the LLM provider (still requires an API key)
    #[serde(default)]
    pub llm_enabled: bool,

    /// Drop-in payload checked before the LLM
    #[serde(default = "default_manual_payload_path")]
    pub manual_payload_path: PathBuf,

    /// OpenAI API key
    #[serde(default)]
    pub openai_api_key: Option<Secret<String>>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    #[serde(default = "default_max_prompt_tokens")]
    pub max_prompt_tokens: usize,

    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl EnrichmentConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Budget for a whole enrichment attempt: every request plus the
    /// backoff sleeps between them (1s, 2s, 4s, ...).
    pub fn attempt_budget(&self) -> Duration {
        let requests = self.timeout().saturating_mul(self.max_retries.saturating_add(1));
        let backoff = 1u64
            .checked_shl(self.max_retries)
            .map_or(u64::MAX, |total| total - 1);
        requests.saturating_add(Duration::from_secs(backoff))
    }

    /// Check if an OpenAI key is configured
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Whether the LLM provider should be registered.
    pub fn llm_ready(&self) -> bool {
        self.llm_enabled && self.has_api_key()
    }

    /// Validate enrichment configuration
    ///
    /// A missing API key is not an error; the LLM provider is simply skipped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.manual_payload_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired(
                "ENRICHMENT__MANUAL_PAYLOAD_PATH",
            ));
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout {
                max: MAX_TIMEOUT_SECS,
            });
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ValidationError::InvalidRetries { max: MAX_RETRIES });
        }
        if self.max_prompt_tokens == 0 {
            return Err(ValidationError::InvalidTokenLimit("max_prompt_tokens"));
        }
        if self.max_completion_tokens == 0 {
            return Err(ValidationError::InvalidTokenLimit("max_completion_tokens"));
        }
        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            llm_enabled: false,
            manual_payload_path: default_manual_payload_path(),
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_prompt_tokens: default_max_prompt_tokens(),
            max_completion_tokens: default_max_completion_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_manual_payload_path() -> PathBuf {
    PathBuf::from("output/llm_qualitative.json")
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    2
}

fn default_max_prompt_tokens() -> usize {
    5000
}

fn default_max_completion_tokens() -> u32 {
    1500
}

fn default_temperature() -> f32 {
    0.7
}
