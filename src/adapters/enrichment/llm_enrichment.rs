//! Live enrichment through a text-generation service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::profile::QualitativePayload;
use crate::ports::{
    AIProvider, CompletionRequest, EnrichmentError, MessageRole, QualitativeEnrichmentProvider,
    RequestMetadata,
};

pub const SYSTEM_PROMPT: &str = "You are an objective financial behavioral analyst. \
Return ONLY valid JSON, with no markdown or additional text. \
Do not include code blocks or formatting.";

const TRUNCATION_MARKER: &str = "\n[...truncated...]";

/// Approximate characters per token used for prompt budgeting.
const CHARS_PER_TOKEN: usize = 4;

/// Prompt and completion budgets.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmPromptSettings {
    /// Corpus budget in tokens.
    pub max_prompt_tokens: usize,
    pub max_completion_tokens: u32,
    pub temperature: f32,
}

impl Default for LlmPromptSettings {
    fn default() -> Self {
        Self {
            max_prompt_tokens: 5000,
            max_completion_tokens: 1500,
            temperature: 0.7,
        }
    }
}

/// Builds the user prompt for `corpus`.
///
/// The corpus is cut to `max_prompt_tokens * 4` characters (marked with
/// `[...truncated...]`), double quotes are escaped and newlines flattened.
pub fn build_user_prompt(corpus: &str, max_prompt_tokens: usize) -> String {
    let char_limit = max_prompt_tokens.saturating_mul(CHARS_PER_TOKEN);
    let mut text: String = corpus.chars().take(char_limit).collect();
    if corpus.chars().nth(char_limit).is_some() {
        debug!(max_prompt_tokens, "Truncated corpus for prompt");
        text.push_str(TRUNCATION_MARKER);
    }
    let text = text.replace('"', "\\\"").replace('\n', " ");

    format!(
        "Below is a corpus of text data from a person's public statements, social posts, and interviews. \
Analyze their investment psychology, risk temperament, common behavioral biases, \
and provide practical portfolio recommendations.\n\n\
Use explicit, evidence-backed statements: for each claim, provide 1-2 supporting quotes or keyword counts.\n\n\
CORPUS:\n{}\n\n\
Return ONLY a JSON object with these keys:\n\
- risk_tolerance_label: One of [Conservative, Moderately Conservative, Moderate, Moderately Aggressive, Aggressive]\n\
- traits: List of personality traits (max 5)\n\
- biases: List of identified cognitive biases (max 5)\n\
- narrative: Concise analysis (max 300 words)\n\
- recommendations: Object with portfolio_modifier (string), sector_pref (list of sectors), notes (string)\n\
- evidence: Array of {{claim, support}} objects for key assertions\n\n\
Respond with JSON ONLY, no markdown, no code blocks.",
        text
    )
}

/// Pulls a JSON value out of a model reply.
///
/// Tries, in order: the whole reply, a ```` ```json ```` block, any fenced
/// block, then the span from the first `{` to the last `}`.
pub fn extract_json(content: &str) -> Result<serde_json::Value, EnrichmentError> {
    let parse = |s: &str| serde_json::from_str::<serde_json::Value>(s.trim()).ok();

    if let Some(value) = parse(content) {
        return Ok(value);
    }

    for fence in ["```json", "```"] {
        if let Some(start) = content.find(fence).map(|i| i + fence.len()) {
            if let Some(len) = content[start..].find("```") {
                if let Some(value) = parse(&content[start..start + len]) {
                    return Ok(value);
                }
            }
        }
    }

    if let (Some(start), Some(end)) = (content.find('{'), content.rfind('}')) {
        if start < end {
            if let Some(value) = parse(&content[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(EnrichmentError::Parse(
        "no JSON object found in model response".to_string(),
    ))
}

pub struct LlmEnrichment {
    ai_provider: Arc<dyn AIProvider>,
    settings: LlmPromptSettings,
}

impl LlmEnrichment {
    pub fn new(ai_provider: Arc<dyn AIProvider>, settings: LlmPromptSettings) -> Self {
        Self {
            ai_provider,
            settings,
        }
    }

    fn create_request(&self, corpus: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(format!(
            "behavioral-enrichment-{}",
            uuid::Uuid::new_v4()
        )))
        .with_system_prompt(SYSTEM_PROMPT)
        .with_message(
            MessageRole::User,
            build_user_prompt(corpus, self.settings.max_prompt_tokens),
        )
        .with_max_tokens(self.settings.max_completion_tokens)
        .with_temperature(self.settings.temperature)
    }
}

#[async_trait]
impl QualitativeEnrichmentProvider for LlmEnrichment {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn enrich(&self, corpus: &str) -> Result<QualitativePayload, EnrichmentError> {
        let request = self.create_request(corpus);
        let info = self.ai_provider.provider_info();
        info!(
            provider = %info.name,
            model = %info.model,
            trace_id = %request.metadata.trace_id,
            "Requesting qualitative analysis"
        );

        let response = self.ai_provider.complete(request).await?;
        let value = extract_json(&response.content).map_err(|e| {
            warn!(error = %e, "Model response did not contain JSON");
            e
        })?;

        if !value.is_object() {
            return Err(EnrichmentError::Parse(
                "model response JSON is not an object".to_string(),
            ));
        }

        debug!(tokens = response.usage.total_tokens, "Qualitative analysis parsed");
        Ok(QualitativePayload::from_value(&value))
    }
}
