//! Sentiment Estimator - ordered provider chain with a guaranteed fallback.

use std::sync::Arc;
use tracing::debug;

use super::lexicon::LexiconSentiment;
use super::provider::SentimentProvider;

/// Tries each provider in order; the built-in lexicon always runs last.
#[derive(Clone)]
pub struct SentimentEstimator {
    providers: Vec<Arc<dyn SentimentProvider>>,
    fallback: LexiconSentiment,
}

impl SentimentEstimator {
    /// Estimator that only uses the built-in lexicon.
    pub fn lexicon_only() -> Self {
        Self {
            providers: Vec::new(),
            fallback: LexiconSentiment::new(),
        }
    }

    /// Appends a provider ahead of the lexicon fallback.
    pub fn with_provider(mut self, provider: Arc<dyn SentimentProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// The default chain for this build: VADER first when compiled in.
    pub fn with_available_providers() -> Self {
        #[allow(unused_mut)]
        let mut estimator = Self::lexicon_only();
        #[cfg(feature = "vader")]
        {
            estimator = estimator.with_provider(Arc::new(super::VaderSentiment::new()));
        }
        estimator
    }

    /// Provider names in resolution order, fallback included.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .map(|p| p.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }

    /// Returns a sentiment score in `[0, 1]`.
    pub fn estimate(&self, text: &str) -> f64 {
        for provider in &self.providers {
            match provider.score(text) {
                Some(score) if score.is_finite() => {
                    debug!(provider = provider.name(), score, "Sentiment estimated");
                    return score.clamp(0.0, 1.0);
                }
                _ => debug!(provider = provider.name(), "Sentiment provider declined, trying next"),
            }
        }

        let score = self.fallback.score_text(text);
        debug!(provider = self.fallback.name(), score, "Sentiment estimated");
        score
    }
}

impl Default for SentimentEstimator {
    fn default() -> Self {
        Self::with_available_providers()
    }
}

impl std::fmt::Debug for SentimentEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentEstimator")
            .field("providers", &self.provider_names())
            .finish()
    }
}
