//! Built-in polarity word-list sentiment. Needs no external resources.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::provider::SentimentProvider;
use crate::domain::text::tokenize;

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "positive",
    "love",
    "happy",
    "better",
    "best",
    "fantastic",
    "wonderful",
    "awesome",
    "brilliant",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "negative",
    "hate",
    "sad",
    "worse",
    "worst",
    "horrible",
    "disgusting",
    "disaster",
    "failure",
];

static POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Score of text with no recognized polarity words.
pub const NEUTRAL: f64 = 0.5;

/// Distinct-token polarity ratio: `positive / (positive + negative)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    /// Always produces a score.
    pub fn score_text(&self, text: &str) -> f64 {
        let tokens: HashSet<String> = tokenize(text).into_iter().collect();

        let positive = tokens.iter().filter(|t| POSITIVE.contains(t.as_str())).count();
        let negative = tokens.iter().filter(|t| NEGATIVE.contains(t.as_str())).count();

        if positive + negative == 0 {
            return NEUTRAL;
        }
        positive as f64 / (positive + negative) as f64
    }
}

impl SentimentProvider for LexiconSentiment {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn score(&self, text: &str) -> Option<f64> {
        Some(self.score_text(text))
    }
}
