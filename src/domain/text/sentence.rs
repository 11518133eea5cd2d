//! Sentence Estimator - word/sentence counts with a fallback for
//! punctuation-sparse transcripts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::tokenizer::word_count;

/// Runs of terminal punctuation, or two or more consecutive newlines.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+|\n{2,}").expect("sentence break pattern is valid"));

/// Fragments at or below this many characters (after trimming) are noise.
pub const MIN_FRAGMENT_CHARS: usize = 10;

/// Above this word count, sparse punctuation triggers the fallback.
pub const FALLBACK_MIN_WORDS: usize = 1000;

/// Fallback triggers when there are fewer sentences than `words / this`.
pub const FALLBACK_WORDS_PER_SENTENCE_SIGNAL: usize = 100;

/// Assumed average sentence length used by the fallback.
pub const ASSUMED_WORDS_PER_SENTENCE: usize = 18;

/// Basic text statistics.
///
/// Invariant: `word_count > 0` implies `sentence_count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
}

impl TextStats {
    /// Builds stats from counts, treating a zero sentence count as length 0.
    pub fn from_counts(word_count: usize, sentence_count: usize) -> Self {
        let avg_sentence_length = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };
        Self {
            word_count,
            sentence_count,
            avg_sentence_length,
        }
    }
}

/// Computes [`TextStats`] from raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceEstimator;

impl SentenceEstimator {
    /// Sentences found by punctuation/blank-line segmentation alone.
    pub fn punctuated_sentences(text: &str) -> usize {
        SENTENCE_BREAK
            .split(text)
            .map(str::trim)
            .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_CHARS)
            .count()
    }

    /// Applies the transcript fallback and the non-zero floor to a
    /// punctuation-derived count.
    pub fn resolve_sentence_count(word_count: usize, punctuated: usize) -> usize {
        if word_count > FALLBACK_MIN_WORDS
            && punctuated * FALLBACK_WORDS_PER_SENTENCE_SIGNAL < word_count
        {
            return word_count / ASSUMED_WORDS_PER_SENTENCE;
        }
        if word_count > 0 && punctuated == 0 {
            return 1;
        }
        punctuated
    }

    pub fn estimate(text: &str) -> TextStats {
        let words = word_count(text);
        let punctuated = Self::punctuated_sentences(text);
        let sentences = Self::resolve_sentence_count(words, punctuated);

        tracing::debug!(
            words,
            punctuated,
            sentences,
            "Estimated sentence statistics"
        );
        TextStats::from_counts(words, sentences)
    }
}
