//! Text module - tokenization, keyword matching and sentence statistics.

mod entities;
mod lexicon;
mod sentence;
mod tokenizer;

pub use entities::{extract_named_entities, MAX_ENTITIES};
pub use lexicon::{count_keywords, KeywordCategories, LexiconMatcher, RawCounts, DEFAULT_KEYWORD_CATEGORIES};
pub use sentence::{SentenceEstimator, TextStats};
pub use tokenizer::{tokenize, word_count};
