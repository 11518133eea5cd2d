//! Domain layer containing the behavioral risk logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, timestamp)
//! - `text` - Tokenizer, lexicon matcher, sentence estimator, entities
//! - `sentiment` - Sentiment provider chain with a built-in lexicon fallback
//! - `scoring` - Rate normalization, risk scoring and labels
//! - `analysis` - The quantitative pipeline over one corpus
//! - `profile` - Output record and its assembly

pub mod analysis;
pub mod foundation;
pub mod profile;
pub mod scoring;
pub mod sentiment;
pub mod text;
