//! Sentiment module - bounded sentiment scores from text.
//!
//! Scores live on `[0, 1]` with 0.5 as neutral. Providers are strategies
//! tried in order by [`SentimentEstimator`]; the built-in
//! [`LexiconSentiment`] is always the final step, so estimation never fails.

mod estimator;
mod lexicon;
mod provider;
#[cfg(feature = "vader")]
mod vader;

pub use estimator::SentimentEstimator;
pub use lexicon::{LexiconSentiment, NEGATIVE_WORDS, NEUTRAL, POSITIVE_WORDS};
pub use provider::{polarity_to_unit, SentimentProvider};
#[cfg(feature = "vader")]
pub use vader::VaderSentiment;
