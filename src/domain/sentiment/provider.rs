//! Sentiment provider strategy.

/// One way of scoring text sentiment on the `[0, 1]` scale (0.5 neutral).
///
/// Returning `None` means the provider cannot score this text and the next
/// provider in the chain should be consulted.
pub trait SentimentProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn score(&self, text: &str) -> Option<f64>;
}

/// Maps a native `[-1, 1]` polarity onto `[0, 1]`.
pub fn polarity_to_unit(polarity: f64) -> f64 {
    ((polarity + 1.0) / 2.0).clamp(0.0, 1.0)
}
