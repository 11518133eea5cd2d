//! Rate Normalizer - per-1000-word rates and threshold ramps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{EMOTIONAL, GROWTH, MOMENTUM, SAFETY, VOLATILITY};
use crate::domain::text::RawCounts;

/// Score for degenerate bounds (`max <= min`, or a non-positive threshold).
pub const DEGENERATE_SCORE: f64 = 0.5;

/// Threshold for categories without a configured one.
pub const FALLBACK_THRESHOLD: f64 = 5.0;

/// Mentions per 1000 words that produce a score of 1.0.
pub const DEFAULT_THRESHOLDS: &[(&str, f64)] = &[
    (GROWTH, 5.0),
    (SAFETY, 3.0),
    (MOMENTUM, 0.2),
    (VOLATILITY, 3.0),
    (EMOTIONAL, 5.0),
];

/// Linear min-max normalization clamped into `[0, 1]`.
///
/// Returns [`DEGENERATE_SCORE`] when `max <= min`. A NaN value scores 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max.is_nan() || min.is_nan() || max <= min {
        return DEGENERATE_SCORE;
    }
    let scaled = (value - min) / (max - min);
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 1.0)
}

/// Category → threshold rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryThresholds(BTreeMap<String, f64>);

impl CategoryThresholds {
    /// No configured thresholds; every category uses [`FALLBACK_THRESHOLD`].
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets (or overrides) one category's threshold.
    pub fn with_threshold(mut self, category: impl Into<String>, threshold: f64) -> Self {
        self.0.insert(category.into(), threshold);
        self
    }

    /// Applies every override on top of the current values.
    pub fn merged(mut self, overrides: &BTreeMap<String, f64>) -> Self {
        for (category, threshold) in overrides {
            self.0.insert(category.clone(), *threshold);
        }
        self
    }

    pub fn threshold(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(FALLBACK_THRESHOLD)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
            .iter()
            .fold(Self::empty(), |t, (category, threshold)| {
                t.with_threshold(*category, *threshold)
            })
    }
}

/// Category → mentions per 1000 words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordRates(BTreeMap<String, f64>);

impl KeywordRates {
    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for KeywordRates {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Category → score in `[0, 1]`. Values are clamped on insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedScores(BTreeMap<String, f64>);

impl NormalizedScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a score, clamping into range (NaN becomes 0).
    pub fn insert(&mut self, category: impl Into<String>, score: f64) {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
        self.0.insert(category.into(), score);
    }

    pub fn with(mut self, category: impl Into<String>, score: f64) -> Self {
        self.insert(category, score);
        self
    }

    /// Score for a category; absent categories score 0.
    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for NormalizedScores {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |scores, (category, score)| scores.with(category, score))
    }
}

/// Turns raw counts into rates and 0-1 scores.
#[derive(Debug, Clone, Default)]
pub struct RateNormalizer {
    thresholds: CategoryThresholds,
}

impl RateNormalizer {
    pub fn new(thresholds: CategoryThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &CategoryThresholds {
        &self.thresholds
    }

    /// Mentions per 1000 words; all zero when `word_count` is 0.
    pub fn rates(&self, counts: &RawCounts, word_count: usize) -> KeywordRates {
        counts
            .iter()
            .map(|(category, count)| {
                let rate = if word_count == 0 {
                    0.0
                } else {
                    count as f64 / word_count as f64 * 1000.0
                };
                (category.to_string(), rate)
            })
            .collect()
    }

    /// Linear ramp from 0 at rate 0 to 1 at `threshold`.
    pub fn score_rate(rate: f64, threshold: f64) -> f64 {
        if threshold.is_nan() || threshold <= 0.0 {
            return DEGENERATE_SCORE;
        }
        normalize(rate, 0.0, threshold)
    }

    /// Scores every category present in `rates`.
    ///
    /// `word_count == 0` scores everything 0, ahead of any degenerate
    /// threshold handling.
    pub fn scores(&self, rates: &KeywordRates, word_count: usize) -> NormalizedScores {
        rates
            .iter()
            .map(|(category, rate)| {
                let score = if word_count == 0 {
                    0.0
                } else {
                    Self::score_rate(rate, self.thresholds.threshold(category))
                };
                debug!(category, rate, score, "Normalized keyword rate");
                (category.to_string(), score)
            })
            .collect()
    }

    /// Convenience: rates then scores.
    pub fn normalize(&self, counts: &RawCounts, word_count: usize) -> (KeywordRates, NormalizedScores) {
        let rates = self.rates(counts, word_count);
        let scores = self.scores(&rates, word_count);
        (rates, scores)
    }
}
