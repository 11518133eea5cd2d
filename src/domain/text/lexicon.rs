//! Lexicon Matcher - counts keyword-category occurrences in text.
//!
//! Matching is case-insensitive and anchored on word boundaries, so `grow`
//! never matches inside `growth`. Multi-word and hyphenated phrases match as
//! contiguous sequences. A phrase listed under two categories counts toward
//! both.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Default keyword categories, 10 trigger phrases each.
pub const DEFAULT_KEYWORD_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "growth",
        &[
            "growth",
            "scale",
            "expand",
            "disrupt",
            "hypergrowth",
            "cagr",
            "scaleup",
            "explosive",
            "multiplier",
            "unicorn",
        ],
    ),
    (
        "safety",
        &[
            "dividend",
            "yield",
            "income",
            "stable",
            "defensive",
            "moat",
            "resilient",
            "steady",
            "conservative",
            "capital preservation",
        ],
    ),
    (
        "momentum",
        &[
            "buy",
            "hold",
            "momentum",
            "swing",
            "bet",
            "conviction",
            "all-in",
            "bullish",
            "surge",
            "rally",
        ],
    ),
    (
        "volatility",
        &[
            "swing",
            "volatile",
            "volatility",
            "ride out",
            "long-term",
            "short-term",
            "fluctuation",
            "downside",
            "drawdown",
            "crash",
        ],
    ),
    (
        "emotional",
        &[
            "excited",
            "fear",
            "worried",
            "confident",
            "pride",
            "uncertain",
            "anxious",
            "optimistic",
            "pessimistic",
            "bullish",
        ],
    ),
];

/// Category name → ordered trigger phrases.
///
/// Immutable configuration supplied by the caller; see
/// [`DEFAULT_KEYWORD_CATEGORIES`] for the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCategories(BTreeMap<String, Vec<String>>);

impl KeywordCategories {
    /// Creates an empty category set.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds (or replaces) a category.
    pub fn with_category<I, S>(mut self, name: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(name.into(), phrases.into_iter().map(Into::into).collect());
        self
    }

    /// Phrases configured for a category.
    pub fn phrases(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Category names in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(category, phrases)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KeywordCategories {
    fn default() -> Self {
        DEFAULT_KEYWORD_CATEGORIES
            .iter()
            .fold(Self::empty(), |categories, (name, phrases)| {
                categories.with_category(*name, phrases.iter().copied())
            })
    }
}

impl From<BTreeMap<String, Vec<String>>> for KeywordCategories {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

/// Category name → occurrence count. Produced fresh per analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCounts(BTreeMap<String, u64>);

impl RawCounts {
    /// Count for a category; absent categories count 0.
    pub fn get(&self, category: &str) -> u64 {
        self.0.get(category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.0
    }
}

impl FromIterator<(String, u64)> for RawCounts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug)]
struct CompiledCategory {
    name: String,
    patterns: Vec<Regex>,
}

/// Whole-word matcher compiled once from a [`KeywordCategories`] set.
#[derive(Debug)]
pub struct LexiconMatcher {
    categories: Vec<CompiledCategory>,
}

impl LexiconMatcher {
    /// Compiles one boundary-anchored pattern per phrase.
    ///
    /// Blank phrases are skipped; they would otherwise match at every word
    /// boundary.
    pub fn new(categories: &KeywordCategories) -> Result<Self, DomainError> {
        let categories = categories
            .iter()
            .map(|(name, phrases)| {
                let patterns = phrases
                    .iter()
                    .map(|phrase| phrase.trim().to_lowercase())
                    .filter(|phrase| !phrase.is_empty())
                    .map(|phrase| {
                        Regex::new(&format!(r"\b{}\b", regex::escape(&phrase))).map_err(|e| {
                            DomainError::new(
                                ErrorCode::InvalidConfiguration,
                                format!("Invalid keyword phrase '{}': {}", phrase, e),
                            )
                            .with_detail("category", name)
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledCategory {
                    name: name.to_string(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self { categories })
    }

    /// Counts matches per category (matches, not distinct phrases).
    pub fn count(&self, text: &str) -> RawCounts {
        let lowered = text.to_lowercase();
        self.categories
            .iter()
            .map(|category| {
                let count = category
                    .patterns
                    .iter()
                    .map(|pattern| pattern.find_iter(&lowered).count() as u64)
                    .sum();
                (category.name.clone(), count)
            })
            .collect()
    }
}

/// One-shot convenience over [`LexiconMatcher`].
pub fn count_keywords(
    text: &str,
    categories: &KeywordCategories,
) -> Result<RawCounts, DomainError> {
    Ok(LexiconMatcher::new(categories)?.count(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth_and_safety() -> KeywordCategories {
        KeywordCategories::empty()
            .with_category("growth", ["growth", "expansion"])
            .with_category("safety", ["safety"])
    }

    #[test]
    fn counts_every_match_not_distinct_phrases() {
        let text = "Growth and expansion are key. We want rapid growth. Safety is important too.";
        let counts = count_keywords(text, &growth_and_safety()).unwrap();

        assert_eq!(counts.get("growth"), 3);
        assert_eq!(counts.get("safety"), 1);
    }

    #[test]
    fn matches_on_word_boundaries_only() {
        let categories = KeywordCategories::empty().with_category("growth", ["grow"]);
        let counts = count_keywords("Growth is growing; we grow.", &categories).unwrap();
        assert_eq!(counts.get("growth"), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let categories = KeywordCategories::empty().with_category("momentum", ["Bullish"]);
        let counts = count_keywords("BULLISH, bullish and BuLlIsH", &categories).unwrap();
        assert_eq!(counts.get("momentum"), 3);
    }

    #[test]
    fn multi_word_and_hyphenated_phrases_match() {
        let counts = count_keywords(
            "Capital preservation first. I went all-in, ready to ride out the long-term drawdown.",
            &KeywordCategories::default(),
        )
        .unwrap();

        assert_eq!(counts.get("safety"), 1);
        // all-in
        assert_eq!(counts.get("momentum"), 1);
        // ride out, long-term, drawdown
        assert_eq!(counts.get("volatility"), 3);
    }

    #[test]
    fn shared_phrase_counts_toward_both_categories() {
        let counts = count_keywords("A swing trade, very bullish.", &KeywordCategories::default())
            .unwrap();
        // swing + bullish
        assert_eq!(counts.get("momentum"), 2);
        assert_eq!(counts.get("volatility"), 1);
        assert_eq!(counts.get("emotional"), 1);
    }

    #[test]
    fn absent_categories_count_zero() {
        let counts = count_keywords("nothing relevant here", &growth_and_safety()).unwrap();
        assert_eq!(counts.get("growth"), 0);
        assert_eq!(counts.get("unknown"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn blank_phrases_are_ignored() {
        let categories = KeywordCategories::empty().with_category("growth", ["", "  ", "growth"]);
        let counts = count_keywords("growth plan", &categories).unwrap();
        assert_eq!(counts.get("growth"), 1);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let categories = KeywordCategories::empty().with_category("misc", ["s.p"]);
        let counts = count_keywords("s.p and sxp", &categories).unwrap();
        assert_eq!(counts.get("misc"), 1);
    }

    #[test]
    fn default_set_has_five_categories_of_ten() {
        let categories = KeywordCategories::default();
        assert_eq!(categories.len(), 5);
        for (_, phrases) in categories.iter() {
            assert_eq!(phrases.len(), 10);
        }
    }
}
