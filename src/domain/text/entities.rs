//! Crude named-entity extraction by capitalization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// One or more capitalized words separated by whitespace.
static CAPITALIZED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("entity pattern is valid")
});

/// Upper bound on reported entities.
pub const MAX_ENTITIES: usize = 20;

/// Returns at most [`MAX_ENTITIES`] distinct capitalized word runs, longest
/// first, ties broken lexically.
pub fn extract_named_entities(text: &str) -> Vec<String> {
    let distinct: BTreeSet<&str> = CAPITALIZED_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();

    let mut entities: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    entities.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    entities.truncate(MAX_ENTITIES);
    entities
}
