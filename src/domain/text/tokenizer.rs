//! Tokenizer - splits raw text into normalized word tokens.

/// Splits `text` into lowercase alphanumeric tokens.
///
/// Any non-alphanumeric character is a boundary. Lowercasing happens before
/// splitting so the tokens compare equal to lexicon phrases, which are
/// lowercased the same way.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of tokens [`tokenize`] produces for `text`.
pub fn word_count(text: &str) -> usize {
    tokenize(text).len()
}
