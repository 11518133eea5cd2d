//! Externally supplied qualitative data, parsed leniently.
//!
//! The payload comes from a person or a text-generation service, so any
//! field may be missing, mistyped or extra. Nothing here fails: unusable
//! fields fall back to empty values.

use serde_json::Value;

use super::record::Recommendations;

/// Maximum traits or biases kept from a payload.
pub const MAX_LIST_ITEMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QualitativePayload {
    pub risk_tolerance_label: Option<String>,
    pub traits: Vec<String>,
    pub biases: Vec<String>,
    pub narrative: String,
    pub recommendations: Recommendations,
}

impl QualitativePayload {
    /// Reads the known keys of a JSON object. Non-objects yield an empty
    /// payload.
    pub fn from_value(value: &Value) -> Self {
        let recommendations = value
            .get("recommendations")
            .map(|rec| Recommendations {
                portfolio_modifier: text_field(rec, "portfolio_modifier"),
                sector_pref: list_field(rec, "sector_pref", usize::MAX),
                notes: text_field(rec, "notes"),
            })
            .unwrap_or_default();

        let label = text_field(value, "risk_tolerance_label");

        Self {
            risk_tolerance_label: (!label.is_empty()).then_some(label),
            traits: list_field(value, "traits", MAX_LIST_ITEMS),
            biases: list_field(value, "biases", MAX_LIST_ITEMS),
            narrative: text_field(value, "narrative"),
            recommendations,
        }
    }

    /// True when the payload carries no usable content at all.
    pub fn is_empty(&self) -> bool {
        self.risk_tolerance_label.is_none()
            && self.traits.is_empty()
            && self.biases.is_empty()
            && self.narrative.is_empty()
            && self.recommendations == Recommendations::default()
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_field(value: &Value, key: &str) -> String {
    value.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Accepts an array of scalars or a single scalar.
fn list_field(value: &Value, key: &str, limit: usize) -> Vec<String> {
    let items: Vec<String> = match value.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    };
    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .take(limit)
        .collect()
}
