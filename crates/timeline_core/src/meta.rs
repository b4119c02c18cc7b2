use std::collections::BTreeMap;

use serde_yaml::Value;

/// Declared page metadata: front matter or header lines, keyed by name.
pub type Metadata = BTreeMap<String, Value>;

pub const KEY_DATE: &str = "date";
pub const KEY_DUE: &str = "due";
pub const KEY_TITLE: &str = "title";
pub const KEY_TYPE: &str = "type";
pub const KEY_CODE: &str = "code";
pub const KEY_THREADS: &str = "threads";

/// Render a scalar metadata value as display text.
///
/// Mappings and sequences have no sensible single-line form and yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Look up `key` and stringify it, treating blank text as missing.
pub fn meta_text(meta: &Metadata, key: &str) -> Option<String> {
    meta.get(key)
        .and_then(scalar_to_string)
        .filter(|s| !s.trim().is_empty())
}

/// Normalize a `threads` value into trimmed, non-empty labels.
///
/// A string is treated as a comma-delimited list; a sequence contributes one
/// label per element.
pub fn normalize_threads(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(scalar_to_string)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        Some(Value::Tagged(tagged)) => normalize_threads(Some(&tagged.value)),
        Some(other) => scalar_to_string(other)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .into_iter()
            .collect(),
    }
}
