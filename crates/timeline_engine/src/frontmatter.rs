use serde_yaml::Value;
use timeline_core::Metadata;

use crate::metadata::MetadataError;

const DELIMITER: &str = "---";

/// Parse page metadata out of Markdown source text.
///
/// A leading `---` block is read as YAML. Without one, the leading run of
/// non-blank `key: value` lines is used instead, with every value kept as a
/// string.
pub fn parse_metadata(text: &str) -> Result<Metadata, MetadataError> {
    let text = normalize_newlines(text);
    match front_matter_block(&text) {
        Some(block) => parse_yaml_block(block),
        None => Ok(parse_header_lines(&text)),
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Text between the opening and closing `---` lines, if both exist.
fn front_matter_block(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("---\n")?;
    if rest.starts_with("---\n") || rest == DELIMITER {
        return Some("");
    }
    if let Some(idx) = rest.find("\n---\n") {
        return Some(&rest[..idx]);
    }
    rest.strip_suffix("\n---")
}

fn parse_yaml_block(block: &str) -> Result<Metadata, MetadataError> {
    let value: Value = serde_yaml::from_str(block)?;
    match value {
        Value::Null => Ok(Metadata::new()),
        Value::Mapping(mapping) => Ok(mapping
            .into_iter()
            .filter_map(|(key, value)| yaml_key(key).map(|k| (k, value)))
            .collect()),
        _ => Err(MetadataError::NotAMapping),
    }
}

fn yaml_key(key: Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_header_lines(text: &str) -> Metadata {
    let mut meta = Metadata::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            meta.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
        }
    }
    meta
}

#[cfg(test)]
mod tests {
    use super::{front_matter_block, parse_metadata};
    use serde_yaml::Value;

    #[test]
    fn block_requires_both_delimiters() {
        assert_eq!(front_matter_block("---\na: 1\n---\nbody"), Some("a: 1"));
        assert_eq!(front_matter_block("---\na: 1\n---"), Some("a: 1"));
        assert_eq!(front_matter_block("---\n---\nbody"), Some(""));
        assert_eq!(front_matter_block("---\na: 1\nbody\n"), None);
        assert_eq!(front_matter_block("a: 1\n---\n"), None);
    }

    #[test]
    fn crlf_front_matter_is_recognised() {
        let meta = parse_metadata("---\r\ndate: 2025-01-01\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(meta.get("date"), Some(&Value::from("2025-01-01")));
    }

    #[test]
    fn empty_block_is_empty_mapping() {
        assert!(parse_metadata("---\n---\n# Title\n").unwrap().is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(parse_metadata("---\njust text\n---\n").is_err());
    }
}
