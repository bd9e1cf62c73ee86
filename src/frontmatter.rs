//! Frontmatter parsing for Markdown content files
//!
//! Splits a leading `---`-delimited metadata block from the Markdown body
//! and decodes the block's restricted YAML-like line syntax (`key: value`,
//! bracketed arrays, quoted strings, unquoted booleans/integers) into a
//! typed mapping. Documents without a metadata block are valid; malformed
//! lines are skipped, never fatal.

use std::collections::BTreeMap;

/// A decoded frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Bool(bool),
    Integer(i64),
    List(Vec<String>),
}

impl Value {
    #[allow(dead_code)] // used in tests
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[allow(dead_code)] // used in tests
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Decoded metadata mapping. Key order from the source is not meaningful.
pub type Metadata = BTreeMap<String, Value>;

/// A content file split into decoded metadata and Markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub metadata: Metadata,
    pub body: String,
}

/// Parse raw content into decoded frontmatter and body.
///
/// The text must begin (optionally after leading whitespace) with a line
/// consisting solely of `---`, followed by metadata lines, followed by
/// another solitary `---` line. Anything else yields empty metadata and
/// the whole text as body. The body is trimmed at its outer edges only.
pub fn parse(raw: &str) -> Document {
    let normalized = normalize_line_endings(raw);
    let lines: Vec<&str> = normalized.split('\n').collect();

    let Some(open) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return Document {
            metadata: Metadata::new(),
            body: String::new(),
        };
    };

    if lines[open].trim() != "---" {
        return whole_text_document(&normalized);
    }

    let Some(close) = lines[open + 1..].iter().position(|line| line.trim() == "---") else {
        return whole_text_document(&normalized);
    };
    let close = open + 1 + close;

    let metadata = decode_block(&lines[open + 1..close]);
    let body = lines[close + 1..].join("\n").trim().to_string();

    Document { metadata, body }
}

/// Serialize a metadata mapping back to frontmatter block text.
///
/// String values are quoted so that re-parsing the output decodes every
/// field to its original type.
#[allow(dead_code)] // used in tests
pub fn serialize(metadata: &Metadata) -> String {
    let mut out = String::new();
    for (key, value) in metadata {
        let rendered = match value {
            Value::String(s) => format!("\"{}\"", s),
            Value::Bool(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::List(items) => format!("[{}]", items.join(", ")),
        };
        out.push_str(&format!("{}: {}\n", key, rendered));
    }
    out
}

fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

fn whole_text_document(normalized: &str) -> Document {
    Document {
        metadata: Metadata::new(),
        body: normalized.trim().to_string(),
    }
}

/// Decode the lines between the delimiters into a mapping.
/// Malformed lines are skipped; the last occurrence of a key wins.
fn decode_block(lines: &[&str]) -> Metadata {
    let mut metadata = Metadata::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(colon) = line.find(':') else {
            continue;
        };
        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        metadata.insert(key.to_string(), decode_value(value));
    }

    metadata
}

/// Decode a single trimmed, non-empty value.
///
/// Quoting always forces string type: a quoted `"true"` or `"42"` stays
/// the literal text rather than coercing to boolean/integer.
fn decode_value(value: &str) -> Value {
    if let Some(unquoted) = strip_quotes(value) {
        return Value::String(unquoted.to_string());
    }

    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        return Value::List(decode_list(inner));
    }

    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = value.parse::<i64>() {
        return Value::Integer(n);
    }

    Value::String(value.to_string())
}

/// Strip exactly one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    if (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''))
    {
        return Some(&value[1..value.len() - 1]);
    }
    None
}

/// Decode the inner text of a bracketed list into trimmed, unquoted,
/// non-empty items.
fn decode_list(inner: &str) -> Vec<String> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_meta(raw: &str) -> Metadata {
        parse(raw).metadata
    }

    #[test]
    fn test_parse_example_document() {
        let raw = "---\ntitle: \"My Post\"\ntags: [API, Docs]\nfeatured: true\n---\nHello world.\n";
        let doc = parse(raw);
        assert_eq!(
            doc.metadata.get("title"),
            Some(&Value::String("My Post".to_string()))
        );
        assert_eq!(
            doc.metadata.get("tags"),
            Some(&Value::List(vec!["API".to_string(), "Docs".to_string()]))
        );
        assert_eq!(doc.metadata.get("featured"), Some(&Value::Bool(true)));
        assert_eq!(doc.body, "Hello world.");
    }

    #[test]
    fn test_parse_no_frontmatter() {
        let raw = "Just a body.\n\nNo delimiters here.\n";
        let doc = parse(raw);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, raw.trim());
    }

    #[test]
    fn test_parse_unclosed_block_is_not_frontmatter() {
        let raw = "---\ntitle: Oops\nno closing delimiter";
        let doc = parse(raw);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, raw.trim());
    }

    #[test]
    fn test_parse_allows_leading_whitespace() {
        let raw = "\n\n  ---\ntitle: Indented\n---\nbody";
        let doc = parse(raw);
        assert_eq!(
            doc.metadata.get("title"),
            Some(&Value::String("Indented".to_string()))
        );
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_parse_closing_delimiter_at_eof() {
        let raw = "---\ntitle: Short\n---";
        let doc = parse(raw);
        assert_eq!(
            doc.metadata.get("title"),
            Some(&Value::String("Short".to_string()))
        );
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_parse_normalizes_crlf() {
        let raw = "---\r\ntitle: Windows\r\n---\r\nbody\r\n";
        let doc = parse(raw);
        assert_eq!(
            doc.metadata.get("title"),
            Some(&Value::String("Windows".to_string()))
        );
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = parse("");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_skip_comments_and_blank_lines() {
        let meta = parse_meta("---\n# a comment\n\ntitle: Kept\n---\nbody");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some(&Value::String("Kept".to_string())));
    }

    #[test]
    fn test_skip_lines_without_separator() {
        let meta = parse_meta("---\nnot a field\ntitle: Kept\n---\nbody");
        assert_eq!(meta.len(), 1);
    }

    #[test]
    fn test_skip_empty_key_or_value() {
        let meta = parse_meta("---\n: no key\nempty:\ntitle: Kept\n---\nbody");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some(&Value::String("Kept".to_string())));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let meta = parse_meta("---\ntitle: First\ntitle: Second\n---\nbody");
        assert_eq!(meta.get("title"), Some(&Value::String("Second".to_string())));
    }

    #[test]
    fn test_value_splits_on_first_colon() {
        let meta = parse_meta("---\ndate: 2024-01-05T10:30:00Z\n---\nbody");
        assert_eq!(
            meta.get("date"),
            Some(&Value::String("2024-01-05T10:30:00Z".to_string()))
        );
    }

    #[test]
    fn test_boolean_decoding() {
        let meta = parse_meta("---\nfeatured: true\ndraft: false\n---\nbody");
        assert_eq!(meta.get("featured"), Some(&Value::Bool(true)));
        assert_eq!(meta.get("draft"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_boolean_is_case_sensitive() {
        let meta = parse_meta("---\nfeatured: True\n---\nbody");
        assert_eq!(meta.get("featured"), Some(&Value::String("True".to_string())));
    }

    #[test]
    fn test_integer_decoding() {
        let meta = parse_meta("---\ncount: 42\noffset: -7\n---\nbody");
        assert_eq!(meta.get("count"), Some(&Value::Integer(42)));
        assert_eq!(meta.get("offset"), Some(&Value::Integer(-7)));
    }

    #[test]
    fn test_non_integer_number_stays_string() {
        let meta = parse_meta("---\nratio: 3.14\n---\nbody");
        assert_eq!(meta.get("ratio"), Some(&Value::String("3.14".to_string())));
    }

    #[test]
    fn test_quoting_forces_string_type() {
        let meta = parse_meta("---\ntitle: \"42\"\nflag: 'true'\n---\nbody");
        assert_eq!(meta.get("title"), Some(&Value::String("42".to_string())));
        assert_eq!(meta.get("flag"), Some(&Value::String("true".to_string())));
    }

    #[test]
    fn test_quotes_stripped_one_layer() {
        let meta = parse_meta("---\ntitle: \"'nested'\"\n---\nbody");
        assert_eq!(
            meta.get("title"),
            Some(&Value::String("'nested'".to_string()))
        );
    }

    #[test]
    fn test_list_decoding() {
        let meta = parse_meta("---\ntags: [a, b, c]\n---\nbody");
        assert_eq!(
            meta.get("tags"),
            Some(&Value::List(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
    }

    #[test]
    fn test_empty_list_decoding() {
        let meta = parse_meta("---\ntags: []\n---\nbody");
        assert_eq!(meta.get("tags"), Some(&Value::List(Vec::new())));
        let meta = parse_meta("---\ntags: [  ]\n---\nbody");
        assert_eq!(meta.get("tags"), Some(&Value::List(Vec::new())));
    }

    #[test]
    fn test_list_items_trimmed_and_unquoted() {
        let meta = parse_meta("---\ntags: [ \"API\" , 'Docs', , Best Practices ]\n---\nbody");
        assert_eq!(
            meta.get("tags"),
            Some(&Value::List(vec![
                "API".to_string(),
                "Docs".to_string(),
                "Best Practices".to_string()
            ]))
        );
    }

    #[test]
    fn test_body_trimmed_at_edges_only() {
        let raw = "---\ntitle: T\n---\n\n\n# Heading\n\nparagraph\n\n";
        let doc = parse(raw);
        assert_eq!(doc.body, "# Heading\n\nparagraph");
    }

    #[test]
    fn test_serialize_reparse_is_identity() {
        let raw = "---\ntitle: \"My Post\"\nexcerpt: \"A 'quoted' intro\"\ntags: [API, Docs]\nfeatured: true\ncount: 42\nnumeric: \"007\"\n---\nbody";
        let original = parse_meta(raw);
        let block = format!("---\n{}---\nbody", serialize(&original));
        let reparsed = parse_meta(&block);
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::String("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(
            Value::List(vec!["a".to_string()]).as_list(),
            Some(&["a".to_string()][..])
        );
        assert_eq!(Value::Bool(true).as_str(), None);
        assert_eq!(Value::String("x".to_string()).as_bool(), None);
    }
}
