//! Post view model
//!
//! A `Post` is assembled once per content file from the decoded
//! frontmatter and body. Missing metadata fields fall back to fixed
//! defaults, so any readable Markdown file yields a renderable post.

use chrono::{DateTime, NaiveDate, Utc};

use crate::frontmatter::{Document, Metadata, Value};
use crate::tags::TagOverrides;

/// Default read time shown when the metadata gives none.
const DEFAULT_READ_TIME: &str = "5 min read";

/// A loaded content file, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub tag_overrides: TagOverrides,
    pub featured: bool,
}

impl Post {
    /// Assemble a post from a filename stem and its parsed document.
    pub fn from_document(stem: &str, document: Document) -> Self {
        let Document { metadata, body } = document;
        let slug = strip_date_prefix(stem).to_string();

        Post {
            id: slug.clone(),
            title: metadata_string(&metadata, "title")
                .unwrap_or_else(|| "Untitled".to_string()),
            excerpt: metadata_string(&metadata, "excerpt").unwrap_or_default(),
            body,
            date: metadata_string(&metadata, "date")
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            read_time: metadata_string(&metadata, "readTime")
                .unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
            tags: metadata
                .get("tags")
                .and_then(Value::as_list)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            tag_overrides: decode_tag_overrides(&metadata),
            featured: metadata
                .get("featured")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            slug,
        }
    }

    /// The post date as a timestamp, when it parses as RFC 3339 or
    /// `YYYY-MM-DD`. Unparseable dates yield `None` and sort last.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(timestamp.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

/// Strip a leading `YYYY-MM-DD-` date prefix from a filename stem.
fn strip_date_prefix(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    if bytes.len() > 11
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
        && bytes[10] == b'-'
    {
        &stem[11..]
    } else {
        stem
    }
}

/// Read a scalar metadata field as a string. Booleans and integers
/// render to their literal text, matching loosely typed frontmatter.
fn metadata_string(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Integer(n) => Some(n.to_string()),
        Value::List(_) => None,
    }
}

/// Decode per-document overrides from a `tagColors` list of
/// `name=color` items. Items without `=` are dropped.
fn decode_tag_overrides(metadata: &Metadata) -> TagOverrides {
    let mut overrides = TagOverrides::new();
    let Some(items) = metadata.get("tagColors").and_then(Value::as_list) else {
        return overrides;
    };
    for item in items {
        let Some((tag, color)) = item.split_once('=') else {
            continue;
        };
        let tag = tag.trim();
        let color = color.trim();
        if tag.is_empty() || color.is_empty() {
            continue;
        }
        overrides.insert(tag.to_string(), color.to_string());
    }
    overrides
}
