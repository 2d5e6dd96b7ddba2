//! Front matter: split a leading `---` block off a Markdown document.
//!
//! A narrow line reader, not a YAML parser. Rules:
//!
//! - one `key: value` per line, split on the first colon
//! - one layer of matching `'…'` or `"…"` around a value is removed
//! - a value starting with `[` is an inline list; only `"double-quoted"`
//!   items are kept, anything else inside the brackets is dropped
//! - lines without a colon are skipped, and a repeated key keeps the last value

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static RE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)??---[ \t]*(?:\r?\n|\z)").unwrap()
});

static RE_QUOTED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// A single front-matter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    Text(String),
    List(Vec<String>),
}

/// Parsed front-matter fields, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: BTreeMap<String, FrontMatterValue>,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.fields.get(key)
    }

    /// The value of `key` if it is plain text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FrontMatterValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Split `text` into its front matter and the remaining body.
///
/// Without a leading block the map is empty and the body is `text` itself.
pub fn parse_front_matter(text: &str) -> (FrontMatter, &str) {
    let Some(caps) = RE_BLOCK.captures(text) else {
        return (FrontMatter::default(), text);
    };

    let mut front_matter = FrontMatter::default();
    if let Some(block) = caps.get(1) {
        for line in block.as_str().lines() {
            if let Some((key, value)) = parse_line(line) {
                front_matter.fields.insert(key, value);
            }
        }
    }

    let end = caps.get(0).map_or(0, |m| m.end());
    (front_matter, &text[end..])
}

fn parse_line(line: &str) -> Option<(String, FrontMatterValue)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = strip_quotes(value.trim());
    let value = if value.starts_with('[') {
        FrontMatterValue::List(
            RE_QUOTED_ITEM
                .captures_iter(value)
                .map(|c| c[1].to_string())
                .collect(),
        )
    } else {
        FrontMatterValue::Text(value.to_string())
    };

    Some((key.to_string(), value))
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
