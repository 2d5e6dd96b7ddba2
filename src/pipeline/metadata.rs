//! Post metadata derived from front matter and body: title and tags.

use crate::pipeline::front_matter::{FrontMatter, FrontMatterValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Medium rejects posts with more than five tags.
pub const MAX_TAGS: usize = 5;

static RE_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[ \t]+(.+)$").unwrap());

/// Pick the post title.
///
/// Order: non-empty front-matter `title`, then the first `# Heading` in the
/// body, then the file name in title case.
pub fn resolve_title(front_matter: &FrontMatter, body: &str, source: &Path) -> String {
    if let Some(title) = front_matter.text("title").map(str::trim) {
        if !title.is_empty() {
            return title.to_string();
        }
    }

    if let Some(heading) = first_h1(body) {
        return heading;
    }

    title_from_file_name(source)
}

/// Text of the first level-one ATX heading anywhere in the body.
///
/// A plain line scan: fenced code is not special, so `# comment` inside a
/// code block counts as a heading.
pub fn first_h1(body: &str) -> Option<String> {
    body.lines()
        .filter_map(|line| RE_H1.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .find(|text| !text.is_empty())
}

/// `my-first-post.md` → `My First Post`.
pub fn title_from_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem.trim().is_empty() {
        return "Untitled".to_string();
    }

    title_case(&stem.replace('-', " "))
}

/// Upper-case every letter that follows a non-letter, lower-case the rest,
/// so `my_first post` becomes `My_First Post`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

/// Tags from front matter, capped at [`MAX_TAGS`].
///
/// A scalar `tags: rust` becomes a one-element list; a missing key (or a
/// blank scalar) yields no tags.
pub fn normalize_tags(front_matter: &FrontMatter) -> Vec<String> {
    let mut tags = match front_matter.get("tags") {
        Some(FrontMatterValue::List(items)) => items.clone(),
        Some(FrontMatterValue::Text(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    };
    tags.truncate(MAX_TAGS);
    tags
}
