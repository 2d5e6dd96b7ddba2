//! Result types produced by preparation and publishing.

use crate::medium::Post;
use crate::pipeline::front_matter::FrontMatter;
use serde::Serialize;

/// A Markdown document ready to be sent: front matter stripped, title and
/// tags resolved, image links absolute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedPost {
    pub title: String,
    /// Body Markdown with rewritten image URLs.
    pub content: String,
    /// At most [`crate::pipeline::metadata::MAX_TAGS`] entries.
    pub tags: Vec<String>,
    /// Fields parsed from the source's front matter.
    pub front_matter: FrontMatter,
}

/// The author id a post was created under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAuthor {
    pub id: String,
    /// `true` when the id came from the `/me` lookup rather than configuration.
    pub looked_up: bool,
}

/// Everything known after a successful publish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishOutput {
    pub post: Post,
    pub author: ResolvedAuthor,
}
