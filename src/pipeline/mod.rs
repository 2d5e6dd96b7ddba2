//! Document preprocessing stages.
//!
//! Each submodule implements one transformation step and is a pure function
//! of its input, except [`input`] which touches the file system.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ front_matter ──▶ metadata ──▶ images
//! (read)     (split block)    (title,      (absolute
//!                              tags)        image URLs)
//! ```
//!
//! 1. [`input`]       : read the Markdown file as text
//! 2. [`front_matter`]: split the leading `---` block into fields and body
//! 3. [`metadata`]    : resolve the title and cap the tag list
//! 4. [`images`]      : rewrite relative image links onto the image host

pub mod front_matter;
pub mod images;
pub mod input;
pub mod metadata;
