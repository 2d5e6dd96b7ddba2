//! # md2medium
//!
//! Cross-post Markdown blog posts (Hugo-style, with `---` front matter) to
//! Medium as drafts or public posts.
//!
//! ## Pipeline Overview
//!
//! ```text
//! post.md
//!  │
//!  ├─ 1. Input         read the file
//!  ├─ 2. Front matter  split `---` block into fields + body
//!  ├─ 3. Metadata      title (front matter › first H1 › file name), ≤ 5 tags
//!  ├─ 4. Images        relative image links → raw.githubusercontent.com URLs
//!  ├─ 5. Author        MEDIUM_USER_ID, or one `GET /me` lookup
//!  └─ 6. Publish       one `POST /users/{id}/posts`, no retry
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2medium::{publish, Credentials, PublishConfig, PublishStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::from_env()?;
//!     let config = PublishConfig::builder()
//!         .status(PublishStatus::Draft)
//!         .build()?;
//!     let output = publish("content/posts/hello-world.md", &credentials, &config).await?;
//!     println!("{}", output.post.url);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2medium` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod medium;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod publish;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{Credentials, ImageHost, PublishConfig, PublishConfigBuilder, PublishStatus};
pub use error::PublishError;
pub use medium::{MediumClient, Post, PublishPayload, User};
pub use output::{PreparedPost, PublishOutput, ResolvedAuthor};
pub use pipeline::front_matter::{FrontMatter, FrontMatterValue};
pub use progress::{NoopProgressCallback, ProgressCallback, PublishProgressCallback};
pub use publish::{prepare, prepare_text, publish, publish_prepared, resolve_author};
