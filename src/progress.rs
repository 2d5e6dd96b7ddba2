//! Progress-callback trait for publish events.
//!
//! Inject an [`Arc<dyn PublishProgressCallback>`] via
//! [`crate::config::PublishConfigBuilder::progress_callback`] to be told when
//! the run reaches each network step. The library itself never prints; the
//! CLI uses these hooks to show a spinner and the `MEDIUM_USER_ID` hint.
//!
//! # Example
//!
//! ```rust
//! use md2medium::{PublishConfig, PublishProgressCallback, PublishStatus};
//! use std::sync::Arc;
//!
//! struct Announce;
//!
//! impl PublishProgressCallback for Announce {
//!     fn on_publish_start(&self, title: &str, status: PublishStatus) {
//!         eprintln!("Publishing '{title}' as {status}...");
//!     }
//! }
//!
//! let config = PublishConfig::builder()
//!     .progress_callback(Arc::new(Announce) as Arc<dyn PublishProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::config::PublishStatus;
use crate::medium::Post;
use std::sync::Arc;

/// Called by [`crate::publish`] as a run progresses.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait PublishProgressCallback: Send + Sync {
    /// Called before the `/me` lookup when no author id was configured.
    fn on_author_lookup_start(&self) {}

    /// Called once the author id is known.
    ///
    /// # Arguments
    /// * `user_id`  : the author id used for the post
    /// * `looked_up`: `true` when it came from the `/me` lookup
    fn on_author_resolved(&self, user_id: &str, looked_up: bool) {
        let _ = (user_id, looked_up);
    }

    /// Called just before the post-creation request is sent.
    fn on_publish_start(&self, title: &str, status: PublishStatus) {
        let _ = (title, status);
    }

    /// Called after Medium confirmed the post.
    fn on_publish_complete(&self, post: &Post) {
        let _ = post;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl PublishProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::PublishConfig`].
pub type ProgressCallback = Arc<dyn PublishProgressCallback>;
