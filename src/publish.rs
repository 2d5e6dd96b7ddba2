//! Publish entry points.
//!
//! [`prepare`] is the offline half (read, parse, rewrite); [`publish`] adds
//! the network half (author lookup when needed, then one post-creation call).

use crate::config::{Credentials, PublishConfig};
use crate::error::PublishError;
use crate::medium::{MediumClient, PublishPayload};
use crate::output::{PreparedPost, PublishOutput, ResolvedAuthor};
use crate::pipeline::{front_matter, images, input, metadata};
use std::path::Path;
use tracing::{debug, info};

/// Read a Markdown file and turn it into a [`PreparedPost`].
///
/// Needs no credentials and performs no network I/O.
///
/// # Errors
/// Only input errors: [`PublishError::FileNotFound`],
/// [`PublishError::PermissionDenied`], [`PublishError::ReadFailed`].
pub async fn prepare(
    path: impl AsRef<Path>,
    config: &PublishConfig,
) -> Result<PreparedPost, PublishError> {
    let path = path.as_ref();
    info!("Preparing {}", path.display());
    let text = input::read_markdown(path).await?;
    Ok(prepare_text(&text, path, config))
}

/// Prepare already-loaded Markdown. `source` is only used for the
/// file-name title fallback.
pub fn prepare_text(text: &str, source: &Path, config: &PublishConfig) -> PreparedPost {
    let (front_matter, body) = front_matter::parse_front_matter(text);
    debug!("Front matter has {} field(s)", front_matter.len());

    let title = metadata::resolve_title(&front_matter, body, source);
    let tags = metadata::normalize_tags(&front_matter);
    let content = images::rewrite_image_urls(body, &config.image_host);

    PreparedPost {
        title,
        content,
        tags,
        front_matter,
    }
}

/// Use the configured author id, or ask `/me` for it.
///
/// At most one network call; the result is not cached anywhere.
pub async fn resolve_author(
    client: &MediumClient,
    credentials: &Credentials,
    config: &PublishConfig,
) -> Result<ResolvedAuthor, PublishError> {
    let author = match credentials.user_id() {
        Some(id) => ResolvedAuthor {
            id: id.to_string(),
            looked_up: false,
        },
        None => {
            info!("No user id configured, fetching it from the API");
            if let Some(ref cb) = config.progress_callback {
                cb.on_author_lookup_start();
            }
            let user = client.me().await?;
            ResolvedAuthor {
                id: user.id,
                looked_up: true,
            }
        }
    };

    if let Some(ref cb) = config.progress_callback {
        cb.on_author_resolved(&author.id, author.looked_up);
    }
    Ok(author)
}

/// Publish a Markdown file to Medium.
///
/// The file is read and preprocessed before any network call, so input
/// errors never cost a request.
///
/// # Errors
/// Input errors from [`prepare`], plus [`PublishError::Remote`] /
/// [`PublishError::Http`] / [`PublishError::InvalidResponse`] from either
/// API call.
pub async fn publish(
    path: impl AsRef<Path>,
    credentials: &Credentials,
    config: &PublishConfig,
) -> Result<PublishOutput, PublishError> {
    let prepared = prepare(path, config).await?;
    publish_prepared(&prepared, credentials, config).await
}

/// Publish an already prepared post.
pub async fn publish_prepared(
    prepared: &PreparedPost,
    credentials: &Credentials,
    config: &PublishConfig,
) -> Result<PublishOutput, PublishError> {
    let client = MediumClient::new(config, credentials)?;
    let author = resolve_author(&client, credentials, config).await?;

    let payload =
        PublishPayload::from_prepared(prepared, config.status, config.canonical_url.as_deref());

    if let Some(ref cb) = config.progress_callback {
        cb.on_publish_start(&payload.title, payload.publish_status);
    }
    let post = client.create_post(&author.id, &payload).await?;
    info!("Created post {} at {}", post.id, post.url);

    if let Some(ref cb) = config.progress_callback {
        cb.on_publish_complete(&post);
    }

    Ok(PublishOutput { post, author })
}
