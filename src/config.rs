//! Configuration types for publishing a Markdown post to Medium.
//!
//! All publish behaviour is controlled through [`PublishConfig`], built via
//! its [`PublishConfigBuilder`]. Secrets live separately in [`Credentials`],
//! which is constructed once at process start and passed explicitly into
//! [`crate::publish::publish`] rather than read from the environment ad hoc.

use crate::error::PublishError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Medium REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.medium.com/v1";

/// Environment variable holding the integration token.
pub const TOKEN_ENV: &str = "MEDIUM_TOKEN";

/// Environment variable holding the author (user) id.
pub const USER_ID_ENV: &str = "MEDIUM_USER_ID";

/// Configuration for a single publish run.
///
/// # Example
/// ```rust
/// use md2medium::{PublishConfig, PublishStatus};
///
/// let config = PublishConfig::builder()
///     .status(PublishStatus::Public)
///     .canonical_url("https://example.org/posts/hello/")
///     .build()
///     .unwrap();
/// assert_eq!(config.status, PublishStatus::Public);
/// ```
#[derive(Clone)]
pub struct PublishConfig {
    /// Visibility of the created post. Default: [`PublishStatus::Draft`].
    pub status: PublishStatus,

    /// Authoritative URL of the original post, forwarded as `canonicalUrl`.
    pub canonical_url: Option<String>,

    /// Where relative image paths are rehosted.
    pub image_host: ImageHost,

    /// Base URL of the Medium API, without trailing slash.
    pub api_base: String,

    /// Per-request HTTP timeout in seconds. Default: 30.
    pub timeout_secs: u64,

    /// Optional observer for author lookup and publish events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            status: PublishStatus::default(),
            canonical_url: None,
            image_host: ImageHost::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishConfig")
            .field("status", &self.status)
            .field("canonical_url", &self.canonical_url)
            .field("image_host", &self.image_host)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn PublishProgressCallback>"),
            )
            .finish()
    }
}

impl PublishConfig {
    /// Create a new builder for `PublishConfig`.
    pub fn builder() -> PublishConfigBuilder {
        PublishConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PublishConfig`].
#[derive(Debug)]
pub struct PublishConfigBuilder {
    config: PublishConfig,
}

impl PublishConfigBuilder {
    pub fn status(mut self, status: PublishStatus) -> Self {
        self.config.status = status;
        self
    }

    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.config.canonical_url = Some(url.into());
        self
    }

    pub fn image_host(mut self, host: ImageHost) -> Self {
        self.config.image_host = host;
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_base = base.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(mut self) -> Result<PublishConfig, PublishError> {
        let base = self.config.api_base.trim().trim_end_matches('/').to_string();
        if !is_http_url(&base) {
            return Err(PublishError::InvalidConfig(format!(
                "API base must be an http(s) URL, got '{}'",
                self.config.api_base
            )));
        }
        self.config.api_base = base;

        if self.config.timeout_secs == 0 {
            return Err(PublishError::InvalidConfig(
                "Timeout must be ≥ 1 second".into(),
            ));
        }

        if let Some(ref url) = self.config.canonical_url {
            if !is_http_url(url.trim()) {
                return Err(PublishError::InvalidConfig(format!(
                    "Canonical URL must be an http(s) URL, got '{url}'"
                )));
            }
        }

        let host = &self.config.image_host;
        if [&host.owner, &host.repo, &host.branch]
            .iter()
            .any(|part| part.trim().is_empty())
        {
            return Err(PublishError::InvalidConfig(
                "Image host owner, repo and branch must not be empty".into(),
            ));
        }

        Ok(self.config)
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

// ── Enums & value types ──────────────────────────────────────────────────

/// Visibility of a post on Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    /// Only visible to the author. (default)
    #[default]
    Draft,
    /// Publicly visible.
    Public,
}

impl PublishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Public => "public",
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GitHub repository serving the blog's `static/` directory as raw content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHost {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl Default for ImageHost {
    fn default() -> Self {
        Self {
            owner: "kvsankar".to_string(),
            repo: "blog".to_string(),
            branch: "main".to_string(),
        }
    }
}

impl ImageHost {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Absolute raw-content URL for a path relative to `static/`.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/static/{}",
            self.owner, self.repo, self.branch, path
        )
    }
}

// ── Credentials ──────────────────────────────────────────────────────────

/// Medium API credentials.
///
/// The token is redacted from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    token: String,
    user_id: Option<String>,
}

impl Credentials {
    /// Build credentials from optional values. Blank values count as absent.
    ///
    /// # Errors
    /// [`PublishError::MissingToken`] when no token is given.
    pub fn new(token: Option<String>, user_id: Option<String>) -> Result<Self, PublishError> {
        let token = non_blank(token).ok_or(PublishError::MissingToken)?;
        Ok(Self {
            token,
            user_id: non_blank(user_id),
        })
    }

    /// Read `MEDIUM_TOKEN` and `MEDIUM_USER_ID` from the environment.
    pub fn from_env() -> Result<Self, PublishError> {
        Self::new(std::env::var(TOKEN_ENV).ok(), std::env::var(USER_ID_ENV).ok())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Author id, if it was supplied rather than left for lookup.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
