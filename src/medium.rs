//! Medium REST API: the two calls this tool needs.
//!
//! * `GET  /me`                : resolve the author id for a token
//! * `POST /users/{id}/posts`  : create the post
//!
//! Every reply is wrapped as `{"data": …}`. Failures are returned with the
//! raw response body so the user sees exactly what Medium complained about.
//! No call is ever retried.

use crate::config::{Credentials, PublishConfig, PublishStatus};
use crate::error::PublishError;
use crate::output::PreparedPost;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_CHARSET};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Value of `contentFormat` for every post this tool creates.
pub const CONTENT_FORMAT_MARKDOWN: &str = "markdown";

/// JSON body of the post-creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPayload {
    pub title: String,
    pub content_format: String,
    pub content: String,
    pub publish_status: PublishStatus,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

impl PublishPayload {
    pub fn from_prepared(
        prepared: &PreparedPost,
        status: PublishStatus,
        canonical_url: Option<&str>,
    ) -> Self {
        Self {
            title: prepared.title.clone(),
            content_format: CONTENT_FORMAT_MARKDOWN.to_string(),
            content: prepared.content.clone(),
            publish_status: status,
            tags: prepared.tags.clone(),
            canonical_url: canonical_url.map(str::to_string),
        }
    }
}

/// The account behind a token, as returned by `GET /me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A created post, as returned by `POST /users/{id}/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_id: String,
    /// Public URL of the post.
    pub url: String,
    #[serde(default)]
    pub canonical_url: Option<String>,
    /// `draft`, `public` or `unlisted` as reported by Medium.
    #[serde(default)]
    pub publish_status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Milliseconds since the epoch; absent for drafts.
    #[serde(default)]
    pub published_at: Option<i64>,
    #[serde(default)]
    pub license: Option<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Thin authenticated client for the Medium API.
#[derive(Clone)]
pub struct MediumClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl MediumClient {
    /// Build a client using `config.api_base` and `config.timeout_secs`.
    pub fn new(config: &PublishConfig, credentials: &Credentials) -> Result<Self, PublishError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: credentials.token().to_string(),
        })
    }

    /// `GET /me`: the user that owns the token.
    pub async fn me(&self) -> Result<User, PublishError> {
        const OP: &str = "fetching user id";
        let url = format!("{}/me", self.api_base);
        debug!("GET {}", url);

        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        if !response.status().is_success() {
            return Err(remote_error(OP, response).await);
        }
        decode::<User>(OP, response).await
    }

    /// `POST /users/{user_id}/posts`: create the post. Only HTTP 201 counts
    /// as success.
    pub async fn create_post(
        &self,
        user_id: &str,
        payload: &PublishPayload,
    ) -> Result<Post, PublishError> {
        const OP: &str = "creating post";
        let url = format!("{}/users/{}/posts", self.api_base, user_id);
        info!(
            "POST {} ({} bytes of content, {} tags)",
            url,
            payload.content.len(),
            payload.tags.len()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;
        if response.status() != StatusCode::CREATED {
            return Err(remote_error(OP, response).await);
        }
        decode::<Post>(OP, response).await
    }
}

async fn remote_error(operation: &'static str, response: Response) -> PublishError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable response body: {e}>"));
    PublishError::Remote {
        operation,
        status,
        body,
    }
}

async fn decode<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, PublishError> {
    let text = response.text().await?;
    serde_json::from_str::<Envelope<T>>(&text)
        .map(|env| env.data)
        .map_err(|e| PublishError::InvalidResponse {
            operation,
            detail: format!("{e}: {text}"),
        })
}
