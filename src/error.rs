//! Error types for the md2medium library.
//!
//! Every failure is fatal: a run either creates the post or aborts without
//! writing anything locally. The variants fall into three groups:
//!
//! * **Configuration**: a required credential or setting is missing/invalid.
//! * **Input**: the Markdown file cannot be found or read.
//! * **Remote**: the Medium API answered with a non-success status, the
//!   request never completed, or the reply could not be decoded.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2medium library.
#[derive(Debug, Error)]
pub enum PublishError {
    // ── Configuration errors ──────────────────────────────────────────────
    /// No access token was provided.
    #[error(
        "MEDIUM_TOKEN environment variable not set\n\
Get your token at: https://medium.com/me/settings/security"
    )]
    MissingToken,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Input errors ──────────────────────────────────────────────────────
    /// Markdown file was not found at the given path.
    #[error("File not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Remote errors ─────────────────────────────────────────────────────
    /// The API answered with an unexpected status code.
    #[error("Medium API error while {operation}: HTTP {status}\n{body}")]
    Remote {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The request could not be sent or the response could not be received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response arrived but its body was not the expected shape.
    #[error("Unexpected response while {operation}: {detail}")]
    InvalidResponse {
        operation: &'static str,
        detail: String,
    },
}

impl PublishError {
    /// The HTTP status of a [`PublishError::Remote`] error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PublishError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
