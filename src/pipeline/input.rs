//! Input: read the Markdown source from disk.
//!
//! One read of the whole file. I/O errors map onto the input variants of
//! [`PublishError`].

use crate::error::PublishError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a Markdown file as UTF-8 text.
pub async fn read_markdown(path: &Path) -> Result<String, PublishError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) => Err(map_io_error(path, e)),
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> PublishError {
    match e.kind() {
        ErrorKind::NotFound => PublishError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => PublishError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => PublishError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
