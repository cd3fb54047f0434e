//! Error types for entry sources

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

/// Failures raised while obtaining listings or file content.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("invalid listing: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid repository identifier: {0}")]
    InvalidRepository(String),

    #[error("no such file: {0}")]
    NotFound(String),

    #[error("not a file: {0}")]
    NotAFile(String),

    #[error("file content not available from this source: {0}")]
    ContentUnavailable(String),
}
