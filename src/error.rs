// src/error.rs
use thiserror::Error;

/// Everything the pipeline can fail with. There is no recovery layer:
/// callers either surface the message or propagate with `?`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid search URL {url}: {reason}")]
    Url { url: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
