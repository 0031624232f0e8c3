// src/error.rs
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No markup was handed to the extractor, or the markup source could not be read.
    #[error("input error: {0}")]
    Input(String),

    /// Output directory or page image could not be written. Earlier pages stay on disk.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Records could not be encoded for `--dump`.
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    /// A required asset (e.g. an explicitly configured font) could not be loaded.
    #[error("cannot load asset {}: {reason}", path.display())]
    Asset { path: PathBuf, reason: String },
}

impl Error {
    pub fn write<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Write { path: path.into(), source: source.into() }
    }
}
