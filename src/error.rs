//! Error type for the sync pipeline.
//!
//! Every failure carries the path it happened on, since a run touches
//! many small files and "No such file or directory" alone is useless.
//! There is no retry or recovery: the first error aborts the run and
//! already-written artifacts are left as they are.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the sync pipeline.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Reading or writing a file or directory failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file did not parse as the expected JSON shape, or a value
    /// could not be serialized for writing.
    #[error("json error at {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;
