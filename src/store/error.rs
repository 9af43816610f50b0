//! Store error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`MarkStore`](super::MarkStore) operations
#[derive(Debug, Error)]
pub enum MarkError {
    /// Index argument is not an integer or is out of range
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    /// Bookmark file content is not a JSON array of strings
    #[error("Failed to decode bookmark file {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Directory could not be resolved to an absolute path
    #[error("Failed to resolve directory {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resolved directory cannot be stored as a JSON string
    #[error("Directory path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Reading or writing the bookmark file failed
    #[error("Failed to access bookmark file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
