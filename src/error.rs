/// Error types for the gallery splicer
///
/// Every variant is terminal: the caller reports it and exits non-zero.
/// None of them are raised after the document has been written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    /// A marker string was not found in the document (or was empty)
    #[error("marker '{marker}' not found in document")]
    MissingMarker { marker: String },

    /// The end marker starts before the start marker finishes
    #[error("end marker at byte {end} precedes start marker at byte {start}")]
    MalformedDocument { start: usize, end: usize },

    #[error("failed to read document {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write document {}: {source}", path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read thumbnail directory {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Background listing task panicked or was cancelled
    #[error("task join error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
