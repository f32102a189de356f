use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: &'static str },

    #[error("no restore points found under {}", root.display())]
    NoRestorePointsFound { root: PathBuf },

    #[error("restore point not found: {}", path.display())]
    SelectionNotFound { path: PathBuf },

    #[error("restore point [{index}] is out of range ({count} available)")]
    InvalidSelectionIndex { index: usize, count: usize },

    #[error("no archives found for restore point {}", point.display())]
    NoArchivesFound { point: PathBuf },

    #[error("unreadable archive {}: {source}", path.display())]
    UnreadableArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("entry {entry:?} in {} escapes the output directory", archive.display())]
    UnsafeEntryPath { archive: PathBuf, entry: String },

    #[error("failed to write {}: {source}", path.display())]
    ExtractionWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, RestoreError>;
