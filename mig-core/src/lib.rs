#![forbid(unsafe_code)]

pub mod error;
pub mod fsutil;

pub mod scan {
    pub mod matcher;
    pub mod walker;
}

pub mod plan {
    pub mod enumerate;
    pub mod resolve;
}

pub mod read {
    pub mod extract;
}

pub mod catalog;
pub mod domain;
pub mod progress;
pub mod restore;
pub mod stats;

// Re-exports: stable API surface
pub use catalog::Catalog;
pub use domain::{ArchiveFile, RestoreSelection, SnapshotFolder};
pub use error::{RestoreError, Result};
pub use progress::{NoProgress, RestoreObserver};
pub use read::extract::extract_archive;
pub use restore::RestorePlan;
pub use stats::{ExtractStats, RestoreSummary};
