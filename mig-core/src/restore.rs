use crate::domain::{ArchiveFile, RestoreSelection};
use crate::error::Result;
use crate::fsutil::ensure_dir;
use crate::plan::enumerate::enumerate_archives;
use crate::progress::RestoreObserver;
use crate::read::extract::extract_archive;
use crate::stats::RestoreSummary;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Snapshots to replay and the archives they contribute, in application order.
#[derive(Clone, Debug, Serialize)]
pub struct RestorePlan {
    pub selection: RestoreSelection,
    pub archives: Vec<ArchiveFile>,
}

impl RestorePlan {
    pub fn build(selection: RestoreSelection, files: &[PathBuf]) -> Result<Self> {
        let archives = enumerate_archives(&selection, files)?;
        Ok(Self {
            selection,
            archives,
        })
    }

    /// Applies every archive in order over `output`.
    ///
    /// Runs strictly one archive after another: later sets must overwrite
    /// what earlier ones wrote.
    pub fn apply(
        &self,
        output: &Path,
        observer: &mut dyn RestoreObserver,
    ) -> Result<RestoreSummary> {
        ensure_dir(output)?;

        let total = self.archives.len();
        let mut summary = RestoreSummary {
            restore_point: self.selection.target().path.clone(),
            output: output.to_path_buf(),
            snapshots: self.selection.len(),
            ..Default::default()
        };

        for (i, archive) in self.archives.iter().enumerate() {
            observer.archive_started(i + 1, total, archive);
            let stats = extract_archive(archive, output, observer)?;
            summary.absorb(stats);
            observer.archive_finished(i + 1, total, archive);
        }

        info!(
            point = %summary.restore_point.display(),
            archives = summary.archives,
            files = summary.files,
            "restore complete"
        );
        Ok(summary)
    }
}
