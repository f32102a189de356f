use crate::domain::SnapshotFolder;
use crate::error::{RestoreError, Result};
use crate::fsutil::ensure_dir;
use crate::plan::resolve::{resolve, select_index, sort_points};
use crate::restore::RestorePlan;
use crate::scan::matcher::find_snapshot_folders;
use crate::scan::walker::{TreeListing, list_tree};

use std::path::{Path, PathBuf};
use tracing::info;

/// Restore points found under one root, sorted earliest first, together with
/// the file listing their archives are picked from.
#[derive(Clone, Debug)]
pub struct Catalog {
    root: PathBuf,
    points: Vec<SnapshotFolder>,
    files: Vec<PathBuf>,
}

impl Catalog {
    /// Validates `root`, scans it once and matches snapshot folders.
    pub fn discover(root: &Path) -> Result<Self> {
        ensure_dir(root)?;
        let listing = list_tree(root)?;
        Self::from_listing(root, listing)
    }

    pub fn from_listing(root: &Path, listing: TreeListing) -> Result<Self> {
        let mut points = find_snapshot_folders(root, &listing.dirs);
        if points.is_empty() {
            return Err(RestoreError::NoRestorePointsFound {
                root: root.to_path_buf(),
            });
        }
        sort_points(&mut points);
        info!(root = %root.display(), points = points.len(), "restore points found");
        Ok(Self {
            root: root.to_path_buf(),
            points,
            files: listing.files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn points(&self) -> &[SnapshotFolder] {
        &self.points
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Plan for the point at `index` in [`Catalog::points`].
    pub fn plan_index(&self, index: usize) -> Result<RestorePlan> {
        let selection = select_index(&self.points, index)?;
        RestorePlan::build(selection, &self.files)
    }

    /// Plan for the point whose folder is `target`.
    pub fn plan_for(&self, target: &Path) -> Result<RestorePlan> {
        let selection = resolve(&self.points, target)?;
        RestorePlan::build(selection, &self.files)
    }
}
