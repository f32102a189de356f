// mig_core/src/domain.rs
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One backup session directory (`.../Backup Files*/Backup Set*`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SnapshotFolder {
    pub path: PathBuf,
}

impl SnapshotFolder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path segment, e.g. `Backup Set 2020-01-31 101500`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A numbered zip part (`Backup files N.zip`) inside a snapshot folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchiveFile {
    pub path: PathBuf,
    pub index: u64,
    pub folder: PathBuf,
}

/// Snapshots to replay, earliest first, ending at the chosen restore point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestoreSelection {
    points: Vec<SnapshotFolder>,
}

impl RestoreSelection {
    // Only the resolver builds these, so the prefix invariant holds.
    pub(crate) fn from_prefix(points: Vec<SnapshotFolder>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    pub fn points(&self) -> &[SnapshotFolder] {
        &self.points
    }

    pub fn target(&self) -> &SnapshotFolder {
        // from_prefix never receives an empty prefix
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_name_is_last_segment() {
        let f = SnapshotFolder::new("/mig/Backup Files 2020/Backup Set 3");
        assert_eq!(f.name(), "Backup Set 3");
    }

    #[test]
    fn selection_target_is_last_point() {
        let sel = RestoreSelection::from_prefix(vec![
            SnapshotFolder::new("/r/Backup Files/Backup Set 1"),
            SnapshotFolder::new("/r/Backup Files/Backup Set 2"),
        ]);
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.target().name(), "Backup Set 2");
    }
}
