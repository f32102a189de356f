//! Naming-convention predicates for backup trees.
//!
//! Expected layout under the root:
//!
//! ```text
//! <root>/.../Backup Files <stamp>/Backup Set <stamp>/Backup files <N>.zip
//! ```
//!
//! `Backup Set` sits inside `Backup Files` here on purpose. Windows Backup itself
//! nests them the other way round; do not flip the order back.
//!
//! Both predicates work on path components, so repeated or trailing separators
//! never affect the outcome.

use crate::domain::{ArchiveFile, SnapshotFolder};
use std::path::{Component, Path};
use tracing::trace;

pub const BACKUP_FILES_PREFIX: &str = "Backup Files";
pub const BACKUP_SET_PREFIX: &str = "Backup Set";
pub const ARCHIVE_PREFIX: &str = "Backup files ";
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Normal segments of `candidate` below `root`, or `None` when `candidate` is not under `root`.
/// Non UTF-8 segments never match a naming rule, so they also yield `None`.
fn segments_below<'a>(root: &Path, candidate: &'a Path) -> Option<Vec<&'a str>> {
    let rel = candidate.strip_prefix(root).ok()?;
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_str()),
            _ => None,
        })
        .collect()
}

/// True when `candidate` is a `Backup Set*` directory sitting directly inside a
/// `Backup Files*` directory, both below `root`. Case-sensitive.
pub fn is_snapshot_dir(root: &Path, candidate: &Path) -> bool {
    let Some(segs) = segments_below(root, candidate) else {
        return false;
    };
    match segs.as_slice() {
        [.., parent, last] => {
            parent.starts_with(BACKUP_FILES_PREFIX) && last.starts_with(BACKUP_SET_PREFIX)
        }
        _ => false,
    }
}

/// Filters a directory listing down to snapshot folders, keeping listing order.
pub fn find_snapshot_folders<P: AsRef<Path>>(root: &Path, dirs: &[P]) -> Vec<SnapshotFolder> {
    dirs.iter()
        .map(AsRef::as_ref)
        .filter(|d| is_snapshot_dir(root, d))
        .inspect(|d| trace!(dir = %d.display(), "snapshot folder"))
        .map(SnapshotFolder::new)
        .collect()
}

/// Parses `Backup files <digits>.zip` and returns the number.
/// Indices that overflow `u64` are treated as non-matching.
pub fn parse_archive_name(name: &str) -> Option<u64> {
    let digits = name
        .strip_prefix(ARCHIVE_PREFIX)?
        .strip_suffix(ARCHIVE_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Archive index of `file` when it is a numbered part stored directly in `folder`.
pub fn archive_index(folder: &Path, file: &Path) -> Option<u64> {
    if file.parent()? != folder {
        return None;
    }
    parse_archive_name(file.file_name()?.to_str()?)
}

/// Numbered archives of one snapshot folder, in listing order.
pub fn archives_in<P: AsRef<Path>>(folder: &SnapshotFolder, files: &[P]) -> Vec<ArchiveFile> {
    files
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|f| {
            archive_index(folder.path(), f).map(|index| ArchiveFile {
                path: f.to_path_buf(),
                index,
                folder: folder.path.clone(),
            })
        })
        .collect()
}
