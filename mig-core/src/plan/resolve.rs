use crate::domain::{RestoreSelection, SnapshotFolder};
use crate::error::{RestoreError, Result};
use std::cmp::Ordering;
use std::path::Path;

/// Byte-wise comparison of the full path strings.
///
/// Not `Path`'s component ordering and not a natural sort: `Backup Set 10`
/// lands between `Backup Set 1` and `Backup Set 2`. The backup tool stamps set
/// names so that this order is chronological.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    a.as_os_str()
        .as_encoded_bytes()
        .cmp(b.as_os_str().as_encoded_bytes())
}

/// Stable sort into restore order, earliest first.
pub fn sort_points(points: &mut [SnapshotFolder]) {
    points.sort_by(|a, b| compare_paths(a.path(), b.path()));
}

/// Inclusive prefix of `sorted` ending at `index`.
pub fn select_index(sorted: &[SnapshotFolder], index: usize) -> Result<RestoreSelection> {
    if index >= sorted.len() {
        return Err(RestoreError::InvalidSelectionIndex {
            index,
            count: sorted.len(),
        });
    }
    Ok(RestoreSelection::from_prefix(sorted[..=index].to_vec()))
}

/// Sorts `points` and returns every snapshot up to and including `target`.
///
/// Each set only holds what changed since the previous one, so restoring a
/// point means replaying all earlier sets before it.
pub fn resolve(points: &[SnapshotFolder], target: &Path) -> Result<RestoreSelection> {
    let mut sorted = points.to_vec();
    sort_points(&mut sorted);
    let index = sorted
        .iter()
        .position(|p| p.path() == target)
        .ok_or_else(|| RestoreError::SelectionNotFound {
            path: target.to_path_buf(),
        })?;
    select_index(&sorted, index)
}
