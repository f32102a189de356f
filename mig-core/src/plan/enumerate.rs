use crate::domain::{ArchiveFile, RestoreSelection};
use crate::error::{RestoreError, Result};
use crate::scan::matcher::archives_in;
use std::path::Path;
use tracing::debug;

/// Archives of every selected snapshot, folder by folder.
///
/// No dedup across folders: the same part number in a later set is applied
/// again and overwrites what the earlier one wrote.
pub fn enumerate_archives<P: AsRef<Path>>(
    selection: &RestoreSelection,
    files: &[P],
) -> Result<Vec<ArchiveFile>> {
    let mut out = Vec::new();
    for folder in selection.points() {
        let found = archives_in(folder, files);
        debug!(folder = %folder.path.display(), archives = found.len(), "enumerated");
        out.extend(found);
    }
    if out.is_empty() {
        return Err(RestoreError::NoArchivesFound {
            point: selection.target().path.clone(),
        });
    }
    Ok(out)
}
