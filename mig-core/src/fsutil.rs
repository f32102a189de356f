use crate::error::{RestoreError, Result};
use std::path::Path;

/// Fails with `InvalidPath` unless `p` names an existing directory.
pub fn ensure_dir(p: &Path) -> Result<()> {
    if p.as_os_str().is_empty() {
        return Err(RestoreError::InvalidPath {
            path: p.to_path_buf(),
            reason: "path is empty",
        });
    }
    match std::fs::metadata(p) {
        Ok(md) if md.is_dir() => Ok(()),
        Ok(_) => Err(RestoreError::InvalidPath {
            path: p.to_path_buf(),
            reason: "not a directory",
        }),
        Err(_) => Err(RestoreError::InvalidPath {
            path: p.to_path_buf(),
            reason: "the directory does not exist",
        }),
    }
}
