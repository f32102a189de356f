use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Flat recursive listing of everything beneath a root (the root itself excluded).
#[derive(Clone, Debug, Default)]
pub struct TreeListing {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Walks `root` depth-first with siblings in file-name order. Symlinks are not followed.
pub fn list_tree(root: &Path) -> Result<TreeListing> {
    let mut listing = TreeListing::default();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let ft = entry.file_type();
        if ft.is_dir() {
            listing.dirs.push(entry.into_path());
        } else if ft.is_file() {
            listing.files.push(entry.into_path());
        }
    }
    debug!(
        root = %root.display(),
        dirs = listing.dirs.len(),
        files = listing.files.len(),
        "scanned tree"
    );
    Ok(listing)
}
