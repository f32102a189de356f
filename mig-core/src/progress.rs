use crate::domain::ArchiveFile;

/// Callbacks fired while a restore plan is applied. Positions are 1-based.
///
/// All methods default to no-ops so a shell only overrides what it renders.
pub trait RestoreObserver {
    fn archive_started(&mut self, _position: usize, _total: usize, _archive: &ArchiveFile) {}

    /// `entries` is the archive's entry count, known once it is opened.
    fn archive_opened(&mut self, _archive: &ArchiveFile, _entries: usize) {}

    fn entry_processed(&mut self, _position: usize, _entries: usize, _name: &str) {}

    fn archive_finished(&mut self, _position: usize, _total: usize, _archive: &ArchiveFile) {}
}

pub struct NoProgress;

impl RestoreObserver for NoProgress {}
