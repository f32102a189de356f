use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Counters for one archive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    pub files: u64,
    pub dirs: u64,
    pub skipped: u64,
    pub bytes: u64,
}

/// Totals for a whole restore run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RestoreSummary {
    pub restore_point: PathBuf,
    pub output: PathBuf,
    pub snapshots: usize,
    pub archives: usize,
    pub files: u64,
    pub dirs: u64,
    pub skipped: u64,
    pub bytes: u64,
}

impl RestoreSummary {
    pub fn absorb(&mut self, s: ExtractStats) {
        self.archives += 1;
        self.files += s.files;
        self.dirs += s.dirs;
        self.skipped += s.skipped;
        self.bytes += s.bytes;
    }
}
