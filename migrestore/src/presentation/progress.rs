use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use mig_core::{ArchiveFile, RestoreObserver};

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("[{bar:30.green/black}] {pos} of {len}  {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("## ")
}

/// Two bars on stderr: archives applied, and entries of the current archive.
pub struct BarObserver {
    _multi: MultiProgress,
    archives: ProgressBar,
    entries: ProgressBar,
}

impl BarObserver {
    pub fn new(total_archives: usize) -> Self {
        let multi = MultiProgress::new();
        let archives = multi.add(ProgressBar::new(total_archives as u64));
        archives.set_style(bar_style());
        let entries = multi.add(ProgressBar::new(0));
        entries.set_style(bar_style());
        Self {
            _multi: multi,
            archives,
            entries,
        }
    }

    pub fn finish(&self) {
        self.entries.finish_and_clear();
        self.archives.finish();
    }
}

impl RestoreObserver for BarObserver {
    fn archive_started(&mut self, position: usize, _total: usize, archive: &ArchiveFile) {
        self.archives.set_position(position.saturating_sub(1) as u64);
        self.archives.set_message(archive.path.display().to_string());
    }

    fn archive_opened(&mut self, _archive: &ArchiveFile, entries: usize) {
        self.entries.reset();
        self.entries.set_length(entries as u64);
    }

    fn entry_processed(&mut self, position: usize, _entries: usize, name: &str) {
        self.entries.set_position(position as u64);
        self.entries.set_message(name.to_owned());
    }

    fn archive_finished(&mut self, position: usize, _total: usize, _archive: &ArchiveFile) {
        self.archives.set_position(position as u64);
    }
}
