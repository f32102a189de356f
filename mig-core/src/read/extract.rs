use crate::domain::ArchiveFile;
use crate::error::{RestoreError, Result};
use crate::progress::RestoreObserver;
use crate::stats::ExtractStats;

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use zip::ZipArchive;
use zip::result::ZipError;

/// Alternate-data-stream sidecars Windows attaches to downloaded files.
pub const ZONE_IDENTIFIER_SUFFIX: &str = "Zone.Identifier";

#[derive(Debug, PartialEq, Eq)]
pub enum EntryAction {
    CreateDir(PathBuf),
    Write(PathBuf),
    Skip,
}

/// Decides what an entry named `name` does to `dest`.
pub fn classify_entry(dest: &Path, archive: &Path, name: &str) -> Result<EntryAction> {
    if name.ends_with(ZONE_IDENTIFIER_SUFFIX) {
        return Ok(EntryAction::Skip);
    }
    let rel = name.replace('\\', "/");
    let is_dir_marker = rel.rsplit('/').next().is_none_or(str::is_empty);
    let rel = rel.trim_end_matches('/');
    if rel.is_empty() {
        return Ok(EntryAction::Skip);
    }
    let p = safe_join(dest, rel).ok_or_else(|| RestoreError::UnsafeEntryPath {
        archive: archive.to_path_buf(),
        entry: name.to_owned(),
    })?;
    if is_dir_marker {
        Ok(EntryAction::CreateDir(p))
    } else {
        Ok(EntryAction::Write(p))
    }
}

fn safe_join(root: &Path, rel: &str) -> Option<PathBuf> {
    let p = Path::new(rel);
    let escapes = p
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes { None } else { Some(root.join(p)) }
}

fn create_dirs(p: &Path) -> Result<()> {
    fs::create_dir_all(p).map_err(|source| RestoreError::ExtractionWriteFailure {
        path: p.to_path_buf(),
        source,
    })
}

fn write_entry(src: &mut dyn Read, archive: &Path, outp: &Path, buf: &mut [u8]) -> Result<u64> {
    let write_failed = |source| RestoreError::ExtractionWriteFailure {
        path: outp.to_path_buf(),
        source,
    };
    let mut out = File::create(outp).map_err(write_failed)?;
    let mut total = 0u64;
    loop {
        let k = match src.read(buf) {
            Ok(0) => break,
            Ok(k) => k,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(RestoreError::UnreadableArchive {
                    path: archive.to_path_buf(),
                    source: ZipError::Io(e),
                });
            }
        };
        out.write_all(&buf[..k]).map_err(write_failed)?;
        total += k as u64;
    }
    out.flush().map_err(write_failed)?;
    Ok(total)
}

/// Unpacks one archive over `dest`, overwriting files that already exist.
///
/// Stops at the first failure; whatever was written before it stays on disk.
pub fn extract_archive(
    archive: &ArchiveFile,
    dest: &Path,
    observer: &mut dyn RestoreObserver,
) -> Result<ExtractStats> {
    let unreadable = |source| RestoreError::UnreadableArchive {
        path: archive.path.clone(),
        source,
    };
    let f = File::open(&archive.path).map_err(|e| unreadable(ZipError::Io(e)))?;
    let mut zip = ZipArchive::new(BufReader::new(f)).map_err(unreadable)?;
    let entries = zip.len();
    observer.archive_opened(archive, entries);

    let mut stats = ExtractStats::default();
    let mut buf = vec![0u8; 1 << 16];

    for i in 0..entries {
        let mut entry = zip.by_index(i).map_err(unreadable)?;
        let name = entry.name().to_owned();
        match classify_entry(dest, &archive.path, &name)? {
            EntryAction::Skip => {
                trace!(entry = %name, "skipped");
                stats.skipped += 1;
            }
            EntryAction::CreateDir(p) => {
                create_dirs(&p)?;
                stats.dirs += 1;
            }
            EntryAction::Write(p) => {
                if let Some(parent) = p.parent() {
                    create_dirs(parent)?;
                }
                stats.bytes += write_entry(&mut entry, &archive.path, &p, &mut buf)?;
                stats.files += 1;
            }
        }
        observer.entry_processed(i + 1, entries, &name);
    }

    debug!(
        archive = %archive.path.display(),
        files = stats.files,
        dirs = stats.dirs,
        skipped = stats.skipped,
        "extracted"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use std::io::Cursor;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn dest() -> PathBuf {
        PathBuf::from("/out")
    }

    fn classify(name: &str) -> EntryAction {
        classify_entry(&dest(), Path::new("/a.zip"), name).unwrap()
    }

    #[test]
    fn plain_files_join_under_dest() {
        assert_eq!(classify("a.txt"), EntryAction::Write(dest().join("a.txt")));
        assert_eq!(
            classify("C/Users/me/doc.txt"),
            EntryAction::Write(dest().join("C/Users/me/doc.txt"))
        );
    }

    #[test]
    fn backslashes_become_separators() {
        assert_eq!(
            classify("C\\Users\\me\\doc.txt"),
            EntryAction::Write(dest().join("C/Users/me/doc.txt"))
        );
    }

    #[test]
    fn directory_markers_create_dirs() {
        assert_eq!(classify("C/Users/"), EntryAction::CreateDir(dest().join("C/Users")));
        assert_eq!(classify("/"), EntryAction::Skip);
        assert_eq!(classify(""), EntryAction::Skip);
    }

    #[test]
    fn zone_identifier_is_skipped() {
        assert_eq!(classify("foo/bar.txt:Zone.Identifier"), EntryAction::Skip);
        assert_eq!(classify("Zone.Identifier"), EntryAction::Skip);
        assert_eq!(
            classify("Zone.Identifier.txt"),
            EntryAction::Write(dest().join("Zone.Identifier.txt"))
        );
    }

    #[test]
    fn escaping_entries_are_rejected() {
        for name in ["../evil.txt", "a/../../evil.txt", "/etc/passwd"] {
            let err = classify_entry(&dest(), Path::new("/a.zip"), name).unwrap_err();
            assert!(matches!(err, RestoreError::UnsafeEntryPath { .. }), "{name}");
        }
    }

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zw = ZipWriter::new(File::create(path).unwrap());
        for (name, data) in entries {
            if name.ends_with('/') {
                zw.add_directory(*name, SimpleFileOptions::default()).unwrap();
            } else {
                zw.start_file(*name, SimpleFileOptions::default()).unwrap();
                zw.write_all(data.as_bytes()).unwrap();
            }
        }
        zw.finish().unwrap();
    }

    fn archive(path: &Path) -> ArchiveFile {
        ArchiveFile {
            path: path.to_path_buf(),
            index: 0,
            folder: path.parent().unwrap().to_path_buf(),
        }
    }

    #[test]
    fn extracts_and_overwrites() {
        let td = tempfile::tempdir().unwrap();
        let zp = td.path().join("Backup files 0.zip");
        write_zip(
            &zp,
            &[
                ("empty/", ""),
                ("docs/a.txt", "new"),
                ("docs/a.txt:Zone.Identifier", "[ZoneTransfer]"),
            ],
        );
        let out = td.path().join("out");
        fs::create_dir_all(out.join("docs")).unwrap();
        fs::write(out.join("docs/a.txt"), b"old and longer").unwrap();

        let stats = extract_archive(&archive(&zp), &out, &mut NoProgress).unwrap();
        assert_eq!(
            stats,
            ExtractStats {
                files: 1,
                dirs: 1,
                skipped: 1,
                bytes: 3
            }
        );
        assert_eq!(fs::read(out.join("docs/a.txt")).unwrap(), b"new");
        assert!(out.join("empty").is_dir());
        assert!(!out.join("docs/a.txt:Zone.Identifier").exists());
    }

    #[test]
    fn garbage_is_unreadable() {
        let td = tempfile::tempdir().unwrap();
        let zp = td.path().join("Backup files 0.zip");
        fs::write(&zp, b"definitely not a zip").unwrap();
        let err = extract_archive(&archive(&zp), td.path(), &mut NoProgress).unwrap_err();
        assert!(matches!(err, RestoreError::UnreadableArchive { .. }));
    }

    #[test]
    fn missing_archive_is_unreadable() {
        let td = tempfile::tempdir().unwrap();
        let zp = td.path().join("Backup files 9.zip");
        let err = extract_archive(&archive(&zp), td.path(), &mut NoProgress).unwrap_err();
        assert!(matches!(err, RestoreError::UnreadableArchive { .. }));
    }

    #[test]
    fn file_in_the_way_of_a_directory_is_a_write_failure() {
        let td = tempfile::tempdir().unwrap();
        let zp = td.path().join("Backup files 0.zip");
        write_zip(&zp, &[("docs/a.txt", "x")]);
        let out = td.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("docs"), b"i am a file").unwrap();
        let err = extract_archive(&archive(&zp), &out, &mut NoProgress).unwrap_err();
        assert!(matches!(err, RestoreError::ExtractionWriteFailure { .. }));
    }

    #[test]
    fn observer_sees_every_entry() {
        #[derive(Default)]
        struct Seen(Vec<(usize, usize, String)>, Option<usize>);
        impl RestoreObserver for Seen {
            fn archive_opened(&mut self, _a: &ArchiveFile, entries: usize) {
                self.1 = Some(entries);
            }
            fn entry_processed(&mut self, pos: usize, entries: usize, name: &str) {
                self.0.push((pos, entries, name.to_owned()));
            }
        }

        let td = tempfile::tempdir().unwrap();
        let zp = td.path().join("Backup files 0.zip");
        write_zip(&zp, &[("a", "1"), ("b:Zone.Identifier", "")]);
        let mut seen = Seen::default();
        extract_archive(&archive(&zp), &td.path().join("o"), &mut seen).unwrap();
        assert_eq!(seen.1, Some(2));
        assert_eq!(
            seen.0,
            vec![(1, 2, "a".to_owned()), (2, 2, "b:Zone.Identifier".to_owned())]
        );
    }

    #[test]
    fn write_entry_counts_bytes() {
        let td = tempfile::tempdir().unwrap();
        let outp = td.path().join("f");
        let mut src = Cursor::new(vec![7u8; 200_000]);
        let mut buf = vec![0u8; 1 << 16];
        let n = write_entry(&mut src, Path::new("/a.zip"), &outp, &mut buf).unwrap();
        assert_eq!(n, 200_000);
        assert_eq!(fs::metadata(&outp).unwrap().len(), 200_000);
    }
}
