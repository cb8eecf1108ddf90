// crates/infra/src/filesystem.rs
use std::{
    fs::Metadata,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use dirlist_ports::filesystem::{DirectoryScanner, RawEntry, RawEntryKind, ScanOutcome, ScanRequest, SkippedPath};
use dirlist_shared_kernel::{InfrastructureError, Result};
use ignore::WalkBuilder;

/// Filesystem adapter implementing the `DirectoryScanner` port.
///
/// Flat scans list the immediate children of the root; recursive scans walk
/// the whole tree. Entries are reported in the order the platform yields
/// them, without sorting.
#[derive(Debug, Default)]
pub struct FsDirectoryScanner;

impl FsDirectoryScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(request: &ScanRequest) -> Result<ScanOutcome> {
        if request.include_subfolders {
            scan_recursive(&request.root, request.keep_going)
        } else {
            scan_flat(&request.root, request.keep_going)
        }
    }
}

impl DirectoryScanner for FsDirectoryScanner {
    fn scan(&self, request: &ScanRequest) -> Result<ScanOutcome> {
        Self::enumerate(request)
    }
}

fn scan_flat(root: &Path, keep_going: bool) -> Result<ScanOutcome> {
    let read_dir = std::fs::read_dir(root).map_err(|source| fs_error("read_dir", root, source))?;

    let mut outcome = ScanOutcome::default();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(entry) => entry,
            Err(source) => {
                if keep_going {
                    outcome.skipped.push(skipped(root.to_path_buf(), &source));
                    continue;
                }
                return Err(fs_error("read_dir", root, source).into());
            }
        };

        let path = dir_entry.path();
        // metadata() follows symlinks, so a link to a directory lists as a
        // directory here.
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(source) => {
                // Unreadable children (broken links included) vanish from a
                // flat listing; keep-going runs still report them.
                if keep_going {
                    outcome.skipped.push(skipped(path, &source));
                }
                continue;
            }
        };

        if metadata.is_file() {
            outcome.entries.push(file_entry(path, &metadata));
        } else if metadata.is_dir() {
            // Flat listings show directories bare: no dates, no size.
            outcome.entries.push(bare_directory_entry(path));
        }
    }

    Ok(outcome)
}

fn scan_recursive(root: &Path, keep_going: bool) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                if keep_going {
                    outcome.skipped.push(SkippedPath {
                        path: root.to_path_buf(),
                        reason: err.to_string(),
                    });
                    continue;
                }
                return Err(fs_error("walk", root, std::io::Error::other(err)).into());
            }
        };

        // The walker yields the root itself first; the listing starts below it.
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.into_path();
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(source) => {
                if keep_going {
                    outcome.skipped.push(skipped(path, &source));
                }
                continue;
            }
        };

        if metadata.is_file() {
            outcome.entries.push(file_entry(path, &metadata));
        } else if metadata.is_dir() {
            // Unlike flat listings, walked directories carry their dates.
            outcome.entries.push(dated_directory_entry(path, &metadata));
        }
    }

    Ok(outcome)
}

fn file_entry(path: PathBuf, metadata: &Metadata) -> RawEntry {
    let name = entry_name(&path);
    RawEntry {
        path,
        kind: RawEntryKind::File,
        name,
        size: Some(metadata.len()),
        created: created_time(metadata),
        modified: modified_time(metadata),
    }
}

fn dated_directory_entry(path: PathBuf, metadata: &Metadata) -> RawEntry {
    let name = entry_name(&path);
    RawEntry {
        path,
        kind: RawEntryKind::Directory,
        name,
        size: None,
        created: created_time(metadata),
        modified: modified_time(metadata),
    }
}

fn bare_directory_entry(path: PathBuf) -> RawEntry {
    let name = entry_name(&path);
    RawEntry {
        path,
        kind: RawEntryKind::Directory,
        name,
        size: None,
        created: None,
        modified: None,
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

fn modified_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    metadata.modified().ok().map(DateTime::<Local>::from)
}

fn created_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    if let Ok(created) = metadata.created() {
        return Some(DateTime::<Local>::from(created));
    }
    fallback_created_time(metadata)
}

// Filesystems without birth-time support fall back to the inode change time.
#[cfg(unix)]
fn fallback_created_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    use chrono::TimeZone;

    Local.timestamp_opt(metadata.ctime(), metadata.ctime_nsec() as u32).single()
}

#[cfg(not(unix))]
fn fallback_created_time(_metadata: &Metadata) -> Option<DateTime<Local>> {
    None
}

fn fs_error(operation: &str, path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileSystemOperation {
        operation: operation.to_string(),
        path: path.to_path_buf(),
        source,
    }
}

fn skipped(path: PathBuf, source: &std::io::Error) -> SkippedPath {
    SkippedPath { path, reason: source.to_string() }
}
