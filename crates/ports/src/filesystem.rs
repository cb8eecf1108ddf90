// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use dirlist_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling directory enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub root: PathBuf,
    pub include_subfolders: bool,
    pub keep_going: bool,
}

/// Kind of entry discovered by a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawEntryKind {
    File,
    Directory,
}

/// DTO representing one entry discovered by an input port.
///
/// Metadata fields are optional: flat listings intentionally omit
/// directory dates and sizes, and some platforms cannot report a
/// creation time at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    pub path: PathBuf,
    pub kind: RawEntryKind,
    pub name: String,
    pub size: Option<u64>,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
}

/// Entry the scanner could not read, reported when the request asked to
/// keep going past errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one scan: the entries found plus whatever was skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub entries: Vec<RawEntry>,
    pub skipped: Vec<SkippedPath>,
}

/// Port for enumerating directory entries with their metadata.
pub trait DirectoryScanner: Send + Sync {
    fn scan(&self, request: &ScanRequest) -> Result<ScanOutcome>;
}
