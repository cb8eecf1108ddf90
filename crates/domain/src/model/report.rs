// crates/domain/src/model/report.rs
use std::path::PathBuf;

use crate::model::EntryRecord;

/// Entry that could not be read during a keep-going run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Finished report: the records to present plus everything skipped on the way.
#[derive(Debug, Clone, Default)]
pub struct ReportOutput {
    pub records: Vec<EntryRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl ReportOutput {
    pub fn file_count(&self) -> usize {
        self.records.iter().filter(|r| !r.kind.is_dir()).count()
    }

    pub fn folder_count(&self) -> usize {
        self.records.iter().filter(|r| r.kind.is_dir()).count()
    }
}
