use dirlist_domain::{
    classifier::CategoryTable,
    model::{EntryKind, EntryRecord, HashCell, ReportOutput, SkippedEntry},
    value_objects::{EntryPath, EntryTimestamp, FileExtension, FileSize},
};
use dirlist_ports::{
    filesystem::{DirectoryScanner, RawEntry, RawEntryKind, ScanRequest},
    hashing::FileHasher,
    notify::Notifier,
};
use dirlist_shared_kernel::{ApplicationError, DirlistError, Result};

use crate::dto::ReportRequest;

/// Builds the metadata report for one directory.
///
/// Entries come back in scanner order; sorting (when requested) is applied
/// by the caller afterwards, so an unsorted run shows the enumeration order
/// of the underlying platform.
pub struct BuildReport<'a> {
    scanner: &'a dyn DirectoryScanner,
    hasher: &'a dyn FileHasher,
    notifier: &'a dyn Notifier,
}

impl<'a> BuildReport<'a> {
    pub fn new(
        scanner: &'a dyn DirectoryScanner,
        hasher: &'a dyn FileHasher,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self { scanner, hasher, notifier }
    }

    pub fn run(&self, request: &ReportRequest, categories: &CategoryTable) -> Result<ReportOutput> {
        let scan_request = ScanRequest {
            root: request.root.clone(),
            include_subfolders: request.include_subfolders,
            keep_going: request.keep_going,
        };

        let outcome = self.scanner.scan(&scan_request).map_err(|err| {
            DirlistError::from(ApplicationError::ScanFailed {
                reason: request.root.display().to_string(),
                source: Some(Box::new(err)),
            })
        })?;

        let mut skipped: Vec<SkippedEntry> = Vec::with_capacity(outcome.skipped.len());
        for skip in outcome.skipped {
            self.notifier
                .warn(&format!("skipping {}: {}", skip.path.display(), skip.reason));
            skipped.push(SkippedEntry { path: skip.path, reason: skip.reason });
        }

        let mut records = Vec::with_capacity(outcome.entries.len());
        for entry in outcome.entries {
            let kind = entry_kind(entry.kind);

            let hash = if request.include_hash && kind == EntryKind::File {
                match self.hasher.digest_file(&entry.path) {
                    Ok(digest) => HashCell::Digest(digest),
                    Err(err) if request.keep_going => {
                        self.notifier
                            .warn(&format!("skipping {}: {err}", entry.path.display()));
                        skipped.push(SkippedEntry { path: entry.path, reason: err.to_string() });
                        continue;
                    }
                    Err(err) => {
                        return Err(ApplicationError::HashingFailed {
                            reason: entry.path.display().to_string(),
                            source: Some(Box::new(err)),
                        }
                        .into());
                    }
                }
            } else {
                HashCell::absent(kind, request.include_hash)
            };

            records.push(to_record(entry, kind, hash, categories));
        }

        Ok(ReportOutput { records, skipped })
    }
}

fn entry_kind(kind: RawEntryKind) -> EntryKind {
    match kind {
        RawEntryKind::File => EntryKind::File,
        RawEntryKind::Directory => EntryKind::Directory,
    }
}

fn to_record(entry: RawEntry, kind: EntryKind, hash: HashCell, categories: &CategoryTable) -> EntryRecord {
    // Directories always classify through the empty extension, whatever their
    // name looks like; "movie.mp4" as a directory is still a folder.
    let category = match kind {
        EntryKind::Directory => categories.classify_extension(&FileExtension::no_ext()).to_string(),
        EntryKind::File => categories.classify_name(&entry.name).to_string(),
    };

    EntryRecord {
        kind,
        category,
        path: EntryPath::from(entry.path),
        created: entry.created.map(EntryTimestamp::new),
        modified: entry.modified.map(EntryTimestamp::new),
        size: entry.size.map(FileSize::new),
        hash,
    }
}
