pub mod record;
pub mod report;

pub use record::{EntryKind, EntryRecord, HashCell, MISSING};
pub use report::{ReportOutput, SkippedEntry};
