// crates/shared-kernel/src/value_objects/mod.rs
pub mod digest;
pub mod file_info;

pub use digest::ContentDigest;
pub use file_info::{EntryName, EntryPath, EntryTimestamp, FileExtension, FileSize};
