//! Value object re-exports shared across the domain.

pub use dirlist_shared_kernel::value_objects::{
    ContentDigest, EntryName, EntryPath, EntryTimestamp, FileExtension, FileSize,
};
