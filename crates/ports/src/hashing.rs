// crates/ports/src/hashing.rs
use std::path::Path;

use dirlist_shared_kernel::{ContentDigest, Result};

/// Port for producing a content digest of a single file.
pub trait FileHasher: Send + Sync {
    fn digest_file(&self, path: &Path) -> Result<ContentDigest>;
}
