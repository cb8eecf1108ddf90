// crates/infra/src/hashing.rs
use std::{io::Read, path::Path};

use dirlist_ports::hashing::FileHasher;
use dirlist_shared_kernel::{ContentDigest, InfrastructureError, Result};
use sha2::{Digest, Sha256};

use crate::persistence::FileReader;

/// Read granularity for streaming digests. Files larger than one chunk are
/// fed to the hasher incrementally rather than loaded whole.
const CHUNK_SIZE: usize = 8192;

/// SHA-256 implementation of the `FileHasher` port.
#[derive(Debug, Default)]
pub struct Sha256FileHasher;

impl Sha256FileHasher {
    pub fn new() -> Self {
        Self
    }

    pub fn digest(path: &Path) -> Result<ContentDigest> {
        let mut file = FileReader::open(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;

        let mut hasher = Sha256::new();
        let mut buf = [0u8; CHUNK_SIZE];
        loop {
            let read = file
                .read(&mut buf)
                .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
            if read == 0 {
                break;
            }
            hasher.update(&buf[..read]);
        }

        Ok(ContentDigest::from(format!("{:x}", hasher.finalize())))
    }
}

impl FileHasher for Sha256FileHasher {
    fn digest_file(&self, path: &Path) -> Result<ContentDigest> {
        Self::digest(path)
    }
}
