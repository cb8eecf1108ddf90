// crates/usecase/src/dto.rs
use std::path::PathBuf;

use dirlist_domain::config::Config;

/// Input DTO describing one report run.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub root: PathBuf,
    pub include_hash: bool,
    pub include_subfolders: bool,
    pub keep_going: bool,
}

impl From<&Config> for ReportRequest {
    fn from(config: &Config) -> Self {
        Self {
            root: config.root.clone(),
            include_hash: config.include_hash,
            include_subfolders: config.include_subfolders,
            keep_going: config.keep_going,
        }
    }
}
