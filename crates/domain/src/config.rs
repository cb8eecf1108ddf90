// crates/domain/src/config.rs
use std::path::PathBuf;

use crate::options::{OutputFormat, SortKey};

/// Domain representation of resolved configuration options.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub include_hash: bool,
    pub include_subfolders: bool,
    pub keep_going: bool,
    pub quiet: bool,
    pub format: OutputFormat,
    pub sort_specs: Vec<(SortKey, bool)>,
    pub output: Option<PathBuf>,
    pub types_file: Option<PathBuf>,
}

impl Config {
    /// Baseline configuration for a flat, hash-less table listing of `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hash: false,
            include_subfolders: false,
            keep_going: false,
            quiet: false,
            format: OutputFormat::Table,
            sort_specs: Vec::new(),
            output: None,
            types_file: None,
        }
    }
}
