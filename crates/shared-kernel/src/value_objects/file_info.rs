// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::{Borrow, Cow},
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Wrapper around `PathBuf` that guarantees UTF-8 displayability in higher layers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntryPath(PathBuf);

impl EntryPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.0.display()
    }

    /// Returns a UTF-8 view suitable for reports; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    pub fn file_name(&self) -> Option<EntryName> {
        self.0
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| EntryName::new(s.to_string()))
    }

    pub fn extension(&self) -> FileExtension {
        self.file_name()
            .map(|name| FileExtension::from_file_name(name.as_str()))
            .unwrap_or_default()
    }
}

impl From<PathBuf> for EntryPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for EntryPath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}
impl From<&str> for EntryPath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}
impl From<String> for EntryPath {
    fn from(path: String) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for EntryPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
impl Deref for EntryPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl Borrow<Path> for EntryPath {
    fn borrow(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// UTF-8 entry name captured during scanning; non UTF-8 names are lossy converted earlier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntryName(String);

impl EntryName {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for EntryName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercased file extension including the leading dot (".mp4"), or empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: String) -> Self {
        Self(ext.to_ascii_lowercase())
    }

    /// Extracts the extension from a bare entry name. The last dot starts the
    /// extension unless every character before it is itself a dot, so names
    /// like `.bashrc` carry no extension while `archive.tar.gz` yields ".gz".
    pub fn from_file_name(name: &str) -> Self {
        match name.rfind('.') {
            Some(idx) if name[..idx].bytes().any(|b| b != b'.') => Self::new(name[idx..].to_string()),
            _ => Self::no_ext(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn no_ext() -> Self {
        Self(String::new())
    }
}

impl Default for FileExtension {
    fn default() -> Self {
        Self::no_ext()
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext.to_string())
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(noext)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FileSize {
    /// Human readable representation in 1024-based units (Bytes, KB, MB, GB, TB).
    ///
    /// Zero renders as "0 Bytes"; everything else carries at least one decimal
    /// ("512.0 Bytes", "1.5 KB"). Sizes past the TB bucket stay in TB.
    pub fn to_human(self) -> String {
        const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

        let bytes = self.bytes();
        if bytes == 0 {
            return "0 Bytes".to_string();
        }

        let exp = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
        let value = bytes as f64 / 1024f64.powi(exp as i32);
        format!("{} {}", trim_trailing_zero(value), UNITS[exp])
    }
}

// Round to two decimals, then drop one trailing zero so that whole values
// render as "1.0" rather than "1.00".
fn trim_trailing_zero(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.ends_with('0') {
        text.pop();
    }
    text
}

/// Local timestamp attached to an entry (creation or modification time).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntryTimestamp(DateTime<Local>);

impl EntryTimestamp {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.0
    }
}

impl From<DateTime<Local>> for EntryTimestamp {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl fmt::Display for EntryTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
