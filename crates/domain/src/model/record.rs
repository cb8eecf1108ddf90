// crates/domain/src/model/record.rs
use crate::value_objects::{ContentDigest, EntryPath, EntryTimestamp, FileSize};

/// 値が得られなかったセルの表示
pub const MISSING: &str = "-";

/// エントリ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    #[inline]
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// ハッシュ列のセル値
///
/// The hash column distinguishes "not computed" from "not applicable":
/// files without hashing show a dash, directories in a run that never
/// asked for hashes show an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashCell {
    Digest(ContentDigest),
    Dash,
    Blank,
}

impl HashCell {
    /// Cell for an entry that has no digest. Directories only go blank when
    /// hashing was never requested; every other combination shows a dash.
    pub fn absent(kind: EntryKind, include_hash: bool) -> Self {
        match (kind, include_hash) {
            (EntryKind::Directory, false) => Self::Blank,
            _ => Self::Dash,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Digest(digest) => digest.as_str().to_string(),
            Self::Dash => MISSING.to_string(),
            Self::Blank => String::new(),
        }
    }
}

/// 一覧の1行分のレコード
///
/// Optional fields mirror what the scanner could observe: flat listings
/// leave directory dates and sizes unset, and creation time is missing on
/// platforms that cannot report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub kind: EntryKind,
    pub category: String,
    pub path: EntryPath,
    pub created: Option<EntryTimestamp>,
    pub modified: Option<EntryTimestamp>,
    pub size: Option<FileSize>,
    pub hash: HashCell,
}

impl EntryRecord {
    /// 表示用の6列（種別・パス・作成日時・更新日時・サイズ・ハッシュ）
    pub fn cells(&self) -> [String; 6] {
        [
            self.category.clone(),
            self.path.to_string_lossy().into_owned(),
            self.created.as_ref().map_or_else(|| MISSING.to_string(), ToString::to_string),
            self.modified.as_ref().map_or_else(|| MISSING.to_string(), ToString::to_string),
            self.size.map_or_else(|| MISSING.to_string(), FileSize::to_human),
            self.hash.render(),
        ]
    }
}
