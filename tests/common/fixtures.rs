//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

/// 一時ディレクトリ管理
#[allow(dead_code)]
pub struct TempWorkspace {
    root: PathBuf,
    files: Vec<PathBuf>,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let base = std::env::temp_dir().join("dirlist_test");
        fs::create_dir_all(&base).unwrap();

        let unique = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let root = base.join(format!("{prefix}_{unique}"));
        fs::create_dir(&root).unwrap();

        Self { root, files: Vec::new() }
    }

    /// ファイルを作成
    pub fn create_file(&mut self, path: &str, content: &str) -> &PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        self.files.push(full_path);
        self.files.last().unwrap()
    }

    /// バイナリファイルを作成
    pub fn create_binary(&mut self, path: &str, content: &[u8]) -> &PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        self.files.push(full_path);
        self.files.last().unwrap()
    }

    /// ディレクトリを作成
    pub fn create_dir(&mut self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    /// ルートパスを取得
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// 多様なカテゴリのエントリを含むディレクトリ
    pub fn with_mixed_entries(mut self) -> Self {
        self.create_file("notes.txt", "hello dirlist\n");
        self.create_file("song.mp3", "not really audio");
        self.create_binary("photo.png", &[0x89, 0x50, 0x4E, 0x47]);
        self.create_file("mystery.zzz", "???");
        self.create_dir("documents");
        self
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_workspace_creates_and_cleans() {
        let workspace = TempWorkspace::new("fixture");
        assert!(workspace.path().exists());
        let path = workspace.path().to_path_buf();
        drop(workspace);
        assert!(!path.exists());
    }
}
