// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::{model::EntryRecord, options::SortKey};

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// ソート仕様を表す値オブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// ソート戦略パターン実装
#[derive(Debug, Clone)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    /// 新しいソート戦略を作成
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    /// レガシーフォーマットから変換
    pub fn from_legacy(specs: Vec<(SortKey, bool)>) -> Self {
        let specs = specs
            .into_iter()
            .map(|(key, desc)| SortSpec::new(key, desc.into()))
            .collect();
        Self::new(specs)
    }

    /// デフォルト戦略（ソートなし・列挙順を保持）
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self::new(Vec::new())
    }

    /// ソート仕様が空かどうか
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// レコードをソート（インプレース・安定）
    pub fn apply(&self, records: &mut [EntryRecord]) {
        if records.is_empty() || self.specs.is_empty() {
            return;
        }

        records.sort_by(|a, b| self.compare(a, b));
    }

    /// ソートされた新しいベクタを返す
    pub fn sorted(&self, records: Vec<EntryRecord>) -> Vec<EntryRecord> {
        if records.is_empty() || self.specs.is_empty() {
            return records;
        }

        let mut records = records;
        records.sort_by(|a, b| self.compare(a, b));
        records
    }

    /// 2つのレコードを比較
    fn compare(&self, a: &EntryRecord, b: &EntryRecord) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.key.compare(a, b);
            if cmp != Ordering::Equal {
                return spec.order.apply(cmp);
            }
        }
        Ordering::Equal
    }
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SortKey {
    /// 2つのレコードをこのキーで比較（欠損値は常に先頭側）
    #[inline]
    pub fn compare(&self, a: &EntryRecord, b: &EntryRecord) -> Ordering {
        match self {
            Self::Category => a.category.cmp(&b.category),
            Self::Path => a.path.as_path().cmp(b.path.as_path()),
            Self::Created => a.created.cmp(&b.created),
            Self::Modified => a.modified.cmp(&b.modified),
            Self::Size => a.size.cmp(&b.size),
            Self::Hash => a.hash.render().cmp(&b.hash.render()),
        }
    }
}

// ============================================================================
// Config 連携
// ============================================================================

/// Config のソート指定をレコード列へ適用する
pub fn apply_sort_with_config(records: &mut [EntryRecord], config: &crate::config::Config) {
    if config.sort_specs.is_empty() {
        return;
    }

    let strategy = SortStrategy::from_legacy(config.sort_specs.clone());
    strategy.apply(records);
}

// ============================================================================
// Tests
// ============================================================================
