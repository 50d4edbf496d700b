// crates/engine/src/aggregate.rs
//! ワークスペース集計
//!
//! ディスク上のファイル数でマップを初期化し、メモリ上のバッファで上書きする。
//! 同じ名前ならメモリ上の内容が常に勝つ。

use hashbrown::HashMap;
use p8tokens_core::count_text;
use p8tokens_shared_kernel::{AggregateReport, Budget, FileCount, FileName, TokenCount};

/// ディスク上の内容より優先されるメモリ上のソース
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOverride {
    pub name: FileName,
    pub text: String,
}

impl SourceOverride {
    #[must_use]
    pub fn new(name: impl Into<FileName>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn count(&self) -> FileCount {
        FileCount::new(self.name.clone(), count_text(&self.text))
    }
}

/// 名前 → 集計結果のマップ (挿入順を保持)
#[derive(Debug, Default)]
pub struct Workspace {
    budget: Budget,
    index: HashMap<FileName, usize>,
    files: Vec<FileCount>,
}

impl Workspace {
    #[must_use]
    pub fn new(budget: Budget) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// 同名のエントリがあれば置き換え、以前の数を返す
    pub fn insert(&mut self, file: FileCount) -> Option<TokenCount> {
        if let Some(&idx) = self.index.get(file.name.as_str()) {
            let previous = self.files[idx].tokens;
            self.files[idx] = file;
            return Some(previous);
        }

        self.index.insert(file.name.clone(), self.files.len());
        self.files.push(file);
        None
    }

    pub fn seed_disk<I>(&mut self, disk: I)
    where
        I: IntoIterator<Item = FileCount>,
    {
        for file in disk {
            let name = file.name.clone();
            if self.insert(file).is_some() {
                log::warn!("duplicate file name '{name}' on disk; keeping the last one");
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &[SourceOverride]) {
        for source in overrides {
            let counted = source.count();
            match self.insert(counted) {
                Some(previous) => log::debug!(
                    "{}: in-memory buffer replaces {previous} tokens on disk",
                    source.name
                ),
                None => log::debug!("{}: in-memory buffer only", source.name),
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FileCount> {
        self.index.get(name).map(|&idx| &self.files[idx])
    }

    #[must_use]
    pub fn total(&self) -> TokenCount {
        self.files.iter().map(|f| f.tokens).sum()
    }

    #[must_use]
    pub fn report(self) -> AggregateReport {
        let report = AggregateReport::new(self.files, self.budget);
        log::info!(
            "{} files, {} / {} tokens ({} remaining)",
            report.files.len(),
            report.total,
            report.limit,
            report.remaining
        );
        report
    }
}

/// ディスク集計とメモリ上のバッファを合算する (既定の予算)
#[must_use]
pub fn aggregate(disk: Vec<FileCount>, overrides: &[SourceOverride]) -> AggregateReport {
    aggregate_with_budget(disk, overrides, Budget::default())
}

#[must_use]
pub fn aggregate_with_budget(
    disk: Vec<FileCount>,
    overrides: &[SourceOverride],
    budget: Budget,
) -> AggregateReport {
    let mut workspace = Workspace::new(budget);
    workspace.seed_disk(disk);
    workspace.apply_overrides(overrides);
    workspace.report()
}
