use crate::aggregate::SourceOverride;
use derive_builder::Builder;
use p8tokens_shared_kernel::Budget;
use std::path::PathBuf;
use std::time::Duration;

/// 既定で数える拡張子
pub const DEFAULT_EXTENSION: &str = "p8";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    /// 対象拡張子 (先頭の `.` なし、大文字小文字は区別しない)
    #[builder(default = "vec![DEFAULT_EXTENSION.to_string()]")]
    pub extensions: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl WalkOptions {
    /// パスの拡張子が対象かどうか
    #[must_use]
    pub fn accepts(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub budget: Budget,
    /// ディスク上の内容より優先するメモリ上のバッファ
    #[builder(default)]
    pub overrides: Vec<SourceOverride>,

    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            budget: Budget::default(),
            overrides: vec![],
            strict: false,
            watch: false,
            watch_interval: Duration::from_secs(1),
        }
    }
}
