// crates/shared-kernel/src/value_objects/file_count.rs
use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::counts::TokenCount;

/// ワークスペース内でファイルを識別する名前 (パスではなくベース名)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self(name)
    }

    /// パスの最終要素から名前を作る。最終要素がなければパス全体を使う。
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |s| s.to_string_lossy());
        Self(name.into_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// 文字数 (表示幅の揃えに使う)
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name.to_string())
    }
}

impl Borrow<str> for FileName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1ファイル分の集計結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    pub name: FileName,
    pub tokens: TokenCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl FileCount {
    #[must_use]
    pub fn new(name: impl Into<FileName>, tokens: impl Into<TokenCount>) -> Self {
        Self {
            name: name.into(),
            tokens: tokens.into(),
            path: None,
        }
    }

    /// ディスク上のファイルから作る。名前はベース名。
    #[must_use]
    pub fn from_path(path: PathBuf, tokens: impl Into<TokenCount>) -> Self {
        Self {
            name: FileName::from_path(&path),
            tokens: tokens.into(),
            path: Some(path),
        }
    }
}
