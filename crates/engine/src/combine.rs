// crates/engine/src/combine.rs
//! 複数カートリッジの結合
//!
//! 各ファイルをセクションに分け、`__lua__` は `-->8` タブとして連結する。
//! それ以外のセクションは高々1ファイルからしか持ち込めない。

use crate::error::{EngineError, Result};
use hashbrown::HashMap;
use p8tokens_core::cartridge::CODE_MARKER;
use p8tokens_shared_kernel::FileName;
use regex::Regex;
use std::path::{Path, PathBuf};

/// 結合後のカートリッジに書くヘッダ
pub const CARTRIDGE_HEADER: &str = "pico-8 cartridge // http://www.pico-8.com\nversion 36\n__lua__\n";

/// コード以外のセクション (出力順)
pub const DATA_SECTIONS: [&str; 6] = [
    "__gfx__",
    "__label__",
    "__gff__",
    "__map__",
    "__sfx__",
    "__music__",
];

pub const DEFAULT_OUTPUT_NAME: &str = "combined.p8";

const TAB_SEPARATOR: &str = "-->8";

/// セクション名 → 本文
pub type Sections = HashMap<String, String>;

pub struct SectionSplitter {
    marker: Regex,
}

impl SectionSplitter {
    /// # Errors
    /// Returns an error if the section marker pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(r"^__(\w+)__$")?,
        })
    }

    /// 行単位でセクションに分ける。最初のマーカーより前は `__lua__` に入る。
    /// 同じセクションが再び現れた場合は後のものが残る。
    #[must_use]
    pub fn split(&self, content: &str) -> Sections {
        let mut sections: HashMap<String, Vec<&str>> = HashMap::new();
        let mut current = CODE_MARKER.to_string();
        sections.insert(current.clone(), Vec::new());

        for line in content.lines() {
            if self.marker.is_match(line) {
                current = line.to_string();
                sections.insert(current.clone(), Vec::new());
            } else {
                sections.entry(current.clone()).or_default().push(line);
            }
        }

        sections
            .into_iter()
            .map(|(name, lines)| (name, lines.join("\n")))
            .collect()
    }
}

/// 名前付きソースを1つのカートリッジにまとめる
///
/// # Errors
/// Returns [`EngineError::NoSelection`] for an empty input and
/// [`EngineError::SectionConflict`] when a data section appears in more than one file.
pub fn combine_sources(sources: &[(FileName, String)]) -> Result<String> {
    if sources.is_empty() {
        return Err(EngineError::NoSelection);
    }

    let splitter = SectionSplitter::new()?;
    let mut chunks = Vec::new();
    let mut data: HashMap<&str, String> = HashMap::new();
    let mut conflicts: Vec<String> = Vec::new();

    for (name, content) in sources {
        let mut sections = splitter.split(content);

        if let Some(code) = sections.get(CODE_MARKER).map(|s| s.trim())
            && !code.is_empty()
        {
            chunks.push(format!("{TAB_SEPARATOR}\n-- {name}\n{code}"));
        }

        for section in DATA_SECTIONS {
            let Some(body) = sections.remove(section).filter(|b| !b.is_empty()) else {
                continue;
            };
            if data.contains_key(section) {
                if !conflicts.iter().any(|c| c == section) {
                    conflicts.push(section.to_string());
                }
            } else {
                data.insert(section, body);
            }
        }
    }

    if !conflicts.is_empty() {
        return Err(EngineError::SectionConflict(conflicts));
    }

    let mut output = String::from(CARTRIDGE_HEADER);
    output.push_str(&chunks.join("\n\n"));
    for section in DATA_SECTIONS {
        if let Some(body) = data.get(section) {
            output.push('\n');
            output.push_str(section);
            output.push('\n');
            output.push_str(body.trim());
        }
    }

    log::info!("combined {} files into {} code tabs", sources.len(), chunks.len());
    Ok(output)
}

/// ファイルを読み込んで結合する
///
/// # Errors
/// Returns an error if a file cannot be read or the sources conflict.
pub fn combine_files(paths: &[PathBuf]) -> Result<String> {
    let sources = paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            Ok((FileName::from_path(path), text))
        })
        .collect::<Result<Vec<_>>>()?;

    combine_sources(&sources)
}

/// 出力先を決める。`.p8` で終わらない指定はディレクトリとみなす。
#[must_use]
pub fn resolve_output(output: Option<&Path>, base_dir: &Path) -> PathBuf {
    match output {
        Some(path) if path.extension().is_some_and(|ext| ext == "p8") => path.to_path_buf(),
        Some(dir) => dir.join(DEFAULT_OUTPUT_NAME),
        None => base_dir.join(DEFAULT_OUTPUT_NAME),
    }
}

/// 結合結果を書き出し、書き込んだパスを返す
///
/// # Errors
/// Returns an error if reading, combining or writing fails.
pub fn write_combined(paths: &[PathBuf], output: Option<&Path>) -> Result<PathBuf> {
    let combined = combine_files(paths)?;
    let target = resolve_output(output, Path::new("."));

    std::fs::write(&target, combined).map_err(|e| EngineError::FileWrite {
        path: target.clone(),
        source: e,
    })?;

    log::info!("combined cartridge written to {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, text: &str) -> (FileName, String) {
        (FileName::from(name), text.to_string())
    }

    #[test]
    fn test_split_sections() {
        let splitter = SectionSplitter::new().unwrap();
        let sections = splitter.split(
            "pico-8 cartridge // http://www.pico-8.com\nversion 41\n__lua__\nprint(1)\n__gfx__\n0101\n",
        );
        assert_eq!(sections.get("__lua__").map(String::as_str), Some("print(1)"));
        assert_eq!(sections.get("__gfx__").map(String::as_str), Some("0101"));
    }

    #[test]
    fn test_text_before_any_marker_is_code() {
        let splitter = SectionSplitter::new().unwrap();
        let sections = splitter.split("x = 1\ny = 2");
        assert_eq!(sections.get("__lua__").map(String::as_str), Some("x = 1\ny = 2"));
    }

    #[test]
    fn test_combine_joins_code_tabs() {
        let combined = combine_sources(&[
            source("a.p8", "__lua__\nx = 1\n"),
            source("b.p8", "__lua__\ny = 2\n__gfx__\n0000\n"),
        ])
        .unwrap();

        assert_eq!(
            combined,
            "pico-8 cartridge // http://www.pico-8.com\nversion 36\n__lua__\n\
             -->8\n-- a.p8\nx = 1\n\n-->8\n-- b.p8\ny = 2\n__gfx__\n0000"
        );
    }

    #[test]
    fn test_empty_code_is_skipped() {
        let combined = combine_sources(&[
            source("art.p8", "__lua__\n\n__map__\n11\n"),
            source("main.p8", "__lua__\nprint(1)"),
        ])
        .unwrap();
        assert!(!combined.contains("-- art.p8"));
        assert!(combined.ends_with("__map__\n11"));
    }

    #[test]
    fn test_conflicting_sections_are_rejected() {
        let err = combine_sources(&[
            source("a.p8", "__gfx__\n00\n__sfx__\n1"),
            source("b.p8", "__gfx__\n11\n__sfx__\n2"),
            source("c.p8", "__gfx__\n22"),
        ])
        .unwrap_err();

        match err {
            EngineError::SectionConflict(sections) => {
                assert_eq!(sections, ["__gfx__", "__sfx__"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_sources() {
        assert!(matches!(combine_sources(&[]), Err(EngineError::NoSelection)));
    }

    #[test]
    fn test_resolve_output() {
        let base = Path::new("/work");
        assert_eq!(resolve_output(None, base), Path::new("/work/combined.p8"));
        assert_eq!(
            resolve_output(Some(Path::new("out/game.p8")), base),
            Path::new("out/game.p8")
        );
        assert_eq!(
            resolve_output(Some(Path::new("out")), base),
            Path::new("out/combined.p8")
        );
    }
}
