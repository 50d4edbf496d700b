// crates/core/src/counter.rs
//! 行・テキスト単位のトークン集計

use alloc::string::String;
use alloc::vec::Vec;

use crate::cartridge::{extract_code, is_graphics_only};
use crate::classifier::{TokenKind, classify};
use crate::comment::strip_block_comments;
use crate::merger::{MergedToken, merge};
use crate::scanner::scan_line;
use crate::vocabulary::is_structural;

/// PICO-8 のトークン上限
pub const TOKEN_LIMIT: usize = 8192;

/// 分類済みトークン (デバッグ表示用)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedToken {
    pub text: String,
    pub kind: TokenKind,
}

impl CountedToken {
    #[must_use]
    pub const fn weight(&self) -> usize {
        self.kind.weight()
    }
}

/// 1行をスキャン → 結合 → 構造トークン除去 → 分類した結果
pub fn explain_line(line: &str) -> Vec<CountedToken> {
    merge(scan_line(line))
        .into_iter()
        .filter(|token| !is_structural(token.as_str()))
        .map(|token| {
            let kind = classify(token.as_str());
            CountedToken {
                text: MergedToken::into_string(token),
                kind,
            }
        })
        .collect()
}

pub fn count_line(line: &str) -> usize {
    explain_line(line).iter().map(CountedToken::weight).sum()
}

/// カートリッジ本文 (またはその断片) のトークン数
///
/// 最初の非空行が `__gfx__` のファイルは常に0。それ以外はヘッダ除去、
/// セクション切り詰め、ブロックコメント除去の後に行ごとに数える。
pub fn count_text(text: &str) -> usize {
    if is_graphics_only(text) {
        return 0;
    }

    strip_block_comments(extract_code(text))
        .lines()
        .map(count_line)
        .sum()
}

/// Count tokens in a byte slice.
///
/// Invalid UTF-8 is replaced lossily, so binary input still yields a count.
#[must_use]
pub fn count_bytes(input: &[u8]) -> usize {
    count_text(&String::from_utf8_lossy(input))
}

/// 行ごとの内訳。`count_text` と同じ前処理を通した後の行番号 (1始まり) を返す。
pub fn explain_text(text: &str) -> Vec<(usize, Vec<CountedToken>)> {
    if is_graphics_only(text) {
        return Vec::new();
    }

    strip_block_comments(extract_code(text))
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, explain_line(line)))
        .filter(|(_, tokens)| !tokens.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_line_basics() {
        assert_eq!(count_line("print(1)"), 3);
        assert_eq!(count_line("local x = 1"), 3);
        assert_eq!(count_line("end"), 0);
        assert_eq!(count_line("if a then b() end"), 5);
    }

    #[test]
    fn test_explain_line_kinds() {
        let tokens = explain_line("local s = \"hi\"");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::Elided, TokenKind::Identifier, TokenKind::Operator, TokenKind::String]
        );
    }

    #[test]
    fn test_count_text_sums_lines() {
        let text = "x = 1\ny = x + 2\n";
        assert_eq!(count_text(text), 3 + 5);
    }

    #[test]
    fn test_explain_text_skips_empty_lines() {
        let lines = explain_text("a=1\n\n-- note\nb=2");
        let numbers: Vec<usize> = lines.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, [1, 4]);
    }
}
