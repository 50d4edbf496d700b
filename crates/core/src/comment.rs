// crates/core/src/comment.rs
//! Lua ブロックコメントの除去
//!
//! 対応する構文:
//! - ブロックコメント: `--[[` ～ `]]`
//! - 等号付きブロックコメント: `--[=[` ～ `]=]`, `--[==[` ～ `]==]` 等
//!
//! 行コメント (`--`) はここでは扱わない。文字列中の `--` で行を
//! 誤って切らないよう、スキャナが行ごとに処理する。

use alloc::borrow::Cow;
use alloc::string::String;

/// ブロックコメント開始の位置情報
struct BlockOpen {
    /// `--` の位置
    start: usize,
    /// 開き括弧直後 (本文開始) の位置
    body: usize,
    /// 等号の数
    level: usize,
}

/// すべてのブロックコメントを取り除く (最短一致)
///
/// 閉じられていないブロックコメントはそのまま残す。
pub fn strip_block_comments(text: &str) -> Cow<'_, str> {
    if find_block_open(text, 0).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(open) = find_block_open(text, search_from) {
        match find_block_end(&text[open.body..], open.level) {
            Some(close) => {
                out.push_str(&text[copied..open.start]);
                copied = open.body + close;
                search_from = copied;
            }
            None => search_from = open.body,
        }
    }

    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

fn find_block_open(text: &str, from: usize) -> Option<BlockOpen> {
    let mut cursor = from;
    while let Some(rel) = text[cursor..].find("--[") {
        let start = cursor + rel;
        let after_dashes = &text[start + 2..];
        if let Some(level) = check_block_start(after_dashes) {
            return Some(BlockOpen {
                start,
                // `[` + `=` * level + `[`
                body: start + 2 + level + 2,
                level,
            });
        }
        cursor = start + 3;
    }
    None
}

/// `[` で始まり、0個以上の `=` の後に `[` が続く場合、等号の数を返す
fn check_block_start(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }

    let level = bytes[1..].iter().take_while(|&&b| b == b'=').count();
    (bytes.get(1 + level) == Some(&b'[')).then_some(level)
}

/// `]` + level個の `=` + `]` を探し、閉じ括弧直後の位置を返す
fn find_block_end(s: &str, level: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b']' {
            let eq_count = bytes[i + 1..].iter().take_while(|&&b| b == b'=').count();
            let j = i + 1 + eq_count;
            if eq_count == level && bytes.get(j) == Some(&b']') {
                return Some(j + 1);
            }
        }
        i += 1;
    }

    None
}
