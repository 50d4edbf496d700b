// crates/core/src/scanner.rs
//! 1行単位の字句スキャナ
//!
//! 先頭文字の分類でディスパッチし、各生成規則はそれぞれ独立したループで
//! 終端を判定する。どの分岐も最低1文字は消費するので、どんな入力でも
//! 必ず停止する。

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::vocabulary::{
    LINE_COMMENT_MARKERS, is_blank, is_digit, is_emoji_run, is_identifier_char,
    is_identifier_start, is_radix_digit,
};

/// 最初のドット塊の最大長
const FIRST_DOT_CHUNK: usize = 4;
/// 2つ目以降のドット塊の最大長
const NEXT_DOT_CHUNK: usize = 3;

/// 生トークンを生成した規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    Identifier,
    Number,
    String,
    /// ドットの連続 (`..`, `...`, `....`)
    DotRun,
    /// 演算子・記号・未知の文字 (1文字)
    Single,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: RawKind,
    pub text: String,
}

impl RawToken {
    pub fn new(kind: RawKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// 先頭文字による分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Start {
    Blank,
    Dots,
    Identifier,
    Number,
    Quote(char),
    Single,
}

impl Start {
    fn of(c: char) -> Self {
        match c {
            '.' => Self::Dots,
            '"' | '\'' => Self::Quote(c),
            c if is_blank(c) => Self::Blank,
            c if is_identifier_start(c) => Self::Identifier,
            c if is_digit(c) => Self::Number,
            _ => Self::Single,
        }
    }
}

// ============================================================================
// Line entry points
// ============================================================================

/// 行がコメントのみ、または空白のみかどうか
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || LINE_COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m))
}

/// 最も早く現れる行コメント記号の位置で行を切り詰める
///
/// 文字列リテラル内かどうかは判定しない (記号の出現位置のみで決まる)。
pub fn strip_line_comment(line: &str) -> &str {
    LINE_COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .map_or(line, |idx| &line[..idx])
}

/// 1行を生トークン列に変換する
pub fn scan_line(line: &str) -> Vec<RawToken> {
    if is_blank_or_comment(line) {
        return Vec::new();
    }

    let chars: Vec<char> = strip_line_comment(line).trim().chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        pos = match Start::of(chars[pos]) {
            Start::Blank => pos + 1,
            Start::Dots => scan_dots(&chars, pos, &mut tokens),
            Start::Identifier => scan_identifier(&chars, pos, &mut tokens),
            Start::Number => scan_number(&chars, pos, &mut tokens),
            Start::Quote(quote) => scan_string(&chars, pos, quote, &mut tokens),
            Start::Single => {
                tokens.push(RawToken::new(RawKind::Single, chars[pos]));
                pos + 1
            }
        };
    }

    collapse_emoji_run(tokens)
}

/// 行全体がボタングリフのみのトークンなら1トークンにまとめる
fn collapse_emoji_run(tokens: Vec<RawToken>) -> Vec<RawToken> {
    if tokens.len() > 1 && tokens.iter().all(|t| is_emoji_run(&t.text)) {
        let joined: String = tokens.iter().map(RawToken::as_str).collect();
        return vec![RawToken::new(RawKind::Identifier, joined)];
    }
    tokens
}

// ============================================================================
// Production rules
// ============================================================================

fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

fn scan_identifier(chars: &[char], start: usize, out: &mut Vec<RawToken>) -> usize {
    let mut end = start + 1;
    while end < chars.len() && is_identifier_char(chars[end]) {
        end += 1;
    }
    out.push(RawToken::new(RawKind::Identifier, collect(chars, start, end)));
    end
}

/// 数字とドットを貪欲に読む (`4.2.1` も1トークン)
fn scan_number(chars: &[char], start: usize, out: &mut Vec<RawToken>) -> usize {
    let mut end = start + 1;

    if let Some(radix) = radix_prefix(chars, start) {
        end = start + 2;
        while end < chars.len() && (chars[end] == '.' || is_radix_digit(radix, chars[end])) {
            end += 1;
        }
    } else {
        while end < chars.len() && (chars[end] == '.' || is_digit(chars[end])) {
            end += 1;
        }
    }

    out.push(RawToken::new(RawKind::Number, collect(chars, start, end)));
    end
}

/// `0x1f` / `0b101` の接頭辞。直後に有効な桁がある場合のみ認める。
/// 整数部のない `0x.8` は `.` の次の桁で判定する。
fn radix_prefix(chars: &[char], start: usize) -> Option<char> {
    if chars[start] != '0' {
        return None;
    }
    let radix = *chars.get(start + 1)?;
    let mut first = *chars.get(start + 2)?;
    if first == '.' {
        first = *chars.get(start + 3)?;
    }
    is_radix_digit(radix, first).then_some(radix)
}

/// 対応する引用符まで読む。バックスラッシュは次の1文字をそのまま取り込む。
/// 行末までに閉じなければそのまま出力する。
fn scan_string(chars: &[char], start: usize, quote: char, out: &mut Vec<RawToken>) -> usize {
    let mut end = start + 1;
    while end < chars.len() {
        let c = chars[end];
        if c == '\\' && end + 1 < chars.len() {
            end += 2;
            continue;
        }
        end += 1;
        if c == quote {
            break;
        }
    }
    out.push(RawToken::new(RawKind::String, collect(chars, start, end)));
    end
}

/// ドット連続の塊分け
///
/// 単独の `.` は区切りとして捨てる。2個以上は先頭塊が最大4個、
/// 以降は最大3個ずつに分割する。
fn scan_dots(chars: &[char], start: usize, out: &mut Vec<RawToken>) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end] == '.' {
        end += 1;
    }

    let run = end - start;
    if run > 1 {
        let mut remaining = run;
        let mut limit = FIRST_DOT_CHUNK;
        while remaining > 0 {
            let size = remaining.min(limit);
            out.push(RawToken::new(RawKind::DotRun, ".".repeat(size)));
            remaining -= size;
            limit = NEXT_DOT_CHUNK;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        scan_line(line).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert!(scan_line("").is_empty());
        assert!(scan_line("   \t").is_empty());
        assert!(scan_line("  -- comment").is_empty());
        assert!(scan_line("// comment").is_empty());
    }

    #[test]
    fn test_trailing_comment_is_cut() {
        assert_eq!(texts("print(1) -- hi"), ["print", "(", "1", ")"]);
        assert_eq!(texts("x=1//note"), ["x", "=", "1"]);
    }

    #[test]
    fn test_comment_marker_inside_string_still_cuts() {
        assert_eq!(texts("s=\"a--b\""), ["s", "=", "\"a"]);
    }

    #[test]
    fn test_identifier_absorbs_emoji() {
        assert_eq!(texts("foo⬆bar"), ["foo⬆bar"]);
        assert_eq!(texts("hello➡️:bar()"), ["hello➡", ":", "bar", "(", ")"]);
    }

    #[test]
    fn test_variation_selector_splits_emoji() {
        let tokens = scan_line("⬅️➡️");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "⬅➡");
        assert_eq!(tokens[0].kind, RawKind::Identifier);
    }

    #[test]
    fn test_emoji_run_not_collapsed_with_other_tokens() {
        assert_eq!(texts("⬅@"), ["⬅", "@"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(texts("4.2.1"), ["4.2.1"]);
        assert_eq!(texts("123⬅"), ["123", "⬅"]);
        assert_eq!(texts("0x1f"), ["0x1f"]);
        assert_eq!(texts("0x.8"), ["0x.8"]);
        assert_eq!(texts("0b.1"), ["0b.1"]);
        assert_eq!(texts("0x."), ["0", "x"]);
        assert_eq!(texts("0b101"), ["0b101"]);
        assert_eq!(texts("0xg"), ["0", "xg"]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(texts(r#""he said \"hi\"""#), [r#""he said \"hi\"""#]);
        assert_eq!(texts("'abc' x"), ["'abc'", "x"]);
        assert_eq!(texts(r#""abc\\"#), [r#""abc\\"#]);
        assert_eq!(texts(r#""open"#), [r#""open"#]);
    }

    #[test]
    fn test_dot_runs() {
        assert_eq!(texts("a.b"), ["a", "b"]);
        assert_eq!(texts(".."), [".."]);
        assert_eq!(texts("...."), ["...."]);
        assert_eq!(texts("....."), ["....", "."]);
        assert_eq!(texts("........."), ["....", "...", ".."]);
    }

    #[test]
    fn test_single_chars() {
        assert_eq!(texts("@#$"), ["@", "#", "$"]);
        assert_eq!(texts("a+=b"), ["a", "+", "=", "b"]);
    }
}
