// crates/core/src/vocabulary.rs
//! 固定語彙テーブルと文字クラス判定
//!
//! PICO-8 のトークンカウンタが参照する語彙はすべてここに集約する。
//! テーブルは不変の `static` スライスで、実行時に変更されることはない。

// ============================================================================
// Glyphs
// ============================================================================

/// 識別子として扱うボタングリフ
///
/// PICO-8 ではコントローラのボタン記号をそのまま変数名に使えるため、
/// 英字と同じ識別子構成文字として扱う。
pub const EMOJI_GLYPHS: [char; 7] = ['❎', '🅾', '⬆', '⬇', '⬅', '➡', '❞'];

/// 絵文字表示用の異体字セレクタ (U+FE0F)。スキャナは空白と同様に読み飛ばす。
pub const VARIATION_SELECTOR: char = '\u{FE0F}';

/// 行コメント開始記号
pub const LINE_COMMENT_MARKERS: [&str; 2] = ["--", "//"];

// ============================================================================
// Token vocabularies
// ============================================================================

pub const LITERALS: &[&str] = &["nil", "false", "true"];

pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "^", "=", "==", "+=", "-=", "*=", "/=", "%=", "^=", ">=", "<=",
    "~=", "!=", "<", ">", "..", "#", "@", "$", "&", "|", "~", "\\", "?", "and", "or", "not",
];

pub const KEYWORDS: &[&str] = &[
    "if", "then", "else", "elseif", "while", "do", "for", "in", "repeat", "until", "function",
    "return", "break", "goto",
];

/// 開き括弧。閉じ括弧は [`STRUCTURAL`] 側に属する。
pub const SYMBOLS: &[&str] = &["(", "[", "{"];

/// 2つの生トークンを連結して1トークンになる複合演算子
pub const COMPOUND_OPERATORS: &[&str] = &[
    "==", "+=", "-=", ">=", "<=", "..", "~=", "!=", "*=", "/=", "%=", "^=",
];

/// カウント対象外の構造トークン (閉じ括弧・区切り・`end`)
pub const STRUCTURAL: &[&str] = &["end", ",", ")", "}", "]", ":", ";", "."];

/// 識別子の形をしているが実コンパイラがカウントから除外する語
pub const ELIDED_WORDS: &[&str] = &["local"];

/// 直後の `-` を単項マイナスとして数値に結合させる直前トークン
///
/// `,` と `then` などのブロック語は含まない。`{-1,-2}` の2つ目の `-` は減算になる。
pub const NEGATIVE_PREFIX: &[&str] = &[
    "and", "or", "not", "return", "local", "if", "elseif", "while", "until", "+", "-", "*",
    "/", "%", "^", "=", "==", "+=", "-=", "*=", "/=", "%=", "^=", ">=", "<=", "~=", "!=", "<",
    ">", "..", "(", "[", "{", ";", "?", "&", "|",
];

// ============================================================================
// Character classes
// ============================================================================

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_emoji(c: char) -> bool {
    EMOJI_GLYPHS.contains(&c)
}

#[inline]
pub fn is_identifier_start(c: char) -> bool {
    is_letter(c) || c == '_' || is_emoji(c)
}

#[inline]
pub fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || is_digit(c)
}

/// Skipped between tokens.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == VARIATION_SELECTOR || c.is_whitespace()
}

/// `0x` / `0b` 接頭辞に続く桁かどうか
#[inline]
pub fn is_radix_digit(radix: char, c: char) -> bool {
    match radix {
        'x' | 'X' => c.is_ascii_hexdigit(),
        'b' | 'B' => matches!(c, '0' | '1'),
        _ => false,
    }
}

// ============================================================================
// Token shape predicates
// ============================================================================

#[inline]
pub fn is_literal(token: &str) -> bool {
    LITERALS.contains(&token)
}

#[inline]
pub fn is_operator(token: &str) -> bool {
    OPERATORS.contains(&token)
}

#[inline]
pub fn is_keyword(token: &str) -> bool {
    KEYWORDS.contains(&token)
}

#[inline]
pub fn is_symbol(token: &str) -> bool {
    SYMBOLS.contains(&token)
}

#[inline]
pub fn is_structural(token: &str) -> bool {
    STRUCTURAL.contains(&token)
}

#[inline]
pub fn is_elided(token: &str) -> bool {
    ELIDED_WORDS.contains(&token)
}

#[inline]
pub fn is_negative_prefix(token: &str) -> bool {
    NEGATIVE_PREFIX.contains(&token)
}

/// `a` と `b` を連結したものが複合演算子表に載っているか
pub fn is_compound(a: &str, b: &str) -> bool {
    COMPOUND_OPERATORS
        .iter()
        .any(|op| op.len() == a.len() + b.len() && op.starts_with(a) && &op[a.len()..] == b)
}

/// Digits only, no dots or sign.
pub fn is_plain_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// 数値リテラル判定 (緩和版)
///
/// 先頭の `-` を1つ許容し、以降は数字とドットのみ (少なくとも1桁必要)。
/// `4.2.1` のような複数ドットの数値もスキャナが1トークンにまとめるので
/// ここでは数値として受け入れる。`0x` / `0b` の16進・2進リテラルも同様。
pub fn is_numeric_literal(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    let mut chars = body.chars();

    if let (Some('0'), Some(radix @ ('x' | 'X' | 'b' | 'B'))) = (chars.next(), chars.next()) {
        let digits = &body[2..];
        return digits.chars().any(|c| is_radix_digit(radix, c))
            && digits.chars().all(|c| c == '.' || is_radix_digit(radix, c));
    }

    body.chars().any(is_digit) && body.chars().all(|c| c == '.' || is_digit(c))
}

/// 引用符で始まるトークンは閉じていなくても文字列リテラル扱い
pub fn is_string_literal(token: &str) -> bool {
    token.starts_with('"') || token.starts_with('\'')
}

pub fn is_emoji_run(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_emoji)
}

pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_char)
}
