// crates/core/src/classifier.rs
//! 結合済みトークンの分類
//!
//! どの規則にも当てはまらないトークンは [`TokenKind::Invalid`] になるが、
//! 1トークンとして数える (黙って捨てない)。0 になるのは
//! [`TokenKind::Elided`] だけ。

use crate::vocabulary::{
    is_elided, is_emoji_run, is_identifier, is_keyword, is_literal, is_numeric_literal,
    is_operator, is_string_literal, is_structural, is_symbol,
};

/// トークン種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `nil`, `false`, `true`
    Literal,
    Operator,
    /// 開き括弧
    Symbol,
    Keyword,
    Number,
    String,
    /// ボタングリフのみで構成されたトークン
    EmojiRun,
    Identifier,
    /// 閉じ括弧・区切り・`end`・`local` (カウントしない)
    Elided,
    /// 未知の文字 (1トークンとして数える)
    Invalid,
}

impl TokenKind {
    /// 予算に対する重み
    #[must_use]
    pub const fn weight(self) -> usize {
        match self {
            Self::Elided => 0,
            _ => 1,
        }
    }

    #[must_use]
    pub const fn counts(self) -> bool {
        self.weight() > 0
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::Symbol => "symbol",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::String => "string",
            Self::EmojiRun => "emoji",
            Self::Identifier => "identifier",
            Self::Elided => "elided",
            Self::Invalid => "invalid",
        }
    }
}

#[must_use]
pub fn classify(token: &str) -> TokenKind {
    if token.is_empty() || is_structural(token) || is_elided(token) {
        TokenKind::Elided
    } else if is_literal(token) {
        TokenKind::Literal
    } else if is_operator(token) {
        TokenKind::Operator
    } else if is_symbol(token) {
        TokenKind::Symbol
    } else if is_keyword(token) {
        TokenKind::Keyword
    } else if is_numeric_literal(token) {
        TokenKind::Number
    } else if is_string_literal(token) {
        TokenKind::String
    } else if is_emoji_run(token) {
        TokenKind::EmojiRun
    } else if is_identifier(token) {
        TokenKind::Identifier
    } else {
        TokenKind::Invalid
    }
}

#[must_use]
pub fn is_countable(token: &str) -> bool {
    classify(token).counts()
}
