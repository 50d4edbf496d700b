// crates/core/src/merger.rs
//! 生トークンの結合パス
//!
//! 先読み1トークン・後読み1トークン (直前に出力した結合済みトークン) で
//! 左から右へ1回だけ走査する。

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::scanner::RawToken;
use crate::vocabulary::{is_compound, is_negative_prefix, is_numeric_literal, is_plain_number};

/// 分類器が判定する単位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedToken {
    text: String,
}

impl MergedToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<RawToken> for MergedToken {
    fn from(raw: RawToken) -> Self {
        Self::new(raw.text)
    }
}

impl PartialEq<&str> for MergedToken {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

pub fn merge(tokens: Vec<RawToken>) -> Vec<MergedToken> {
    let mut merged: Vec<MergedToken> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let a = tokens[i].as_str();
        let b = tokens.get(i + 1).map(RawToken::as_str);
        let c = tokens.get(i + 2).map(RawToken::as_str);

        // 数値 `.` 数値 → 小数
        if let (Some("."), Some(c)) = (b, c)
            && is_plain_number(a)
            && is_plain_number(c)
        {
            merged.push(MergedToken::new(format!("{a}.{c}")));
            i += 3;
            continue;
        }

        if let Some(b) = b {
            if is_compound(a, b) {
                merged.push(MergedToken::new(format!("{a}{b}")));
                i += 2;
                continue;
            }

            // 単項マイナス: 直前が演算子・開き括弧・特定キーワードのときだけ数値に付ける
            if a == "-"
                && is_numeric_literal(b)
                && !b.starts_with('-')
                && merged.last().is_some_and(|prev| is_negative_prefix(prev.as_str()))
            {
                merged.push(MergedToken::new(format!("-{b}")));
                i += 2;
                continue;
            }
        }

        merged.push(MergedToken::new(a));
        i += 1;
    }

    merged
}
