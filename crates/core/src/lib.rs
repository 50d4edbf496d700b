// crates/core/src/lib.rs
//! PICO-8 トークンカウンタのコア
//!
//! カートリッジ本文を `前処理 → ブロックコメント除去 → スキャン → 結合 → 分類`
//! の順に処理し、予算 (8192) に対するトークン数を返す。入力を拒否することはなく、
//! 壊れた数値や閉じていない文字列でも必ず数を返す。
#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod cartridge;
pub mod classifier;
pub mod comment;
pub mod counter;
pub mod merger;
pub mod scanner;
pub mod vocabulary;

pub use classifier::{TokenKind, classify, is_countable};
pub use counter::{
    CountedToken, TOKEN_LIMIT, count_bytes, count_line, count_text, explain_line, explain_text,
};
pub use merger::{MergedToken, merge};
pub use scanner::{RawKind, RawToken, scan_line};
