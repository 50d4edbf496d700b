// crates/core/src/cartridge.rs
//! カートリッジ本文の前処理
//!
//! - 先頭のバナー / `version` / `__lua__` ヘッダを取り除く
//! - 最初に現れた非コードセクションで切り詰める

/// コード部を示すセクションマーカー
pub const CODE_MARKER: &str = "__lua__";

/// グラフィックのみのファイルを示すマーカー
pub const GRAPHICS_MARKER: &str = "__gfx__";

/// 非コードセクションのマーカー。行単独で現れたものだけを認識する。
pub const SECTION_MARKERS: [&str; 6] = [
    "__gfx__",
    "__gff__",
    "__label__",
    "__map__",
    "__sfx__",
    "__music__",
];

const BANNER_PREFIX: &str = "pico-8 cartridge";

/// 最初の非空行が `__gfx__` ならファイル全体が0トークン
pub fn is_graphics_only(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line == GRAPHICS_MARKER)
}

fn is_banner_line(line: &str) -> bool {
    line.starts_with(BANNER_PREFIX)
}

fn is_version_line(line: &str) -> bool {
    line.strip_prefix("version").is_some_and(|rest| {
        let rest = rest.trim();
        !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
    })
}

fn is_code_marker(line: &str) -> bool {
    line == CODE_MARKER
}

/// 最初の非空行 (trim 済み) と、その行より後ろの残りを返す
fn split_first_content_line(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Some((trimmed, &text[offset..]));
        }
    }
    None
}

/// 先頭のヘッダブロックを取り除く
///
/// ヘッダはバナー行、その直後の `version N`、`__lua__` の順に並ぶ。
/// `version N` はバナーの後ろにあるときだけヘッダとみなす。
/// ヘッダ前の空行は読み飛ばし、ヘッダが続く限り繰り返し取り除くので、
/// 任意の本文の前にヘッダを足してもカウントは変わらない。
pub fn strip_header(text: &str) -> &str {
    let mut rest = text;
    loop {
        let start = rest;
        rest = strip_banner(rest);
        rest = strip_line_if(rest, is_code_marker);
        if rest.len() == start.len() {
            return rest;
        }
    }
}

/// バナー行と、それに続く `version N` 行
fn strip_banner(text: &str) -> &str {
    let after_banner = strip_line_if(text, is_banner_line);
    if after_banner.len() == text.len() {
        return text;
    }
    strip_line_if(after_banner, is_version_line)
}

fn strip_line_if(text: &str, matches: fn(&str) -> bool) -> &str {
    match split_first_content_line(text) {
        Some((line, after)) if matches(line) => after,
        _ => text,
    }
}

/// 最初に現れた非コードセクションの手前で切り詰める
///
/// 行単位で先頭から走査するので、どのマーカーであれ最も早い位置が採用される。
pub fn truncate_sections(text: &str) -> &str {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if SECTION_MARKERS.contains(&line.trim()) {
            return &text[..offset];
        }
        offset += line.len();
    }
    text
}

/// ヘッダ除去と切り詰めを合わせたコード部
pub fn extract_code(text: &str) -> &str {
    truncate_sections(strip_header(text))
}
