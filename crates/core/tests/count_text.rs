//! カウント結果の回帰テスト (実機の挙動に合わせた期待値)

use p8tokens_core::{TOKEN_LIMIT, count_bytes, count_text};

fn check(description: &str, input: &str, expected: usize) {
    assert_eq!(count_text(input), expected, "{description}: {input:?}");
}

#[test]
fn test_limit_constant() {
    assert_eq!(TOKEN_LIMIT, 8192);
}

#[test]
fn test_header_only() {
    check(
        "header counts as 0",
        "\npico-8 cartridge // http://www.pico-8.com\nversion 36\n__lua__\n",
        0,
    );
}

#[test]
fn test_header_prefix_keeps_bare_version_line() {
    let header = "pico-8 cartridge // http://www.pico-8.com\nversion 36\n__lua__\n";
    let body = "version 2\nx";
    check("bare version line is code", body, 3);
    check("same body after a header", &format!("{header}{body}"), 3);
}

#[test]
fn test_basic_tokens() {
    check("empty", "", 0);
    check("whitespace", "   ", 0);
    check("identifier call name", "print", 1);
    check("number", "123", 1);
    check("string", "\"hello\"", 1);
    check("operator", "+", 1);
    check("comma", ",", 0);
    check("identifier", "myVar", 1);
}

#[test]
fn test_number_edge_cases() {
    check("float", "3.14", 1);
    check("negative integer", "-42", 2);
    check("negative float", "-0.5", 2);
    check("subtraction", "5-3", 3);
    check("dot prefix", ".5", 1);
    check("dot suffix", "42.", 1);
    check("multiple dots", "4.2.1", 1);
    check("leading dot multi", ".42.1", 1);
    check("trailing dot multi", "42.1.", 1);
    check("leading dot run", "..123", 2);
    check("interleaved dots", "1..2.3", 1);
    check("hex literal", "0x1f", 1);
    check("hex fraction", "0x.8", 1);
    check("negative hex fraction", "x = -0x.8", 3);
    check("binary literal", "0b1010", 1);
    check("assigned negative", "x = -1", 3);
}

#[test]
fn test_minus_after_separator_is_subtraction() {
    check("call argument after comma", "foo(1,-2)", 5);
    check("table of negatives", "{-1,-2}", 4);
    check("after then", "if x then -1", 5);
    check("after open paren", "foo(-2)", 3);
}

#[test]
fn test_operator_edge_cases() {
    for op in ["==", "+=", "-=", ">=", "<=", "~=", "!=", ".."] {
        check("compound operator", op, 1);
    }
    check("chained operators", "++==", 3);
    check("operators and numbers", "5+=3", 3);
    check("invalid pairing", "=+", 2);
}

#[test]
fn test_emoji() {
    check("single emoji", "⬅️", 1);
    check("emoji run with selectors", "⬅️➡️⬆️⬇️🅾️❎", 1);
    check("emoji run", "⬅➡⬆⬇🅾❎⬆⬆", 1);
    check("emoji inside identifier", "foo⬆bar", 1);
    check("emoji after identifier", "hello➡️", 1);
    check("emoji identifier method", "hello➡️:bar()", 3);
    check("emoji after number", "123⬅", 2);
    check("emoji then underscore", "⬅_foo", 1);
    check("emoji then digits", "⬆123", 1);
    check("emoji space digits", "⬆ 123", 2);
    check("emoji string", "\"⬆⬇\"", 1);
    check("underscored emoji", "_⬅_", 1);
    check("chained calls", "player⬅️:getWeapon().fire()", 5);
    check("emoji with unknown char", "⬅@", 2);
}

#[test]
fn test_member_access() {
    check("field", "env.foo", 2);
    check("method", "env:bar()", 3);
    check("bare", "env", 1);
    check("emoji field", "env➡️.foo", 2);
    check("emoji field method", "env➡️.foo:bar()", 4);
    check("double field", "env.foo.bar", 3);
    check("double colon", "env:foo:bar()", 4);
}

#[test]
fn test_strings() {
    check("empty literal", "\"\"", 1);
    check("escaped quotes", r#""he said \"hi\"""#, 1);
    check("single quoted", "'abc'", 1);
    check("unterminated with escape", r#""abc\\"#, 1);
}

#[test]
fn test_comments() {
    check("line comment", "-- this is a comment", 0);
    check("slash comment", "// note", 0);
    check("inline comment", "print(1) -- comment", 3);
    check("tight inline comment", "print(1)--comment", 3);
    check("multiline comment", "\n--[[\nthis should not count\n]]\nprint(1)\n", 3);
    check("level comment", "--[==[\n]] still comment\n]==]\nx=1", 3);
}

#[test]
fn test_truncation() {
    check("stops at gfx", "\nprint(1)\n__gfx__\naaaaa\n", 3);
    check("stops at earliest", "a=1\n__sfx__\nb=2\n__gfx__\nc=3", 3);
    check("graphics only", "__gfx__\nprint(1)", 0);
}

#[test]
fn test_structural_tokens() {
    for token in [",", ")", ":", "]", "}", "end", ";"] {
        check("structural", token, 0);
    }
    check("punctuation run", ",),:", 0);
    check("separators", ";,:)", 0);
}

#[test]
fn test_unknown_characters() {
    check("specials", "@#$%^&*", 7);
    check("backtick", "`", 1);
}

#[test]
fn test_local_is_elided() {
    check("local declaration", "local a, b = 1, 2", 5);
    check("local function", "local function f() end", 3);
}

#[test]
fn test_full_cartridge() {
    let cart = "pico-8 cartridge // http://www.pico-8.com
version 41
__lua__
-- game loop
function _init()
  x = 64 -- start
end

function _update()
  if btn(⬅️) then x -= 1 end
end
__gfx__
00000000
__sfx__
0001
";
    // function _init ( / x = 64 / function _update ( / if btn ( ⬅ then x -= 1
    assert_eq!(count_text(cart), 3 + 3 + 3 + 8);
}

#[test]
fn test_binary_input_yields_count() {
    let bytes = [0xff, 0xfe, b'x', 0x00, b'=', b'1'];
    assert!(count_bytes(&bytes) > 0);
}
