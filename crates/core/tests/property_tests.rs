use p8tokens_core::{count_line, count_text};
use proptest::prelude::*;

const HEADER: &str = "pico-8 cartridge // http://www.pico-8.com\nversion 36\n__lua__\n";

proptest! {
    #[test]
    fn test_whitespace_only_counts_zero(content in "[ \\t\\r\\n]{0,200}") {
        prop_assert_eq!(count_text(&content), 0);
    }

    #[test]
    fn test_header_is_count_neutral(body in "[a-z0-9 =+\\-*/().,\"\\n]{0,300}") {
        let with_header = format!("{HEADER}{body}");
        prop_assert_eq!(count_text(&with_header), count_text(&body));
    }

    #[test]
    fn test_truncation_is_idempotent(
        body in "[a-z0-9 =+()\\n]{0,200}",
        tail in "[a-z0-9 =+()\\n]{0,200}",
    ) {
        let once = format!("{body}\n__gfx__\n{tail}");
        let twice = format!("{once}\n__map__\nprint(1)\n__sfx__\n{tail}");
        prop_assert_eq!(count_text(&once), count_text(&twice));
        prop_assert_eq!(count_text(&once), count_text(&body));
    }

    #[test]
    fn test_graphics_only_counts_zero(tail in "\\PC{0,300}") {
        let text = format!("\n__gfx__\n{tail}");
        prop_assert_eq!(count_text(&text), 0);
    }

    #[test]
    fn test_any_input_terminates(content in "\\PC{0,500}") {
        // 上限のない総和だが、各行のトークン数は文字数を超えない
        let total = count_text(&content);
        prop_assert!(total <= content.chars().count());
    }

    #[test]
    fn test_line_count_bounded_by_chars(line in "[^\\n]{0,200}") {
        prop_assert!(count_line(&line) <= line.chars().count());
    }
}
